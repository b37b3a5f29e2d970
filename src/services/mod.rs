//! Business logic services

pub mod campgrounds;
pub mod reviews;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub campgrounds: campgrounds::CampgroundsService,
    pub reviews: reviews::ReviewsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            campgrounds: campgrounds::CampgroundsService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.campgrounds.ping().await
    }
}
