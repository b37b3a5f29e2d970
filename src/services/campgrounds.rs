//! Campground service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Campground, CampgroundAttributes, CampgroundWithReviews},
    repository::Repository,
};

#[derive(Clone)]
pub struct CampgroundsService {
    repository: Repository,
}

impl CampgroundsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Campground>> {
        self.repository.campgrounds.list_all().await
    }

    pub async fn create(&self, data: &CampgroundAttributes) -> AppResult<Campground> {
        let campground = self.repository.campgrounds.create(data).await?;
        tracing::info!(campground_id = %campground.id, "Created campground {:?}", campground.title);
        Ok(campground)
    }

    /// Fetch with review references only
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Campground> {
        self.repository.campgrounds.get_by_id(id).await
    }

    /// Fetch with review references resolved to records, in reference order
    pub async fn get_with_reviews(&self, id: Uuid) -> AppResult<CampgroundWithReviews> {
        let campground = self.repository.campgrounds.get_by_id(id).await?;
        let reviews = self.repository.reviews.get_many(&campground.review_ids).await?;
        if reviews.len() != campground.review_ids.len() {
            tracing::warn!(
                campground_id = %id,
                references = campground.review_ids.len(),
                resolved = reviews.len(),
                "Campground holds dangling review references"
            );
        }
        Ok(CampgroundWithReviews { campground, reviews })
    }

    pub async fn update(&self, id: Uuid, data: &CampgroundAttributes) -> AppResult<Campground> {
        let campground = self.repository.campgrounds.update(id, data).await?;
        tracing::info!(campground_id = %id, "Updated campground");
        Ok(campground)
    }

    /// Delete a campground and every review it references
    pub async fn delete(&self, id: Uuid) -> AppResult<Campground> {
        let campground = self.repository.campgrounds.delete(id).await?;
        let removed = self.repository.reviews.delete_many(&campground.review_ids).await?;
        tracing::info!(campground_id = %id, reviews_removed = removed, "Deleted campground");
        Ok(campground)
    }
}
