//! Review service
//!
//! A review lives in its own collection and is reachable through the owning
//! campground's reference list, so every operation touches both stores.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Review, ReviewAttributes},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a review and append its reference to the campground
    pub async fn create(&self, campground_id: Uuid, data: &ReviewAttributes) -> AppResult<Review> {
        self.repository.campgrounds.get_by_id(campground_id).await?;

        let review = self.repository.reviews.create(data).await?;
        if let Err(e) = self
            .repository
            .campgrounds
            .add_review(campground_id, review.id)
            .await
        {
            tracing::warn!(
                campground_id = %campground_id,
                review_id = %review.id,
                "Could not attach review, removing it: {}", e
            );
            if let Err(cleanup) = self.repository.reviews.delete_by_id(review.id).await {
                tracing::error!(review_id = %review.id, "Orphaned review left behind: {}", cleanup);
            }
            return Err(e);
        }

        tracing::info!(campground_id = %campground_id, review_id = %review.id, "Created review");
        Ok(review)
    }

    /// Detach a review from its campground and delete it
    pub async fn delete(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<()> {
        let campground = self.repository.campgrounds.get_by_id(campground_id).await?;
        if !campground.review_ids.contains(&review_id) {
            return Err(AppError::NotFound(format!("Review {} not found", review_id)));
        }

        self.repository
            .campgrounds
            .remove_review_reference(campground_id, review_id)
            .await?;
        match self.repository.reviews.delete_by_id(review_id).await {
            // Reference was dangling; detaching it is all that was left to do
            Err(AppError::NotFound(_)) => {
                tracing::warn!(review_id = %review_id, "Removed reference to missing review");
            }
            other => other?,
        }

        tracing::info!(campground_id = %campground_id, review_id = %review_id, "Deleted review");
        Ok(())
    }
}
