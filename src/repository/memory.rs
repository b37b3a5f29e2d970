//! In-process store, used when `database.driver = "memory"` and by the tests

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CampgroundStore, ReviewStore};
use crate::{
    error::{AppError, AppResult},
    models::{Campground, CampgroundAttributes, Review, ReviewAttributes},
};

/// Both collections behind their own locks; insertion order is list order
#[derive(Default)]
pub struct MemoryStore {
    campgrounds: RwLock<IndexMap<Uuid, Campground>>,
    reviews: RwLock<IndexMap<Uuid, Review>>,
}

fn campground_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Campground {} not found", id))
}

impl MemoryStore {
    async fn modify<F>(&self, id: Uuid, f: F) -> AppResult<Campground>
    where
        F: FnOnce(&mut Campground) + Send,
    {
        let mut campgrounds = self.campgrounds.write().await;
        let campground = campgrounds.get_mut(&id).ok_or_else(|| campground_not_found(id))?;
        f(campground);
        Ok(campground.clone())
    }
}

#[async_trait]
impl CampgroundStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Campground>> {
        Ok(self.campgrounds.read().await.values().cloned().collect())
    }

    async fn create(&self, data: &CampgroundAttributes) -> AppResult<Campground> {
        let campground = Campground::new(data);
        self.campgrounds
            .write()
            .await
            .insert(campground.id, campground.clone());
        Ok(campground)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Campground> {
        self.campgrounds
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| campground_not_found(id))
    }

    async fn update(&self, id: Uuid, data: &CampgroundAttributes) -> AppResult<Campground> {
        self.modify(id, |campground| campground.apply(data)).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<Campground> {
        self.campgrounds
            .write()
            .await
            .shift_remove(&id)
            .ok_or_else(|| campground_not_found(id))
    }

    async fn add_review(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground> {
        self.modify(campground_id, |campground| {
            if !campground.review_ids.contains(&review_id) {
                campground.review_ids.push(review_id);
                campground.updated_at = Utc::now();
            }
        })
        .await
    }

    async fn remove_review_reference(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground> {
        self.modify(campground_id, |campground| {
            if let Some(pos) = campground.review_ids.iter().position(|id| *id == review_id) {
                campground.review_ids.remove(pos);
                campground.updated_at = Utc::now();
            }
        })
        .await
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn create(&self, data: &ReviewAttributes) -> AppResult<Review> {
        let review = Review::new(data);
        self.reviews.write().await.insert(review.id, review.clone());
        Ok(review)
    }

    async fn get_many(&self, ids: &[Uuid]) -> AppResult<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(ids.iter().filter_map(|id| reviews.get(id).cloned()).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.reviews
            .write()
            .await
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))
    }

    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<u64> {
        let mut reviews = self.reviews.write().await;
        let removed = ids
            .iter()
            .filter(|id| reviews.shift_remove(*id).is_some())
            .count();
        Ok(removed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(title: &str) -> CampgroundAttributes {
        CampgroundAttributes {
            title: title.to_string(),
            price: 10.0,
            description: "nice".to_string(),
            location: "CO".to_string(),
        }
    }

    fn review(body: &str) -> ReviewAttributes {
        ReviewAttributes {
            body: body.to_string(),
            rating: 4,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryStore::default();
        let created = CampgroundStore::create(&store, &attrs("Pine Lake")).await.unwrap();
        assert!(created.review_ids.is_empty());

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = MemoryStore::default();
        for title in ["A", "B", "C"] {
            CampgroundStore::create(&store, &attrs(title)).await.unwrap();
        }
        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_missing_campground_is_not_found() {
        let store = MemoryStore::default();
        let id = Uuid::new_v4();
        assert!(matches!(store.get_by_id(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.update(id, &attrs("x")).await, Err(AppError::NotFound(_))));
        assert!(matches!(CampgroundStore::delete(&store, id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            store.add_review(id, Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_review_keeps_single_reference() {
        let store = MemoryStore::default();
        let campground = CampgroundStore::create(&store, &attrs("Pine Lake")).await.unwrap();
        let review_id = Uuid::new_v4();

        store.add_review(campground.id, review_id).await.unwrap();
        let updated = store.add_review(campground.id, review_id).await.unwrap();
        assert_eq!(updated.review_ids, vec![review_id]);

        let updated = store.remove_review_reference(campground.id, review_id).await.unwrap();
        assert!(updated.review_ids.is_empty());
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_reviews() {
        let store = MemoryStore::default();
        let campground = CampgroundStore::create(&store, &attrs("Pine Lake")).await.unwrap();
        let review = ReviewStore::create(&store, &review("lovely")).await.unwrap();
        store.add_review(campground.id, review.id).await.unwrap();

        let removed = CampgroundStore::delete(&store, campground.id).await.unwrap();
        assert_eq!(removed.review_ids, vec![review.id]);
        assert_eq!(store.get_many(&[review.id]).await.unwrap(), vec![review]);
    }

    #[tokio::test]
    async fn test_get_many_preserves_order_and_skips_missing() {
        let store = MemoryStore::default();
        let first = ReviewStore::create(&store, &review("first")).await.unwrap();
        let second = ReviewStore::create(&store, &review("second")).await.unwrap();

        let resolved = store
            .get_many(&[second.id, Uuid::new_v4(), first.id])
            .await
            .unwrap();
        assert_eq!(resolved, vec![second, first]);
    }

    #[tokio::test]
    async fn test_delete_reviews() {
        let store = MemoryStore::default();
        let first = ReviewStore::create(&store, &review("first")).await.unwrap();
        let second = ReviewStore::create(&store, &review("second")).await.unwrap();

        store.delete_by_id(first.id).await.unwrap();
        assert!(matches!(store.delete_by_id(first.id).await, Err(AppError::NotFound(_))));

        let removed = store.delete_many(&[first.id, second.id]).await.unwrap();
        assert_eq!(removed, 1);
        assert!(store.get_many(&[second.id]).await.unwrap().is_empty());
    }
}
