//! Repository layer for database operations
//!
//! Stores are traits so the data-access handle is injected rather than
//! global: `Repository::postgres` backs them with a connection pool,
//! `Repository::in_memory` with process-local maps.

pub mod campgrounds;
pub mod memory;
pub mod reviews;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Campground, CampgroundAttributes, Review, ReviewAttributes},
};

/// Campground documents and their ordered review references
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundStore: Send + Sync {
    /// All campgrounds, oldest first
    async fn list_all(&self) -> AppResult<Vec<Campground>>;

    /// Persist a new campground with an empty review list
    async fn create(&self, data: &CampgroundAttributes) -> AppResult<Campground>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Campground>;

    /// Overwrite the editable attributes
    async fn update(&self, id: Uuid, data: &CampgroundAttributes) -> AppResult<Campground>;

    /// Remove the record and return it. Referenced reviews are left alone.
    async fn delete(&self, id: Uuid) -> AppResult<Campground>;

    /// Append a review reference; a reference already present is kept once
    async fn add_review(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground>;

    async fn remove_review_reference(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground>;

    /// Cheap round trip used by the readiness probe
    async fn ping(&self) -> AppResult<()>;
}

/// Review documents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn create(&self, data: &ReviewAttributes) -> AppResult<Review>;

    /// Resolve references in the given order, skipping ids with no record
    async fn get_many(&self, ids: &[Uuid]) -> AppResult<Vec<Review>>;

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;

    /// Delete every listed review that exists, returning how many were removed
    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<u64>;
}

/// Main repository struct holding the data-access handles
#[derive(Clone)]
pub struct Repository {
    pub campgrounds: Arc<dyn CampgroundStore>,
    pub reviews: Arc<dyn ReviewStore>,
}

impl Repository {
    pub fn new(campgrounds: Arc<dyn CampgroundStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self { campgrounds, reviews }
    }

    /// Create a repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::new(
            Arc::new(campgrounds::PgCampgroundStore::new(pool.clone())),
            Arc::new(reviews::PgReviewStore::new(pool)),
        )
    }

    /// Create a repository that keeps everything in process memory
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::default());
        Self::new(store.clone(), store)
    }
}
