//! Campground store on Postgres

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::CampgroundStore;
use crate::{
    error::{AppError, AppResult},
    models::{Campground, CampgroundAttributes},
};

#[derive(Clone)]
pub struct PgCampgroundStore {
    pool: Pool<Postgres>,
}

impl PgCampgroundStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Campground {} not found", id))
}

#[async_trait]
impl CampgroundStore for PgCampgroundStore {
    async fn list_all(&self) -> AppResult<Vec<Campground>> {
        let rows = sqlx::query_as::<_, Campground>(
            "SELECT * FROM campgrounds ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, data: &CampgroundAttributes) -> AppResult<Campground> {
        let row = sqlx::query_as::<_, Campground>(
            r#"
            INSERT INTO campgrounds (id, title, price, description, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(data.price)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Campground> {
        sqlx::query_as::<_, Campground>("SELECT * FROM campgrounds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: Uuid, data: &CampgroundAttributes) -> AppResult<Campground> {
        sqlx::query_as::<_, Campground>(
            r#"
            UPDATE campgrounds
            SET title = $2, price = $3, description = $4, location = $5, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.price)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Campground> {
        sqlx::query_as::<_, Campground>("DELETE FROM campgrounds WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn add_review(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground> {
        // Single statement, so concurrent appends cannot lose each other
        sqlx::query_as::<_, Campground>(
            r#"
            UPDATE campgrounds
            SET review_ids = CASE
                    WHEN $2 = ANY(review_ids) THEN review_ids
                    ELSE array_append(review_ids, $2)
                END,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(campground_id)
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(campground_id))
    }

    async fn remove_review_reference(&self, campground_id: Uuid, review_id: Uuid) -> AppResult<Campground> {
        sqlx::query_as::<_, Campground>(
            r#"
            UPDATE campgrounds
            SET review_ids = array_remove(review_ids, $2), updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(campground_id)
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(campground_id))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
