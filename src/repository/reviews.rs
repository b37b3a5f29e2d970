//! Review store on Postgres

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::ReviewStore;
use crate::{
    error::{AppError, AppResult},
    models::{Review, ReviewAttributes},
};

#[derive(Clone)]
pub struct PgReviewStore {
    pool: Pool<Postgres>,
}

impl PgReviewStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn create(&self, data: &ReviewAttributes) -> AppResult<Review> {
        let row = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, body, rating) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.body)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_many(&self, ids: &[Uuid]) -> AppResult<Vec<Review>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, Review>(
            r#"
            SELECT r.*
            FROM unnest($1::uuid[]) WITH ORDINALITY AS refs(id, position)
            JOIN reviews r ON r.id = refs.id
            ORDER BY refs.position
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review {} not found", id)));
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM reviews WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
