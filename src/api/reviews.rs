//! Review endpoints nested under a campground

use axum::{
    extract::{Path, State},
    response::Response,
};

use super::{parse_id, redirect};
use crate::{error::AppResult, models::ReviewForm, validation::ValidatedForm, AppState};

pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedForm(data): ValidatedForm<ReviewForm>,
) -> AppResult<Response> {
    let campground_id = parse_id(&id, "Campground")?;
    state.services.reviews.create(campground_id, &data).await?;
    Ok(redirect(format!("/campgrounds/{}", campground_id)))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(String, String)>,
) -> AppResult<Response> {
    let campground_id = parse_id(&id, "Campground")?;
    let review_id = parse_id(&review_id, "Review")?;
    state.services.reviews.delete(campground_id, review_id).await?;
    Ok(redirect(format!("/campgrounds/{}", campground_id)))
}
