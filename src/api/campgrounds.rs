//! Campground pages and form endpoints

use axum::{
    extract::{Path, State},
    response::Response,
};
use maud::Markup;

use super::{parse_id, redirect};
use crate::{
    error::AppResult,
    models::CampgroundForm,
    validation::ValidatedForm,
    views, AppState,
};

/// List all campgrounds
pub async fn list_campgrounds(State(state): State<AppState>) -> AppResult<Markup> {
    let campgrounds = state.services.campgrounds.list().await?;
    Ok(views::campgrounds::index_page(&campgrounds))
}

/// Creation form
pub async fn new_campground() -> Markup {
    views::campgrounds::new_page()
}

pub async fn create_campground(
    State(state): State<AppState>,
    ValidatedForm(data): ValidatedForm<CampgroundForm>,
) -> AppResult<Response> {
    let campground = state.services.campgrounds.create(&data).await?;
    Ok(redirect(format!("/campgrounds/{}", campground.id)))
}

/// Detail page with reviews resolved
pub async fn show_campground(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Campground")?;
    let found = state.services.campgrounds.get_with_reviews(id).await?;
    Ok(views::campgrounds::show_page(&found))
}

pub async fn edit_campground(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Campground")?;
    let campground = state.services.campgrounds.get_by_id(id).await?;
    Ok(views::campgrounds::edit_page(&campground))
}

pub async fn update_campground(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedForm(data): ValidatedForm<CampgroundForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Campground")?;
    let campground = state.services.campgrounds.update(id, &data).await?;
    Ok(redirect(format!("/campgrounds/{}", campground.id)))
}

/// Delete a campground along with its reviews
pub async fn delete_campground(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Campground")?;
    state.services.campgrounds.delete(id).await?;
    Ok(redirect("/campgrounds"))
}
