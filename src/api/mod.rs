//! HTTP handlers and routing

pub mod campgrounds;
pub mod health;
pub mod pages;
pub mod reviews;

use std::collections::HashMap;

use axum::{
    extract::Request,
    http::{header::LOCATION, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::{util::MapRequestLayer, Layer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::{error::AppError, AppState};

/// The full application service: `_method` override in front of the router
pub type App = tower::util::MapRequest<Router, fn(Request) -> Request>;

/// Build the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home).fallback(pages::not_found))
        .route(
            "/campgrounds",
            get(campgrounds::list_campgrounds)
                .post(campgrounds::create_campground)
                .fallback(pages::not_found),
        )
        .route(
            "/campgrounds/new",
            get(campgrounds::new_campground).fallback(pages::not_found),
        )
        .route(
            "/campgrounds/:id",
            get(campgrounds::show_campground)
                .put(campgrounds::update_campground)
                .delete(campgrounds::delete_campground)
                .fallback(pages::not_found),
        )
        .route(
            "/campgrounds/:id/edit",
            get(campgrounds::edit_campground).fallback(pages::not_found),
        )
        .route(
            "/campgrounds/:id/reviews",
            post(reviews::create_review).fallback(pages::not_found),
        )
        .route(
            "/campgrounds/:id/reviews/:review_id",
            axum::routing::delete(reviews::delete_review).fallback(pages::not_found),
        )
        .route(
            "/health",
            get(health::health_check).fallback(pages::not_found),
        )
        .route(
            "/ready",
            get(health::readiness_check).fallback(pages::not_found),
        )
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the routed application. The method override has to run before
/// routing, so it wraps the router instead of being one of its layers.
pub fn create_app(state: AppState) -> App {
    MapRequestLayer::new(method_override as fn(Request) -> Request).layer(create_router(state))
}

/// Rewrite `POST ...?_method=PUT|DELETE` into the named method; HTML forms
/// can only submit GET and POST.
pub fn method_override(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let requested = req
        .uri()
        .query()
        .and_then(|query| serde_urlencoded::from_str::<HashMap<String, String>>(query).ok())
        .and_then(|params| params.get("_method").map(|value| value.to_ascii_uppercase()));

    match requested.as_deref() {
        Some("PUT") => *req.method_mut() = Method::PUT,
        Some("PATCH") => *req.method_mut() = Method::PATCH,
        Some("DELETE") => *req.method_mut() = Method::DELETE,
        _ => {}
    }
    req
}

/// `302 Found` to the given location
pub fn redirect(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.into())]).into_response()
}

/// Parse a path id; anything that is not a UUID names no record
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} {} not found", entity, raw)))
}
