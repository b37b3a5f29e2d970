//! Static pages and the catch-all

use maud::Markup;

use crate::{error::AppError, views};

pub async fn home() -> Markup {
    views::home::home_page()
}

/// Any path or method no route handles
pub async fn not_found() -> AppError {
    AppError::page_not_found()
}
