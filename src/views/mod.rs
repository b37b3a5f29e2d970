//! Server-rendered HTML pages
//!
//! Everything is built with maud, which escapes interpolated values.

pub mod campgrounds;
pub mod errors;
pub mod home;

use maud::{html, Markup, DOCTYPE};

/// Wrap a page body in the shared document shell and navbar
pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | YelpCamp" }
            }
            body {
                nav class="navbar" {
                    a class="brand" href="/" { "YelpCamp" }
                    a href="/" { "Home" }
                    a href="/campgrounds" { "Campgrounds" }
                    a href="/campgrounds/new" { "New Campground" }
                }
                main class="container" {
                    (body)
                }
                footer { "© YelpCamp" }
            }
        }
    }
}
