use maud::{html, Markup};

use super::layout;

pub fn home_page() -> Markup {
    layout(
        "Home",
        html! {
            h1 { "Welcome to YelpCamp" }
            p { "Jump right in and explore our many campgrounds." }
            a href="/campgrounds" { "View Campgrounds" }
        },
    )
}
