//! Campground pages: index, new, show, edit

use maud::{html, Markup};

use super::layout;
use crate::models::{
    review::{MAX_RATING, MIN_RATING},
    Campground, CampgroundAttributes, CampgroundWithReviews,
};

pub fn index_page(campgrounds: &[Campground]) -> Markup {
    layout(
        "All Campgrounds",
        html! {
            h1 { "All Campgrounds" }
            a href="/campgrounds/new" { "Add Campground" }
            @if campgrounds.is_empty() {
                p { "No campgrounds yet." }
            }
            ul class="campgrounds" {
                @for campground in campgrounds {
                    li {
                        a href={ "/campgrounds/" (campground.id) } { (campground.title) }
                        " "
                        small { (campground.location) }
                    }
                }
            }
        },
    )
}

fn campground_fields(values: Option<&CampgroundAttributes>) -> Markup {
    let title = values.map(|v| v.title.as_str()).unwrap_or_default();
    let location = values.map(|v| v.location.as_str()).unwrap_or_default();
    let price = values.map(|v| v.price.to_string()).unwrap_or_default();
    let description = values.map(|v| v.description.as_str()).unwrap_or_default();

    html! {
        div {
            label for="title" { "Title" }
            input type="text" id="title" name="campground[title]" value=(title) required;
        }
        div {
            label for="location" { "Location" }
            input type="text" id="location" name="campground[location]" value=(location) required;
        }
        div {
            label for="price" { "Campground Price" }
            input type="number" id="price" name="campground[price]" min="0" step="0.01"
                placeholder="0.00" value=(price) required;
        }
        div {
            label for="description" { "Description" }
            textarea id="description" name="campground[description]" required { (description) }
        }
    }
}

pub fn new_page() -> Markup {
    layout(
        "New Campground",
        html! {
            h1 { "New Campground" }
            form action="/campgrounds" method="POST" {
                (campground_fields(None))
                button { "Add Campground" }
            }
            a href="/campgrounds" { "All Campgrounds" }
        },
    )
}

pub fn edit_page(campground: &Campground) -> Markup {
    let values = campground.attributes();
    layout(
        "Edit Campground",
        html! {
            h1 { "Edit Campground" }
            form action={ "/campgrounds/" (campground.id) "?_method=PUT" } method="POST" {
                (campground_fields(Some(&values)))
                button { "Update Campground" }
            }
            a href={ "/campgrounds/" (campground.id) } { "Back To Campground" }
        },
    )
}

pub fn show_page(found: &CampgroundWithReviews) -> Markup {
    let campground = &found.campground;
    layout(
        &campground.title,
        html! {
            div class="card" {
                h1 { (campground.title) }
                p { (campground.description) }
                ul {
                    li class="text-muted" { (campground.location) }
                    li { "$" (campground.price) "/night" }
                }
                a href={ "/campgrounds/" (campground.id) "/edit" } { "Edit" }
                form action={ "/campgrounds/" (campground.id) "?_method=DELETE" } method="POST" {
                    button class="btn-danger" { "Delete" }
                }
            }
            section class="reviews" {
                h2 { "Leave a Review" }
                form action={ "/campgrounds/" (campground.id) "/reviews" } method="POST" {
                    div {
                        label for="rating" { "Rating" }
                        input type="range" id="rating" name="review[rating]"
                            min=(MIN_RATING) max=(MAX_RATING) value=(MAX_RATING);
                    }
                    div {
                        label for="body" { "Review" }
                        textarea id="body" name="review[body]" required {}
                    }
                    button { "Submit" }
                }
                @for review in &found.reviews {
                    div class="review" {
                        h5 { "Rating: " (review.rating) }
                        p { (review.body) }
                        form action={ "/campgrounds/" (campground.id) "/reviews/" (review.id) "?_method=DELETE" }
                            method="POST" {
                            button class="btn-danger" { "Delete" }
                        }
                    }
                }
            }
            a href="/campgrounds" { "All Campgrounds" }
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::Review;

    fn campground() -> Campground {
        Campground::new(&CampgroundAttributes {
            title: "Pine Lake".into(),
            price: 10.0,
            description: "nice".into(),
            location: "CO".into(),
        })
    }

    #[test]
    fn test_show_lists_reviews_with_delete_forms() {
        let campground = campground();
        let review = Review {
            id: Uuid::new_v4(),
            body: "quiet & clean".into(),
            rating: 4,
            created_at: Utc::now(),
        };
        let page = show_page(&CampgroundWithReviews {
            campground: campground.clone(),
            reviews: vec![review.clone()],
        })
        .into_string();

        assert!(page.contains("Pine Lake"));
        assert!(page.contains("$10/night"));
        assert!(page.contains("quiet &amp; clean"));
        assert!(page.contains(&format!(
            "/campgrounds/{}/reviews/{}?_method=DELETE",
            campground.id, review.id
        )));
    }

    #[test]
    fn test_edit_prefills_values() {
        let campground = campground();
        let page = edit_page(&campground).into_string();
        assert!(page.contains("value=\"Pine Lake\""));
        assert!(page.contains(&format!("/campgrounds/{}?_method=PUT", campground.id)));
    }

    #[test]
    fn test_index_links_each_campground() {
        let first = campground();
        let second = campground();
        let page = index_page(&[first.clone(), second.clone()]).into_string();
        assert!(page.contains(&format!("href=\"/campgrounds/{}\"", first.id)));
        assert!(page.contains(&format!("href=\"/campgrounds/{}\"", second.id)));
    }
}
