use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout;

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error",
        html! {
            div class="alert alert-danger" role="alert" {
                h4 class="alert-heading" { (message) }
                p { "Status " (status.as_u16()) }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_escaped() {
        let page = error_page(StatusCode::BAD_REQUEST, "\"campground.title\" is <required>")
            .into_string();
        assert!(page.contains("&quot;campground.title&quot; is &lt;required&gt;"));
        assert!(page.contains("Status 400"));
    }
}
