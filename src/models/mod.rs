//! Data models for YelpCamp

pub mod campground;
pub mod review;

pub use campground::{Campground, CampgroundAttributes, CampgroundForm, CampgroundWithReviews};
pub use review::{Review, ReviewAttributes, ReviewForm};

/// Parse a numeric form value the way a browser submits it
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
