//! Campground model and form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{review::Review, parse_number};
use crate::validation::{FieldError, FormSchema, ValidationFailure};

/// Campground record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Campground {
    pub id: Uuid,
    pub title: String,
    /// Price per night
    pub price: f64,
    pub description: String,
    pub location: String,
    /// Ordered references to independently stored reviews
    pub review_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable campground attributes, used for both create and full overwrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampgroundAttributes {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
}

/// Campground with its review references resolved
#[derive(Debug, Clone, Serialize)]
pub struct CampgroundWithReviews {
    pub campground: Campground,
    pub reviews: Vec<Review>,
}

impl Campground {
    /// Build a fresh record with an empty review list
    pub fn new(data: &CampgroundAttributes) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            price: data.price,
            description: data.description.clone(),
            location: data.location.clone(),
            review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, data: &CampgroundAttributes) {
        self.title = data.title.clone();
        self.price = data.price;
        self.description = data.description.clone();
        self.location = data.location.clone();
        self.updated_at = Utc::now();
    }

    pub fn attributes(&self) -> CampgroundAttributes {
        CampgroundAttributes {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            location: self.location.clone(),
        }
    }
}

/// `campground[...]` form body
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CampgroundForm {
    #[serde(rename = "campground[title]")]
    #[validate(
        required(message = "\"campground.title\" is required"),
        length(min = 1, message = "\"campground.title\" is not allowed to be empty")
    )]
    pub title: Option<String>,

    #[serde(rename = "campground[price]")]
    #[validate(
        required(message = "\"campground.price\" is required"),
        custom(function = "validate_price")
    )]
    pub price: Option<String>,

    #[serde(rename = "campground[description]")]
    #[validate(
        required(message = "\"campground.description\" is required"),
        length(min = 1, message = "\"campground.description\" is not allowed to be empty")
    )]
    pub description: Option<String>,

    #[serde(rename = "campground[location]")]
    #[validate(
        required(message = "\"campground.location\" is required"),
        length(min = 1, message = "\"campground.location\" is not allowed to be empty")
    )]
    pub location: Option<String>,
}

fn validate_price(value: &str) -> Result<(), ValidationError> {
    let message = match parse_number(value) {
        None => "\"campground.price\" must be a number",
        Some(price) if price < 0.0 => "\"campground.price\" must be greater than or equal to 0",
        Some(_) => return Ok(()),
    };
    let mut err = ValidationError::new("price");
    err.message = Some(message.into());
    Err(err)
}

impl FormSchema for CampgroundForm {
    type Output = CampgroundAttributes;

    const ROOT: &'static str = "campground";
    const FIELDS: &'static [&'static str] = &["title", "price", "description", "location"];

    fn is_blank(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.location.is_none()
    }

    fn into_output(self) -> Result<CampgroundAttributes, ValidationFailure> {
        let price = self
            .price
            .as_deref()
            .and_then(parse_number)
            .ok_or_else(|| {
                ValidationFailure::new(vec![FieldError::new(
                    "price",
                    "\"campground.price\" must be a number",
                )])
            })?;

        Ok(CampgroundAttributes {
            title: self.title.unwrap_or_default(),
            price,
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, price: &str, description: &str, location: &str) -> CampgroundForm {
        CampgroundForm {
            title: Some(title.into()),
            price: Some(price.into()),
            description: Some(description.into()),
            location: Some(location.into()),
        }
    }

    #[test]
    fn test_valid_payload() {
        let attrs = form("Pine Lake", "10", "nice", "CO").parse().expect("valid");
        assert_eq!(attrs.title, "Pine Lake");
        assert_eq!(attrs.price, 10.0);
        assert_eq!(attrs.location, "CO");
    }

    #[test]
    fn test_missing_title() {
        let mut payload = form("", "10", "nice", "CO");
        payload.title = None;
        let failure = payload.parse().unwrap_err();
        assert_eq!(failure.to_string(), "\"campground.title\" is required");
    }

    #[test]
    fn test_errors_follow_field_order() {
        let payload = CampgroundForm {
            title: Some(String::new()),
            price: Some("cheap".into()),
            description: None,
            location: Some("CO".into()),
        };
        let failure = payload.parse().unwrap_err();
        let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "price", "description"]);
        assert_eq!(
            failure.to_string(),
            "\"campground.title\" is not allowed to be empty,\
             \"campground.price\" must be a number,\
             \"campground.description\" is required"
        );
    }

    #[test]
    fn test_negative_price() {
        let failure = form("Pine Lake", "-1", "nice", "CO").parse().unwrap_err();
        assert_eq!(
            failure.to_string(),
            "\"campground.price\" must be greater than or equal to 0"
        );
    }

    #[test]
    fn test_blank_payload() {
        let failure = CampgroundForm::default().parse().unwrap_err();
        assert_eq!(failure.to_string(), "\"campground\" is required");
    }

    #[test]
    fn test_apply_overwrites_attributes() {
        let mut campground = Campground::new(&form("Pine Lake", "10", "nice", "CO").parse().unwrap());
        let id = campground.id;
        campground.apply(&CampgroundAttributes {
            title: "Cedar Flats".into(),
            price: 25.5,
            description: "shady".into(),
            location: "UT".into(),
        });
        assert_eq!(campground.id, id);
        assert_eq!(campground.title, "Cedar Flats");
        assert_eq!(campground.price, 25.5);
        assert!(campground.review_ids.is_empty());
    }
}
