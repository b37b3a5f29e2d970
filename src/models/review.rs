//! Review model and form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::parse_number;
use crate::validation::{FieldError, FormSchema, ValidationFailure};

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Review record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub body: String,
    /// 1 to 5
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAttributes {
    pub body: String,
    pub rating: i16,
}

impl Review {
    pub fn new(data: &ReviewAttributes) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: data.body.clone(),
            rating: data.rating,
            created_at: Utc::now(),
        }
    }
}

/// `review[...]` form body
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReviewForm {
    #[serde(rename = "review[body]")]
    #[validate(
        required(message = "\"review.body\" is required"),
        length(min = 1, message = "\"review.body\" is not allowed to be empty")
    )]
    pub body: Option<String>,

    #[serde(rename = "review[rating]")]
    #[validate(
        required(message = "\"review.rating\" is required"),
        custom(function = "validate_rating")
    )]
    pub rating: Option<String>,
}

fn rating_value(value: &str) -> Result<i16, &'static str> {
    let rating = parse_number(value).ok_or("\"review.rating\" must be a number")?;
    if rating < f64::from(MIN_RATING) {
        return Err("\"review.rating\" must be greater than or equal to 1");
    }
    if rating > f64::from(MAX_RATING) {
        return Err("\"review.rating\" must be less than or equal to 5");
    }
    if rating.fract() != 0.0 {
        return Err("\"review.rating\" must be an integer");
    }
    Ok(rating as i16)
}

fn validate_rating(value: &str) -> Result<(), ValidationError> {
    rating_value(value).map(|_| ()).map_err(|message| {
        let mut err = ValidationError::new("rating");
        err.message = Some(message.into());
        err
    })
}

impl FormSchema for ReviewForm {
    type Output = ReviewAttributes;

    const ROOT: &'static str = "review";
    const FIELDS: &'static [&'static str] = &["body", "rating"];

    fn is_blank(&self) -> bool {
        self.body.is_none() && self.rating.is_none()
    }

    fn into_output(self) -> Result<ReviewAttributes, ValidationFailure> {
        let rating = rating_value(self.rating.as_deref().unwrap_or_default())
            .map_err(|message| ValidationFailure::new(vec![FieldError::new("rating", message)]))?;

        Ok(ReviewAttributes {
            body: self.body.unwrap_or_default(),
            rating,
        })
    }
}
