//! Form payload validation
//!
//! Payload schemas are `validator` derives on the form structs in `models`.
//! This module turns their errors into an ordered list of field errors and
//! provides the [`ValidatedForm`] extractor that rejects a request before the
//! handler body runs.

use std::fmt;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All violations found in one payload, in schema field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Flatten `validator` errors, ordering fields as listed in `order`.
    /// Fields missing from `order` sort last.
    pub fn from_errors(root: &str, errors: &ValidationErrors, order: &[&str]) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(name, _)| {
            let name: &str = name;
            order.iter().position(|f| *f == name).unwrap_or(order.len())
        });

        let errors = fields
            .into_iter()
            .flat_map(|(name, errs)| {
                let name: &str = &name;
                errs.iter()
                    .map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("\"{}.{}\" is invalid", root, name));
                        FieldError::new(name, message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { errors }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(","))
    }
}

impl std::error::Error for ValidationFailure {}

/// A form payload with a fixed schema
pub trait FormSchema: DeserializeOwned + Validate + Send {
    /// Typed attributes the payload converts into
    type Output: Send;

    /// Name of the wrapping object (`campground`, `review`)
    const ROOT: &'static str;
    /// Field order used when reporting errors
    const FIELDS: &'static [&'static str];

    /// True when the request carried none of the object's keys
    fn is_blank(&self) -> bool;

    fn check(&self) -> Result<(), ValidationFailure> {
        if self.is_blank() {
            return Err(ValidationFailure::new(vec![FieldError::new(
                Self::ROOT,
                format!("\"{}\" is required", Self::ROOT),
            )]));
        }
        self.validate()
            .map_err(|errors| ValidationFailure::from_errors(Self::ROOT, &errors, Self::FIELDS))
    }

    /// Convert a payload that already passed [`FormSchema::check`]
    fn into_output(self) -> Result<Self::Output, ValidationFailure>;

    fn parse(self) -> Result<Self::Output, ValidationFailure>
    where
        Self: Sized,
    {
        self.check()?;
        self.into_output()
    }
}

/// Extractor yielding the typed attributes of a form body that passed its schema
pub struct ValidatedForm<T: FormSchema>(pub T::Output);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: FormSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ValidatedForm(payload.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_comma() {
        let failure = ValidationFailure::new(vec![
            FieldError::new("body", "\"review.body\" is required"),
            FieldError::new("rating", "\"review.rating\" must be a number"),
        ]);
        assert_eq!(
            failure.to_string(),
            "\"review.body\" is required,\"review.rating\" must be a number"
        );
    }

    #[test]
    fn test_display_single() {
        let failure = ValidationFailure::new(vec![FieldError::new("campground", "\"campground\" is required")]);
        assert_eq!(failure.to_string(), "\"campground\" is required");
    }
}
