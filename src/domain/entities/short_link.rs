//! Request and result types for the shortening endpoint.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Body of `POST /shortUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[validate(custom(function = "validate_absolute_url"))]
    pub original_url: String,
}

impl ShortenRequest {
    /// Builds a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is blank or is not an
    /// absolute URL.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if input.trim().is_empty() {
            return Err(AppError::validation("Please enter a URL to shorten"));
        }

        let request = Self {
            original_url: input.to_string(),
        };
        request.validate()?;

        Ok(request)
    }
}

/// Success body of `POST /shortUrl`.
///
/// The field is optional on the wire so that a missing key can be reported
/// as a malformed response instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponseBody {
    pub short_url: Option<String>,
}

/// A short link produced by the backend. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub short_url: String,
}

impl TryFrom<ShortenResponseBody> for ShortenResult {
    type Error = AppError;

    fn try_from(body: ShortenResponseBody) -> Result<Self, Self::Error> {
        match body.short_url {
            Some(short_url) if !short_url.trim().is_empty() => Ok(Self { short_url }),
            _ => Err(AppError::malformed("No short URL returned")),
        }
    }
}

/// Returns true iff `input` parses as an absolute URL with a host.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).map(|url| url.has_host()).unwrap_or(false)
}

fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    if is_valid_url(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("absolute_url");
        err.message = Some(Cow::Borrowed("Please enter a valid URL"));
        Err(err)
    }
}
