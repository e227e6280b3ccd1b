//! Application error taxonomy.
//!
//! Every fallible UI operation returns [`AppError`]. Errors are caught at the
//! component that triggered them and turned into a toast via
//! [`AppError::user_message`]; none of them are fatal to the page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Empty or non-URL input. Raised before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// Backend unreachable or answered with a non-success status.
    #[error("Request failed: {message}")]
    Network {
        message: String,
        status: Option<u16>,
    },

    /// Success response without a usable payload.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Download error: {message}")]
    Download { message: String },

    #[error("QR generation failed: {message}")]
    QrGeneration { message: String },

    /// A shorten request arrived while another one is still in flight.
    #[error("A request is already in progress")]
    SubmissionInFlight,

    /// The owning page was torn down while the operation was running.
    #[error("Operation cancelled")]
    Cancelled,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status: None,
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn download(message: impl Into<String>) -> Self {
        Self::Download {
            message: message.into(),
        }
    }

    pub fn qr(message: impl Into<String>) -> Self {
        Self::QrGeneration {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, used in structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Network { .. } => "network_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Clipboard { .. } => "clipboard_error",
            Self::Download { .. } => "download_error",
            Self::QrGeneration { .. } => "qr_generation_error",
            Self::SubmissionInFlight => "submission_in_flight",
            Self::Cancelled => "cancelled",
        }
    }

    /// Text shown in the error toast, or `None` for errors that are never
    /// surfaced to the user.
    ///
    /// Network and malformed-response failures share one message: the user
    /// cannot act differently on either.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation { message } => Some(message.clone()),
            Self::Network { .. } | Self::MalformedResponse { .. } => {
                Some("Failed to shorten URL. Please try again.".to_string())
            }
            Self::Clipboard { .. } => Some("Failed to copy URL".to_string()),
            Self::Download { .. } => Some("Failed to download QR code".to_string()),
            Self::QrGeneration { .. } => Some("Failed to generate QR code".to_string()),
            Self::SubmissionInFlight | Self::Cancelled => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::http_status(status.as_u16(), e.to_string()),
            None if e.is_decode() => Self::malformed(e.to_string()),
            None => Self::network(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Please enter a valid URL".to_string());

        Self::validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_and_malformed_share_message() {
        let network = AppError::http_status(502, "bad gateway");
        let malformed = AppError::malformed("no shortUrl");

        assert_eq!(network.user_message(), malformed.user_message());
        assert_eq!(
            network.user_message().as_deref(),
            Some("Failed to shorten URL. Please try again.")
        );
    }

    #[test]
    fn test_silent_errors_have_no_message() {
        assert!(AppError::SubmissionInFlight.user_message().is_none());
        assert!(AppError::Cancelled.user_message().is_none());
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::validation("x").code(), "validation_error");
        assert_eq!(AppError::clipboard("x").code(), "clipboard_error");
        assert_eq!(AppError::download("x").code(), "download_error");
        assert_eq!(AppError::qr("x").code(), "qr_generation_error");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::validation("Please enter a valid URL");
        assert_eq!(err.to_string(), "Please enter a valid URL");
        assert_eq!(
            err.user_message().as_deref(),
            Some("Please enter a valid URL")
        );
    }
}
