use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No stored session found, please log in")]
    SessionMissing,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Request failed")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {message}")]
    Server { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SessionMissing => "SESSION_MISSING",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Http(_) => "REQUEST_FAILED",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Server { .. } => "SERVER_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    /// The message body the server attached to a rejected call, if any.
    ///
    /// Booking uses this to tell "already attending" apart from other
    /// rejections.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn log(&self) {
        match self {
            AppError::Validation(msg) | AppError::MalformedResponse(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Server { status, message } => {
                error!(status = %status, message = %message, "Server rejected request");
            }
            AppError::Io(e) => {
                error!(error = ?e, "I/O error");
            }
            AppError::Http(e) => {
                error!(error = ?e, "Request failed");
            }
            AppError::Serialization(e) => {
                error!(error = ?e, "Serialization error");
            }
            AppError::SessionMissing => {
                error!("No stored session found");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_set_for_server_errors() {
        let err = AppError::Server {
            status: 400,
            message: "You are already attending this event".to_string(),
        };
        assert_eq!(
            err.server_message(),
            Some("You are already attending this event")
        );
        assert_eq!(AppError::SessionMissing.server_message(), None);
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::SessionMissing.code(), "SESSION_MISSING");
        assert_eq!(
            AppError::Validation("bad".to_string()).code(),
            "VALIDATION_ERROR"
        );
    }
}
