//! Common error types and handling for CreatorKit

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when neither the server nor the transport gave anything better
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Common error type for the CreatorKit client
///
/// Two families exist: soft errors, where the server answered but declined
/// the operation (`Application`), and hard errors for everything that kept a
/// usable answer from arriving. Neither kind mutates cached state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Application error: {0}")]
    Application(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State error: {0}")]
    State(#[from] crate::StateError),
}

impl Error {
    /// Whether the server answered and declined (`success: false`)
    pub fn is_soft(&self) -> bool {
        matches!(self, Error::Application(_))
    }

    /// Get the error code for logs and front ends
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::Transport(_) => "TRANSPORT_ERROR",
            Error::Status { .. } => "HTTP_STATUS_ERROR",
            Error::Application(_) => "APPLICATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::State(_) => "STATE_ERROR",
        }
    }

    /// Best available message to show the user.
    ///
    /// Prefers the server-provided message, then the local description of
    /// the failure, and finally a generic fallback.
    pub fn user_message(&self) -> String {
        let message = match self {
            Error::Application(message)
            | Error::Validation(message)
            | Error::Authentication(message)
            | Error::Transport(message)
            | Error::Configuration(message) => message.clone(),
            Error::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Status { message: None, .. } => self.to_string(),
            Error::Serialization(_) | Error::Unexpected(_) | Error::State(_) => String::new(),
        };

        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
