use thiserror::Error;

/// Error types for standup reporting operations
#[derive(Error, Debug)]
pub enum StandupError {
    /// No API key is stored for this user
    #[error("API key not found: {message}")]
    CredentialNotFound { message: String },

    /// API key rejected locally (empty) or by the service (HTTP 401)
    #[error("Invalid API key: {message}")]
    InvalidCredential { message: String },

    /// The referenced standup does not exist (HTTP 404)
    #[error("Standup not found: {message}")]
    StandupNotFound { message: String },

    /// The service rejected the report as malformed (HTTP 400),
    /// or the question data is unusable for collection
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Transport failure, unexpected HTTP status, or a response body
    /// the service contract does not allow
    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl StandupError {
    /// Create a credential-not-found error
    pub fn credential_not_found<S: Into<String>>(message: S) -> Self {
        Self::CredentialNotFound {
            message: message.into(),
        }
    }

    /// Create an invalid-credential error
    pub fn invalid_credential<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredential {
            message: message.into(),
        }
    }

    /// Create a standup-not-found error
    pub fn standup_not_found<S: Into<String>>(message: S) -> Self {
        Self::StandupNotFound {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a service-unavailable error
    pub fn service_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }
}
