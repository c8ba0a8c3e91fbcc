use std::fmt;

use geekbot_sdk::StandupError;

/// Main error type for the geekbot CLI
#[derive(Debug)]
pub enum CliError {
    /// Configuration-related errors
    Config(String),
    /// Terminal or file I/O errors
    Io(std::io::Error),
    /// Keychain backend errors (distinct from a merely missing key)
    Keystore(keyring::Error),
    /// Typed failures from the reporting service or credential handling
    Standup(StandupError),
    /// Generic errors from anyhow
    Other(anyhow::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Keystore(err) => write!(f, "Keychain error: {err}"),
            CliError::Standup(err) => write!(f, "{err}"),
            CliError::Other(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Keystore(err) => Some(err),
            CliError::Standup(err) => Some(err),
            CliError::Other(err) => Some(err.as_ref()),
            CliError::Config(_) => None,
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Io(_) => 3,
            CliError::Keystore(_) => 4,
            CliError::Standup(_) => 5,
            CliError::Other(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<keyring::Error> for CliError {
    fn from(err: keyring::Error) -> Self {
        CliError::Keystore(err)
    }
}

impl From<StandupError> for CliError {
    fn from(err: StandupError) -> Self {
        CliError::Standup(err)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err)
    }
}
