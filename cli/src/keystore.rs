//! API key storage in the platform keychain.

use geekbot_sdk::StandupError;
use keyring::Entry;
use tracing::debug;

use crate::error::CliError;

const KEY_NAME: &str = "api_key";

/// Persistent secret storage, keyed by a service name.
///
/// A missing entry surfaces as [`StandupError::CredentialNotFound`] so the
/// workflow can branch into interactive enrollment; any keychain backend
/// fault is a [`CliError::Keystore`] and fatal.
pub trait SecretStore {
    fn get(&self) -> Result<String, CliError>;
    fn save(&self, secret: &str) -> Result<(), CliError>;
    fn delete(&self) -> Result<(), CliError>;
}

/// [`SecretStore`] backed by the OS keychain
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<Entry, CliError> {
        Ok(Entry::new(&self.service, KEY_NAME)?)
    }
}

impl SecretStore for KeyringStore {
    fn get(&self) -> Result<String, CliError> {
        match self.entry()?.get_password() {
            Ok(secret) => Ok(secret),
            Err(keyring::Error::NoEntry) => Err(StandupError::credential_not_found(
                "no API key stored in the keychain",
            )
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, secret: &str) -> Result<(), CliError> {
        self.entry()?.set_password(secret)?;
        debug!("API key saved to keychain service '{}'", self.service);
        Ok(())
    }

    fn delete(&self) -> Result<(), CliError> {
        match self.entry()?.delete_password() {
            // Deleting an absent key is not a failure
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SecretStore;
    use crate::error::CliError;
    use geekbot_sdk::StandupError;
    use std::cell::RefCell;

    /// In-memory [`SecretStore`] for workflow tests
    pub(crate) struct MemoryStore {
        secret: RefCell<Option<String>>,
    }

    impl MemoryStore {
        pub fn empty() -> Self {
            Self {
                secret: RefCell::new(None),
            }
        }

        pub fn with_secret(secret: &str) -> Self {
            Self {
                secret: RefCell::new(Some(secret.to_string())),
            }
        }

        pub fn stored(&self) -> Option<String> {
            self.secret.borrow().clone()
        }
    }

    impl SecretStore for MemoryStore {
        fn get(&self) -> Result<String, CliError> {
            self.secret
                .borrow()
                .clone()
                .ok_or_else(|| StandupError::credential_not_found("no API key stored").into())
        }

        fn save(&self, secret: &str) -> Result<(), CliError> {
            *self.secret.borrow_mut() = Some(secret.to_string());
            Ok(())
        }

        fn delete(&self) -> Result<(), CliError> {
            *self.secret.borrow_mut() = None;
            Ok(())
        }
    }
}
