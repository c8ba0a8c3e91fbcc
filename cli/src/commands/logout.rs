//! Stored-credential removal.

use crate::error::CliError;
use crate::keystore::SecretStore;
use crate::terminal::Terminal;

/// Delete the stored API key after an interactive confirmation
pub fn clear_api_key<S: SecretStore, T: Terminal>(
    store: &S,
    term: &mut T,
) -> Result<(), CliError> {
    let reply = term.prompt("Remove the stored API key? [y/N] ")?;
    match reply.trim().to_lowercase().as_str() {
        "y" | "yes" => {
            store.delete()?;
            term.say("API key has been removed.")?;
        }
        _ => {
            term.say("Operation cancelled.")?;
        }
    }
    Ok(())
}
