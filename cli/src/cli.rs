use clap::Parser;

use geekbot_sdk::StandupClient;

use crate::commands::{clear_api_key, run_report};
use crate::error::CliError;
use crate::keystore::KeyringStore;
use crate::terminal::StdTerminal;

/// Keychain service name the API key is filed under
const KEYCHAIN_SERVICE: &str = "Geekbot-CLI";

#[derive(Debug, Parser)]
#[command(name = "geekbot")]
#[command(about = "Interact with Geekbot standups through the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Remove the stored API key (asks for confirmation)
    #[arg(long)]
    pub clear_api_key: bool,

    /// Override the reporting service base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        let store = KeyringStore::new(KEYCHAIN_SERVICE);
        let mut term = StdTerminal;

        if self.clear_api_key {
            return clear_api_key(&store, &mut term);
        }

        let mut client = StandupClient::new()?;
        if let Some(url) = &self.api_url {
            client = client.with_base_url(url);
        }

        run_report(&store, &mut term, client).await.map(|_| ())
    }
}
