use clap::Parser;
use tracing::debug;

mod cli;
mod collector;
mod commands;
mod error;
mod git;
mod keystore;
mod logging;
mod terminal;

use cli::Cli;
use error::CliError;
use logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    debug!("CLI arguments: {:?}", cli);

    match cli.run().await {
        Ok(_) => {
            debug!("geekbot CLI completed");
            Ok(())
        }
        Err(e) => {
            match &e {
                // The workflow already presented these to the user
                CliError::Standup(_) => debug!("CLI error: {:?}", e),
                _ => tracing::error!("{}", e),
            }
            std::process::exit(e.exit_code());
        }
    }
}
