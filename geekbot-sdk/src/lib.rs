//! # Geekbot SDK
//!
//! Client library for the Geekbot standup reporting API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use geekbot_sdk::StandupClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = StandupClient::new()?;
//!     client.set_api_key("your-api-key")?;
//!
//!     for standup in client.get_standups().await? {
//!         println!("{}: {}", standup.id, standup.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::StandupClient;
pub use error::StandupError;
pub use types::{Answer, AnswerType, Question, Report, ReportReceipt, Standup};
