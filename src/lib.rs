//! Trellis - Grow app servers from a single command line.
//!
//! The crate is organized around one capability: a [`cli::Command`] parses
//! the arguments addressed to it and returns displayable text or an error
//! value. The root [`cli::Dispatcher`] owns a registry of subcommand
//! handlers and routes raw argv to them; it is itself a `Command`, so it
//! never prints, never exits, and can be driven directly from tests.
//!
//! # Modules
//!
//! - [`cli`] - Flag tokenizing, the dispatcher, and the bundled commands
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal styling and text normalization
//!
//! # Example
//!
//! ```
//! use trellis::cli::{Command, Dispatcher};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dispatcher = Dispatcher::with_default_commands();
//! // No arguments: the dispatcher returns the help screen as a value.
//! let help = dispatcher.parse(&[]).await.unwrap();
//! assert!(help.contains("Usage"));
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod ui;

pub use error::{Result, TrellisError};
