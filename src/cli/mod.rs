//! Command-line interface for Trellis.
//!
//! # Architecture
//!
//! - [`args`] - Flag specification and tokenizer
//! - [`commands`] - The dispatcher and the command implementations

pub mod args;
pub mod commands;

pub use args::{tokenize, ArgError, FlagKind, FlagSpec, ParsedArgs};
pub use commands::{help_text, Command, CommandRegistry, Dispatcher};
