//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface: parse the arguments addressed to the command and return
//! displayable text or an error value.
//!
//! # Architecture
//!
//! Commands are routed by the [`Dispatcher`], which treats the first
//! positional token as the subcommand name. The dispatcher implements
//! [`Command`] itself, so the whole surface is one capability all the way
//! down. Everything here returns values; printing and exit codes live in
//! the binary.

pub mod build;
pub mod dev;
pub mod dispatcher;
pub mod doctor;
pub mod generate;
pub mod init;
pub mod version;

pub use dispatcher::{help_error, help_text, Command, CommandRegistry, Dispatcher, COMMANDS};
