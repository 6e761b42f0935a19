//! Error types for Trellis operations.
//!
//! This module defines [`TrellisError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Errors are *returned values*, never printed or escalated to a panic by
//!   the library. The binary decides how to surface them and what exit
//!   status to use.
//! - [`TrellisError::Help`] and [`TrellisError::UnknownCommand`] carry a
//!   fully rendered text block: the caller only has to display it.
//! - Use `anyhow::Error` (via [`TrellisError::Other`]) for failures raised
//!   inside a delegated command; the dispatcher propagates them untouched.

use thiserror::Error;

/// Core error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    /// Argument parsing failed. The rendered text is the error line followed
    /// by the relevant help screen, ready for display.
    #[error("{rendered}")]
    Help { rendered: String },

    /// The first positional argument did not match any registered
    /// subcommand. Keeps the attempted name available as data alongside the
    /// rendered text.
    #[error("{rendered}")]
    UnknownCommand { command: String, rendered: String },

    /// Generic wrapped error for failures inside a delegated command.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrellisError {
    /// Build a help error from an already-rendered block.
    pub fn help(rendered: impl Into<String>) -> Self {
        Self::Help {
            rendered: rendered.into(),
        }
    }
}

/// Result type alias for Trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_displays_rendered_block() {
        let err = TrellisError::help("! something went wrong\nUsage: ...");
        let msg = err.to_string();
        assert!(msg.contains("something went wrong"));
        assert!(msg.contains("Usage"));
    }

    #[test]
    fn unknown_command_keeps_name_as_data() {
        let err = TrellisError::UnknownCommand {
            command: "frobnicate".into(),
            rendered: "! Unknown command \"frobnicate\"".into(),
        };
        match &err {
            TrellisError::UnknownCommand { command, .. } => {
                assert_eq!(command, "frobnicate");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn anyhow_converts_into_other() {
        let err: TrellisError = anyhow::anyhow!("delegated failure").into();
        assert!(matches!(err, TrellisError::Other(_)));
        assert!(err.to_string().contains("delegated failure"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TrellisError::help("test"))
        }
        assert!(returns_error().is_err());
    }
}
