//! The version reporter.
//!
//! Constructed by the dispatcher when `--version`/`-v` is present and handed
//! the *full original* argv, since the root does not strip its own flags
//! before delegating here. The reporter recognizes nothing further and
//! ignores what it is given.

use async_trait::async_trait;

use crate::cli::commands::dispatcher::Command;
use crate::error::Result;

/// Handler for `trellis --version`.
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for VersionCommand {
    async fn parse(&self, _argv: &[String]) -> Result<String> {
        Ok(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn reports_name_and_version() {
        let out = VersionCommand::new().parse(&[]).await.unwrap();
        assert_eq!(out, format!("trellis {}", env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn tolerates_the_forwarded_root_flags() {
        let out = VersionCommand::new()
            .parse(&argv(&["--version", "--help"]))
            .await
            .unwrap();
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
    }
}
