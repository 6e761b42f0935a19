//! The `generate` command: generate the project artifacts.

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::cli::args::{tokenize, FlagKind, FlagSpec};
use crate::cli::commands::dispatcher::{help_error, Command};
use crate::error::Result;
use crate::ui::{dedent, Theme};

static SPEC: LazyLock<FlagSpec> = LazyLock::new(|| {
    FlagSpec::new()
        .flag("--help", FlagKind::Bool)
        .alias("-h", "--help")
});

static HELP: LazyLock<String> = LazyLock::new(|| {
    let theme = Theme::auto();
    let prompt = theme.format_prompt();
    dedent(&format!(
        "
        Generate the artifacts

        {usage}

          {prompt} trellis generate
        ",
        usage = theme.format_header("Usage"),
    ))
});

/// Handler for `trellis generate`.
pub struct GenerateCommand;

impl GenerateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for GenerateCommand {
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = tokenize(argv, &SPEC).map_err(|e| help_error(&HELP, &e.to_string()))?;

        if args.flag("--help") {
            return Ok(HELP.clone());
        }

        Ok("Generating artifacts".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn help_flag_returns_own_help() {
        let out = GenerateCommand::new()
            .parse(&argv(&["--help"]))
            .await
            .unwrap();
        assert_eq!(out, *HELP);
    }

    #[tokio::test]
    async fn plain_generate_acknowledges() {
        let out = GenerateCommand::new().parse(&[]).await.unwrap();
        assert!(out.contains("Generating"));
    }
}
