//! The `build` command: produce a production-ready server.

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::cli::args::{tokenize, FlagKind, FlagSpec};
use crate::cli::commands::dispatcher::{help_error, Command};
use crate::error::Result;
use crate::ui::{dedent, Theme};

const DEFAULT_OUTPUT: &str = "dist";

static SPEC: LazyLock<FlagSpec> = LazyLock::new(|| {
    FlagSpec::new()
        .flag("--help", FlagKind::Bool)
        .alias("-h", "--help")
        .flag("--output", FlagKind::Value)
        .alias("-o", "--output")
});

static HELP: LazyLock<String> = LazyLock::new(|| {
    let theme = Theme::auto();
    let prompt = theme.format_prompt();
    dedent(&format!(
        "
        Build a production-ready server

        {usage}

          {prompt} trellis build [flags]

        {flags}

          --output DIR, -o   Directory for build artifacts (default {DEFAULT_OUTPUT})
                --help, -h   Show this help
        ",
        usage = theme.format_header("Usage"),
        flags = theme.format_header("Flags"),
    ))
});

/// Handler for `trellis build`.
pub struct BuildCommand;

impl BuildCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for BuildCommand {
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = tokenize(argv, &SPEC).map_err(|e| help_error(&HELP, &e.to_string()))?;

        if args.flag("--help") {
            return Ok(HELP.clone());
        }

        let output = args.value("--output").unwrap_or(DEFAULT_OUTPUT);
        Ok(format!("Building a production-ready server into {output}/"))
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
        let out = BuildCommand::new().parse(&argv(&["--help"])).await.unwrap();
        assert_eq!(out, *HELP);
    }

    #[tokio::test]
    async fn default_output_dir_is_used() {
        let out = BuildCommand::new().parse(&[]).await.unwrap();
        assert!(out.contains(DEFAULT_OUTPUT));
    }

    #[tokio::test]
    async fn output_flag_overrides_default() {
        let out = BuildCommand::new()
            .parse(&argv(&["-o", "out"]))
            .await
            .unwrap();
        assert!(out.contains("out/"));
    }
}
