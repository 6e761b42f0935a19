//! The `init` command: set up a ready-to-use Trellis project.

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
        .flag("--force", FlagKind::Bool)
        .alias("-f", "--force")
        .flag("--template", FlagKind::Value)
});

static HELP: LazyLock<String> = LazyLock::new(|| {
    let theme = Theme::auto();
    let prompt = theme.format_prompt();
    dedent(&format!(
        "
        Set up a ready-to-use Trellis project in the current directory

        {usage}

          {prompt} trellis init [flags]

        {flags}

              --force, -f   Overwrite files left over from a previous init
          --template NAME   Start from a named project template
               --help, -h   Show this help
        ",
        usage = theme.format_header("Usage"),
        flags = theme.format_header("Flags"),
    ))
});

/// Handler for `trellis init`.
pub struct InitCommand;

impl InitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InitCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for InitCommand {
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = tokenize(argv, &SPEC).map_err(|e| help_error(&HELP, &e.to_string()))?;

        if args.flag("--help") {
            return Ok(HELP.clone());
        }

        let mut out = match args.value("--template") {
            Some(template) => format!("Setting up a new Trellis project from template \"{template}\""),
            None => "Setting up a new Trellis project".to_string(),
        };
        if args.flag("--force") {
            out.push_str("\nOverwriting files from a previous init");
        }
        Ok(out)
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
        let out = InitCommand::new().parse(&argv(&["--help"])).await.unwrap();
        assert_eq!(out, *HELP);
        assert!(out.contains("trellis init"));
    }

    #[tokio::test]
    async fn plain_init_acknowledges() {
        let out = InitCommand::new().parse(&[]).await.unwrap();
        assert!(out.contains("new Trellis project"));
    }

    #[tokio::test]
    async fn force_flag_is_reported() {
        let out = InitCommand::new().parse(&argv(&["--force"])).await.unwrap();
        assert!(out.contains("Overwriting"));
    }

    #[tokio::test]
    async fn template_value_is_echoed() {
        let out = InitCommand::new()
            .parse(&argv(&["--template", "graphql-api"]))
            .await
            .unwrap();
        assert!(out.contains("graphql-api"));
    }

    #[tokio::test]
    async fn unknown_flag_returns_own_help() {
        let err = InitCommand::new()
            .parse(&argv(&["--bogus"]))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("--bogus"));
        assert!(msg.contains("trellis init"));
    }
}
