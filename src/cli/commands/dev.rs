//! The `dev` command: run the application in watch mode.

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::cli::args::{tokenize, FlagKind, FlagSpec};
use crate::cli::commands::dispatcher::{help_error, Command};
use crate::error::Result;
use crate::ui::{dedent, Theme};

const DEFAULT_PORT: &str = "4000";

static SPEC: LazyLock<FlagSpec> = LazyLock::new(|| {
    FlagSpec::new()
        .flag("--help", FlagKind::Bool)
        .alias("-h", "--help")
        .flag("--port", FlagKind::Value)
        .alias("-p", "--port")
});

static HELP: LazyLock<String> = LazyLock::new(|| {
    let theme = Theme::auto();
    let prompt = theme.format_prompt();
    dedent(&format!(
        "
        Develop your application in watch mode

        {usage}

          {prompt} trellis dev [flags]

        {flags}

          --port PORT, -p   Port for the development server (default {DEFAULT_PORT})
               --help, -h   Show this help
        ",
        usage = theme.format_header("Usage"),
        flags = theme.format_header("Flags"),
    ))
});

/// Handler for `trellis dev`.
pub struct DevCommand;

impl DevCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DevCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for DevCommand {
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = tokenize(argv, &SPEC).map_err(|e| help_error(&HELP, &e.to_string()))?;

        if args.flag("--help") {
            return Ok(HELP.clone());
        }

        let port = args.value("--port").unwrap_or(DEFAULT_PORT);
        Ok(format!(
            "Starting the development server in watch mode on port {port}"
        ))
    }
}
