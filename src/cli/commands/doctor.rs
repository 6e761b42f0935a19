//! The `doctor` command: check the project state for problems.

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
        Check your project state for any problems

        {usage}

          {prompt} trellis doctor
        ",
        usage = theme.format_header("Usage"),
    ))
});

/// Handler for `trellis doctor`.
pub struct DoctorCommand;

impl DoctorCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DoctorCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for DoctorCommand {
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = tokenize(argv, &SPEC).map_err(|e| help_error(&HELP, &e.to_string()))?;

        if args.flag("--help") {
            return Ok(HELP.clone());
        }

        Ok("Checking your project for problems".to_string())
    }
}
