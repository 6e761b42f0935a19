//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandRegistry`] mapping subcommand names to handlers
//! - [`Dispatcher`] for routing raw argv to the matching handler
//!
//! The dispatcher never prints and never exits. Every outcome, whether the
//! help screen, a delegated command's output, or a failure, is *returned*
//! to the caller, which decides how to display it and what exit status it
//! maps to.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use async_trait::async_trait;

use crate::cli::args::{tokenize, FlagKind, FlagSpec};
use crate::cli::commands::version::VersionCommand;
use crate::error::{Result, TrellisError};
use crate::ui::Theme;

/// Trait for command implementations.
///
/// Each subcommand (and the [`Dispatcher`] itself) exposes a single
/// capability: parse the arguments addressed to it and return displayable
/// text or an error. `parse` is async because a handler may suspend while
/// delegated work runs; the dispatcher itself only awaits at delegation
/// boundaries.
#[async_trait]
pub trait Command: Send + Sync {
    /// Parse `argv` and produce displayable output or an error value.
    async fn parse(&self, argv: &[String]) -> Result<String>;
}

/// Mapping from subcommand name to its handler. Built once, read-only
/// afterward; `BTreeMap` keeps iteration order deterministic.
pub type CommandRegistry = BTreeMap<&'static str, Box<dyn Command>>;

/// Subcommands advertised on the root help screen, with their one-line
/// descriptions. [`Dispatcher::with_default_commands`] derives the registry
/// from this table, so the help screen and the routable set cannot drift.
pub const COMMANDS: &[(&str, &str)] = &[
    ("init", "Set up a ready-to-use Trellis project"),
    ("dev", "Develop your application in watch mode"),
    ("build", "Build a production-ready server"),
    ("generate", "Generate the artifacts"),
    ("doctor", "Check your project state for any problems"),
];

/// Flags the root dispatcher understands. Anything else before the first
/// positional token is a parse error.
static ROOT_SPEC: LazyLock<FlagSpec> = LazyLock::new(|| {
    FlagSpec::new()
        .flag("--help", FlagKind::Bool)
        .alias("-h", "--help")
        .flag("--version", FlagKind::Bool)
        .alias("-v", "--version")
});

static HELP: LazyLock<String> = LazyLock::new(render_help);

fn render_help() -> String {
    let theme = Theme::auto();
    let prompt = theme.format_prompt();

    let width = COMMANDS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut help = String::new();
    help.push_str("Trellis - Grow app servers from a single command line\n\n");

    help.push_str(&format!("{}\n\n", theme.format_header("Usage")));
    help.push_str(&format!("  {prompt} trellis [command]\n\n"));

    help.push_str(&format!("{}\n\n", theme.format_header("Commands")));
    for (name, description) in COMMANDS {
        help.push_str(&format!("  {name:>width$}   {description}\n"));
    }
    help.push('\n');

    help.push_str(&format!("{}\n\n", theme.format_header("Examples")));
    help.push_str(&format!(
        "  Set up files for a new Trellis project\n  {prompt} trellis init\n\n"
    ));
    help.push_str(&format!(
        "  Start developing and watch your changes locally\n  {prompt} trellis dev\n\n"
    ));
    help.push_str(&format!(
        "  Build a production-ready server\n  {prompt} trellis build"
    ));

    help
}

/// The root help screen. Rendered once and memoized.
pub fn help_text() -> &'static str {
    &HELP
}

/// Wrap a parse failure into a returned help error: the message prefixed
/// with a bold red `!`, followed by the given help screen.
pub fn help_error(help: &str, message: &str) -> TrellisError {
    let theme = Theme::auto();
    TrellisError::help(format!(
        "\n{} {message}\n\n{help}",
        theme.format_error_marker()
    ))
}

/// Routes raw argv to the matching subcommand handler.
///
/// Owns the [`CommandRegistry`]; the registry is immutable after
/// construction, so `parse` can be called any number of times with
/// identical results for identical input.
pub struct Dispatcher {
    commands: CommandRegistry,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(commands: CommandRegistry) -> Self {
        Self { commands }
    }

    /// Create a dispatcher wired to the bundled handlers, one per entry in
    /// [`COMMANDS`].
    pub fn with_default_commands() -> Self {
        let mut commands: CommandRegistry = BTreeMap::new();
        commands.insert("init", Box::new(super::init::InitCommand::new()));
        commands.insert("dev", Box::new(super::dev::DevCommand::new()));
        commands.insert("build", Box::new(super::build::BuildCommand::new()));
        commands.insert("generate", Box::new(super::generate::GenerateCommand::new()));
        commands.insert("doctor", Box::new(super::doctor::DoctorCommand::new()));
        Self::new(commands)
    }

    /// Names of the registered subcommands, in registry order.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    fn unknown_command(&self, name: &str) -> TrellisError {
        let theme = Theme::auto();
        TrellisError::UnknownCommand {
            command: name.to_string(),
            rendered: format!(
                "\n{} Unknown command \"{name}\"\n\n{}",
                theme.format_error_marker(),
                help_text()
            ),
        }
    }
}

#[async_trait]
impl Command for Dispatcher {
    /// Route `argv`.
    ///
    /// Order matters and is fixed: parse failures first, then `--version`
    /// (which wins over `--help`), then help, then subcommand lookup.
    /// Delegated results and errors are returned unchanged.
    async fn parse(&self, argv: &[String]) -> Result<String> {
        let args = match tokenize(argv, &ROOT_SPEC) {
            Ok(args) => args,
            Err(e) => return Err(help_error(help_text(), &e.to_string())),
        };

        if args.flag("--version") {
            // The version reporter gets the full original argv, not the
            // stripped positionals.
            tracing::debug!("routing to version reporter");
            return VersionCommand::new().parse(argv).await;
        }

        if args.positionals.is_empty() || args.flag("--help") {
            return Ok(help_text().to_string());
        }

        let name = args.positionals[0].as_str();
        match self.commands.get(name) {
            Some(cmd) => {
                tracing::debug!(command = %name, "delegating to subcommand");
                cmd.parse(&args.positionals[1..]).await
            }
            None => Err(self.unknown_command(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_argv_returns_help() {
        let dispatcher = Dispatcher::with_default_commands();
        let out = dispatcher.parse(&[]).await.unwrap();
        assert_eq!(out, help_text());
    }

    #[tokio::test]
    async fn help_flag_returns_help() {
        let dispatcher = Dispatcher::with_default_commands();
        for flags in [&["--help"][..], &["-h"][..]] {
            let out = dispatcher.parse(&argv(flags)).await.unwrap();
            assert_eq!(out, help_text());
        }
    }

    #[tokio::test]
    async fn version_wins_over_help() {
        let dispatcher = Dispatcher::with_default_commands();
        let out = dispatcher
            .parse(&argv(&["--version", "--help"]))
            .await
            .unwrap();
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
        assert_ne!(out, help_text());
    }

    #[tokio::test]
    async fn unknown_command_names_the_attempt() {
        let dispatcher = Dispatcher::with_default_commands();
        let err = dispatcher.parse(&argv(&["frobnicate"])).await.unwrap_err();
        match &err {
            TrellisError::UnknownCommand { command, rendered } => {
                assert_eq!(command, "frobnicate");
                assert!(rendered.contains("frobnicate"));
                assert!(rendered.contains(help_text()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_flag_returns_help_error() {
        let dispatcher = Dispatcher::with_default_commands();
        let err = dispatcher
            .parse(&argv(&["--unknown-flag"]))
            .await
            .unwrap_err();
        match &err {
            TrellisError::Help { rendered } => {
                assert!(rendered.contains("--unknown-flag"));
                assert!(rendered.contains(help_text()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn parse_is_idempotent() {
        let dispatcher = Dispatcher::with_default_commands();
        let first = dispatcher.parse(&argv(&["doctor"])).await.unwrap();
        let second = dispatcher.parse(&argv(&["doctor"])).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn registry_matches_advertised_commands() {
        let dispatcher = Dispatcher::with_default_commands();
        let advertised: Vec<&str> = {
            let mut names: Vec<&str> = COMMANDS.iter().map(|(name, _)| *name).collect();
            names.sort_unstable();
            names
        };
        assert_eq!(dispatcher.command_names(), advertised);
    }

    #[test]
    fn help_screen_has_required_sections() {
        let help = help_text();
        assert!(help.contains("Usage"));
        assert!(help.contains("Commands"));
        assert!(help.contains("Examples"));
        assert!(help.contains("trellis [command]"));
        for (name, description) in COMMANDS {
            assert!(help.contains(name), "help is missing {name}");
            assert!(help.contains(description), "help is missing {description}");
        }
        assert!(help.contains("trellis init"));
        assert!(help.contains("trellis dev"));
        assert!(help.contains("trellis build"));
    }
}
