//! Flag specification and tokenizer.
//!
//! Every command (the root dispatcher included) declares the flags it
//! understands as a [`FlagSpec`] and runs raw argv through [`tokenize`] to
//! split it into recognized flags and ordered positional arguments.
//!
//! Two rules shape the tokenizer:
//!
//! - Aliases are explicit: `-h` is registered as an alias of `--help`, and
//!   a conflicting registration fails at spec construction, not at parse
//!   time.
//! - Flag recognition stops at the first positional token (and at `--`).
//!   Everything from there on is passed through in order, so a subcommand
//!   receives its own flags untouched: `trellis init --force` reaches the
//!   `init` handler as `["--force"]`.

use std::collections::HashMap;

use thiserror::Error;

/// Value shape a flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Presence-only flag (`--help`).
    Bool,
    /// Flag taking a string value (`--template web` or `--template=web`).
    Value,
}

/// Tokenizer error. Recovered by the caller into a rendered help error;
/// never fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgError {
    /// Token looked like a flag but is not in the command's [`FlagSpec`].
    #[error("unknown or unexpected flag: {flag}")]
    UnknownFlag { flag: String },

    /// A value-taking flag appeared as the last token.
    #[error("flag {flag} requires a value")]
    MissingValue { flag: String },

    /// A presence-only flag was given an inline value.
    #[error("flag {flag} does not take a value")]
    UnexpectedValue { flag: String },
}

/// The set of flags a command recognizes, with an explicit alias table.
///
/// Built once per command and held in a static; see
/// [`crate::cli::commands::dispatcher`] for the root spec.
#[derive(Debug, Clone, Default)]
pub struct FlagSpec {
    flags: HashMap<&'static str, FlagKind>,
    aliases: HashMap<&'static str, &'static str>,
}

impl FlagSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flag by its canonical token (with leading dashes).
    ///
    /// # Panics
    ///
    /// Panics if the token is already registered as a flag or an alias.
    /// Specs are built at startup from literals, so a collision is a
    /// programmer error and should fail fast.
    pub fn flag(mut self, name: &'static str, kind: FlagKind) -> Self {
        assert!(
            name.starts_with('-'),
            "flag token must include its dashes: {name}"
        );
        assert!(
            !self.flags.contains_key(name) && !self.aliases.contains_key(name),
            "duplicate flag registration: {name}"
        );
        self.flags.insert(name, kind);
        self
    }

    /// Register `alias` as another spelling of the already-registered
    /// `target` flag.
    ///
    /// # Panics
    ///
    /// Panics if the alias collides with an existing flag or alias, or if
    /// the target flag has not been registered.
    pub fn alias(mut self, alias: &'static str, target: &'static str) -> Self {
        assert!(
            !self.flags.contains_key(alias) && !self.aliases.contains_key(alias),
            "duplicate alias registration: {alias}"
        );
        assert!(
            self.flags.contains_key(target),
            "alias {alias} points at unregistered flag {target}"
        );
        self.aliases.insert(alias, target);
        self
    }

    /// Resolve a token to its canonical flag name, following the alias
    /// table.
    fn resolve(&self, token: &str) -> Option<(&'static str, FlagKind)> {
        if let Some((name, kind)) = self.flags.get_key_value(token) {
            return Some((*name, *kind));
        }
        let target = self.aliases.get(token)?;
        self.flags.get_key_value(target).map(|(n, k)| (*n, *k))
    }
}

/// Result of tokenizing argv against a [`FlagSpec`]. Transient; produced
/// per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    flags: HashMap<&'static str, FlagValue>,
    /// Positional arguments in their original order.
    pub positionals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FlagValue {
    Bool,
    Value(String),
}

impl ParsedArgs {
    /// Whether a presence-only flag was given. Looks up the canonical name.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(FlagValue::Bool))
    }

    /// The value of a value-taking flag, if it was given.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Value(v)) => Some(v),
            _ => None,
        }
    }
}

/// Split raw argv into recognized flags and positionals.
///
/// Flags are recognized until the first positional token or a `--`
/// terminator; the remainder is forwarded as positionals verbatim. A lone
/// `-` counts as a positional. A value-taking flag accepts `--flag=value`
/// or takes the following token verbatim.
pub fn tokenize(argv: &[String], spec: &FlagSpec) -> Result<ParsedArgs, ArgError> {
    let mut parsed = ParsedArgs::default();

    let mut i = 0;
    while i < argv.len() {
        let token = argv[i].as_str();

        if token == "--" {
            parsed.positionals.extend(argv[i + 1..].iter().cloned());
            break;
        }

        if !token.starts_with('-') || token == "-" {
            // First positional: flag recognition ends here so the
            // subcommand sees its own flags.
            parsed.positionals.extend(argv[i..].iter().cloned());
            break;
        }

        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };

        let Some((canonical, kind)) = spec.resolve(name) else {
            return Err(ArgError::UnknownFlag { flag: name.into() });
        };

        match kind {
            FlagKind::Bool => {
                if inline.is_some() {
                    return Err(ArgError::UnexpectedValue { flag: name.into() });
                }
                parsed.flags.insert(canonical, FlagValue::Bool);
            }
            FlagKind::Value => {
                let value = match inline {
                    Some(value) => value.to_string(),
                    None => {
                        i += 1;
                        argv.get(i)
                            .cloned()
                            .ok_or_else(|| ArgError::MissingValue { flag: name.into() })?
                    }
                };
                parsed.flags.insert(canonical, FlagValue::Value(value));
            }
        }

        i += 1;
    }

    Ok(parsed)
}
