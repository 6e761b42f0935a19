//! Trellis CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trellis::cli::{Command, Dispatcher};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable;
/// default is INFO for this crate.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trellis=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(?argv, "trellis starting");

    let dispatcher = Dispatcher::with_default_commands();

    // The dispatcher only returns values; surfacing them and choosing the
    // exit status happens here.
    match dispatcher.parse(&argv).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
