//! manifest-ls entry point.

use clap::Parser;
use manifest_ls::cli::{run_generate, Cli, Command};
use manifest_ls::server::Backend;
use tower_lsp::{LspService, Server};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr: stdout belongs to the LSP transport.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("manifest_ls=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("manifest_ls=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Some(Command::Generate(args)) => run_generate(args),
        None => {
            serve().await;
            Ok(())
        }
    }
}

async fn serve() {
    tracing::info!("Starting manifest-ls over stdio");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
