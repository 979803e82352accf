mod http;
mod render;

use std::process::ExitCode;
use std::time::Duration;

use catalog::api::ObjectsApi;
use catalog::view::{ActionEffects, CatalogView, Notifier, Outcome};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestObjects;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client build failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("nothing to do: {0} is blank")]
    Blank(&'static str),
    #[error("{0}")]
    Action(String),
}

#[derive(Parser, Debug)]
#[command(name = "catalog-cli", about = "Product catalog client for the /objects collection service")]
struct Cli {
    #[arg(long, env = "CATALOG_API_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the resulting list as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every product.
    List,
    /// Show one product by identifier.
    Get { id: String },
    /// Create a product from "name,photo,description,price".
    Create { input: String },
    /// Replace a product with "name,photo,description,price".
    Update { id: String, input: String },
    /// Remove a product.
    Delete { id: String },
}

impl Command {
    /// Name of the argument whose blank value makes the command a no-op.
    fn blank_argument(&self) -> &'static str {
        match self {
            Self::List => "the command",
            Self::Get { .. } | Self::Delete { .. } => "the identifier",
            Self::Create { .. } => "the product input",
            Self::Update { id, .. } if id.trim().is_empty() => "the identifier",
            Self::Update { .. } => "the product input",
        }
    }
}

/// Alerts become log records. Every alert is also left in `last_error`,
/// which `main` prints once.
#[derive(Clone, Copy, Debug, Default)]
struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(%message, "alert raised");
    }
}

/// How a command finished when it did not fail.
#[derive(Debug, PartialEq, Eq)]
enum Finished {
    /// `view.products` is the fresh result and can be printed.
    Listed,
    /// The write went through but the re-list did not; carries the reason.
    Stale(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    tracing::debug!(base_url = %cli.base_url, command = ?cli.command, "catalog-cli starting");
    let api = ReqwestObjects::new(cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let mut view = CatalogView::new(api, LogNotifier);

    match execute(&mut view, cli.command).await? {
        Finished::Listed => {
            let rendered =
                if cli.json { render::render_json(&view.products)? } else { render::render_table(&view.products) };
            println!("{rendered}");
        }
        Finished::Stale(reason) => eprintln!("warning: change applied, but the list could not be reloaded. {reason}"),
    }
    Ok(())
}

/// Run `command` against `view` and decide whether it succeeded.
///
/// # Errors
///
/// [`CliError::Blank`] when nothing was sent, [`CliError::Action`] with the
/// view's error message when the operation itself failed.
async fn execute<A: ObjectsApi, N: Notifier>(
    view: &mut CatalogView<A, N>,
    command: Command,
) -> Result<Finished, CliError> {
    let blank = command.blank_argument();
    let effects: ActionEffects = match command {
        Command::List => view.refresh().await,
        Command::Get { id } => {
            view.id_input = id;
            view.fetch_by_id().await
        }
        Command::Create { input } => {
            view.product_input = input;
            view.create().await
        }
        Command::Update { id, input } => {
            view.product_input = input;
            view.update(&id).await
        }
        Command::Delete { id } => view.delete(&id).await,
    };

    match effects.outcome {
        Outcome::Skipped => Err(CliError::Blank(blank)),
        Outcome::Failed => {
            Err(CliError::Action(view.last_error.take().unwrap_or_else(|| "action failed".to_owned())))
        }
        Outcome::Succeeded if effects.list_replaced => Ok(Finished::Listed),
        Outcome::Succeeded => {
            Ok(Finished::Stale(view.last_error.take().unwrap_or_else(|| "list not reloaded".to_owned())))
        }
    }
}
