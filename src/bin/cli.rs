//! CLI binary for dockdockgo.

use clap::{Parser, Subcommand};
use dockdockgo::search::SearchPhase;
use dockdockgo::session::{HELP, SessionCommand, parse_line};
use dockdockgo::ui::render_state;
use dockdockgo::{AppConfig, SearchController, ViewState};
use dockdockgo_search::config::BASE_URL_ENV;
use dockdockgo_search::{SearchClient, SearchQuery, SearchResponse};
use serde::Serialize;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// DockDockGo: search from the terminal.
#[derive(Parser)]
#[command(name = "dockdockgo", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the search service. Overrides the config file.
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Run one search and print the results.
    Search {
        /// Search text.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Page to fetch (1-indexed).
        #[arg(short, long)]
        page: Option<u32>,

        /// Results per page. Defaults to `search.page_size` from the config.
        #[arg(short, long)]
        limit: Option<u32>,

        /// Print the view state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search interactively, one query or command per line.
    Interactive,
}

/// JSON shape printed by `search --json`.
#[derive(Serialize)]
struct JsonView<'a> {
    phase: SearchPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a SearchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so search output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dockdockgo=info,dockdockgo_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let client = SearchClient::new(&config.client_config(cli.base_url.as_deref()))?;
    debug!(base_url = %client.base_url(), "using search service");

    let controller = SearchController::new(client);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search {
            query,
            page,
            limit,
            json,
        } => {
            let mut query = SearchQuery::new(query.join(" "))
                .with_limit(limit.unwrap_or(config.search.page_size));
            query.page = page;
            run_search(&controller, query, json).await
        }
        Command::Interactive => run_interactive(&controller, config.search.page_size).await,
    }
}

async fn run_search(
    controller: &SearchController<SearchClient>,
    query: SearchQuery,
    json: bool,
) -> anyhow::Result<()> {
    controller.search(query).await;
    let state = controller.snapshot();

    if json {
        let view = JsonView {
            phase: state.phase(),
            response: state.results(),
            error: state.error(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if state.error().is_none() {
        print!("{}", render_state(&state));
    }

    match state.error() {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}

async fn run_interactive(
    controller: &SearchController<SearchClient>,
    page_size: u32,
) -> anyhow::Result<()> {
    println!("DockDockGo v{}", env!("CARGO_PKG_VERSION"));
    println!("{HELP}\n");
    print!("{}", render_state(&controller.snapshot()));

    let mut updates = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Clear => {
                controller.clear_results();
                print_changes(&mut updates);
            }
            SessionCommand::Search(text) => {
                let query = SearchQuery::new(text).with_limit(page_size);
                render_while(controller.search(query), &mut updates).await;
            }
            SessionCommand::NextPage => {
                if render_while(controller.next_page(), &mut updates).await.is_none() {
                    println!("No next page.");
                }
            }
            SessionCommand::PreviousPage => {
                if render_while(controller.previous_page(), &mut updates)
                    .await
                    .is_none()
                {
                    println!("No previous page.");
                }
            }
            SessionCommand::Page(page) => {
                if render_while(controller.change_page(page), &mut updates)
                    .await
                    .is_none()
                {
                    println!("Search for something first.");
                }
            }
        }
    }

    Ok(())
}

/// Drive `action` to completion, printing every view state it passes through.
async fn render_while<F: Future>(
    action: F,
    updates: &mut watch::Receiver<ViewState>,
) -> F::Output {
    tokio::pin!(action);
    loop {
        tokio::select! {
            output = &mut action => {
                print_changes(updates);
                return output;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    return action.await;
                }
                print!("{}", render_state(&updates.borrow_and_update()));
            }
        }
    }
}

/// Print the state if it changed since it was last printed.
fn print_changes(updates: &mut watch::Receiver<ViewState>) {
    if updates.has_changed().unwrap_or(false) {
        print!("{}", render_state(&updates.borrow_and_update()));
    }
}
