//! # Board CLI
//!
//! Mounts the board view in a terminal: reads commands from stdin and
//! prints the current page after each one.

use std::sync::Arc;

use anyhow::Context;
use board_client::{BoardApi, BoardView, HttpBoardApi, LocalBoardApi, Pager};
use board_core::BoardService;
use board_infra::JsonFileStore;
use tokio::io::{AsyncBufReadExt, BufReader};

mod command;
mod config;
mod render;

use command::Command;
use config::{Backend, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = CliConfig::from_env();
    let api = build_api(&config.backend)?;

    let mut view = BoardView::with_pager(api, Pager::new(config.page_size));
    view.mount().await;
    println!("{}", render::render(&view));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if let Some(notice) = command::apply(&mut view, command).await {
            println!("{notice}");
        }
        println!("{}", render::render(&view));
    }

    Ok(())
}

fn build_api(backend: &Backend) -> anyhow::Result<Box<dyn BoardApi>> {
    let api: Box<dyn BoardApi> = match backend {
        Backend::Http(url) => {
            tracing::info!(url = %url, "Using board server");
            Box::new(HttpBoardApi::new(url).with_context(|| format!("bad BOARD_API_URL {url}"))?)
        }
        Backend::Local(path) => {
            tracing::info!(path = %path.display(), "Using local board file");
            let store = Arc::new(JsonFileStore::new(path.clone()));
            Box::new(LocalBoardApi::new(Arc::new(BoardService::new(store))))
        }
    };
    Ok(api)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
