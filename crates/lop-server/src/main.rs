//! LoP server application
//!
//! Loads the working file, then serves the list over HTTP until Ctrl-C or
//! SIGTERM.

mod args;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::{error, info};
use lop_core::ListFacadeBuilder;
use lop_server::{router, AppState, SERVER_NAME};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        host,
        port,
        root_dir,
        working_file,
        archive_prefix,
    } = Args::parse();

    let root_dir = match root_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    // The list is fully loaded before the listener accepts anything
    let list = ListFacadeBuilder::new()
        .with_working_file(working_file)
        .with_archive_prefix(archive_prefix)
        .build()
        .await
        .context("Failed to load list")?;
    info!("Working file: {}", list.gateway().working_file().display());

    let state = AppState::new(list);
    let app = router(state.clone(), &root_dir);

    let addr = SocketAddr::new(host, port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server \"{SERVER_NAME}\" listening on {addr}");
    info!("Root directory: {}", root_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped after {} requests", state.request_count());
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown requested");
}
