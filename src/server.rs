//! Local visualization server
//!
//! Serves the dist directory (visualization page plus the exported dependency
//! graph JSON) on a fixed localhost port and blocks until interrupted.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use axum::routing::get_service;
use axum::Router;
use console::style;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::error::DepvizError;

/// Fixed port for the visualization server
pub const SERVER_PORT: u16 = 3000;

/// Serve `dist_dir` on localhost, blocking the calling thread
///
/// Spins up a tokio runtime internally; the rest of the CLI stays synchronous.
pub fn serve_blocking(dist_dir: &Path, open_browser: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| DepvizError::server_error("failed to start async runtime", Some(e.into())))?;

    runtime.block_on(serve(dist_dir, open_browser))
}

async fn serve(dist_dir: &Path, open_browser: bool) -> Result<()> {
    // index.html fallback makes the visualization page the root route
    let static_files =
        get_service(ServeDir::new(dist_dir).append_index_html_on_directories(true));
    let app = Router::new().fallback_service(static_files);

    let addr = SocketAddr::from(([127, 0, 0, 1], SERVER_PORT));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        DepvizError::server_error(format!("failed to bind {}", addr), Some(e.into()))
    })?;

    let url = format!("http://localhost:{}", SERVER_PORT);
    println!(
        "\nServer is running on {}",
        style(&url).cyan().underlined()
    );
    println!("Press Ctrl+C to stop");

    if open_browser {
        if let Err(e) = open::that(&url) {
            println!("Warning: Failed to open browser: {}", e);
            println!("You can manually open: {}", url);
        }
    }

    axum::serve(listener, app).await.map_err(|e| {
        DepvizError::server_error("server terminated unexpectedly", Some(e.into())).into()
    })
}
