// ABOUTME: HTTP server assembly: resources, router, middleware layers, and serve loop
// ABOUTME: Runs the optional startup import and shuts down gracefully on ctrl-c or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::database::{Database, RecipeImporter};
use crate::middleware::{make_request_span, request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes};

/// Connect the database, run the startup import, and wire the services
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the import fails
pub async fn bootstrap(config: ServerConfig) -> Result<Arc<ServerResources>> {
    let database = Database::connect(&config.database)
        .await
        .context("Failed to open recipe database")?;

    if let Some(path) = &config.import_path {
        info!(path = %path.display(), "Importing recipes at startup");
        let summary = RecipeImporter::new(database.recipes())
            .import_file(path, false)
            .await
            .with_context(|| format!("Failed to import recipes from {}", path.display()))?;
        if summary.skipped > 0 {
            warn!(skipped = summary.skipped, "Some recipes were rejected during import");
        }
    }

    Ok(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// Build the application router with every middleware layer
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let timeout = resources.config.request_timeout;
    let cors = setup_cors(&resources.config.cors_allowed_origins);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecipeRoutes::routes(resources))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        // Outermost, so the trace span can read the request id
        .layer(middleware::from_fn(request_id_middleware))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "HTTP server listening");

    serve(listener, resources).await
}

/// Serve on an already bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let database = resources.database.clone();
    let router = build_router(resources);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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
    info!("Shutdown signal received");
}
