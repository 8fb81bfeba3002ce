//! HTTP server lifecycle

use super::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};
use crate::commands::cli::{ServeArgs, StoreKind};
use axum::{middleware, Router};
use statefacts_core::api::{
    resolve_store_path, AppConfig, AppContext, CliError, FileStoreConfig, HttpServerConfig,
    StoreProvider,
};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

/// Router plus the middleware stack, ready to serve.
pub fn build_app(state: AppState, config: &HttpServerConfig) -> Router {
    create_router(state)
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack(config))
}

/// Apply `serve` flags on top of the loaded configuration. Flags win.
pub fn apply_serve_args(cfg: &mut AppConfig, args: &ServeArgs) {
    if let Some(host) = &args.host {
        cfg.http_server.host = host.clone();
    }
    if let Some(port) = args.port {
        cfg.http_server.port = port;
    }
    match args.store {
        Some(StoreKind::Memory) => cfg.store.provider = StoreProvider::Memory,
        Some(StoreKind::File) if cfg.store.provider == StoreProvider::Memory => {
            cfg.store.provider = StoreProvider::File(FileStoreConfig::default())
        }
        _ => {}
    }
    if let Some(path) = &args.store_path {
        if let StoreProvider::File(ref mut file_cfg) = cfg.store.provider {
            file_cfg.path = Some(path.clone());
        }
    }
}

/// Handle the `serve` command
pub async fn handle_serve(args: ServeArgs, ctx: &AppContext) -> Result<(), CliError> {
    let mut cfg = ctx.cfg().clone();
    apply_serve_args(&mut cfg, &args);
    // `--store file` may have replaced a memory provider; give it the default path.
    resolve_store_path(&mut cfg).map_err(|e| CliError::Config(e.to_string()))?;
    let ctx = ctx.with_config(cfg);

    let services = ctx.build_services().await?;
    let state = AppState::new(services);

    start_server(ctx.cfg().http_server.clone(), state)
        .await
        .map_err(|e: Box<dyn std::error::Error + Send + Sync>| CliError::Command(e.to_string()))
}

/// Start the HTTP server and run until a shutdown signal arrives
pub async fn start_server(
    config: HttpServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_app(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM (Unix)
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// No SIGTERM on Windows; only Ctrl+C ends the server
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
