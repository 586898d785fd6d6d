//! Portfolio Web
//!
//! Serves the portfolio site: server-side rendering plus hydration assets,
//! with port and bind address taken from the config layer.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;

    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Portfolio Web v{} ({})",
        env!("PORTFOLIO_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    // Load configuration
    let config = portfolio_web::config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    // Build the router: the whole site is the Dioxus application
    let app = axum::Router::new()
        .serve_dioxus_application(ServeConfig::builder(), portfolio_web::app::App)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

/// Client (wasm) entry: hydrate the app in the browser.
#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(portfolio_web::app::App);
}
