use {
    atlantic_payout::{
        AppState, adapters::atlantic_client::AtlanticClient, adapters::http::router,
        config::Settings,
    },
    std::sync::Arc,
    tokio::signal,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env().expect("invalid configuration");

    let client = AtlanticClient::new(&settings.atlantic_base_url, settings.upstream_timeout)
        .expect("failed to build Atlantic client");

    let state = AppState {
        gateway: Arc::new(client),
        poll_policy: settings.poll_policy,
    };

    let app = router(state, settings.request_timeout());

    let listener = tokio::net::TcpListener::bind(settings.bind_addr.as_str())
        .await
        .unwrap();
    tracing::info!(
        addr = %settings.bind_addr,
        upstream = %settings.atlantic_base_url,
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
