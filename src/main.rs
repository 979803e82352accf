mod config;
mod routes;
mod state;
mod upstream;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let upstream = upstream::Upstream::new(&config).expect("upstream client init failed");
    let state = state::AppState::new(upstream);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.upstream_url, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
