use std::net::SocketAddr;

use rustysteps::build_app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustysteps=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_app();
    let addr: SocketAddr = "0.0.0.0:3000".parse().expect("valid socket address");
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server crashed");
}
