//! Keep-alive route for external uptime monitors. Shares nothing with the bot but the process.
use axum::{Router, http::StatusCode, routing::get};
use std::net::SocketAddr;
use tracing::info;

async fn ok() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

pub fn router() -> Router {
    Router::new().route("/", get(ok))
}

pub async fn serve(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(target = "liveness", %addr, "liveness endpoint listening");
    axum::serve(listener, router()).await
}
