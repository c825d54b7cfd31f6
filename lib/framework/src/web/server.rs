use std::future;
use std::time::Instant;

use anyhow::Context;
use axum::Router;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::middleware;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::signal::unix::SignalKind;
use tracing::Instrument;
use tracing::debug;
use tracing::info;
use tracing::info_span;
use tracing::warn;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn start_http_server(router: Router, bind: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind http server, bind={bind}"))?;
    info!("http server started, bind={bind}");
    axum::serve(listener, self::router(router))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("http server stopped");

    Ok(())
}

pub fn router(router: Router) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .merge(router)
        .layer(middleware::from_fn(request_id_layer))
}

// a listener that can not be installed never fires, the other one still stops the server
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("failed to listen ctrl-c, error={err}");
            future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal::unix::signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                warn!("failed to listen sigterm, error={err}");
                future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received sigterm, shutting down"),
    }
}

async fn health_check() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7().to_string();
    let span = info_span!("http", request_id = %request_id);

    async move {
        let started = Instant::now();
        debug!(method = %request.method(), uri = %request.uri(), "[request]");

        let mut response = next.run(request).await;
        debug!(status = response.status().as_u16(), elapsed_ms = started.elapsed().as_millis() as u64, "[response]");

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
