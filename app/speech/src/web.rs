use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::debug_handler;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::post;
use framework::web::error::HttpError;
use framework::web::error::HttpResult;

use crate::event::InvocationRequest;
use crate::handler::SpeechHandler;

pub fn routes() -> Router<Arc<SpeechHandler>> {
    Router::new().route("/speech", post(speech))
}

#[debug_handler]
async fn speech(State(handler): State<Arc<SpeechHandler>>, body: Bytes) -> HttpResult<Response> {
    let body = String::from_utf8(body.to_vec()).map_err(|err| HttpError::BadRequest(err.to_string()))?;
    let response = handler.handle(InvocationRequest { body: Some(body) }).await?;
    let status = StatusCode::from_u16(response.status_code)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], response.body).into_response())
}
