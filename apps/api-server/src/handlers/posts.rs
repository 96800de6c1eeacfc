//! Post resources. Method dispatch is delegated to `quill_http::dispatch`
//! so the server and the Lambda functions behave identically.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};

use quill_http::{ApiError, Reply, dispatch};
use quill_shared::response::INVALID_BODY;

use crate::state::AppState;

/// Any method on /posts
pub async fn collection(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(err) => return into_response(rejected_body(&err).into_reply()),
    };
    // actix cannot tell an absent body from an empty one
    let body = (!body.is_empty()).then_some(body.as_ref());
    let reply = dispatch::collection(&state.posts, req.method().as_str(), body).await;
    into_response(reply)
}

/// Any method on /posts/{id}
pub async fn item(
    req: HttpRequest,
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let reply = dispatch::item(&state.posts, req.method().as_str(), Some(id.as_str())).await;
    into_response(reply)
}

/// Any method on /posts/ (empty id segment)
pub async fn missing_id(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let reply = dispatch::item(&state.posts, req.method().as_str(), None).await;
    into_response(reply)
}

/// Fallback for paths no resource matches.
pub async fn unmatched(req: HttpRequest) -> HttpResponse {
    into_response(ApiError::UnknownRoute(req.path().to_string()).into_reply())
}

fn rejected_body(err: &actix_web::Error) -> ApiError {
    if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        tracing::debug!(error = %err, "Unreadable request body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    }
}

fn into_response(reply: Reply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    if let Some(allow) = reply.allow {
        builder.insert_header((header::ALLOW, allow));
    }
    builder
        .content_type(ContentType::json())
        .body(reply.body_string())
}
