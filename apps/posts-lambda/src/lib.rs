//! # Posts Lambda
//!
//! Glue between API Gateway proxy events and the shared dispatch layer.
//! Each binary builds its DynamoDB client once per cold start and reuses it
//! for every invocation the execution environment serves.

use std::borrow::Cow;
use std::sync::Arc;

use lambda_http::http::header::{ALLOW, CONTENT_TYPE};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use percent_encoding::percent_decode_str;
use tracing::Instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quill_core::PostService;
use quill_http::{Reply, dispatch};
use quill_infra::{DynamoConfig, DynamoPostStore};

/// Set up logging and the store. Fails when `TABLE_NAME` is missing.
pub async fn init() -> Result<PostService, Error> {
    init_telemetry();

    let config = DynamoConfig::from_env()?;
    let store = DynamoPostStore::connect(&config).await;

    Ok(PostService::new(Arc::new(store)))
}

/// JSON logs unless `LOG_FORMAT=pretty`; CloudWatch adds its own timestamps.
fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,posts_lambda=debug,quill_core=debug,quill_http=debug,quill_infra=debug")
    });

    let pretty = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "pretty")
        .unwrap_or(false);

    if pretty {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .without_time()
                    .with_ansi(false),
            )
            .init();
    }
}

/// Handler for the `/posts` function.
pub async fn handle_collection(posts: &PostService, req: Request) -> Result<Response<Body>, Error> {
    let span = request_span(&req);
    async {
        let reply = dispatch::collection(posts, req.method().as_str(), request_body(&req)).await;
        into_response(reply)
    }
    .instrument(span)
    .await
}

/// Handler for the `/posts/{id}` function.
pub async fn handle_item(posts: &PostService, req: Request) -> Result<Response<Body>, Error> {
    let span = request_span(&req);
    async {
        let reply = dispatch::item(posts, req.method().as_str(), path_id(&req).as_deref()).await;
        into_response(reply)
    }
    .instrument(span)
    .await
}

fn request_span(req: &Request) -> tracing::Span {
    let request_id = req
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.as_str())
        .unwrap_or("local");
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    )
}

/// `None` for an absent or empty body.
fn request_body(req: &Request) -> Option<&[u8]> {
    let bytes: &[u8] = req.body().as_ref();
    (!bytes.is_empty()).then_some(bytes)
}

/// The `{id}` path parameter, falling back to the raw path when the event
/// carries no parameters (function URLs, local invocation). API Gateway
/// decodes path parameters itself; the raw path segment is decoded here.
fn path_id(req: &Request) -> Option<Cow<'_, str>> {
    if let Some(id) = req.path_parameters_ref().and_then(|params| params.first("id")) {
        return Some(Cow::Borrowed(id));
    }
    let (_, raw) = req.uri().path().trim_end_matches('/').rsplit_once("/posts/")?;
    Some(percent_decode_str(raw).decode_utf8().unwrap_or(Cow::Borrowed(raw)))
}

fn into_response(reply: Reply) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(reply.status)
        .header(CONTENT_TYPE, "application/json");
    if let Some(allow) = reply.allow {
        builder = builder.header(ALLOW, allow);
    }
    Ok(builder.body(Body::Text(reply.body_string()))?)
}
