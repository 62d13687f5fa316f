use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::config::Config;

/// Query parameter carrying the pre-shared key
pub const API_KEY_QUERY_PARAM: &str = "api_key";

#[derive(Debug, Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

/// API key middleware.
///
/// Compares the `api_key` query parameter against the configured key by exact
/// string equality. Only layered onto the router when `REQUIRE_API_KEY` is set.
pub async fn api_key_middleware(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let expected = config
        .api_key
        .as_deref()
        .ok_or_else(|| AppError::Internal("API key check enabled without a key".to_string()))?;

    let provided = Query::<ApiKeyQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.api_key);

    match provided {
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => Err(AppError::Unauthorized("Invalid API key".to_string())),
        None => Err(AppError::Unauthorized(format!(
            "Missing API key ({} query parameter)",
            API_KEY_QUERY_PARAM
        ))),
    }
}
