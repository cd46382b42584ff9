//! # Auth Gate
//!
//! Bearer-token middleware for the protected gadget routes. The token is
//! a capability: passing verification is the whole check, no identity is
//! attached to the request.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::errors::ApiError;
use super::gadget_routes::GadgetState;
use crate::auth::AuthError;

/// Extract the bearer token from the Authorization header.
///
/// The token is the second whitespace-delimited segment, so any scheme
/// word is tolerated as long as the token follows it.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split_whitespace().nth(1))
}

/// Middleware guarding the protected routes.
///
/// Missing token and failed verification are both reported with 400;
/// that status is part of the API's existing contract.
pub async fn authenticate(
    State(state): State<Arc<GadgetState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;
    state.jwt.verify_token(token)?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_second_segment() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_scheme_without_token_is_none() {
        let headers = headers_with_auth("Bearer");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
