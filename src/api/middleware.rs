//! Request pipeline stages for protected routes
//!
//! Applied in this order around every handler:
//!
//! 1. [`require_token`] verifies the bearer JWT and stores its [`SessionClaims`]
//!    in the request extensions.
//! 2. [`require_admin`] rejects sessions without the admin role.
//! 3. [`log_request`] times the handler and logs the outcome.

use std::time::Instant;

use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::{TypedHeaderRejection, TypedHeaderRejectionReason},
    TypedHeader,
};

use crate::{
    error::{AppError, AppResult},
    models::SessionClaims,
    AppState,
};

/// Verify the bearer token and attach its claims to the request
pub async fn require_token(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|e| {
        if matches!(e.reason(), TypedHeaderRejectionReason::Missing) {
            AppError::Authentication("Missing authorization header".to_string())
        } else {
            AppError::Authentication("Invalid authorization header format".to_string())
        }
    })?;

    let claims = state.services.auth.verify_token(bearer.token())?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Admit only sessions holding the admin role; missing claims fail closed
pub async fn require_admin(req: Request, next: Next) -> AppResult<Response> {
    let role = req
        .extensions()
        .get::<SessionClaims>()
        .map(|claims| (claims.is_admin(), claims.role.clone()));

    match role {
        Some((true, _)) => Ok(next.run(req).await),
        Some((false, role)) => Err(AppError::Authorization(format!(
            "Role {:?} is not allowed to access this resource",
            role
        ))),
        None => Err(AppError::Authorization("No verified session".to_string())),
    }
}

/// Log URL, method, status and handling time of every request
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| req.uri().clone());

    let start = Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();

    tracing::info!(
        url = %uri,
        method = %method,
        status = response.status().as_u16(),
        duration = ?duration,
        "Request handled"
    );

    response
}
