//! Authentication API endpoints
//!
//! POST /api/v1/auth/login    - forward credentials to the auth service
//! POST /api/v1/auth/logout   - invalidate the current token
//! GET  /api/v1/auth/validate - client-side token validation pass-through

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::{methods, LoginRequest, TokenValidation, BEARER_PREFIX};
use crate::error::Result;
use crate::rest_api::models::ErrorResponse;
use crate::rest_api::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::AUTH_LOGIN, req.headers())
        .await?;

    let response = state.auth_client.login(&body).await?;

    info!(client_id = %response.client.id, "client logged in");
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/v1/auth/logout
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let Some(token) = auth_header.strip_prefix(BEARER_PREFIX) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No token provided")));
    };

    state.auth_client.logout(auth_header).await?;

    // The auth service has invalidated the token; overwrite any cached
    // positive decision so the gateway stops honoring it immediately.
    state.interceptor.revoke(token);

    info!("client logged out");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Logged out successfully"
    })))
}

/// GET /api/v1/auth/validate
///
/// Pass-through for clients that want to check a token without making a
/// business call. Does not touch the validation cache.
pub async fn validate(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if auth_header.is_empty() {
        return Ok(HttpResponse::BadRequest().json(TokenValidation {
            is_valid: false,
            message: "No token provided".to_string(),
            claims: vec![],
        }));
    }

    let verdict = state
        .auth_client
        .validate(auth_header)
        .await?
        .unwrap_or(TokenValidation {
            is_valid: false,
            message: "Invalid token".to_string(),
            claims: vec![],
        });

    Ok(HttpResponse::Ok().json(verdict))
}
