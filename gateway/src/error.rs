//! Gateway error taxonomy
//!
//! Errors converge here from the auth boundary (`AuthError`) and the
//! backend adapters (`tonic::Status`); the `ResponseError` impl is the
//! single place gateway-facing responses are shaped. Every failure path
//! answers with a JSON body; no call is left unanswered.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tonic::{Code, Status};

use crate::auth::AuthError;
use crate::rest_api::models::ErrorResponse;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing/malformed/invalid/expired/revoked credential. Never retried.
    #[error("{0}")]
    Unauthenticated(String),

    /// Transport failure reaching the auth service or a backend; distinct
    /// from a validation failure so callers see a 503, not a 4xx.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Backend returned a non-OK status; original code and message are
    /// preserved intact for translation here.
    #[error("backend rejected call: {0}")]
    Backend(Status),

    /// The auth service rejected a forwarded request (login/logout) with an
    /// HTTP status the gateway passes through.
    #[error("auth service rejected call ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl From<Status> for GatewayError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded => {
                GatewayError::Unavailable(status.message().to_string())
            }
            _ => GatewayError::Backend(status),
        }
    }
}

impl From<AuthError> for GatewayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated(msg) => GatewayError::Unauthenticated(msg),
            AuthError::Unavailable(msg) => GatewayError::Unavailable(msg),
            AuthError::Rejected { status, message } => GatewayError::Upstream { status, message },
        }
    }
}

/// Short, client-facing label for a backend status code.
fn code_label(code: Code) -> &'static str {
    match code {
        Code::NotFound => "Not found",
        Code::InvalidArgument | Code::OutOfRange => "Invalid request",
        Code::AlreadyExists | Code::Aborted => "Conflict",
        Code::PermissionDenied => "Forbidden",
        Code::Unauthenticated => "Unauthorized",
        Code::ResourceExhausted => "Too many requests",
        _ => "Internal server error",
    }
}

fn backend_status_code(code: Code) -> StatusCode {
    match code {
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::InvalidArgument | Code::OutOfRange => StatusCode::BAD_REQUEST,
        Code::AlreadyExists | Code::Aborted => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Backend(status) => backend_status_code(status.code()),
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match self {
            GatewayError::Unauthenticated(msg) => ErrorResponse::with_message("Unauthorized", msg),
            GatewayError::Unavailable(msg) => {
                ErrorResponse::with_message("Service unavailable", msg)
            }
            GatewayError::Backend(status) => {
                ErrorResponse::with_message(code_label(status.code()), status.message())
            }
            GatewayError::Upstream { message, .. } => {
                ErrorResponse::with_message("Request failed", message)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_codes_map_to_503_condition() {
        let err = GatewayError::from(Status::unavailable("connection refused"));
        assert!(matches!(err, GatewayError::Unavailable(_)));

        let err = GatewayError::from(Status::deadline_exceeded("timed out"));
        assert!(matches!(err, GatewayError::Unavailable(_)));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_backend_status_preserved_intact() {
        let err = GatewayError::from(Status::not_found("order ord-9 does not exist"));

        match &err {
            GatewayError::Backend(status) => {
                assert_eq!(status.code(), Code::NotFound);
                assert_eq!(status.message(), "order ord-9 does not exist");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_code_translation_table() {
        let cases = [
            (Status::invalid_argument(""), StatusCode::BAD_REQUEST),
            (Status::already_exists(""), StatusCode::CONFLICT),
            (Status::permission_denied(""), StatusCode::FORBIDDEN),
            (Status::unauthenticated(""), StatusCode::UNAUTHORIZED),
            (Status::internal(""), StatusCode::INTERNAL_SERVER_ERROR),
            (Status::unknown(""), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (status, expected) in cases {
            assert_eq!(GatewayError::from(status).status_code(), expected);
        }
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let err = GatewayError::Unauthenticated("Token has been revoked".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
