//! REST-surface integration tests
//!
//! Drive the dispatch layer through actix with the auth service mocked at
//! the HTTP level. Backend gRPC endpoints point at unbound local ports, so
//! any test that reaches an adapter observes the transport-failure path.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web, App};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api_gateway::config::{AuthConfig, Config, ServerConfig, ServiceEndpoints};
use api_gateway::rest_api::{self, AppState};

fn test_state(auth_base_url: String) -> AppState {
    AppState::from_config(&Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
        },
        services: ServiceEndpoints {
            // Unbound ports: connection refused on first use.
            inventory_service: "http://127.0.0.1:1".to_string(),
            products_service: "http://127.0.0.1:1".to_string(),
            orders_service: "http://127.0.0.1:1".to_string(),
            connect_timeout_secs: 1,
            request_timeout_secs: 1,
        },
        auth: AuthConfig {
            base_url: auth_base_url,
            request_timeout_secs: 1,
            cache_ttl_secs: 60,
        },
    })
}

macro_rules! test_app {
    ($server:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state($server.uri())))
                .configure(rest_api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_succeeds_without_authorization() {
    let server = MockServer::start().await;
    let app = test_app!(server);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_protected_route_without_token_is_401_and_no_auth_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = test_app!(server);

    let req = test::TestRequest::get().uri("/api/v1/orders").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], "Missing or invalid token");
}

#[actix_web::test]
async fn test_revoked_token_is_401_with_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/validate"))
        .and(header("authorization", "Bearer tok-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isValid": false,
            "message": "Token has expired",
            "claims": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app!(server);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((AUTHORIZATION, "Bearer tok-bad"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token has expired");

    // Second request is rejected from cache (expect(1) verifies no
    // further validation request was made).
    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((AUTHORIZATION, "Bearer tok-bad"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_unreachable_backend_is_503_not_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isValid": true,
            "message": "",
            "claims": [{"type": "sub", "value": "c-1"}]
        })))
        .mount(&server)
        .await;
    let app = test_app!(server);

    // Token is valid; the orders backend is unreachable. The caller must
    // see a 503-shaped failure, not a validation failure.
    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((AUTHORIZATION, "Bearer tok-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 503);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Service unavailable");
}

#[actix_web::test]
async fn test_login_forwards_credentials_and_relays_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-issued",
            "expiresAt": "2026-08-06T12:00:00Z",
            "client": {
                "id": "c-1",
                "email": "a@b.cl",
                "username": "abel",
                "role": "client",
                "fullName": "Abel B."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app!(server);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"email": "a@b.cl", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token"], "tok-issued");
    assert_eq!(body["client"]["username"], "abel");
}

#[actix_web::test]
async fn test_login_with_bad_credentials_is_401() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let app = test_app!(server);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"email": "a@b.cl", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_without_token_is_400() {
    let server = MockServer::start().await;
    let app = test_app!(server);

    let req = test::TestRequest::post().uri("/api/v1/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_logout_revokes_cached_token() {
    let server = MockServer::start().await;
    // One validation when the token is first used; none after logout.
    Mock::given(method("GET"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isValid": true,
            "message": "",
            "claims": [{"type": "sub", "value": "c-1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app!(server);

    // Prime the cache with a positive decision (the backend itself is
    // down, so the admitted call ends 503).
    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((AUTHORIZATION, "Bearer tok-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header((AUTHORIZATION, "Bearer tok-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The cached decision is now negative: rejected without re-validation.
    let req = test::TestRequest::get()
        .uri("/api/v1/orders")
        .insert_header((AUTHORIZATION, "Bearer tok-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token has been revoked");
}
