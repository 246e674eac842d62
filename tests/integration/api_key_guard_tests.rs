//! API key guard integration tests
//!
//! Drive the assembled application and check the guard's observable contract:
//! status codes, error bodies, extraction priority and the success marker.

#[cfg(test)]
mod tests {
    use crate::common::{TEST_KEYS, app_state, app_state_with, assert_error_response};
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::test;
    use keygate::config::ApiKeyAuthConfig;
    use keygate::server::create_app;

    // ==================== Scenario ====================

    #[actix_web::test]
    async fn test_valid_key_reaches_handler_with_marker() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header(("x-api-key", "abc123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["authenticated_with_api_key"], true);
        assert_eq!(body["credential_source"], "named_header");
    }

    #[actix_web::test]
    async fn test_wrong_case_key_rejected() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header(("x-api-key", "ABC123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "Invalid API key.").await;
    }

    #[actix_web::test]
    async fn test_no_credential_rejected() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get().uri("/api/session").to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "API key required.").await;
    }

    #[actix_web::test]
    async fn test_empty_key_set_is_server_error() {
        let app = test::init_service(create_app(app_state(""))).await;

        for req in [
            test::TestRequest::get().uri("/api/session").to_request(),
            test::TestRequest::get()
                .uri("/api/session")
                .insert_header(("x-api-key", "abc123"))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_error_response(
                resp,
                StatusCode::INTERNAL_SERVER_ERROR,
                "API key configuration missing on server.",
            )
            .await;
        }
    }

    // ==================== Extraction ====================

    #[actix_web::test]
    async fn test_authorization_header_takes_priority() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header((AUTHORIZATION, "ApiKey not-a-key"))
            .insert_header(("x-api-key", "abc123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "Invalid API key.").await;

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header((AUTHORIZATION, "ApiKey def456"))
            .insert_header(("x-api-key", "not-a-key"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_query_param_disabled_by_default() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get()
            .uri("/api/session?api_key=abc123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "API key required.").await;
    }

    #[actix_web::test]
    async fn test_query_param_when_enabled() {
        let auth = ApiKeyAuthConfig {
            allow_query_param: true,
            ..ApiKeyAuthConfig::default()
        };
        let app = test::init_service(create_app(app_state_with(TEST_KEYS, auth))).await;

        let req = test::TestRequest::get()
            .uri("/api/session?api_key=def456")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["credential_source"], "query_param");
    }

    #[actix_web::test]
    async fn test_custom_header_name() {
        let auth = ApiKeyAuthConfig {
            header_name: "x-storefront-key".to_string(),
            ..ApiKeyAuthConfig::default()
        };
        let app = test::init_service(create_app(app_state_with(TEST_KEYS, auth))).await;

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header(("x-storefront-key", "abc123"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header(("x-api-key", "abc123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "API key required.").await;
    }

    // ==================== Scope ====================

    #[actix_web::test]
    async fn test_health_needs_no_key() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_protected_path_still_guarded() {
        let app = test::init_service(create_app(app_state(TEST_KEYS))).await;

        let req = test::TestRequest::get().uri("/api/does-not-exist").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/does-not-exist")
            .insert_header(("x-api-key", "abc123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
