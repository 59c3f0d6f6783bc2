#[cfg(test)]
mod router_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::config::{AppConfig, SecurityConfig};
    use crate::faq::create_faq_responder;
    use crate::models::resume::ResumeKind;
    use crate::observability::AppMetrics;
    use crate::services::{
        LogContactSink, MemoryPreferenceStore, ResumeService, create_chat_service,
    };

    struct TestApp {
        router: Router,
        metrics: Arc<AppMetrics>,
        _resume_dir: TempDir,
    }

    fn test_app() -> TestApp {
        let config = AppConfig::development();
        test_app_with(&config.security, config.preferences.max_clients)
    }

    fn test_app_with(security: &SecurityConfig, max_clients: usize) -> TestApp {
        let resume_dir = TempDir::new().unwrap();
        std::fs::write(
            resume_dir.path().join(ResumeKind::Job.file_name()),
            b"%PDF-1.4 test",
        )
        .unwrap();

        let metrics = Arc::new(AppMetrics::default());
        let faq = Arc::new(create_faq_responder(None).unwrap());
        let chat = create_chat_service(faq.clone(), None, true, metrics.clone());
        let state = AppState::new(
            chat,
            faq,
            Box::new(MemoryPreferenceStore::with_max_clients(max_clients)),
            ResumeService::new(resume_dir.path()),
            Box::new(LogContactSink),
            metrics.clone(),
        );

        TestApp {
            router: create_router(state, Router::new(), security),
            metrics,
            _resume_dir: resume_dir,
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_exact_match_with_generated_session() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/chat",
                json!({"message": "  WHO ARE YOU?  "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["X-Content-Type-Options"], "nosniff");

        let body = body_json(response).await;
        assert_eq!(body["source"], "faq");
        assert!(body["reply"].as_str().unwrap().contains("Saumik"));
        assert!(!body["follow_ups"].as_array().unwrap().is_empty());
        assert_eq!(body["session_id"].as_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_chat_keeps_session_and_accepts_history() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/chat",
                json!({
                    "session_id": "visitor-42",
                    "message": "zzzz qqqq",
                    "history": [
                        {"role": "bot", "content": "Hi!"},
                        {"role": "user", "content": "hello"}
                    ]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["session_id"], "visitor-42");
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["follow_ups"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_chat_blank_message_is_400() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request("POST", "/api/v1/chat", json!({"message": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_chat_project_keyword_uses_showcase() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/chat",
                json!({"message": "zzzz qqqq wwww vvvv portfolio"}),
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["source"], "project_showcase");
    }

    #[tokio::test]
    async fn test_welcome() {
        let app = test_app();
        let response = app.router.oneshot(get("/api/v1/chat/welcome")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .ends_with("What would you like to know?")
        );
    }

    #[tokio::test]
    async fn test_faq_match_and_metrics() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/faq/match",
                json!({"query": "who are you?"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "exact");
        assert_eq!(body["score"], 1.0);
        assert!(
            app.metrics
                .gather()
                .contains(r#"faq_matches_total{source="exact"} 1"#)
        );
    }

    #[tokio::test]
    async fn test_faq_match_empty_query_falls_back() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request("POST", "/api/v1/faq/match", json!({"query": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["score"], 0.0);
    }

    #[tokio::test]
    async fn test_faq_entries_lists_corpus() {
        let app = test_app();
        let response = app.router.oneshot(get("/api/v1/faq/entries")).await.unwrap();

        let body = body_json(response).await;
        let total = body["total"].as_u64().unwrap();
        assert!(total > 0);
        assert_eq!(body["entries"].as_array().unwrap().len() as u64, total);
    }

    #[tokio::test]
    async fn test_preferences_lifecycle() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(get("/api/v1/preferences/client-1"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["preferences"]["layout"], "comfortable");
        assert_eq!(
            body["css_classes"],
            json!(["layout-comfortable", "font-size-normal"])
        );

        let response = app
            .router
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/v1/preferences/client-1",
                json!({
                    "layout": "wide",
                    "fontSize": "large",
                    "accentMode": "off",
                    "highContrast": "on"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["css_classes"],
            json!(["layout-wide", "font-size-large", "accent-off", "high-contrast"])
        );

        let response = app
            .router
            .clone()
            .oneshot(get("/api/v1/preferences/client-1"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["preferences"]["fontSize"], "large");

        let response = app
            .router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/preferences/client-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["preferences"]["layout"], "comfortable");
    }

    #[tokio::test]
    async fn test_preferences_reject_bad_client_id() {
        let app = test_app();
        let response = app
            .router
            .oneshot(get("/api/v1/preferences/bad%20id"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_download_and_view() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(get("/api/v1/resume/Saumik_Chakraborty_Job_Resume.pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Saumik_Chakraborty_Job_Resume.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4 test");

        let response = app
            .router
            .oneshot(get("/api/v1/resume/job?view=true"))
            .await
            .unwrap();
        assert!(
            response.headers()[header::CONTENT_DISPOSITION]
                .to_str()
                .unwrap()
                .starts_with("inline")
        );
    }

    #[tokio::test]
    async fn test_resume_missing_or_unknown_is_404() {
        let app = test_app();

        for uri in [
            "/api/v1/resume/Saumik_Chakraborty_Freelance_Resume.pdf",
            "/api/v1/resume/passwd",
        ] {
            let response = app.router.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_resume_list() {
        let app = test_app();
        let response = app.router.oneshot(get("/api/v1/resume")).await.unwrap();

        let body = body_json(response).await;
        let resumes = body["resumes"].as_array().unwrap();
        assert_eq!(resumes.len(), 2);
        assert_eq!(resumes[0]["kind"], "job");
        assert_eq!(resumes[0]["available"], true);
        assert_eq!(resumes[1]["available"], false);
    }

    #[tokio::test]
    async fn test_contact_accepted() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/contact",
                json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Let's talk",
                    "projectType": "AI/ML"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "accepted");
    }

    #[tokio::test]
    async fn test_contact_invalid_email_is_400() {
        let app = test_app();
        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/contact",
                json!({"name": "Ada", "email": "nope", "message": "hi"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_post_is_415() {
        let app = test_app();
        let response = app
            .router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_intro_and_tagline() {
        let app = test_app();
        let response = app.router.oneshot(get("/api/v1/intro")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let intro = body["intro"].as_str().unwrap();
        assert!(intro.contains("Saumik"));
        assert!(intro.contains(" focused on "));
        assert!(body["tagline"].as_str().unwrap().ends_with('.'));
    }

    #[tokio::test]
    async fn test_preferences_evict_oldest_client() {
        let app = test_app_with(&AppConfig::development().security, 1);
        let wide = json!({
            "layout": "wide",
            "fontSize": "normal",
            "accentMode": "on",
            "highContrast": "off"
        });

        for client in ["client-1", "client-2"] {
            let response = app
                .router
                .clone()
                .oneshot(json_request(
                    "PUT",
                    &format!("/api/v1/preferences/{client}"),
                    wide.clone(),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .router
            .clone()
            .oneshot(get("/api/v1/preferences/client-1"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["preferences"]["layout"], "comfortable");

        let response = app
            .router
            .oneshot(get("/api/v1/preferences/client-2"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["preferences"]["layout"], "wide");
    }

    #[tokio::test]
    async fn test_body_limit_applies_without_content_length() {
        let security = SecurityConfig {
            max_request_size: 1024,
            ..AppConfig::development().security
        };
        let app = test_app_with(&security, 10);

        let request = json_request(
            "POST",
            "/api/v1/faq/match",
            json!({"query": "x".repeat(4096)}),
        );
        assert!(request.headers().get(header::CONTENT_LENGTH).is_none());

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/v1/faq/match",
                json!({"query": "who are you?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
