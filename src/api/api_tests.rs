#[cfg(test)]
mod router_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::config::{AppConfig, ServerConfig};
    use crate::models::profile::{
        Education, Experience, PersonalInfo, Proficiency, ProfileRecord, Project, SkillCategory,
        SkillItem,
    };
    use crate::services::remote::{HttpRemoteAssistant, MockRemoteAssistant, RemoteError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile() -> Arc<ProfileRecord> {
        Arc::new(ProfileRecord {
            personal: PersonalInfo {
                name: "Ada Lovelace".into(),
                title: "Engineer".into(),
                bio: "Analyst.\nPoet.".into(),
                email: "ada@example.com".into(),
                location: "London".into(),
                ..Default::default()
            },
            education: vec![
                Education {
                    institution: "Old School".into(),
                    degree: "Diploma".into(),
                    field: "Maths".into(),
                    start_year: 2015,
                    end_year: 2018,
                    ..Default::default()
                },
                Education {
                    institution: "New College".into(),
                    degree: "BSc".into(),
                    field: "Computing".into(),
                    start_year: 2018,
                    end_year: 2022,
                    ..Default::default()
                },
            ],
            experience: vec![Experience {
                company: "Engines Ltd".into(),
                position: "Intern".into(),
                start_date: "June 2025".into(),
                current: true,
                ..Default::default()
            }],
            projects: vec![
                Project {
                    title: "Engine".into(),
                    description: "Analytical engine".into(),
                    featured: true,
                    ..Default::default()
                },
                Project {
                    title: "Notes".into(),
                    description: "Translator's notes".into(),
                    featured: false,
                    ..Default::default()
                },
            ],
            skills: vec![SkillCategory {
                category: "Languages".into(),
                items: vec![SkillItem {
                    name: "Rust".into(),
                    percentage: Proficiency::new(90).unwrap(),
                }],
            }],
            ..Default::default()
        })
    }

    fn server() -> ServerConfig {
        AppConfig::development().server
    }

    fn offline_app() -> (Router, AppState) {
        let state = AppState::offline(profile());
        (create_router(state.clone(), &server()), state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_chat_falls_back_to_local_responder() {
        let (app, state) = offline_app();

        let response = app
            .oneshot(post_json(
                "/api/chat",
                json!({"message": "What SKILLS do you have?", "session_id": "s1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("Ada Lovelace is proficient in a wide range of technologies including: Rust."));
        assert_eq!(body["session_id"], "s1");
        assert_eq!(body["model"], "fallback");
        assert_eq!(body["sources"], json!([]));

        let history = state.chat_history.list("s1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "What SKILLS do you have?");
    }

    #[tokio::test]
    async fn test_chat_uses_remote_answer() {
        let mut remote = MockRemoteAssistant::new();
        remote
            .expect_ask()
            .returning(|_, _| Ok("From the remote model".to_string()));
        let state = AppState::development(profile(), Box::new(remote));
        let app = create_router(state, &server());

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "hello"})))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["response"], "From the remote model");
        assert_eq!(body["model"], "remote");
        assert!(!body["session_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_remote_failure_still_answers() {
        let mut remote = MockRemoteAssistant::new();
        remote
            .expect_ask()
            .returning(|_, _| Err(RemoteError::Timeout(Duration::from_secs(5))));
        let state = AppState::development(profile(), Box::new(remote));
        let app = create_router(state, &server());

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "where did you study?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["model"], "fallback");
        assert!(body["response"].as_str().unwrap().starts_with("Here's Ada Lovelace's educational background"));
    }

    async fn slow_remote_app(remote_timeout: Duration) -> (Router, MockServer) {
        let remote_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "too late"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&remote_server)
            .await;

        let remote = HttpRemoteAssistant::new(
            &format!("{}/api/chat", remote_server.uri()),
            remote_timeout,
        )
        .unwrap();
        let state = AppState::development(profile(), Box::new(remote));
        let config = ServerConfig {
            request_timeout: 1,
            ..server()
        };
        (create_router(state, &config), remote_server)
    }

    #[tokio::test]
    async fn test_slow_remote_falls_back_within_request_timeout() {
        let (app, _remote_server) = slow_remote_app(Duration::from_millis(300)).await;

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "how can I contact you?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["model"], "fallback");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("You can reach Ada Lovelace at:"));
    }

    #[tokio::test]
    async fn test_request_timeout_applies_to_api_routes() {
        // Remote timeout longer than the request timeout; validate() rejects this config.
        let (app, _remote_server) = slow_remote_app(Duration::from_secs(3)).await;

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let (app, _) = offline_app();

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_chat_accepts_long_message() {
        let (app, _) = offline_app();
        let message = format!("{} skills?", "please tell me ".repeat(400));

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": message})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["response"].as_str().unwrap().contains("Rust"));
    }

    #[tokio::test]
    async fn test_chat_history_roundtrip_and_clear() {
        let (app, _) = offline_app();

        for message in ["hi", "contact?"] {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/api/chat",
                    json!({"message": message, "session_id": "abc"}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.clone().oneshot(get("/api/chat/history/abc")).await.unwrap();
        let history = body_json(response).await;
        assert_eq!(history.as_array().unwrap().len(), 2);
        assert_eq!(history[0]["id"], 1);
        assert_eq!(history[1]["user_message"], "contact?");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/chat/history/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/chat/history/abc")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_feedback_acknowledged() {
        let (app, _) = offline_app();

        let response = app
            .oneshot(post_json(
                "/api/chat/feedback",
                json!({"session_id": "abc", "message_id": 1, "feedback": "positive"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn test_greeting_names_owner() {
        let (app, _) = offline_app();

        let response = app.oneshot(get("/api/chat/greeting")).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["role"], "assistant");
        assert!(body["content"].as_str().unwrap().contains("Ada Lovelace's portfolio"));
    }

    #[tokio::test]
    async fn test_education_sorted_by_end_year() {
        let (app, _) = offline_app();

        let response = app.oneshot(get("/api/education")).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body[0]["institution"], "New College");
        assert_eq!(body[1]["endYear"], 2018);
    }

    #[tokio::test]
    async fn test_projects_featured_filter() {
        let (app, _) = offline_app();

        let response = app
            .clone()
            .oneshot(get("/api/projects?featured=true"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "Engine");

        let response = app.oneshot(get("/api/projects")).await.unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_profile_endpoint_and_security_headers() {
        let (app, _) = offline_app();

        let response = app.oneshot(get("/api/profile")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("X-Content-Type-Options").unwrap(),
            "nosniff"
        );
        let body = body_json(response).await;
        assert_eq!(body["name"], "Ada Lovelace");
        assert!(body.get("phone").is_none());
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_found() {
        let mut state = AppState::offline(profile());
        state.resume_path = "/nonexistent/folio/resume.pdf".into();
        let app = create_router(state, &server());

        let response = app.oneshot(get("/api/resume/download")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_download_serves_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();
        let mut state = AppState::offline(profile());
        state.resume_path = path;
        let app = create_router(state, &server());

        let response = app.oneshot(get("/api/resume/download")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_contact_accepts_valid_form() {
        let (app, state) = offline_app();

        let response = app
            .oneshot(post_json(
                "/api/contact",
                json!({
                    "name": "Grace",
                    "email": "grace@example.com",
                    "subject": "Hello",
                    "message": "Loved the engine."
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(
            body["message"],
            "Message received. We will get back to you soon."
        );
        assert_eq!(state.contact_service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_contact_rejects_invalid_email() {
        let (app, state) = offline_app();

        let response = app
            .oneshot(post_json(
                "/api/contact",
                json!({
                    "name": "Grace",
                    "email": "not-an-email",
                    "subject": "Hello",
                    "message": "Hi"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.contact_service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = offline_app();

        let response = app.oneshot(get("/api/unknown")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
