pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::followups::handlers as followups;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Posting extraction
        .route(
            "/api/extract",
            get(extraction::handle_extract).fallback(extraction::handle_method_not_allowed),
        )
        // Fit scoring
        .route("/api/v1/fit-score", post(scoring::handle_fit_score))
        .route("/api/v1/fit-score/ai", post(scoring::handle_fit_score_ai))
        // Follow-ups
        .route("/api/v1/follow-ups/generate", post(followups::handle_generate))
        .route("/api/v1/follow-ups/upcoming", post(followups::handle_upcoming))
        .route("/api/v1/follow-ups/done", post(followups::handle_mark_done))
        .route("/api/v1/follow-ups/snooze", post(followups::handle_snooze))
        .route(
            "/api/v1/follow-ups/templates/:type",
            get(followups::handle_get_template),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, ExtractConfig, FetchConfig, LlmConfig};
    use crate::test_support::{anthropic_reply, spawn_stub};

    fn config(llm: Option<LlmConfig>) -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            llm,
            fetch: FetchConfig::default(),
            extract: ExtractConfig::default(),
        }
    }

    fn app(llm: Option<LlmConfig>) -> Router {
        build_router(AppState::from_config(config(llm)).unwrap())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(None), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["llm_configured"], false);
    }

    #[tokio::test]
    async fn test_extract_requires_url() {
        let (status, body) = send(app(None), get_req("/api/extract")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("url"));
    }

    #[tokio::test]
    async fn test_extract_rejects_malformed_url() {
        let (status, _) = send(app(None), get_req("/api/extract?url=not-a-url")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_rejects_non_get() {
        let request = Request::post("/api/extract?url=https://example.com")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_extract_without_llm_is_structured_error() {
        let (status, body) = send(
            app(None),
            get_req("/api/extract?url=http://127.0.0.1:9/job"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_extract_with_cleanup() {
        let page = spawn_stub(
            200,
            "text/html",
            "<html><head><title>Data Engineer</title></head><body><h1>Data Engineer</h1></body></html>"
                .to_string(),
        )
        .await;
        let api_url = spawn_stub(
            200,
            "application/json",
            anthropic_reply(r#"{"company":"Careers at Globex | LinkedIn","position":"Data Engineer at Globex","hourlyRate":55}"#),
        )
        .await;
        let llm = LlmConfig {
            api_key: "test-key".to_string(),
            api_url,
        };

        let uri = format!("/api/extract?url={page}/jobs/7");
        let (status, raw) = send(app(Some(llm.clone())), get_req(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(raw["company"], "Careers at Globex | LinkedIn");
        assert_eq!(raw["hourlyRate"], "55");
        assert_eq!(raw["jobUrl"], format!("{page}/jobs/7"));

        let (status, cleaned) = send(app(Some(llm)), get_req(&format!("{uri}&clean=true"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cleaned["company"], "Globex");
        assert_eq!(cleaned["position"], "Data Engineer");
    }

    #[tokio::test]
    async fn test_fit_score_endpoint() {
        let (status, body) = send(
            app(None),
            post_json(
                "/api/v1/fit-score",
                json!({
                    "jobDescription": "Looking for a Python developer with SQL experience",
                    "profile": {"skills": ["python", "sql", "react"]}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fitScore"], 67);
        assert_eq!(body["missingKeywords"], json!(["developer"]));
        assert!(body["notes"].as_str().unwrap().starts_with("Good"));
    }

    #[tokio::test]
    async fn test_fit_score_empty_description_scores_zero() {
        let body = json!({"jobDescription": "", "profile": {"skills": ["rust"]}});
        for uri in ["/api/v1/fit-score", "/api/v1/fit-score/ai"] {
            let (status, result) = send(app(None), post_json(uri, body.clone())).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(result["fitScore"], 0);
            assert_eq!(result["missingKeywords"], json!([]));
            assert!(result["notes"].as_str().unwrap().starts_with("Low"));
        }
    }

    #[tokio::test]
    async fn test_ai_fit_score_whitespace_description_with_key() {
        let api_url = spawn_stub(
            200,
            "application/json",
            anthropic_reply("Not enough information to score."),
        )
        .await;
        let llm = LlmConfig {
            api_key: "test-key".to_string(),
            api_url,
        };
        let (status, result) = send(
            app(Some(llm)),
            post_json(
                "/api/v1/fit-score/ai",
                json!({"jobDescription": "   ", "profile": {"skills": ["rust"]}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["fitScore"], 0);
    }

    #[tokio::test]
    async fn test_ai_fit_score_without_key_uses_keywords() {
        let body = json!({
            "jobDescription": "Rust and Kafka",
            "profile": {"skills": ["rust"]}
        });
        let (_, keyword) = send(app(None), post_json("/api/v1/fit-score", body.clone())).await;
        let (status, ai) = send(app(None), post_json("/api/v1/fit-score/ai", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ai, keyword);
    }

    #[tokio::test]
    async fn test_ai_fit_score_uses_model_reply() {
        let api_url = spawn_stub(
            200,
            "application/json",
            anthropic_reply("Fit Score: 91\nMissing Keywords: kafka"),
        )
        .await;
        let llm = LlmConfig {
            api_key: "test-key".to_string(),
            api_url,
        };
        let (status, body) = send(
            app(Some(llm)),
            post_json(
                "/api/v1/fit-score/ai",
                json!({"jobDescription": "Rust and Kafka", "profile": {"skills": ["rust"]}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fitScore"], 91);
        assert_eq!(body["missingKeywords"], json!(["kafka"]));
    }

    #[tokio::test]
    async fn test_ai_fit_score_falls_back_on_unparseable_reply() {
        let api_url = spawn_stub(
            200,
            "application/json",
            anthropic_reply("I'd say they're a decent fit."),
        )
        .await;
        let llm = LlmConfig {
            api_key: "test-key".to_string(),
            api_url,
        };
        let body = json!({"jobDescription": "Rust and Kafka", "profile": {"skills": ["rust"]}});
        let (_, keyword) = send(app(None), post_json("/api/v1/fit-score", body.clone())).await;
        let (status, ai) = send(app(Some(llm)), post_json("/api/v1/fit-score/ai", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ai, keyword);
    }

    #[tokio::test]
    async fn test_follow_up_lifecycle() {
        let (status, generated) = send(
            app(None),
            post_json(
                "/api/v1/follow-ups/generate",
                json!({"jobId": "job-1", "status": "applied", "appliedDate": "2024-01-01T00:00:00Z"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            generated,
            json!([
                {"jobId": "job-1", "type": "applied-3d", "dueAt": "2024-01-04T00:00:00Z", "done": false},
                {"jobId": "job-1", "type": "applied-7d", "dueAt": "2024-01-08T00:00:00Z", "done": false}
            ])
        );

        let (_, snoozed) = send(
            app(None),
            post_json(
                "/api/v1/follow-ups/snooze",
                json!({"followUps": generated, "jobId": "job-1", "type": "applied-3d"}),
            ),
        )
        .await;
        assert_eq!(snoozed[0]["dueAt"], "2024-01-06T00:00:00Z");
        assert_eq!(snoozed[1]["dueAt"], "2024-01-08T00:00:00Z");

        let (_, done) = send(
            app(None),
            post_json(
                "/api/v1/follow-ups/done",
                json!({"followUps": snoozed, "jobId": "job-1", "type": "applied-7d"}),
            ),
        )
        .await;
        assert_eq!(done[0]["done"], false);
        assert_eq!(done[1]["done"], true);
    }

    #[tokio::test]
    async fn test_snooze_past_representable_dates_is_bad_request() {
        let (status, body) = send(
            app(None),
            post_json(
                "/api/v1/follow-ups/snooze",
                json!({
                    "followUps": [{"jobId": "job-1", "type": "applied-3d", "dueAt": "+262142-12-31T00:00:00Z"}],
                    "jobId": "job-1",
                    "type": "applied-3d"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_follow_ups_for_other_status_are_empty() {
        let (status, body) = send(
            app(None),
            post_json(
                "/api/v1/follow-ups/generate",
                json!({"jobId": "job-1", "status": "offer", "appliedDate": "2024-01-01"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_template_route() {
        let (status, body) = send(app(None), get_req("/api/v1/follow-ups/templates/applied-7d")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["body"].as_str().unwrap().contains("[Relevant Skills]"));

        let (status, _) = send(app(None), get_req("/api/v1/follow-ups/templates/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
