use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use crate::demo;
use crate::error::ApiError;
use crate::llm::Message;
use crate::state::AppState;
use crate::translate::{self, prompt, TranslateRequest, TranslateResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/translate", post(translate))
        .route("/demo", get(demo_page))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn demo_page() -> Html<String> {
    Html(demo::render_page())
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    // Malformed bodies get the same JSON error shape as validation failures
    let Json(request) =
        payload.map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    translate::validate(&request).map_err(ApiError::BadRequest)?;

    let (system_message, user_message) = prompt::build_prompt(
        &request.source_text,
        &request.source_language,
        &request.target_language,
    );

    info!(
        "Translating {} -> {} ({} chars)",
        request.source_language,
        request.target_language,
        user_message.len()
    );

    let completion = state
        .llm
        .chat_completion(vec![Message::user(user_message)], Some(&system_message))
        .await?;

    Ok(Json(TranslateResponse {
        original: request.source_text,
        translated: completion.trim().to_string(),
        source_language: request.source_language,
        target_language: request.target_language,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LlmConfig, SystemConfig};
    use crate::llm::{CompletionInterface, LlmError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubLlm {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubLlm {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionInterface for StubLlm {
        async fn chat_completion(
            &self,
            _messages: Vec<Message>,
            _system: Option<&str>,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 429,
                    body: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn test_app(llm: Arc<StubLlm>) -> Router {
        let state = AppState {
            config: Config {
                system: SystemConfig::default(),
                llm: LlmConfig::default(),
            },
            llm,
        };
        create_routes().with_state(state)
    }

    fn translate_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/translate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn translates_valid_request() {
        let llm = StubLlm::replying("  ¡Mucha suerte!  ");
        let app = test_app(llm.clone());

        let body = json!({
            "source_text": "Break a leg!",
            "source_language": "English",
            "target_language": "Spanish",
        });
        let response = app
            .oneshot(translate_request(&body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "original": "Break a leg!",
                "translated": "¡Mucha suerte!",
                "source_language": "English",
                "target_language": "Spanish",
            })
        );
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_outbound_call() {
        let llm = StubLlm::replying("unused");
        let app = test_app(llm.clone());

        let body = json!({
            "source_text": "hello",
            "source_language": "English",
        });
        let response = app
            .oneshot(translate_request(&body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("error").is_some());
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn placeholder_language_is_rejected_without_outbound_call() {
        let llm = StubLlm::replying("unused");
        let app = test_app(llm.clone());

        let body = json!({
            "source_text": "hello",
            "source_language": "Select one",
            "target_language": "Spanish",
        });
        let response = app
            .oneshot(translate_request(&body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_json_body_is_rejected() {
        let llm = StubLlm::replying("unused");
        let app = test_app(llm.clone());

        let response = app
            .oneshot(translate_request("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("error").is_some());
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        let app = test_app(StubLlm::failing());

        let body = json!({
            "source_text": "hello",
            "source_language": "English",
            "target_language": "French",
        });
        let response = app
            .oneshot(translate_request(&body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_json(response).await.get("error").is_some());
    }

    #[tokio::test]
    async fn source_text_is_trimmed_before_prompting() {
        let llm = StubLlm::replying("Bonjour");
        let app = test_app(llm);

        let body = json!({
            "source_text": "  hello  ",
            "source_language": "English",
            "target_language": "French",
        });
        let response = app
            .oneshot(translate_request(&body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        // The original comes back as submitted; only the prompt is trimmed
        assert_eq!(body_json(response).await["original"], "  hello  ");
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let app = test_app(StubLlm::replying("unused"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn demo_page_serves_html() {
        let app = test_app(StubLlm::replying("unused"));

        let response = app
            .oneshot(Request::builder().uri("/demo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Select one"));
        assert!(page.contains("translate.google.com"));
    }
}
