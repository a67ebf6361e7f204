#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use recipe_service::config::{GeminiSettings, RecipeConfig};
use recipe_service::services::providers::{MockTextProvider, TextProvider};
use recipe_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const RECIPE_JSON: &str = r#"{
    "title": "Egg Crepes",
    "description": "Thin French-style pancakes",
    "ingredients": ["2 eggs", "1 cup flour", "1 cup milk"],
    "instructions": ["Whisk everything", "Cook thin layers"],
    "prepTime": "5 minutes",
    "cookTime": "20 minutes",
    "servings": 4,
    "difficulty": "Medium",
    "nutritionalInfo": {
        "calories": 180,
        "protein": "7g",
        "carbs": "22g",
        "fat": "6g",
        "fiber": "1g"
    },
    "tags": ["French", "Breakfast"]
}"#;

/// Config bound to a random port, pointing at `api_base`.
pub fn test_config(api_key: Option<&str>, api_base: &str) -> RecipeConfig {
    RecipeConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        gemini: GeminiSettings {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.0-flash".to_string(),
            api_base: api_base.to_string(),
            timeout_secs: 5,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with an injected provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let config = test_config(Some("test-api-key"), "http://127.0.0.1:9/v1beta");
        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the service exactly as `main` does, with the Gemini provider.
    pub async fn spawn_with_config(config: RecipeConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_recipe(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/generate-recipe", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Spawn the service around a mock replying with `reply`; returns the mock
/// so tests can inspect the prompts it received.
pub async fn spawn_with_reply(reply: &str) -> (TestApp, Arc<MockTextProvider>) {
    let provider = Arc::new(MockTextProvider::replying(reply));
    let app = TestApp::spawn_with_provider(provider.clone()).await;
    (app, provider)
}

/// One request received by the Gemini stub.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub method: String,
    pub query: HashMap<String, String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: serde_json::Value,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

async fn stub_generate(
    State(state): State<StubState>,
    Path(method): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.calls.lock().unwrap().push(CapturedCall {
        method,
        query,
        body,
    });
    (state.status, Json(state.reply))
}

pub struct GeminiStub {
    pub api_base: String,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

impl GeminiStub {
    /// Serve `reply` with `status` for every `generateContent` call.
    pub async fn spawn(status: StatusCode, reply: serde_json::Value) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            reply,
            calls: calls.clone(),
        };

        let router = Router::new()
            .route("/v1beta/models/:method", post(stub_generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            api_base: format!("http://127.0.0.1:{}/v1beta", port),
            calls,
        }
    }

    /// Successful reply whose single candidate carries `text`.
    pub async fn replying_text(text: &str) -> Self {
        Self::spawn(
            StatusCode::OK,
            serde_json::json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": text }] },
                    "finishReason": "STOP"
                }],
                "usageMetadata": {
                    "promptTokenCount": 120,
                    "candidatesTokenCount": 300,
                    "totalTokenCount": 420
                }
            }),
        )
        .await
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().unwrap().clone()
    }
}
