//! In-process upstream stand-ins
//!
//! Each stub is an axum router served on an ephemeral loopback port, so
//! adapters exercise their real HTTP code without network access.

use axum::{
    extract::Query,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub has no local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });
    format!("http://{}", addr)
}

/// Base URL nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// What a stub should answer with
#[derive(Clone)]
pub enum StubReply {
    Json(Value),
    Status(StatusCode),
    /// 200 with a non-JSON body
    Text(&'static str),
    /// Sleep before answering 200 with the given JSON
    Delayed(Duration, Value),
}

impl StubReply {
    async fn respond(self) -> axum::response::Response {
        use axum::response::IntoResponse;
        match self {
            StubReply::Json(body) => Json(body).into_response(),
            StubReply::Status(status) => (status, "upstream failure").into_response(),
            StubReply::Text(body) => body.into_response(),
            StubReply::Delayed(delay, body) => {
                tokio::time::sleep(delay).await;
                Json(body).into_response()
            }
        }
    }
}

/// Requests a stub received
#[derive(Debug, Clone, Default)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
    pub query: HashMap<String, String>,
}

pub type Recorder = Arc<Mutex<Vec<Seen>>>;

pub fn recorder() -> Recorder {
    Arc::new(Mutex::new(Vec::new()))
}

/// OpenAI-compatible `POST /chat/completions`
pub fn chat_completions_stub(reply: StubReply, seen: Recorder) -> Router {
    Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let reply = reply.clone();
            let seen = Arc::clone(&seen);
            async move {
                seen.lock().unwrap().push(Seen {
                    authorization: headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body: Some(body),
                    ..Default::default()
                });
                reply.respond().await
            }
        }),
    )
}

/// Google Fact Check Tools `GET /claims:search`
///
/// Served as a fallback since the colon is not a plain route segment; the
/// path is recorded for assertions.
pub fn claim_search_stub(reply: StubReply, seen: Recorder) -> Router {
    Router::new().fallback(
        move |method: Method, uri: Uri, Query(query): Query<HashMap<String, String>>| {
            let reply = reply.clone();
            let seen = Arc::clone(&seen);
            async move {
                seen.lock().unwrap().push(Seen {
                    method: method.to_string(),
                    path: uri.path().to_string(),
                    query,
                    ..Default::default()
                });
                reply.respond().await
            }
        },
    )
}

/// Chat completion body whose message content is `content`
pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Structured assessment as the model is asked to produce it
pub fn assessment_json(status: &str, assessment: &str) -> String {
    json!({
        "status": status,
        "confidence": 0.85,
        "key_claims": ["claim"],
        "assessment": assessment,
        "red_flags": [],
        "verification_suggestions": ["Check primary sources"],
        "reasoning": "test"
    })
    .to_string()
}

/// Claim search body with one review per rating
pub fn claim_search_body(ratings: &[&str]) -> Value {
    let claims: Vec<Value> = ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| {
            json!({
                "text": format!("Claim {}", i),
                "claimant": "Social media",
                "claimReview": [{
                    "publisher": {"name": "Reuters", "site": "reuters.com"},
                    "url": format!("https://www.reuters.com/fact-check/{}", i),
                    "textualRating": rating,
                    "languageCode": "en"
                }]
            })
        })
        .collect();
    json!({ "claims": claims })
}
