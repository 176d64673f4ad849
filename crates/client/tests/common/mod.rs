#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use bedbet_client::{
    api::ApiClient,
    config::ClientConfig,
    handlers::ClientContext,
    token::{MemoryTokenStore, TokenStore},
};
use serde_json::{json, Value};

/// A request seen by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.0
            .lock()
            .expect("recorder lock")
            .push(Recorded { authorization, body });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.0.lock().expect("recorder lock").clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().expect("recorder lock").len()
    }
}

/// POST route that records the request and answers with `status` and `reply`.
pub fn recording_post(recorder: &Recorder, status: StatusCode, reply: Value) -> MethodRouter {
    let recorder = recorder.clone();
    post(move |headers: HeaderMap, Json(body): Json<Value>| {
        let recorder = recorder.clone();
        let reply = reply.clone();
        async move {
            recorder.record(&headers, body);
            (status, Json(reply))
        }
    })
}

/// GET route that records the request and answers with `status` and `reply`.
pub fn recording_get(recorder: &Recorder, status: StatusCode, reply: Value) -> MethodRouter {
    let recorder = recorder.clone();
    get(move |headers: HeaderMap| {
        let recorder = recorder.clone();
        let reply = reply.clone();
        async move {
            recorder.record(&headers, Value::Null);
            (status, Json(reply))
        }
    })
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read test server address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

pub fn context_with_store(base_url: &str, tokens: Arc<dyn TokenStore>) -> ClientContext {
    let config = ClientConfig {
        api_base: base_url.to_string(),
        request_timeout: 5,
        ..ClientConfig::default()
    };
    ClientContext::new(ApiClient::new(config, tokens).expect("Failed to build client"))
}

pub fn context(base_url: &str, token: Option<&str>) -> ClientContext {
    let tokens: Arc<dyn TokenStore> = match token {
        Some(token) => Arc::new(MemoryTokenStore::with_token(token)),
        None => Arc::new(MemoryTokenStore::new()),
    };
    context_with_store(base_url, tokens)
}

pub fn team_json(uid: &str, start: &str, end: &str, teammates: Value, bet_coins: i64) -> Value {
    json!({
        "name": format!("room_{}", uid),
        "teamUid": uid,
        "ownerUid": "owner-1",
        "challenge_start_at": start,
        "challenge_end_at": end,
        "created_at": "2024-06-01T12:00:00Z",
        "teammates": teammates,
        "bet_coins": bet_coins
    })
}

pub fn signin_reply(token: &str, user: Value) -> Value {
    json!({
        "message": "Token is valid",
        "access_token": token,
        "user": user
    })
}
