#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header},
    routing::any,
};
use esd_http::{AuthClient, TokenError, TokenFn, TokenSource};

/// Request as observed by the mock server.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct Recorder {
    script: Mutex<VecDeque<(u16, String)>>,
    seen: Mutex<Vec<Seen>>,
}

impl Recorder {
    pub fn requests(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// Pop the next scripted response; the last one repeats forever.
    fn next(&self) -> (u16, String) {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap_or((200, String::new()))
        }
    }
}

pub struct MockServer {
    pub url: String,
    pub slow_url: String,
    pub recorder: Arc<Recorder>,
}

pub async fn spawn(script: &[(u16, &str)]) -> MockServer {
    let recorder = Arc::new(Recorder {
        script: Mutex::new(script.iter().map(|(s, b)| (*s, b.to_string())).collect()),
        seen: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/resource", any(respond))
        .route("/slow", any(slow))
        .with_state(Arc::clone(&recorder));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        url: format!("http://{addr}/resource"),
        slow_url: format!("http://{addr}/slow"),
        recorder,
    }
}

async fn respond(
    State(recorder): State<Arc<Recorder>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let value_of = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    recorder.seen.lock().unwrap().push(Seen {
        method,
        authorization: value_of(header::AUTHORIZATION),
        content_type: value_of(header::CONTENT_TYPE),
        body: body.to_vec(),
    });

    let (status, body) = recorder.next();
    (StatusCode::from_u16(status).unwrap(), body)
}

async fn slow(State(recorder): State<Arc<Recorder>>) -> StatusCode {
    recorder.seen.lock().unwrap().push(Seen {
        method: Method::GET,
        authorization: None,
        content_type: None,
        body: Vec::new(),
    });
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

/// Token source handing out `tokens` in order (last one repeats) and counting calls.
pub fn counting_tokens(tokens: &[&'static str]) -> (Arc<dyn TokenSource>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let tokens = tokens.to_vec();

    let source = TokenFn::arc(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        let token = tokens[n.min(tokens.len() - 1)].to_string();
        async move { Ok::<_, TokenError>(token) }
    });
    (source, calls)
}

pub fn failing_tokens() -> (Arc<dyn TokenSource>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let source = TokenFn::arc(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Err(TokenError::Unavailable("identity provider is down".into())) }
    });
    (source, calls)
}

pub fn client(tokens: Arc<dyn TokenSource>) -> AuthClient {
    client_with_timeout(tokens, Duration::from_secs(30))
}

pub fn client_with_timeout(tokens: Arc<dyn TokenSource>, timeout: Duration) -> AuthClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    AuthClient::from_reqwest(http, tokens)
}
