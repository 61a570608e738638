#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
};
use esd_http::{AuthClient, TokenError, TokenFn};

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Vec<u8>,
}

impl Call {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Records every request and answers with a fixed status and body.
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
    status: StatusCode,
    reply: String,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

pub async fn spawn(status: u16, reply: &str) -> (String, Arc<Recorder>) {
    let recorder = Arc::new(Recorder {
        calls: Mutex::new(Vec::new()),
        status: StatusCode::from_u16(status).unwrap(),
        reply: reply.to_string(),
    });
    let app = Router::new()
        .fallback(record)
        .with_state(Arc::clone(&recorder));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), recorder)
}

async fn record(
    State(recorder): State<Arc<Recorder>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, String) {
    recorder.calls.lock().unwrap().push(Call {
        method,
        path: uri.path().to_string(),
        body: body.to_vec(),
    });
    (recorder.status, recorder.reply.clone())
}

pub fn client() -> AuthClient {
    let tokens = TokenFn::arc(|| async { Ok::<_, TokenError>("test-token".to_string()) });
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    AuthClient::from_reqwest(http, tokens)
}
