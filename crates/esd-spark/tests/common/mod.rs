#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use esd_http::{AuthClient, TokenError, TokenFn};
use esd_spark::{SparkConfig, SparkService};
use serde_json::{Value, json};

/// In-memory stand-in for the job backend.
#[derive(Default)]
pub struct Backend {
    tags: Mutex<HashMap<String, Vec<String>>>,
    stages: Mutex<HashMap<String, String>>,
    failing: Mutex<HashSet<String>>,
    tag_body: Mutex<Option<String>>,
    submit_body: Mutex<Option<String>>,
    submitted: Mutex<Vec<Value>>,
    pub submits: AtomicUsize,
    pub stage_fetches: AtomicUsize,
    pub tag_lookups: AtomicUsize,
}

impl Backend {
    pub fn with_submission(&self, tag: &str, id: &str, stage: &str) -> &Self {
        self.tags
            .lock()
            .unwrap()
            .entry(tag.to_string())
            .or_default()
            .push(id.to_string());
        self.stages
            .lock()
            .unwrap()
            .insert(id.to_string(), stage.to_string());
        self
    }

    pub fn set_stage(&self, id: &str, stage: &str) {
        self.stages
            .lock()
            .unwrap()
            .insert(id.to_string(), stage.to_string());
    }

    pub fn fail_stage_of(&self, id: &str) {
        self.failing.lock().unwrap().insert(id.to_string());
    }

    pub fn raw_tag_body(&self, body: &str) {
        *self.tag_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn raw_submit_body(&self, body: &str) {
        *self.submit_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn submitted(&self) -> Vec<Value> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submits(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn stage_fetches(&self) -> usize {
        self.stage_fetches.load(Ordering::SeqCst)
    }
}

pub struct Harness {
    pub backend: Arc<Backend>,
    pub service: SparkService,
}

pub async fn spawn() -> Harness {
    let backend = Arc::new(Backend::default());

    let app = Router::new()
        .route("/job/requests/tags/{tag}", get(list_by_tag))
        .route("/job/requests/{id}", get(request_state))
        .route("/job/submit/{name}", post(submit))
        .route("/job/logs/{id}", get(logs))
        .route("/job/deployed/{name}", get(deployed))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let tokens = TokenFn::arc(|| async { Ok::<_, TokenError>("test-token".to_string()) });
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = AuthClient::from_reqwest(http, tokens);
    // trailing slash is trimmed by the service
    let service = SparkService::new(client, SparkConfig::new(format!("http://{addr}/")));

    Harness { backend, service }
}

async fn list_by_tag(State(b): State<Arc<Backend>>, Path(tag): Path<String>) -> Response {
    b.tag_lookups.fetch_add(1, Ordering::SeqCst);
    if let Some(body) = b.tag_body.lock().unwrap().clone() {
        return body.into_response();
    }
    let ids = b.tags.lock().unwrap().get(&tag).cloned().unwrap_or_default();
    Json(ids).into_response()
}

async fn request_state(State(b): State<Arc<Backend>>, Path(id): Path<String>) -> Response {
    b.stage_fetches.fetch_add(1, Ordering::SeqCst);
    if b.failing.lock().unwrap().contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match b.stages.lock().unwrap().get(&id) {
        Some(stage) => Json(json!({ "id": id, "lifeCycleStage": stage })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn submit(
    State(b): State<Arc<Backend>>,
    Path(_name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let n = b.submits.fetch_add(1, Ordering::SeqCst) + 1;
    b.submitted.lock().unwrap().push(body.clone());
    if let Some(raw) = b.submit_body.lock().unwrap().clone() {
        return (StatusCode::ACCEPTED, raw).into_response();
    }

    let id = format!("sub-{n}");
    let tag = body["clientTag"].as_str().unwrap_or_default();
    b.with_submission(tag, &id, "NEW");
    (StatusCode::ACCEPTED, Json(json!({ "id": id, "stage": "NEW" }))).into_response()
}

async fn logs(Path(id): Path<String>) -> Json<Vec<String>> {
    Json(vec![format!("{id}: starting"), format!("{id}: done")])
}

async fn deployed(Path(name): Path<String>) -> Json<Value> {
    Json(json!({
        "rootPath": "abfss://jobs@acc/root",
        "projectName": name,
        "runnable": "main.py",
        "submissionDetails": { "version": "2.1.0", "expectedParallelism": 4 }
    }))
}
