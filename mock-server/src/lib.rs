//! Recording stand-in for the analysis service.
//!
//! # Design
//! One catch-all route accepts every analysis call, records what it received
//! — matched path, decoded parameters, raw body length, content type — into
//! shared state, and answers with a small success body. `GET /log` returns
//! the recorded calls so tests driving a client over real HTTP can assert on
//! exact request shaping and call counts.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header::CONTENT_TYPE,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// One recorded analysis call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedCall {
    /// Matched path below `/calls`, e.g. `/text/TextGetTextSentiment`.
    pub path: String,
    /// Decoded form-body parameters (empty for the raw-image shape).
    pub params: HashMap<String, String>,
    /// Decoded query-string parameters (empty for the form shape).
    pub query: HashMap<String, String>,
    /// Raw body length in bytes.
    pub body_bytes: usize,
    /// Content-Type header as received, if any.
    pub content_type: Option<String>,
}

pub type CallLog = Arc<RwLock<Vec<RecordedCall>>>;

pub fn app() -> Router {
    let log: CallLog = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/calls/{flavor}/{call}", post(analyze))
        .route("/log", get(read_log))
        .with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn analyze(
    State(log): State<CallLog>,
    Path((flavor, call)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    // The image shape carries its credentials in the query string and an
    // opaque body; everything else is a form-encoded body.
    let params: HashMap<String, String> = if query.contains_key("apikey") {
        HashMap::new()
    } else {
        form_urlencoded::parse(&body).into_owned().collect()
    };

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let recorded = RecordedCall {
        path: format!("/{flavor}/{call}"),
        params,
        query,
        body_bytes: body.len(),
        content_type,
    };
    tracing::debug!(path = %recorded.path, "recorded analysis call");
    log.write().await.push(recorded);

    Json(json!({ "status": "OK", "usage": "mock", "call": call }))
}

async fn read_log(State(log): State<CallLog>) -> Json<Vec<RecordedCall>> {
    Json(log.read().await.clone())
}
