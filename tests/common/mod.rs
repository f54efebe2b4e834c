//! Shared utilities for integration testing: an in-process mock JSON-RPC node.

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Anvil's first account.
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// A JSON-RPC error as (code, message).
pub type RpcFailure = (i64, String);

type Handler = dyn Fn(&str, &Value) -> Result<Value, RpcFailure> + Send + Sync;

/// How the mock node treats batch requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchMode {
    /// Answer batches in reverse order.
    pub reverse: bool,
    /// Answer batches with HTTP 500.
    pub fail: bool,
}

struct NodeState {
    handler: Box<Handler>,
    mode: BatchMode,
    requests: Mutex<Vec<(String, Value)>>,
}

/// A running mock node.
pub struct MockNode {
    pub url: String,
    state: Arc<NodeState>,
}

#[allow(dead_code)]
impl MockNode {
    /// Start a node answering every request through `handler`.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, RpcFailure> + Send + Sync + 'static,
    {
        Self::start_with(BatchMode::default(), handler).await
    }

    /// Start a node with explicit batch behaviour.
    pub async fn start_with<F>(mode: BatchMode, handler: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, RpcFailure> + Send + Sync + 'static,
    {
        let state = Arc::new(NodeState {
            handler: Box::new(handler),
            mode,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/", post(rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            state,
        }
    }

    /// Every (method, params) pair received so far.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `method`.
    pub fn count(&self, method: &str) -> usize {
        self.requests().iter().filter(|(m, _)| m == method).count()
    }
}

fn answer(state: &NodeState, request: &Value) -> Value {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request.get("params").cloned().unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push((method.clone(), params.clone()));

    match (state.handler)(&method, &params) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": { "code": code, "message": message },
        }),
    }
}

async fn rpc(State(state): State<Arc<NodeState>>, Json(body): Json<Value>) -> impl IntoResponse {
    match body {
        Value::Array(batch) => {
            if state.mode.fail {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!("batch rejected")));
            }
            let mut responses: Vec<Value> = batch.iter().map(|r| answer(&state, r)).collect();
            if state.mode.reverse {
                responses.reverse();
            }
            (StatusCode::OK, Json(Value::Array(responses)))
        }
        single => (StatusCode::OK, Json(answer(&state, &single))),
    }
}

/// Lowercased string parameter at `index`.
#[allow(dead_code)]
pub fn param_str(params: &Value, index: usize) -> String {
    params[index].as_str().unwrap_or_default().to_lowercase()
}

/// Call target and input of an `eth_call`/`eth_estimateGas` request.
#[allow(dead_code)]
pub fn call_target(params: &Value) -> (String, String) {
    let tx = &params[0];
    let to = tx["to"].as_str().unwrap_or_default().to_lowercase();
    let input = tx
        .get("input")
        .or_else(|| tx.get("data"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    (to, input)
}

/// ABI word for an unsigned integer.
#[allow(dead_code)]
pub fn abi_uint(value: u128) -> Value {
    json!(format!("0x{:064x}", value))
}

/// ABI word for an address.
#[allow(dead_code)]
pub fn abi_address(address: &str) -> Value {
    json!(format!("0x{:0>64}", address.trim_start_matches("0x").to_lowercase()))
}
