//! Shared test infrastructure for the API, page and cache tests.
//!
//! - `memory_repo()` - Empty in-memory repository, ready to register as app data
//! - `StubFetcher` - Canned REST responses with call counting and an optional gate
//! - `RecordingNotifier` - Collects every toast a page reports
//! - `spawn_api()` - Real HTTP server over a repository, for HttpFetcher round trips

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use tokio::sync::Semaphore;

use fleetdash::dashboard::{DashboardState, FetchError, Fetcher, Notifier, Toast};
use fleetdash::handlers;
use fleetdash::store::{MemoryRepository, Repository};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Long enough for any stubbed widget to settle.
pub const SETTLE_BUDGET: Duration = Duration::from_secs(2);
/// Short enough that gated widgets are still loading at render time.
pub const SHORT_BUDGET: Duration = Duration::from_millis(50);
pub const LONG_TTL: Duration = Duration::from_secs(300);

// ============================================================================
// REPOSITORY
// ============================================================================

pub fn memory_repo() -> web::Data<dyn Repository> {
    let repo: Arc<dyn Repository> = Arc::new(MemoryRepository::new());
    web::Data::from(repo)
}

/// A JSON object literal as a field map.
pub fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

// ============================================================================
// STUB FETCHER
// ============================================================================

/// [`Fetcher`] answering from a fixed table.
///
/// `GET` paths without an entry answer HTTP 404. Mutations are recorded and
/// answer the entry registered under `"{METHOD} {path}"`, or `null`.
/// The response is chosen when the call starts; a gated stub then waits for
/// one permit per call before answering.
#[derive(Default)]
pub struct StubFetcher {
    responses: Mutex<HashMap<String, Result<Value, FetchError>>>,
    calls: Mutex<HashMap<String, usize>>,
    sent: Mutex<Vec<(Method, String, Option<Value>)>>,
    gate: Option<Arc<Semaphore>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub whose calls block until permits are added to the returned gate.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let stub = Self { gate: Some(Arc::clone(&gate)), ..Self::default() };
        (stub, gate)
    }

    pub fn with(self, path: &str, body: Value) -> Self {
        self.respond(path, Ok(body));
        self
    }

    pub fn with_error(self, path: &str, error: FetchError) -> Self {
        self.respond(path, Err(error));
        self
    }

    pub fn respond(&self, path: &str, result: Result<Value, FetchError>) {
        self.responses
            .lock()
            .expect("responses lock")
            .insert(path.to_string(), result);
    }

    pub fn calls(&self, path: &str) -> usize {
        self.calls
            .lock()
            .expect("calls lock")
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    pub fn sent(&self) -> Vec<(Method, String, Option<Value>)> {
        self.sent.lock().expect("sent lock").clone()
    }

    fn lookup(&self, key: &str) -> Option<Result<Value, FetchError>> {
        self.responses.lock().expect("responses lock").get(key).cloned()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }
}

pub fn not_found() -> FetchError {
    FetchError::Http { status: 404, status_text: Some("Not Found".to_string()) }
}

pub fn server_error() -> FetchError {
    FetchError::Http { status: 500, status_text: Some("Internal Server Error".to_string()) }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        *self
            .calls
            .lock()
            .expect("calls lock")
            .entry(path.to_string())
            .or_insert(0) += 1;
        let response = self.lookup(path).unwrap_or_else(|| Err(not_found()));
        self.pass_gate().await;
        response
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, FetchError> {
        let key = format!("{method} {path}");
        self.sent
            .lock()
            .expect("sent lock")
            .push((method, path.to_string(), body));
        let response = self.lookup(&key).unwrap_or(Ok(Value::Null));
        self.pass_gate().await;
        response
    }
}

// ============================================================================
// NOTIFIER
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toasts lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.lock().expect("toasts lock").push(toast.clone());
    }
}

// ============================================================================
// DASHBOARD STATE
// ============================================================================

pub fn dashboard(
    fetcher: Arc<dyn Fetcher>,
    budget: Duration,
) -> (web::Data<DashboardState>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = DashboardState::new(fetcher, notifier.clone(), LONG_TTL, budget);
    (web::Data::new(state), notifier)
}

// ============================================================================
// LIVE SERVER
// ============================================================================

/// Serve the REST API over `repo` on an ephemeral port. Returns its base URL.
///
/// Must be called from within an actix runtime.
pub fn spawn_api(repo: Arc<dyn Repository>) -> String {
    let data: web::Data<dyn Repository> = web::Data::from(repo);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(handlers::api::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}")
}
