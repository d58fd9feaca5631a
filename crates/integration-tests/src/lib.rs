//! Integration test harness for the OC site.
//!
//! Each test spawns the real router on an ephemeral port over a fresh data
//! directory and talks to it with a cookie-keeping `reqwest` client. No
//! external services are needed: Gemini is replaced by a local stub when a
//! test needs it.
//!
//! ```bash
//! cargo test -p ocean-clean-integration-tests
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use ocean_clean_site::config::{DEFAULT_GEMINI_MODEL, GeminiConfig, SiteConfig};
use ocean_clean_site::state::AppState;
use ocean_clean_site::storage::FileBlobStore;
use ocean_clean_site::store::SiteStore;
use secrecy::SecretString;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Admin secret used by test servers.
pub const TEST_ADMIN_SECRET: &str = "1234";

/// API key the Gemini stub expects.
pub const TEST_GEMINI_KEY: &str = "test-gemini-key";

/// A running site server. Aborted on drop.
pub struct TestServer {
    pub base_url: String,
    pub data_dir: PathBuf,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Full URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A fresh, empty data directory under the system temp dir.
#[must_use]
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("oc-it-{}", uuid::Uuid::new_v4()))
}

/// Site configuration for tests.
#[must_use]
pub fn test_config(data_dir: &Path, gemini: Option<GeminiConfig>) -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().expect("valid IP"),
        port: 0,
        base_url: "http://localhost".to_string(),
        data_dir: data_dir.to_path_buf(),
        admin_secret: SecretString::from(TEST_ADMIN_SECRET),
        gemini,
        log_json: false,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Gemini configuration pointing at `base_url`.
#[must_use]
pub fn gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: SecretString::from(TEST_GEMINI_KEY),
        model: DEFAULT_GEMINI_MODEL.to_string(),
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// Spawn the site over the data directory named in `config`.
pub async fn spawn_site(config: SiteConfig) -> TestServer {
    let data_dir = config.data_dir.clone();
    let backend = FileBlobStore::open(&data_dir).expect("open data dir");
    let store = SiteStore::open(backend).expect("open store");
    let state = AppState::new(config, store).expect("build state");

    let (base_url, handle) = serve(ocean_clean_site::app(state)).await;
    TestServer {
        base_url,
        data_dir,
        handle,
    }
}

/// Spawn the site over a fresh data directory, without Gemini.
pub async fn spawn_default_site() -> TestServer {
    spawn_site(test_config(&temp_data_dir(), None)).await
}

/// A running stand-in for the Gemini API.
pub struct GeminiStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl GeminiStub {
    /// Request bodies received so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if a stub handler panicked while holding the lock.
    #[must_use]
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("stub lock").clone()
    }
}

impl Drop for GeminiStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a stand-in for the Gemini API that answers every
/// `generateContent` call with `status` and `body`, recording each request.
///
/// Requests without the expected `x-goog-api-key` get a 401.
pub async fn spawn_gemini_stub(status: StatusCode, body: Value) -> GeminiStub {
    let path = format!("/v1beta/models/{DEFAULT_GEMINI_MODEL}:generateContent");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    let app = Router::new().route(
        &path,
        post(move |headers: HeaderMap, Json(request): Json<Value>| {
            let body = body.clone();
            let recorded = Arc::clone(&recorded);
            async move {
                recorded.lock().expect("stub lock").push(request);
                let key = headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok());
                if key == Some(TEST_GEMINI_KEY) {
                    (status, Json(body))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(Value::Null))
                }
            }
        }),
    );

    let (base_url, handle) = serve(app).await;
    GeminiStub {
        base_url,
        requests,
        handle,
    }
}

/// A client that keeps cookies, like a browser.
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

async fn serve(app: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), handle)
}
