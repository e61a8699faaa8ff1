//! Marathon stand-in for CLI tests.
//!
//! A `wiremock` server answering every request through a test-supplied
//! handler. Requests are taken from wiremock's own recording, so they are
//! visible as soon as the CLI process exits.

use std::net::TcpListener;

use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// One request as seen by the server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    fn from_wiremock(request: &Request) -> Self {
        let path = match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        };
        let headers = request
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        Self {
            method: request.method.to_string(),
            path,
            headers,
            body: String::from_utf8_lossy(&request.body).to_string(),
        }
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `"POST /v2/apps"`
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Response the handler wants sent back
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    pub fn not_found() -> Self {
        Self::json(404, serde_json::json!({"message": "App does not exist"}))
    }

    fn into_template(self) -> ResponseTemplate {
        ResponseTemplate::new(self.status).set_body_json(self.body)
    }
}

pub struct FakeMarathon {
    url: String,
    server: MockServer,
    runtime: Runtime,
}

impl FakeMarathon {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
    {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("tokio runtime for fake marathon");

        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(any())
                .respond_with(move |request: &Request| {
                    handler(&RecordedRequest::from_wiremock(request)).into_template()
                })
                .mount(&server)
                .await;
            server
        });

        Self {
            url: server.uri(),
            server,
            runtime,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .map(RecordedRequest::from_wiremock)
            .collect()
    }

    /// Request lines in arrival order, e.g. `["POST /v2/apps"]`
    pub fn request_lines(&self) -> Vec<String> {
        self.requests().iter().map(RecordedRequest::line).collect()
    }
}

/// URL of a loopback port nothing listens on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Marathon app JSON with the fields the CLI reads
pub fn app_json(id: &str, version: &str, deployments: &[&str]) -> Value {
    let deployments: Vec<Value> = deployments
        .iter()
        .map(|d| serde_json::json!({ "id": d }))
        .collect();
    serde_json::json!({
        "id": id,
        "cpus": 0.5,
        "mem": 128.0,
        "instances": 2,
        "version": version,
        "deployments": deployments,
    })
}
