use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use bio_client::{
    BioService, ClientConfig, HttpClient, HttpRequest, HttpResponse, Method, Timer,
    TransportError,
};
use bio_client::config::DEFAULT_BASE_URL;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::AbortController;

/// Get the API base URL based on current environment
/// - In development (localhost): use the bio server on port 8000
/// - In production: use same origin (the bio server serves the page)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    resolve_api_base(&hostname)
}

fn resolve_api_base(hostname: &str) -> String {
    if hostname.is_empty() || hostname == "localhost" || hostname == "127.0.0.1" {
        DEFAULT_BASE_URL.to_string()
    } else {
        // Same origin
        String::new()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

pub type WebBioService = BioService<GlooClient, GlooTimer>;

/// Service wired to the browser fetch and timer primitives.
pub fn bio_service() -> WebBioService {
    BioService::new(ClientConfig::new(api_base()), GlooClient, GlooTimer)
}

/// Aborts the fetch if the request future is dropped before completing,
/// which is what happens when the timer wins the race.
struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    fn new() -> Self {
        Self(AbortController::new().ok())
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.0.as_ref().map(AbortController::signal)
    }

    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            dioxus_logger::tracing::debug!("Aborting abandoned request");
            controller.abort();
        }
    }
}

/// `fetch`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

#[async_trait(?Send)]
impl HttpClient for GlooClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let abort = AbortOnDrop::new();
        let signal = abort.signal();

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder = builder.abort_signal(signal.as_ref());

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::network(format!("Failed to build request: {e}")))?;

        // `fetch` rejects only when no response arrived (the browser's
        // "Failed to fetch" TypeError), so every error here is network-level.
        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::network(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read body: {e}")))?;

        abort.disarm();
        Ok(HttpResponse { status, body })
    }
}

/// `setTimeout`-backed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(timeout_millis(duration)).await;
    }
}

/// `setTimeout` takes a signed 32-bit delay; anything larger wraps negative
/// and fires immediately.
const MAX_TIMEOUT_MILLIS: u32 = i32::MAX as u32;

fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis())
        .unwrap_or(u32::MAX)
        .min(MAX_TIMEOUT_MILLIS)
}
