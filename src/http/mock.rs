//! In-memory executor for exercising scan logic without sockets

use crate::http::{HttpResponse, RequestExecutor};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

type Responder = dyn Fn(&str) -> Option<HttpResponse> + Send + Sync;

pub struct MockExecutor {
    respond: Box<Responder>,
    calls: AtomicUsize,
}

impl MockExecutor {
    /// `respond` maps a requested URL to a response; `None` simulates a transport failure.
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Option<HttpResponse> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RequestExecutor for MockExecutor {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(url).ok_or_else(|| anyhow::anyhow!("simulated failure for {}", url))
    }
}

pub fn html(body: impl Into<String>) -> HttpResponse {
    typed("text/html; charset=utf-8", body)
}

pub fn typed(content_type: &str, body: impl Into<String>) -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), content_type.to_string());
    HttpResponse {
        status: 200,
        headers,
        body: body.into(),
        elapsed_ms: 0,
    }
}
