//! Request execution: the executor seam used by the scanner and its reqwest implementation

pub mod client;
pub mod request;
pub mod response;

pub use client::HttpClient;
pub use response::HttpResponse;

use std::future::Future;

/// Performs a single GET and hands back the full response.
///
/// Implementations must be shareable across worker tasks. Any failure
/// (unparsable URL, DNS, connect, TLS, timeout) is reported as `Err`; callers
/// treat it as a negative result for that one request.
pub trait RequestExecutor: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = anyhow::Result<HttpResponse>> + Send;
}

#[cfg(test)]
pub mod mock;
