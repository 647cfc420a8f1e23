//! HTTP client with per-request timeout, custom headers, and relaxed TLS trust

use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::http::RequestExecutor;
use anyhow::Result;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::Url;

pub const USER_AGENT: &str = "refxss/1.0";

pub struct HttpClient {
    client: Client,
    default_headers: Vec<(String, String)>,
}

impl HttpClient {
    /// Create HTTP client that sends the given headers with every request
    pub fn new(timeout: Duration, headers: Vec<(String, String)>) -> Result<Self> {
        // Targets are scanned, not trusted: self-signed certificates are fine.
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            default_headers: headers,
        })
    }

    pub async fn execute(&self, mut req: HttpRequest) -> Result<HttpResponse> {
        for (name, value) in &self.default_headers {
            req.set_header(name, value);
        }

        let start = Instant::now();

        let response = self
            .client
            .request(req.method, req.url)
            .headers(req.headers)
            .send()
            .await?;

        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (k, v) in response.headers().iter() {
            headers.insert(k.to_string(), v.to_str().unwrap_or("").to_string());
        }

        // A body that fails mid-read counts as empty rather than partial.
        let body_bytes = response.bytes().await.unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
            elapsed_ms: start.elapsed().as_millis(),
        })
    }
}

impl RequestExecutor for HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let url = Url::parse(url)?;
        self.execute(HttpRequest::get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<p>hello</p>", "text/html"),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(Duration::from_secs(5), Vec::new()).unwrap();
        let resp = client
            .get(&format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "<p>hello</p>");
        assert!(resp.is_html());
    }

    #[tokio::test]
    async fn test_custom_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-bug-bounty", "hunter"))
            .and(header("user-agent", "custom-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = HttpClient::new(
            Duration::from_secs(5),
            vec![
                ("X-Bug-Bounty".to_string(), "hunter".to_string()),
                ("User-Agent".to_string(), "custom-agent".to_string()),
            ],
        )
        .unwrap();

        let resp = client.get(&server.uri()).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "ok");
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(Duration::from_millis(200), Vec::new()).unwrap();
        assert!(client.get(&server.uri()).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_url_is_an_error() {
        let client = HttpClient::new(Duration::from_secs(1), Vec::new()).unwrap();
        assert!(client.get("not a url").await.is_err());
    }

    #[tokio::test]
    async fn test_truncated_body_reads_as_empty() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // Promise 100 bytes, send 7, then hang up.
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 100\r\n\r\npartial",
                )
                .await;
            let _ = socket.shutdown().await;
        });

        let client = HttpClient::new(Duration::from_secs(5), Vec::new()).unwrap();
        let resp = client.get(&format!("http://{}/page?q=partial", addr)).await.unwrap();

        assert_eq!(resp.status, 200);
        assert!(resp.is_html());
        assert_eq!(resp.body, "");
    }
}
