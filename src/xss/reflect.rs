// Reflection Discovery Module
// Finds query parameters whose current value is echoed back in the HTML body

use crate::http::RequestExecutor;
use crate::payload::injector::query_params;
use url::Url;

/// Names of the query parameters of `url` whose value appears in the response body.
///
/// One request is made. Transport failures, non-HTML responses, and unparsable
/// URLs all yield an empty list.
pub async fn detect_reflected<E: RequestExecutor>(executor: &E, url: &str) -> Vec<String> {
    let response = match executor.get(url).await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Request failed for {}: {}", url, e);
            return Vec::new();
        }
    };

    tracing::debug!(
        "{} → {} ({} bytes, {}ms)",
        url,
        response.status,
        response.body.len(),
        response.elapsed_ms
    );

    if !response.is_html() {
        tracing::debug!(
            "Skipping {}: content type {:?} is not HTML",
            url,
            response.content_type()
        );
        return Vec::new();
    }

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return Vec::new(),
    };

    let mut reflected = Vec::new();

    for (name, value) in query_params(&parsed) {
        // An empty value is a substring of every body.
        if value.is_empty() {
            continue;
        }

        if representations(&value)
            .iter()
            .any(|repr| response.contains(repr))
        {
            tracing::debug!("✓ Reflection found: {} in {}", name, url);
            reflected.push(name);
        }
    }

    reflected
}

/// The raw value, its query-escaped form, and its "+"-for-space form.
fn representations(value: &str) -> [String; 3] {
    [
        value.to_string(),
        query_escape(value),
        value.replace(' ', "+"),
    ]
}

/// Query-component escaping: unreserved characters kept, uppercase hex, space as "+".
fn query_escape(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::{html, typed, MockExecutor};

    #[test]
    fn test_query_escape() {
        assert_eq!(query_escape("a b"), "a+b");
        assert_eq!(query_escape("<x>&\"'"), "%3Cx%3E%26%22%27");
        assert_eq!(query_escape("safe-_.~"), "safe-_.~");
        assert_eq!(query_escape("é"), "%C3%A9");
    }

    #[tokio::test]
    async fn test_raw_reflection() {
        let exec = MockExecutor::new(|_| Some(html("<p>you searched hello</p>")));
        let found = detect_reflected(&exec, "http://x/a?q=hello").await;
        assert_eq!(found, vec!["q".to_string()]);
        assert_eq!(exec.calls(), 1);
    }

    #[tokio::test]
    async fn test_percent_encoded_reflection() {
        let exec = MockExecutor::new(|_| Some(html("<a href=\"/next?q=%3Cb%3E\">next</a>")));
        let found = detect_reflected(&exec, "http://x/a?q=%3Cb%3E").await;
        assert_eq!(found, vec!["q".to_string()]);
    }

    #[tokio::test]
    async fn test_plus_for_space_reflection() {
        let exec = MockExecutor::new(|_| Some(html("<input value=\"hello+world\">")));
        let found = detect_reflected(&exec, "http://x/a?q=hello%20world").await;
        assert_eq!(found, vec!["q".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_value_never_reflected() {
        let exec = MockExecutor::new(|_| Some(html("anything at all q= ")));
        let found = detect_reflected(&exec, "http://x/a?q=&r=").await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_non_html_skipped() {
        let exec = MockExecutor::new(|_| Some(typed("application/json", "{\"q\":\"hello\"}")));
        assert!(detect_reflected(&exec, "http://x/a?q=hello").await.is_empty());
    }

    #[tokio::test]
    async fn test_xhtml_counts_as_html() {
        let exec = MockExecutor::new(|_| Some(typed("application/xhtml+xml", "hello")));
        assert_eq!(detect_reflected(&exec, "http://x/a?q=hello").await, vec!["q"]);
    }

    #[tokio::test]
    async fn test_request_failure_is_silent() {
        let exec = MockExecutor::new(|_| None);
        assert!(detect_reflected(&exec, "http://x/a?q=hello").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_url_is_empty() {
        let exec = MockExecutor::new(|_| Some(html("hello")));
        assert!(detect_reflected(&exec, "::not a url?q=hello").await.is_empty());
    }

    #[tokio::test]
    async fn test_order_follows_query() {
        let exec = MockExecutor::new(|_| Some(html("zeta alpha mid")));
        let found = detect_reflected(&exec, "http://x/a?z=zeta&miss=nope&a=alpha&m=mid").await;
        assert_eq!(found, vec!["z", "a", "m"]);
    }
}
