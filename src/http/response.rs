use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lowercase, as reqwest yields them.
    pub headers: HashMap<String, String>,
    pub body: String,
    pub elapsed_ms: u128,
}

impl HttpResponse {
    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Loose HTML check: any content type mentioning "html" (including xhtml) qualifies.
    pub fn is_html(&self) -> bool {
        self.content_type().to_ascii_lowercase().contains("html")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}
