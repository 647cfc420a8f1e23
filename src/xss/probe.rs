// Special-Character Probing
// Each candidate character is wrapped in unique markers and sent on its own,
// so per-character filtering stays attributable.

use crate::http::RequestExecutor;
use crate::payload::injector::append_query_param;
use url::Url;

pub const PREFIX: &str = "aprefix";
pub const SUFFIX: &str = "asuffix";

/// Characters probed, in probe and report order.
pub const PROBE_CHARS: [char; 13] = [
    '"', '\'', '<', '>', '$', '|', '(', ')', '`', ':', ';', '{', '}',
];

pub fn payload_for(c: char) -> String {
    format!("{}{}{}", PREFIX, c, SUFFIX)
}

/// Position of `c` in the probe set; unknown characters sort last.
pub fn probe_rank(c: char) -> usize {
    PROBE_CHARS
        .iter()
        .position(|&p| p == c)
        .unwrap_or(PROBE_CHARS.len())
}

/// Characters from the probe set that come back verbatim when appended to `param`.
///
/// A failed request counts as filtered; nothing is retried.
pub async fn probe_characters<E: RequestExecutor>(
    executor: &E,
    url: &str,
    param: &str,
) -> Vec<char> {
    let base = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return Vec::new(),
    };

    let mut unfiltered = Vec::new();

    for c in PROBE_CHARS {
        let payload = payload_for(c);
        let target = append_query_param(&base, param, &payload);

        match executor.get(target.as_str()).await {
            Ok(response) if response.contains(&payload) => {
                tracing::debug!("      {} passes through {} unfiltered", c, param);
                unfiltered.push(c);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("      Probe {:?} on {} failed: {}", c, param, e);
            }
        }
    }

    unfiltered
}
