//! Undo the shell/tool escaping that URL lists from recon tooling often carry

/// Escape sequences and their literal form, in match priority order.
const ESCAPES: [(&str, &str); 5] = [
    (r"\\?", "?"),
    (r"\?", "?"),
    (r"\=", "="),
    (r"\&", "&"),
    (r"\/", "/"),
];

/// Resolve escaped query punctuation (`\?`, `\=`, `\&`, `\/`) to its literal form.
///
/// Passes repeat until nothing changes so that nested escapes collapse fully
/// and the result is a fixed point. Every effective pass shortens the string.
pub fn normalize(raw: &str) -> String {
    let mut current = replace_once(raw);
    loop {
        let next = replace_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn replace_once(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'outer: while !rest.is_empty() {
        if rest.starts_with('\\') {
            for (escaped, literal) in ESCAPES {
                if let Some(tail) = rest.strip_prefix(escaped) {
                    out.push_str(literal);
                    rest = tail;
                    continue 'outer;
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_unchanged() {
        let url = "https://example.com/search?q=a%20b&x=1";
        assert_eq!(normalize(url), url);
    }

    #[test]
    fn test_single_escapes() {
        assert_eq!(
            normalize(r"http://x/a\?q\=1\&r\=2"),
            "http://x/a?q=1&r=2"
        );
    }

    #[test]
    fn test_json_style_slashes() {
        assert_eq!(
            normalize(r"http:\/\/x\/a\?q\=1\&r\=2"),
            "http://x/a?q=1&r=2"
        );
    }

    #[test]
    fn test_double_escaped_question_mark() {
        assert_eq!(normalize(r"http://x/a\\?q=1"), "http://x/a?q=1");
    }

    #[test]
    fn test_lone_backslash_kept() {
        assert_eq!(normalize(r"http://x/a\b?q=\"), r"http://x/a\b?q=\");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            r"http://x/a\?q\=1",
            r"\\=",
            r"\\\?",
            r"\\\\?&\&",
            r"http:\\/\\/x",
            "plain",
            "ünïcödé\\?",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }
}
