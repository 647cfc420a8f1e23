use crate::reporting::model::ScanReport;
use std::fmt::Write;

// ==============================
// ANSI COLORS
// ==============================

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const PINK: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

pub const NO_FINDINGS: &str = "[-] No reflected XSS parameters found";

struct Palette {
    green: &'static str,
    red: &'static str,
    pink: &'static str,
    reset: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self { green: GREEN, red: RED, pink: PINK, reset: RESET }
        } else {
            Self { green: "", red: "", pink: "", reset: "" }
        }
    }
}

/// `[" < >]`
fn char_list(chars: &[char]) -> String {
    let joined: Vec<String> = chars.iter().map(char::to_string).collect();
    format!("[{}]", joined.join(" "))
}

// ==============================
// MAIN REPORT RENDERER
// ==============================

pub fn render(report: &ScanReport, color: bool) -> String {
    let p = Palette::new(color);
    let mut out = String::new();

    // ------------------------------
    // NO FINDINGS CASE
    // ------------------------------
    if report.is_empty() {
        let _ = writeln!(out, "{}{}{}", p.red, NO_FINDINGS, p.reset);
        return out;
    }

    for (url, params) in report.urls() {
        let _ = writeln!(out, "{}[REFLECTED]{} {}", p.green, p.reset, url);
        for (param, chars) in params {
            let _ = writeln!(out, "    {}Param:{} {}", p.pink, p.reset, param);
            let _ = writeln!(out, "    Unfiltered: {}", char_list(chars));
            out.push('\n');
        }
    }

    out
}
