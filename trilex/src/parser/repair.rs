//! Repair pass applied to an isolated span before the final parse attempt.
//!
//! Models emit almost-valid JSON often enough that giving up on the first
//! parse error would waste most structured responses: doubled escape
//! sequences, literal tabs and carriage returns inside strings, and trailing
//! commas are all common. Each fix here is cheap and order-dependent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static TRAILING_COMMA_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\}").unwrap());
static TRAILING_COMMA_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\]").unwrap());

/// Parses the span, repairing it when the direct attempt fails.
///
/// Attempt order: direct parse, repaired parse, repaired parse with all C0
/// control characters stripped. `None` means the span is not recoverable
/// JSON and the cascade should move on.
pub fn parse_with_repair(span: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(span) {
        return Some(value);
    }

    let repaired = repair(span);
    if let Ok(value) = serde_json::from_str(&repaired) {
        debug!("span parsed after repair");
        return Some(value);
    }

    let stripped: String = repaired.chars().filter(|c| !is_c0_control(*c)).collect();
    match serde_json::from_str(&stripped) {
        Ok(value) => {
            debug!("span parsed after stripping control characters");
            Some(value)
        }
        Err(err) => {
            debug!(error = %err, "span is not recoverable JSON");
            None
        }
    }
}

/// Applies the standard fix sequence without parsing.
fn repair(span: &str) -> String {
    let fixed = span
        .replace("\\n", "\n")
        .replace("\\\\", "/")
        .replace('\r', "")
        .replace('\t', " ");
    let fixed = TRAILING_COMMA_OBJECT.replace_all(&fixed, "}");
    TRAILING_COMMA_ARRAY.replace_all(&fixed, "]").into_owned()
}

#[inline]
fn is_c0_control(c: char) -> bool {
    ('\u{0000}'..='\u{001F}').contains(&c)
}
