//! Fenced-code-block strategy: JSON wrapped in markdown fences.

use once_cell::sync::Lazy;
use regex::Regex;

use super::RecoveryStrategy;

/// Matches the first triple-backtick block, optionally tagged `json`.
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(?:json)?(.*?)```").unwrap());

/// Strategy that isolates the interior of the first fenced code block.
///
/// Models frequently wrap the requested object in ```` ```json ```` fences
/// with prose on either side; the interior is the candidate span.
#[derive(Debug, Clone, Copy, Default)]
pub struct FencedBlock;

impl RecoveryStrategy for FencedBlock {
    #[inline]
    fn name(&self) -> &'static str {
        "fenced_block"
    }

    fn isolate<'a>(&self, input: &'a str) -> Option<&'a str> {
        let interior = FENCE.captures(input)?.get(1)?.as_str().trim();
        if interior.is_empty() {
            None
        } else {
            Some(interior)
        }
    }
}
