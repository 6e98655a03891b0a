//! Bracket-scan strategy: the outermost brace span anywhere in the text.

use super::RecoveryStrategy;

/// Strategy that isolates the span from the first `{` to the last `}`.
///
/// This is the loosest isolation: the closing brace is the last one in the
/// whole input, so trailing commentary after the object is tolerated while
/// braces inside it are not split apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketScan;

impl RecoveryStrategy for BracketScan {
    #[inline]
    fn name(&self) -> &'static str {
        "bracket_scan"
    }

    fn isolate<'a>(&self, input: &'a str) -> Option<&'a str> {
        let start = input.find('{')?;
        let end = input.rfind('}')?;
        if start < end {
            Some(&input[start..=end])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolates_span_with_prose_around() {
        let input = "Sure! Here it is: {\"modes\": {\"a\": 1}} hope that helps";
        assert_eq!(
            BracketScan.isolate(input).unwrap(),
            "{\"modes\": {\"a\": 1}}"
        );
    }

    #[test]
    fn test_spans_first_open_to_last_close() {
        let input = "x {\"a\": 1} y {\"b\": 2} z";
        assert_eq!(BracketScan.isolate(input).unwrap(), "{\"a\": 1} y {\"b\": 2}");
    }

    #[test]
    fn test_no_braces_is_none() {
        assert!(BracketScan.isolate("plain text").is_none());
    }

    #[test]
    fn test_reversed_braces_is_none() {
        assert!(BracketScan.isolate("} before {").is_none());
    }
}
