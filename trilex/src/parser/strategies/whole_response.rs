//! Whole-response strategy: the entire response is the JSON object.

use super::RecoveryStrategy;

/// Strategy that treats the trimmed input as the candidate span when it is
/// brace-delimited end to end.
///
/// This is the fastest strategy and is always tried first; it matches models
/// that follow the "return only the JSON object" instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeResponse;

impl RecoveryStrategy for WholeResponse {
    #[inline]
    fn name(&self) -> &'static str {
        "whole_response"
    }

    fn isolate<'a>(&self, input: &'a str) -> Option<&'a str> {
        let trimmed = input.trim();
        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            Some(trimmed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolates_trimmed_object() {
        let span = WholeResponse.isolate("  {\"modes\": {}}  \n").unwrap();
        assert_eq!(span, "{\"modes\": {}}");
    }

    #[test]
    fn test_rejects_wrapped_object() {
        assert!(WholeResponse.isolate("Here you go: {\"a\": 1}").is_none());
        assert!(WholeResponse.isolate("{\"a\": 1} trailing prose").is_none());
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(WholeResponse.isolate("no braces here").is_none());
        assert!(WholeResponse.isolate("").is_none());
    }
}
