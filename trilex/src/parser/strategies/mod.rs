//! Recovery strategies that isolate a JSON-like span from a raw response.

mod bracket_scan;
mod fenced_block;
mod whole_response;

pub use bracket_scan::BracketScan;
pub use fenced_block::FencedBlock;
pub use whole_response::WholeResponse;

/// A strategy that locates a candidate JSON span within a raw response.
///
/// Strategies only isolate text; parsing, repair, and validation happen in
/// the cascade. Returning `None` means the strategy does not apply to this
/// input, and the cascade moves on to the next one.
pub trait RecoveryStrategy: Send + Sync + std::fmt::Debug {
    /// Returns the name of this strategy for tracing.
    fn name(&self) -> &'static str;

    /// Attempts to isolate a JSON-like span from the input.
    fn isolate<'a>(&self, input: &'a str) -> Option<&'a str>;
}
