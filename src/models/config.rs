/// Tunables for [`SymbolDetector`](crate::SymbolDetector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDetectorConfig {
    /// Shortest symbol accepted by the validity check.
    pub min_symbol_length: usize,
    /// Longest symbol accepted by the validity check.
    pub max_symbol_length: usize,
    /// Shortest ALL-CAPS word considered by the bare-word heuristic.
    pub min_bare_word_length: usize,
    /// Longest ALL-CAPS word considered by the bare-word heuristic.
    pub max_bare_word_length: usize,
    /// Number of trending entries returned when the caller does not specify a limit.
    pub default_trending_limit: usize,
}
