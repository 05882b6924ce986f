use crate::types::{TickerSymbol, TickerSymbolFrequency};

/// Sorts `(symbol, frequency)` pairs by frequency, highest first.
///
/// ### Sorting Order:
/// - **Primary:** Frequency in descending order.
/// - **Ties:** The incoming order is kept (the sort is stable). When the input comes from
///   `count_ticker_symbol_frequencies`, that is the order in which symbols were first detected.
pub fn sort_results(
    mut results: Vec<(TickerSymbol, TickerSymbolFrequency)>,
) -> Vec<(TickerSymbol, TickerSymbolFrequency)> {
    results.sort_by(|a, b| b.1.cmp(&a.1));

    results
}
