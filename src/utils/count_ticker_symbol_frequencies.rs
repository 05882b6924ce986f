use crate::types::{TickerSymbol, TickerSymbolFrequency};
use std::collections::HashMap;

/// Counts the frequency of ticker symbols in the given sequence.
///
/// # Arguments
/// * `ticker_symbols` - The symbols to count, in discovery order.
///
/// # Returns
/// * A vector of `(symbol, frequency)` pairs ordered by each symbol's first appearance, so that
///   callers sorting by frequency with a stable sort get discovery order among ties.
pub fn count_ticker_symbol_frequencies<'a, I>(
    ticker_symbols: I,
) -> Vec<(TickerSymbol, TickerSymbolFrequency)>
where
    I: IntoIterator<Item = &'a TickerSymbol>,
{
    let mut frequencies: Vec<(TickerSymbol, TickerSymbolFrequency)> = Vec::new();
    let mut positions: HashMap<&'a TickerSymbol, usize> = HashMap::new();

    for ticker_symbol in ticker_symbols {
        match positions.get(ticker_symbol) {
            Some(&position) => frequencies[position].1 += 1,
            None => {
                positions.insert(ticker_symbol, frequencies.len());
                frequencies.push((ticker_symbol.clone(), 1));
            }
        }
    }

    frequencies
}
