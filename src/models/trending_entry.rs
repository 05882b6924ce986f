use crate::types::{TickerSymbol, TickerSymbolFrequency};
use serde::Serialize;

/// One row of the trending ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingEntry {
    pub symbol: TickerSymbol,
    /// Number of articles in the batch which mention `symbol`.
    pub count: TickerSymbolFrequency,
    pub name: String,
}
