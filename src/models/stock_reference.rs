use crate::constants::UNKNOWN_EXCHANGE;
use crate::types::{ExchangeName, FullSymbol, LogoUrl, TickerSymbol};
use serde::Serialize;

/// A single known ticker, as loaded from the reference file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReference {
    pub symbol: TickerSymbol,
    pub exchange: ExchangeName,
    pub full_symbol: FullSymbol,
    pub logo_url: Option<LogoUrl>,
}

impl StockReference {
    /// Parses an `EXCHANGE:SYMBOL` string (plus an optional logo URL) into a reference.
    ///
    /// Strings which do not split into exactly two parts on `:` are treated as a bare symbol on
    /// the `UNKNOWN` exchange. Returns `None` when no symbol remains after trimming.
    pub fn parse(full_symbol: &str, logo_url: Option<&str>) -> Option<Self> {
        let full_symbol = full_symbol.trim();

        let parts: Vec<&str> = full_symbol.split(':').collect();
        let (exchange, symbol) = if parts.len() == 2 {
            (parts[0].trim(), parts[1].trim())
        } else {
            (UNKNOWN_EXCHANGE, full_symbol)
        };

        if symbol.is_empty() {
            return None;
        }

        let logo_url = logo_url
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(|url| url.to_string());

        Some(StockReference {
            symbol: symbol.to_uppercase(),
            exchange: exchange.to_string(),
            full_symbol: full_symbol.to_string(),
            logo_url,
        })
    }
}
