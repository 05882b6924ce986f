use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned, uppercase `String`.
pub type TickerSymbol = String;

/// Represents an exchange prefix such as `NASDAQ` or `SET`.
pub type ExchangeName = String;

/// Represents an exchange-qualified symbol in the form `EXCHANGE:SYMBOL`, exactly as it
/// appeared in the reference file.
pub type FullSymbol = String;

/// Represents the URL of a company logo.
pub type LogoUrl = String;

/// Represents a free-text company name (e.g. "Apple Inc.") that maps to a ticker symbol.
pub type CompanyAlias = String;

/// An ordered list of company aliases, where each entry includes:
/// - `CompanyAlias`: The free-text company name.
/// - `TickerSymbol`: The canonical symbol the alias maps to.
///
/// Order is significant: name resolution returns the first alias found for a symbol.
pub type CompanyAliasList = Vec<(CompanyAlias, TickerSymbol)>;

/// Represents the total number of articles in a batch which mention a ticker symbol.
pub type TickerSymbolFrequency = usize;

/// Represents a map of ticker symbols to their frequency counts within a batch of articles.
/// The key is the `TickerSymbol`, and the value is the `TickerSymbolFrequency`.
pub type TickerSymbolFrequencyMap = HashMap<TickerSymbol, TickerSymbolFrequency>;

/// Seconds since the Unix epoch.
pub type UnixTimestamp = i64;
