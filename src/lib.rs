//! Detects stock ticker symbols mentioned in news articles and rolls them up into trending
//! rankings and per-symbol summaries.
//!
//! Build a [`SymbolDetector`] once (usually from the reference file) and share it; every
//! detection and aggregation call is a pure function over the articles passed in.

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_SYMBOL_DETECTOR_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    Article, ArticleId, ArticleWithSymbols, Error, LoadDiagnostics, ReferenceSourceStatus,
    StockReference, StockReferenceTable, SummaryArticle, SymbolDetector, SymbolDetectorBuilder,
    SymbolDetectorConfig, SymbolSummary, TrendingEntry,
};
pub mod types;
mod utils;
pub use types::{
    CompanyAlias, CompanyAliasList, ExchangeName, FullSymbol, LogoUrl, TickerSymbol,
    TickerSymbolFrequency, TickerSymbolFrequencyMap, UnixTimestamp,
};

use constants::DEFAULT_REFERENCE_FILE_PATH;

/// Builds a detector from the reference file at [`DEFAULT_REFERENCE_FILE_PATH`].
///
/// A missing reference file is reported through the returned [`LoadDiagnostics`], not as an
/// error.
pub fn load_default_detector() -> Result<(SymbolDetector, LoadDiagnostics), Error> {
    SymbolDetector::from_reference_file(DEFAULT_REFERENCE_FILE_PATH)
}
