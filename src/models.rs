pub mod article;
pub use article::{Article, ArticleId, ArticleWithSymbols};

pub mod config;
pub use config::SymbolDetectorConfig;

pub mod error;
pub use error::Error;

pub mod load_diagnostics;
pub use load_diagnostics::{LoadDiagnostics, ReferenceSourceStatus};

pub mod stock_reference;
pub use stock_reference::StockReference;

pub mod stock_reference_table;
pub use stock_reference_table::StockReferenceTable;

pub mod symbol_detector;
pub use symbol_detector::{SymbolDetector, SymbolDetectorBuilder};

pub mod symbol_summary;
pub use symbol_summary::{SummaryArticle, SymbolSummary};

pub mod trending_entry;
pub use trending_entry::TrendingEntry;
