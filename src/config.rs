use crate::models::SymbolDetectorConfig;

pub const DEFAULT_SYMBOL_DETECTOR_CONFIG: SymbolDetectorConfig = SymbolDetectorConfig {
    min_symbol_length: 1,
    max_symbol_length: 5,
    min_bare_word_length: 2,
    max_bare_word_length: 5,
    default_trending_limit: 10,
};
