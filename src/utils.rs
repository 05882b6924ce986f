pub mod count_ticker_symbol_frequencies;
pub use count_ticker_symbol_frequencies::count_ticker_symbol_frequencies;

pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod sort_results;
pub use sort_results::sort_results;

pub mod tokenize_uppercase_words;
pub use tokenize_uppercase_words::{is_word_char, tokenize_uppercase_words};
