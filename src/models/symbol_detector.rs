use crate::constants::{COMMON_WORD_BLOCK_LIST, COMPANY_ALIASES, POPULAR_SYMBOLS, UNKNOWN_EXCHANGE};
use crate::models::{
    Article, ArticleWithSymbols, LoadDiagnostics, StockReference, StockReferenceTable,
    SummaryArticle, SymbolDetectorConfig, SymbolSummary, TrendingEntry,
};
use crate::types::{CompanyAliasList, TickerSymbol, TickerSymbolFrequencyMap};
use crate::utils::{
    count_ticker_symbol_frequencies, dedup_vector, is_word_char, sort_results,
    tokenize_uppercase_words,
};
use crate::{Error, DEFAULT_SYMBOL_DETECTOR_CONFIG};
use log::{debug, info, warn};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Detects ticker symbols in news text and aggregates them across batches of articles.
///
/// A detector owns its reference table, company aliases, popular symbols and block list, all of
/// which are fixed once it is built. Every operation is a pure function of its input and those
/// tables, so a single detector can be shared freely (it is `Send + Sync`).
///
/// Detection unions five heuristics:
/// 1. Cashtags (`$AAPL`), case-insensitive, subject to the validity check.
/// 2. Bracketed tickers (`(AAPL)`), case-insensitive, subject to the validity check.
/// 3. Company aliases (`Apple Inc.`), whole-word and case-insensitive.
/// 4. Popular symbols (`tsla`), whole-word and case-insensitive, trusted as-is.
/// 5. Bare ALL-CAPS words (`AAPL`), matched on the original case, which must be in the reference
///    table, must not be on the block list, and must pass the validity check.
///
/// Heuristics 1-4 case-fold while 5 does not; detection recall depends on that difference.
#[derive(Debug, Clone)]
pub struct SymbolDetector {
    config: SymbolDetectorConfig,
    reference_table: StockReferenceTable,
    company_aliases: CompanyAliasList,
    popular_symbols: HashSet<TickerSymbol>,
    block_list: HashSet<String>,
    dollar_prefix_pattern: Regex,
    bracket_pattern: Regex,
    company_alias_patterns: Vec<(Regex, TickerSymbol)>,
    popular_symbol_patterns: Vec<(Regex, TickerSymbol)>,
}

impl SymbolDetector {
    pub fn builder() -> SymbolDetectorBuilder {
        SymbolDetectorBuilder::default()
    }

    /// Builds a detector over the given reference table with the default static tables.
    pub fn new(reference_table: StockReferenceTable) -> Result<Self, Error> {
        Self::builder().reference_table(reference_table).build()
    }

    /// Loads the reference file and builds a detector over it with the default static tables.
    ///
    /// A missing or unreadable reference file is never an error; it is reported through the
    /// returned [`LoadDiagnostics`] and the detector runs on aliases and popular symbols alone.
    pub fn from_reference_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Self, LoadDiagnostics), Error> {
        let (reference_table, diagnostics) = StockReferenceTable::load_from_path(path);

        let detector = Self::new(reference_table)?;

        Ok((detector, diagnostics))
    }

    pub fn config(&self) -> &SymbolDetectorConfig {
        &self.config
    }

    pub fn reference_table(&self) -> &StockReferenceTable {
        &self.reference_table
    }

    pub fn company_aliases(&self) -> &CompanyAliasList {
        &self.company_aliases
    }

    pub fn is_popular_symbol(&self, symbol: &str) -> bool {
        self.popular_symbols.contains(symbol)
    }

    pub fn is_blocked_word(&self, word: &str) -> bool {
        self.block_list.contains(&word.to_uppercase())
    }

    /// Case-insensitive reference table lookup.
    pub fn lookup(&self, symbol: &str) -> Option<&StockReference> {
        self.reference_table.lookup(symbol)
    }

    /// A symbol is valid when it is made of ASCII capitals only, its length is within the
    /// configured bounds, and it is either a popular symbol or present in the reference table.
    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        let length = symbol.len();

        length >= self.config.min_symbol_length
            && length <= self.config.max_symbol_length
            && symbol.chars().all(|c| c.is_ascii_uppercase())
            && (self.popular_symbols.contains(symbol) || self.reference_table.contains(symbol))
    }

    /// Resolves a display name for a symbol.
    ///
    /// Precedence: the exchange-qualified `fullSymbol` from the reference table, then the first
    /// company alias mapping to the symbol, then the symbol itself, unchanged.
    pub fn resolve_name(&self, symbol: &str) -> String {
        if let Some(reference) = self.reference_table.lookup(symbol) {
            return reference.full_symbol.clone();
        }

        let normalized_symbol = symbol.trim().to_uppercase();

        self.company_aliases
            .iter()
            .find(|(_, alias_symbol)| *alias_symbol == normalized_symbol)
            .map(|(alias, _)| alias.clone())
            .unwrap_or_else(|| symbol.to_string())
    }

    /// Detects the symbols mentioned in an article's headline, title and summary.
    ///
    /// The result holds no duplicates and is in discovery order: heuristic order first, then
    /// position within the text.
    pub fn detect_symbols(&self, article: &Article) -> Vec<TickerSymbol> {
        self.detect_symbols_in_text(&article.detection_text())
    }

    /// Detects the symbols mentioned in free text.
    pub fn detect_symbols_in_text(&self, text: &str) -> Vec<TickerSymbol> {
        let mut symbols: Vec<TickerSymbol> = Vec::new();

        // Cashtags and bracketed tickers
        for pattern in [&self.dollar_prefix_pattern, &self.bracket_pattern] {
            for captures in pattern.captures_iter(text) {
                let candidate = captures[1].to_uppercase();
                if self.is_valid_symbol(&candidate) {
                    symbols.push(candidate);
                }
            }
        }

        // Company names
        for (pattern, symbol) in &self.company_alias_patterns {
            if pattern.is_match(text) {
                symbols.push(symbol.clone());
            }
        }

        // Popular symbols as plain words
        for (pattern, symbol) in &self.popular_symbol_patterns {
            if pattern.is_match(text) {
                symbols.push(symbol.clone());
            }
        }

        // Bare capitalised words backed by the reference table
        for word in tokenize_uppercase_words(
            text,
            self.config.min_bare_word_length,
            self.config.max_bare_word_length,
        ) {
            if self.reference_table.contains(word)
                && !self.block_list.contains(word)
                && self.is_valid_symbol(word)
            {
                symbols.push(word.to_string());
            }
        }

        dedup_vector(&symbols)
    }

    /// Attaches the detected symbols to each article.
    pub fn detect_symbols_for_articles(&self, articles: &[Article]) -> Vec<ArticleWithSymbols> {
        articles
            .iter()
            .map(|article| ArticleWithSymbols::new(article.clone(), self.detect_symbols(article)))
            .collect()
    }

    /// Keeps the articles whose detected symbols include `symbol` (case-insensitive).
    pub fn filter_articles_by_symbol<'a>(
        &self,
        articles: &'a [Article],
        symbol: &str,
    ) -> Vec<&'a Article> {
        let target = symbol.trim().to_uppercase();

        if target.is_empty() {
            return vec![];
        }

        let filtered: Vec<&Article> = articles
            .iter()
            .filter(|article| self.detect_symbols(article).contains(&target))
            .collect();

        debug!(
            "{} of {} articles mention {}",
            filtered.len(),
            articles.len(),
            target
        );

        filtered
    }

    /// Counts, per symbol, the number of articles mentioning it.
    pub fn count_symbol_mentions(&self, articles: &[Article]) -> TickerSymbolFrequencyMap {
        self.count_in_discovery_order(articles).into_iter().collect()
    }

    /// Ranks symbols by the number of articles mentioning them and returns the top `limit`.
    ///
    /// Symbols with equal counts keep the order in which they were first detected across the
    /// batch.
    pub fn get_trending_symbols(&self, articles: &[Article], limit: usize) -> Vec<TrendingEntry> {
        let ranked = sort_results(self.count_in_discovery_order(articles));

        debug!(
            "Ranked {} symbols across {} articles",
            ranked.len(),
            articles.len()
        );

        ranked
            .into_iter()
            .take(limit)
            .map(|(symbol, count)| TrendingEntry {
                name: self.resolve_name(&symbol),
                symbol,
                count,
            })
            .collect()
    }

    /// Builds one summary per symbol detected in the batch, most mentioned first.
    ///
    /// Symbols with equal mention counts keep the order in which they were first detected.
    pub fn generate_symbol_summary(&self, articles: &[Article]) -> Vec<SymbolSummary> {
        let mut summaries: Vec<SymbolSummary> = Vec::new();
        let mut positions: HashMap<TickerSymbol, usize> = HashMap::new();

        for article in articles {
            for symbol in self.detect_symbols(article) {
                let position = match positions.get(&symbol) {
                    Some(&position) => position,
                    None => {
                        let reference = self.reference_table.lookup(&symbol);

                        summaries.push(SymbolSummary {
                            name: self.resolve_name(&symbol),
                            exchange: reference
                                .map(|reference| reference.exchange.clone())
                                .unwrap_or_else(|| UNKNOWN_EXCHANGE.to_string()),
                            logo_url: reference.and_then(|reference| reference.logo_url.clone()),
                            articles: vec![],
                            mention_count: 0,
                            symbol: symbol.clone(),
                        });
                        positions.insert(symbol, summaries.len() - 1);

                        summaries.len() - 1
                    }
                };

                let summary = &mut summaries[position];
                summary.articles.push(SummaryArticle {
                    id: article.id.clone(),
                    headline: article.display_headline().to_string(),
                    datetime: article.datetime,
                });
                summary.mention_count += 1;
            }
        }

        summaries.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));

        summaries
    }

    fn count_in_discovery_order(&self, articles: &[Article]) -> Vec<(TickerSymbol, usize)> {
        let detected: Vec<TickerSymbol> = articles
            .iter()
            .flat_map(|article| self.detect_symbols(article))
            .collect();

        count_ticker_symbol_frequencies(&detected)
    }
}

/// Assembles a [`SymbolDetector`]. Starts from the built-in alias map, popular symbols and
/// block list, and an empty reference table.
#[derive(Debug, Clone)]
pub struct SymbolDetectorBuilder {
    config: SymbolDetectorConfig,
    reference_table: StockReferenceTable,
    company_aliases: CompanyAliasList,
    popular_symbols: Vec<TickerSymbol>,
    block_list: Vec<String>,
}

impl Default for SymbolDetectorBuilder {
    fn default() -> Self {
        SymbolDetectorBuilder {
            config: DEFAULT_SYMBOL_DETECTOR_CONFIG,
            reference_table: StockReferenceTable::new(),
            company_aliases: COMPANY_ALIASES
                .iter()
                .map(|(alias, symbol)| (alias.to_string(), symbol.to_string()))
                .collect(),
            popular_symbols: POPULAR_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            block_list: COMMON_WORD_BLOCK_LIST.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl SymbolDetectorBuilder {
    pub fn config(mut self, config: SymbolDetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reference_table(mut self, reference_table: StockReferenceTable) -> Self {
        self.reference_table = reference_table;
        self
    }

    /// Replaces the company alias map. Order is kept; it decides which alias names a symbol.
    pub fn company_aliases<I, A, S>(mut self, company_aliases: I) -> Self
    where
        I: IntoIterator<Item = (A, S)>,
        A: Into<String>,
        S: Into<String>,
    {
        self.company_aliases = company_aliases
            .into_iter()
            .map(|(alias, symbol)| (alias.into(), symbol.into()))
            .collect();
        self
    }

    pub fn add_company_alias<A: Into<String>, S: Into<String>>(mut self, alias: A, symbol: S) -> Self {
        self.company_aliases.push((alias.into(), symbol.into()));
        self
    }

    /// Replaces the popular symbol set.
    pub fn popular_symbols<I, S>(mut self, popular_symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular_symbols = popular_symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the block list.
    pub fn block_list<I, S>(mut self, block_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_list = block_list.into_iter().map(Into::into).collect();
        self
    }

    /// Adds words to the block list, keeping the existing ones.
    pub fn extend_block_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_list.extend(words.into_iter().map(Into::into));
        self
    }

    /// Normalises the tables and compiles the detection patterns.
    ///
    /// Alias and popular entries whose symbol is not 1-5 ASCII letters (per the configured
    /// bounds) are dropped with a warning, so every detected symbol has a valid shape.
    pub fn build(self) -> Result<SymbolDetector, Error> {
        let config = self.config;

        if config.min_symbol_length == 0 || config.min_symbol_length > config.max_symbol_length {
            return Err(Error::InvalidArgument(format!(
                "symbol length bounds {}..={} are not a valid range",
                config.min_symbol_length, config.max_symbol_length
            )));
        }

        if config.min_bare_word_length == 0
            || config.min_bare_word_length > config.max_bare_word_length
        {
            return Err(Error::InvalidArgument(format!(
                "bare word length bounds {}..={} are not a valid range",
                config.min_bare_word_length, config.max_bare_word_length
            )));
        }

        let has_symbol_shape = |symbol: &str| {
            symbol.len() >= config.min_symbol_length
                && symbol.len() <= config.max_symbol_length
                && symbol.chars().all(|c| c.is_ascii_uppercase())
        };

        let mut company_aliases: CompanyAliasList = Vec::new();
        for (alias, symbol) in self.company_aliases {
            let alias = alias.trim().to_string();
            let symbol = symbol.trim().to_uppercase();

            if alias.is_empty() || !has_symbol_shape(&symbol) {
                warn!("Ignoring company alias {:?} -> {:?}", alias, symbol);
                continue;
            }

            company_aliases.push((alias, symbol));
        }

        let mut popular_symbols: Vec<TickerSymbol> = Vec::new();
        for symbol in self.popular_symbols {
            let symbol = symbol.trim().to_uppercase();

            if !has_symbol_shape(&symbol) {
                warn!("Ignoring popular symbol {:?}", symbol);
                continue;
            }

            popular_symbols.push(symbol);
        }
        let popular_symbols = dedup_vector(&popular_symbols);

        let block_list: HashSet<String> = self
            .block_list
            .iter()
            .map(|word| word.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        // The whole run of ASCII letters is captured; the validity check enforces the length
        let dollar_prefix_pattern =
            Regex::new(r"\$([A-Za-z]+)").map_err(|err| Error::ParserError(err.to_string()))?;

        let bracket_pattern =
            Regex::new(r"\(([A-Za-z]+)\)").map_err(|err| Error::ParserError(err.to_string()))?;

        let company_alias_patterns = company_aliases
            .iter()
            .map(|(alias, symbol)| {
                whole_word_pattern(alias).map(|pattern| (pattern, symbol.clone()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let popular_symbol_patterns = popular_symbols
            .iter()
            .map(|symbol| {
                whole_word_pattern(symbol).map(|pattern| (pattern, symbol.clone()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        info!(
            "Symbol detector ready: {} reference symbols, {} company aliases, {} popular symbols, {} blocked words",
            self.reference_table.len(),
            company_aliases.len(),
            popular_symbols.len(),
            block_list.len()
        );

        Ok(SymbolDetector {
            config,
            reference_table: self.reference_table,
            company_aliases,
            popular_symbols: popular_symbols.into_iter().collect(),
            block_list,
            dollar_prefix_pattern,
            bracket_pattern,
            company_alias_patterns,
            popular_symbol_patterns,
        })
    }
}

/// Matches any character that is not a word character, as defined by [`is_word_char`].
const NON_WORD_CHAR_CLASS: &str = r"[^0-9_\p{Uppercase}\p{Lowercase}]";

/// Case-insensitive pattern matching `phrase` as a whole word.
///
/// A boundary is only required next to word characters, so aliases ending in punctuation
/// (`Apple Inc.`) still match, and phrases in uncased scripts (`กสิกรไทย`) match inside
/// unspaced text. Uncased letters never count as word characters, which lets `IBM` match in
/// `หุ้นIBMปรับขึ้น`.
fn whole_word_pattern(phrase: &str) -> Result<Regex, Error> {
    let leading_boundary = if phrase.chars().next().map_or(false, is_word_char) {
        format!("(?:^|{})", NON_WORD_CHAR_CLASS)
    } else {
        String::new()
    };

    let trailing_boundary = if phrase.chars().last().map_or(false, is_word_char) {
        format!("(?:{}|$)", NON_WORD_CHAR_CLASS)
    } else {
        String::new()
    };

    Regex::new(&format!(
        "{}(?i:{}){}",
        leading_boundary,
        regex::escape(phrase),
        trailing_boundary
    ))
    .map_err(|err| Error::ParserError(err.to_string()))
}
