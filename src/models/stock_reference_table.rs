use crate::models::{LoadDiagnostics, StockReference};
use crate::types::TickerSymbol;
use crate::Error;
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Known tickers keyed by their uppercase symbol.
///
/// The reference file is a two-column CSV (`EXCHANGE:SYMBOL,logoUrl`) with a header line.
/// Later rows for the same symbol overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct StockReferenceTable {
    references: HashMap<TickerSymbol, StockReference>,
}

impl StockReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from already-parsed references. Last entry wins on duplicate symbols.
    pub fn from_references<I>(references: I) -> Self
    where
        I: IntoIterator<Item = StockReference>,
    {
        let mut table = Self::new();
        for reference in references {
            table.insert(reference);
        }
        table
    }

    /// Inserts a reference, returning the one it replaced, if any.
    pub fn insert(&mut self, reference: StockReference) -> Option<StockReference> {
        self.references.insert(reference.symbol.clone(), reference)
    }

    /// Parses reference rows from a CSV string.
    pub fn from_csv_str(csv: &str) -> (Self, LoadDiagnostics) {
        Self::from_reader(csv.as_bytes())
    }

    /// Parses reference rows from any reader.
    ///
    /// Malformed rows are skipped and counted. If the reader itself fails, the table comes back
    /// empty and the diagnostics report the source as unreadable.
    pub fn from_reader<R: Read>(reader: R) -> (Self, LoadDiagnostics) {
        match Self::try_from_reader(reader) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!("Could not read stock reference data: {}", err);
                (Self::new(), LoadDiagnostics::unreadable(err.to_string()))
            }
        }
    }

    /// Like [`StockReferenceTable::from_reader`], but surfaces read failures as an error.
    pub fn try_from_reader<R: Read>(reader: R) -> Result<(Self, LoadDiagnostics), Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true) // First line is a header
            .flexible(true) // Logo column is optional
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        let mut rows_loaded = 0;
        let mut rows_skipped = 0;
        let mut rows_overwritten = 0;

        for (row_index, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    debug!("Skipping unparsable reference row {}: {}", row_index + 1, err);
                    rows_skipped += 1;
                    continue;
                }
            };

            // Whitespace-only lines
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let full_symbol = record.get(0).unwrap_or_default();

            // Split on the first comma only; anything after it belongs to the logo URL
            let logo_url = if record.len() > 1 {
                Some(record.iter().skip(1).collect::<Vec<_>>().join(","))
            } else {
                None
            };

            match StockReference::parse(full_symbol, logo_url.as_deref()) {
                Some(reference) => {
                    if table.insert(reference).is_some() {
                        rows_overwritten += 1;
                    }
                    rows_loaded += 1;
                }
                None => {
                    debug!(
                        "Skipping reference row {} with no symbol: {:?}",
                        row_index + 1,
                        record
                    );
                    rows_skipped += 1;
                }
            }
        }

        Ok((
            table,
            LoadDiagnostics::loaded(rows_loaded, rows_skipped, rows_overwritten),
        ))
    }

    /// Loads the reference file, transparently decompressing it when the path ends in `.gz`.
    ///
    /// Fails if the file cannot be opened or read.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<(Self, LoadDiagnostics), Error> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let is_gzip = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        if is_gzip {
            Self::try_from_reader(GzDecoder::new(file))
        } else {
            Self::try_from_reader(file)
        }
    }

    /// Loads the reference file without ever failing.
    ///
    /// A missing or unreadable file yields an empty table and a warning; detection keeps working
    /// from the company aliases and popular symbols alone.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> (Self, LoadDiagnostics) {
        let path = path.as_ref();

        match Self::try_load_from_path(path) {
            Ok((table, diagnostics)) => {
                info!(
                    "Loaded {} stock references from {:?} ({} rows skipped, {} overwritten)",
                    table.len(),
                    path,
                    diagnostics.rows_skipped,
                    diagnostics.rows_overwritten
                );
                (table, diagnostics)
            }
            Err(Error::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Stock reference file {:?} not found; continuing with an empty table",
                    path
                );
                (Self::new(), LoadDiagnostics::missing(path.to_path_buf()))
            }
            Err(err) => {
                warn!(
                    "Could not read stock reference file {:?}: {}; continuing with an empty table",
                    path, err
                );
                (Self::new(), LoadDiagnostics::unreadable(err.to_string()))
            }
        }
    }

    /// Case-insensitive lookup by symbol.
    pub fn lookup(&self, symbol: &str) -> Option<&StockReference> {
        self.references.get(&symbol.trim().to_uppercase())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockReference> {
        self.references.values()
    }

    /// All references listed on the given exchange (case-insensitive), sorted by symbol.
    pub fn symbols_on_exchange(&self, exchange: &str) -> Vec<&StockReference> {
        let mut references: Vec<&StockReference> = self
            .references
            .values()
            .filter(|reference| reference.exchange.eq_ignore_ascii_case(exchange.trim()))
            .collect();

        references.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNKNOWN_EXCHANGE;
    use crate::models::ReferenceSourceStatus;

    const SAMPLE_CSV: &str = "symbol,logo\n\
        NASDAQ:AAPL,https://logo.example/aapl.svg\n\
        \n\
        NYSE:JPM,\n\
        TSLA\n\
        NASDAQ:,https://logo.example/empty.svg\n\
        SET:PTT,https://logo.example/ptt.svg?size=64,dark\n";

    #[test]
    fn test_from_csv_str_parses_rows() {
        let (table, diagnostics) = StockReferenceTable::from_csv_str(SAMPLE_CSV);

        assert_eq!(table.len(), 4);
        assert_eq!(diagnostics.source, ReferenceSourceStatus::Loaded);
        assert_eq!(diagnostics.rows_loaded, 4);
        assert_eq!(diagnostics.rows_skipped, 1);

        let apple = table.lookup("AAPL").unwrap();
        assert_eq!(apple.exchange, "NASDAQ");
        assert_eq!(apple.full_symbol, "NASDAQ:AAPL");

        let jpm = table.lookup("JPM").unwrap();
        assert_eq!(jpm.logo_url, None);

        let tesla = table.lookup("TSLA").unwrap();
        assert_eq!(tesla.exchange, UNKNOWN_EXCHANGE);
    }

    #[test]
    fn test_logo_url_keeps_text_after_first_comma() {
        let (table, _) = StockReferenceTable::from_csv_str(SAMPLE_CSV);

        assert_eq!(
            table.lookup("PTT").unwrap().logo_url.as_deref(),
            Some("https://logo.example/ptt.svg?size=64,dark")
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let (table, _) = StockReferenceTable::from_csv_str(SAMPLE_CSV);

        assert!(table.lookup("aapl").is_some());
        assert!(table.contains(" Jpm "));
        assert!(!table.contains("MSFT"));
    }

    #[test]
    fn test_duplicate_symbols_last_wins() {
        let csv = "symbol,logo\nNYSE:ABC,first\nNASDAQ:ABC,second\n";
        let (table, diagnostics) = StockReferenceTable::from_csv_str(csv);

        assert_eq!(table.len(), 1);
        assert_eq!(diagnostics.rows_overwritten, 1);

        let reference = table.lookup("ABC").unwrap();
        assert_eq!(reference.exchange, "NASDAQ");
        assert_eq!(reference.logo_url.as_deref(), Some("second"));
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let (table, diagnostics) = StockReferenceTable::from_csv_str("symbol,logo\n");

        assert!(table.is_empty());
        assert!(!diagnostics.is_degraded());
    }

    #[test]
    fn test_symbols_on_exchange() {
        let (table, _) = StockReferenceTable::from_csv_str(SAMPLE_CSV);

        let symbols: Vec<&str> = table
            .symbols_on_exchange("nasdaq")
            .iter()
            .map(|reference| reference.symbol.as_str())
            .collect();

        assert_eq!(symbols, vec!["AAPL"]);
    }

    #[test]
    fn test_missing_file_degrades_to_empty_table() {
        let (table, diagnostics) =
            StockReferenceTable::load_from_path("does/not/exist/stock_symbols.csv");

        assert!(table.is_empty());
        assert!(diagnostics.is_degraded());
        assert!(matches!(
            diagnostics.source,
            ReferenceSourceStatus::Missing { .. }
        ));
    }

    #[test]
    fn test_try_load_missing_file_is_error() {
        let result = StockReferenceTable::try_load_from_path("does/not/exist/stock_symbols.csv");
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
