use std::path::PathBuf;
use std::sync::LazyLock;

/// Joins path segments relative to the crate under test.
macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Fixture locations
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_SYMBOLS_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_symbols.csv"));

pub static TEST_SYMBOLS_GZIP_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_symbols.csv.gz"));
