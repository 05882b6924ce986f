use std::path::PathBuf;

/// Outcome of opening the reference source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSourceStatus {
    Loaded,
    Missing { path: PathBuf },
    Unreadable { reason: String },
}

/// Describes how a reference table load went. Loading never fails outright; instead, problems
/// are recorded here so callers can log or assert on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostics {
    pub source: ReferenceSourceStatus,
    /// Data rows accepted into the table, including rows that overwrote an earlier symbol.
    pub rows_loaded: usize,
    /// Data rows which were dropped because they did not yield a symbol.
    pub rows_skipped: usize,
    /// Accepted rows whose symbol replaced an earlier row (last row wins).
    pub rows_overwritten: usize,
}

impl LoadDiagnostics {
    pub fn loaded(rows_loaded: usize, rows_skipped: usize, rows_overwritten: usize) -> Self {
        LoadDiagnostics {
            source: ReferenceSourceStatus::Loaded,
            rows_loaded,
            rows_skipped,
            rows_overwritten,
        }
    }

    pub fn missing(path: PathBuf) -> Self {
        LoadDiagnostics {
            source: ReferenceSourceStatus::Missing { path },
            rows_loaded: 0,
            rows_skipped: 0,
            rows_overwritten: 0,
        }
    }

    pub fn unreadable(reason: String) -> Self {
        LoadDiagnostics {
            source: ReferenceSourceStatus::Unreadable { reason },
            rows_loaded: 0,
            rows_skipped: 0,
            rows_overwritten: 0,
        }
    }

    /// True when the source could not be read, meaning the table came up empty and detection is
    /// running on the alias map and popular symbols alone.
    pub fn is_degraded(&self) -> bool {
        self.source != ReferenceSourceStatus::Loaded
    }
}
