// crates/core/src/config.rs
//! Per-scan settings.

/// Settings for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Upper bound on reports kept in the result. Scanning always runs to
    /// the end of input regardless.
    pub max_diagnostics: Option<usize>,
}

impl ScanConfig {
    #[must_use]
    pub const fn with_max_diagnostics(limit: usize) -> Self {
        Self {
            max_diagnostics: Some(limit),
        }
    }
}
