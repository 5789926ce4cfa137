//! Options controlling a normalization run.

/// Options for [`crate::normalize_table`].
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Spread per-row work over the rayon thread pool.
    pub parallel: bool,
    /// Label column to parse instead of the automatic `LIB_UCD`/`LIB_CIP` choice.
    pub label_column: Option<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            label_column: None,
        }
    }
}

impl NormalizeOptions {
    /// Options that run every stage on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    #[must_use]
    pub fn with_label_column(mut self, column: Option<String>) -> Self {
        self.label_column = column;
        self
    }
}
