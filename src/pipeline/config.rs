//! Run configuration
//!
//! Every input and output of a run is an explicit value here; nothing in the
//! library embeds a path.

use crate::types::{AnalysisError, NodeIndex};
use std::path::PathBuf;

/// Literal pattern to look for in a symbolic text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternScan {
    pub text: String,
    pub pattern: String,
}

/// Where the shortest-path pass gets its graph from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GraphSource {
    /// Edge-list CSV with numeric node indices
    EdgeFile { path: PathBuf, source: NodeIndex },

    /// Account graph built from the loaded ledger
    Ledger { source_account: String },

    /// Do not run the shortest-path pass
    #[default]
    Skip,
}

/// Configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Ledger CSV to load
    pub ledger_path: PathBuf,

    /// Number of highest-value transactions to report
    pub top_n: usize,

    /// Optional pattern scan
    pub pattern: Option<PatternScan>,

    /// Graph for the shortest-path pass
    pub graph: GraphSource,

    /// Where to write the full ranked ledger as CSV
    pub ranked_output: Option<PathBuf>,
}

impl AnalysisConfig {
    pub const DEFAULT_TOP_N: usize = 5;

    /// Configuration that only loads and ranks `ledger_path`
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        AnalysisConfig {
            ledger_path: ledger_path.into(),
            top_n: Self::DEFAULT_TOP_N,
            pattern: None,
            graph: GraphSource::Skip,
            ranked_output: None,
        }
    }

    /// Set the size of the top-N report; 0 falls back to the default
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = if top_n == 0 {
            log::warn!(
                "Invalid top_n ({}), using default ({})",
                top_n,
                Self::DEFAULT_TOP_N
            );
            Self::DEFAULT_TOP_N
        } else {
            top_n
        };
        self
    }

    pub fn with_pattern(mut self, text: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.pattern = Some(PatternScan {
            text: text.into(),
            pattern: pattern.into(),
        });
        self
    }

    pub fn with_graph(mut self, graph: GraphSource) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_ranked_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranked_output = Some(path.into());
        self
    }

    /// Check the configuration before any file is touched
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if the ranked output would
    /// overwrite the ledger being read.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.ranked_output.as_ref() == Some(&self.ledger_path) {
            return Err(AnalysisError::invalid_config(
                "ranked output path must differ from the ledger path",
            ));
        }
        Ok(())
    }
}
