//! Analysis pipeline
//!
//! Threads the three independent passes together for one run:
//!
//! ```text
//! ledger.csv ─→ load_ledger ─→ rank ─→ top N report (+ ranked CSV)
//! text, pattern ─────────────→ find_pattern_offsets ─→ pattern report
//! edges.csv | ledger ─→ graph ─→ shortest_paths ─→ distance report
//! ```
//!
//! The passes share no state. The pipeline owns sequencing, file access and
//! report output; the passes themselves stay pure.

pub mod account_graph;
pub mod config;

pub use account_graph::AccountGraph;
pub use config::{AnalysisConfig, GraphSource, PatternScan};

use crate::core::pattern_matcher::find_pattern_offsets;
use crate::core::ranker::{rank, top_of};
use crate::core::shortest_path::shortest_paths;
use crate::io::csv_format::write_ranked_csv;
use crate::io::graph_reader::load_graph;
use crate::io::ledger_reader::load_ledger;
use crate::io::report;
use crate::types::{AnalysisError, DistanceTable, TransactionRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Results of one run, as written to the report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOutcome {
    /// Number of records loaded from the ledger
    pub records_loaded: usize,

    /// Highest-value records, largest first
    pub top_transactions: Vec<TransactionRecord>,

    /// Match offsets, if a pattern scan was configured
    pub pattern_offsets: Option<Vec<usize>>,

    /// Distances, if the shortest-path pass ran
    pub distances: Option<DistanceTable>,
}

/// One configured analysis run
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        AnalysisPipeline { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every configured pass and write the report to `output`
    ///
    /// An empty ledger is not an error: the report says `No data loaded.` and
    /// no pass runs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The ledger or edge file cannot be opened
    /// - The edge file is malformed
    /// - The source account does not exist in the ledger
    /// - The report or ranked output cannot be written
    pub fn run(&self, output: &mut dyn Write) -> Result<AnalysisOutcome, AnalysisError> {
        self.config.validate()?;

        let records = load_ledger(&self.config.ledger_path)?;
        let mut outcome = AnalysisOutcome {
            records_loaded: records.len(),
            ..AnalysisOutcome::default()
        };

        if records.is_empty() {
            log::warn!("No records in {}", self.config.ledger_path.display());
            report::write_footer(false, output)?;
            return Ok(outcome);
        }

        report::write_load_summary(records.len(), output)?;

        outcome.top_transactions = self.rank_pass(&records, output)?;
        outcome.pattern_offsets = self.pattern_pass(output)?;
        outcome.distances = self.path_pass(&records, output)?;

        report::write_footer(true, output)?;
        Ok(outcome)
    }

    fn rank_pass(
        &self,
        records: &[TransactionRecord],
        output: &mut dyn Write,
    ) -> Result<Vec<TransactionRecord>, AnalysisError> {
        let ranked = rank(records);
        log::info!("Ranked {} records by amount", ranked.len());

        if let Some(path) = &self.config.ranked_output {
            write_ranked_file(&ranked, path)?;
        }

        let top = top_of(&ranked, self.config.top_n);
        report::write_top_transactions(&top, output)?;
        Ok(top)
    }

    fn pattern_pass(&self, output: &mut dyn Write) -> Result<Option<Vec<usize>>, AnalysisError> {
        let Some(scan) = &self.config.pattern else {
            log::debug!("No pattern configured, skipping pattern scan");
            return Ok(None);
        };

        let offsets = find_pattern_offsets(&scan.text, &scan.pattern);
        log::info!(
            "Pattern scan found {} occurrence(s) of {:?}",
            offsets.len(),
            scan.pattern
        );

        report::write_pattern_result(&scan.pattern, &offsets, output)?;
        Ok(Some(offsets))
    }

    fn path_pass(
        &self,
        records: &[TransactionRecord],
        output: &mut dyn Write,
    ) -> Result<Option<DistanceTable>, AnalysisError> {
        match &self.config.graph {
            GraphSource::Skip => {
                log::debug!("No graph configured, skipping shortest paths");
                Ok(None)
            }
            GraphSource::EdgeFile { path, source } => {
                let graph = load_graph(path)?;
                let table = shortest_paths(&graph, *source)?;
                report::write_distance_table(&table, |node| node.to_string(), output)?;
                Ok(Some(table))
            }
            GraphSource::Ledger { source_account } => {
                let accounts = AccountGraph::from_records(records)?;
                let source = accounts
                    .index_of(source_account)
                    .ok_or_else(|| AnalysisError::unknown_account(source_account))?;
                let table = shortest_paths(accounts.graph(), source)?;
                report::write_distance_table(
                    &table,
                    |node| accounts.name_of(node).unwrap_or_default().to_string(),
                    output,
                )?;
                Ok(Some(table))
            }
        }
    }
}

fn write_ranked_file(ranked: &[TransactionRecord], path: &Path) -> Result<(), AnalysisError> {
    let file = File::create(path).map_err(|e| AnalysisError::IoError {
        message: format!("Failed to create file '{}': {}", path.display(), e),
    })?;
    let mut writer = BufWriter::new(file);
    write_ranked_csv(ranked, &mut writer)?;
    writer.flush()?;

    log::info!("Wrote ranked ledger to {}", path.display());
    Ok(())
}
