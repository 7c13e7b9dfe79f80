use crate::pipeline::{AnalysisConfig, GraphSource};
use crate::types::NodeIndex;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Rank, scan and trace money transfers in a transaction ledger
#[derive(Parser, Debug)]
#[command(name = "fraud-ledger")]
#[command(about = "Rank, scan and trace money transfers in a transaction ledger", long_about = None)]
pub struct CliArgs {
    /// Ledger CSV file
    #[arg(value_name = "LEDGER", help = "Path to the ledger CSV file")]
    pub input_file: PathBuf,

    /// Number of highest-value transactions to report
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = AnalysisConfig::DEFAULT_TOP_N,
        help = "Number of highest-value transactions to report (0 falls back to the default)"
    )]
    pub top: usize,

    /// Literal pattern to search for in --text
    #[arg(long = "pattern", value_name = "PATTERN", requires = "text")]
    pub pattern: Option<String>,

    /// Symbolic transaction text scanned for --pattern
    #[arg(long = "text", value_name = "TEXT", requires = "pattern")]
    pub text: Option<String>,

    /// Edge-list CSV (`from,to,weight`) for the shortest-path pass
    #[arg(long = "graph", value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Source node index in the edge list
    #[arg(
        long = "source",
        value_name = "INDEX",
        default_value_t = 0,
        requires = "graph"
    )]
    pub source: NodeIndex,

    /// Run shortest paths over the ledger's own accounts, starting here
    #[arg(
        long = "source-account",
        value_name = "ACCOUNT",
        conflicts_with = "graph"
    )]
    pub source_account: Option<String>,

    /// Write the full ranked ledger to this CSV file
    #[arg(long = "ranked-out", value_name = "FILE")]
    pub ranked_output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new(&self.input_file).with_top_n(self.top);

        if let (Some(text), Some(pattern)) = (&self.text, &self.pattern) {
            config = config.with_pattern(text, pattern);
        }

        let graph = match (&self.graph, &self.source_account) {
            (Some(path), _) => GraphSource::EdgeFile {
                path: path.clone(),
                source: self.source,
            },
            (None, Some(account)) => GraphSource::Ledger {
                source_account: account.clone(),
            },
            (None, None) => GraphSource::Skip,
        };
        config = config.with_graph(graph);

        if let Some(path) = &self.ranked_output {
            config = config.with_ranked_output(path);
        }
        config
    }

    /// Log level selected by the `-v` count
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
