//! Fraud Ledger CLI
//!
//! Command-line interface for analysing a transaction ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ledger.csv
//! cargo run -- --top 10 --ranked-out ranked.csv ledger.csv
//! cargo run -- --pattern ABAB --text ABABCDABAB ledger.csv
//! cargo run -- --graph edges.csv --source 0 ledger.csv
//! cargo run -- --source-account C1231006815 -vv ledger.csv
//! ```
//!
//! The report goes to stdout; log output goes to stderr. The log level comes
//! from the `-v` count and can be overridden with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success (including an empty ledger)
//! - 1: Error (missing ledger, malformed edge list, unknown account, etc.)

use fraud_ledger::cli;
use fraud_ledger::pipeline::AnalysisPipeline;
use simple_logger::SimpleLogger;
use std::io::Write;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level()).env().init() {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    let pipeline = AnalysisPipeline::new(args.to_config());

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let result = pipeline
        .run(&mut output)
        .and_then(|_| output.flush().map_err(Into::into));

    if let Err(e) = result {
        log::error!("Analysis failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
