//! Plain-text report sections
//!
//! Each writer emits one section of the analysis report to an arbitrary sink.
//! Formatting lives here so the analysis passes never print.

use crate::types::{AnalysisError, DistanceTable, TransactionRecord};
use std::io::Write;

/// `Transactions loaded: N`
pub fn write_load_summary(count: usize, output: &mut dyn Write) -> Result<(), AnalysisError> {
    writeln!(output, "Transactions loaded: {}", count)?;
    Ok(())
}

/// Header plus one `sender -> receiver : amount` line per record
pub fn write_top_transactions(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    writeln!(output)?;
    writeln!(output, "Top {} High Value Transactions:", records.len())?;
    for record in records {
        writeln!(
            output,
            "{} -> {} : {}",
            record.sender, record.receiver, record.amount
        )?;
    }
    Ok(())
}

/// Result of a pattern scan: the offsets, or that nothing was found
pub fn write_pattern_result(
    pattern: &str,
    offsets: &[usize],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    writeln!(output)?;
    if offsets.is_empty() {
        writeln!(output, "Pattern \"{}\" not found.", pattern)?;
    } else {
        let offsets: Vec<String> = offsets.iter().map(usize::to_string).collect();
        writeln!(
            output,
            "Suspicious repeated transaction pattern \"{}\" detected at offsets: {}",
            pattern,
            offsets.join(", ")
        )?;
    }
    Ok(())
}

/// One line per node: `Account <label> : <distance>` or `... : Unreachable`
///
/// `label` maps a node index to its display name.
pub fn write_distance_table<F>(
    table: &DistanceTable,
    label: F,
    output: &mut dyn Write,
) -> Result<(), AnalysisError>
where
    F: Fn(usize) -> String,
{
    writeln!(output)?;
    writeln!(
        output,
        "Shortest money transfer paths from account {}:",
        label(table.source())
    )?;
    for (node, distance) in table.iter() {
        writeln!(output, "Account {} : {}", label(node), distance)?;
    }
    Ok(())
}

/// Final line of a report, or the whole report when nothing was loaded
pub fn write_footer(loaded_any: bool, output: &mut dyn Write) -> Result<(), AnalysisError> {
    if loaded_any {
        writeln!(output)?;
        writeln!(output, "Fraud analysis completed.")?;
    } else {
        writeln!(output, "No data loaded.")?;
    }
    Ok(())
}
