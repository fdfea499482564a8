//! Terminal output utilities.
//!
//! Provides formatting helpers and a coloured table for terminal output.

use crate::processing::SubnetSummaryRow;
use colored::Colorize;
use std::error::Error;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render one row as aligned, uncoloured table cells.
pub fn format_table_row(row: &SubnetSummaryRow) -> String {
    format!(
        "{j:>3} {cidr:<18} {network:<15} {broadcast:<15} {mask:<15} {hosts:>10} {class:<9} {range:<8} {reserved}",
        j = row.j,
        cidr = row.cidr,
        network = row.network,
        broadcast = row.broadcast,
        mask = row.subnet_mask,
        hosts = row.hosts,
        class = row.class,
        range = row.range_name,
        reserved = row.reserved,
    )
}

/// Print the summary rows as a table to stdout.
///
/// Private ranges are shown in green, reserved blocks in yellow.
pub fn print_table(rows: &[SubnetSummaryRow]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_table() rows = {}", rows.len());
    println!(
        "{}",
        format!(
            "{:>3} {:<18} {:<15} {:<15} {:<15} {:>10} {:<9} {:<8} {}",
            "cnt", "cidr", "network", "broadcast", "subnet_mask", "hosts", "class", "range", "reserved"
        )
        .bold()
    );
    for row in rows {
        let line = format_table_row(row);
        if row.reserved != "None" {
            println!("{}", line.yellow());
        } else if row.range_name == "private" {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}
