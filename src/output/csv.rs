//! CSV output formatting for subnet summaries.

use crate::processing::SubnetSummaryRow;
use itertools::Itertools;
use std::error::Error;

use super::terminal::format_field;

/// CSV column names, in output order.
pub const CSV_HEADER: [&str; 11] = [
    "cnt",
    "cidr",
    "network",
    "broadcast",
    "subnet_mask",
    "host_mask",
    "dhcp_range",
    "hosts",
    "class",
    "range",
    "reserved",
];

/// Print the summary rows as CSV to stdout.
pub fn subnet_print(rows: &[SubnetSummaryRow]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start subnet_print() rows = {}", rows.len());
    println!("{}", csv_header());
    for row in rows {
        println!("{}", csv_row(row));
    }
    Ok(())
}

/// Quoted header line.
pub fn csv_header() -> String {
    CSV_HEADER.iter().map(|h| format!("\"{h}\"")).join(",")
}

/// Format a single row as a CSV line.
pub fn csv_row(row: &SubnetSummaryRow) -> String {
    [
        format_field(row.j, 5),
        format_field(&row.cidr, 20),
        format_field(&row.network, 17),
        format_field(&row.broadcast, 17),
        format_field(&row.subnet_mask, 17),
        format_field(&row.host_mask, 17),
        format_field(escape_csv_field(&row.dhcp_range), 33),
        format_field(row.hosts, 12),
        format_field(&row.class, 11),
        format_field(&row.range_name, 9),
        format_field(&row.reserved, 14),
    ]
    .iter()
    .join(",")
}

fn escape_csv_field(input: &str) -> String {
    // quotes are added by format_field, only double the embedded ones
    input.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;
    use crate::processing::summarize;

    #[test]
    fn test_csv_header() {
        let header = csv_header();
        assert!(header.starts_with(r#""cnt","cidr","network""#));
        assert_eq!(header.split(',').count(), CSV_HEADER.len());
    }

    #[test]
    fn test_csv_row() {
        let subnet: Subnet = "192.168.1.10/24".parse().unwrap();
        let line = csv_row(&summarize(&subnet, 0));
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        assert_eq!(fields.len(), CSV_HEADER.len());
        assert_eq!(fields[0], "\"1\"");
        assert_eq!(fields[1], "\"192.168.1.10/24\"");
        assert_eq!(fields[6], "\"192.168.1.1 - 192.168.1.254\"");
        assert_eq!(fields[7], "\"254\"");
        assert_eq!(fields[8], "\"Class C\"");
        assert_eq!(fields[9], "\"private\"");
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field(r#"a"b"#), r#"a""b"#);
        assert_eq!(escape_csv_field("plain"), "plain");
    }
}
