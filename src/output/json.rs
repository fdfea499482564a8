//! JSON output of subnet summaries.

use crate::processing::SubnetSummaryRow;
use std::error::Error;

/// Serialise the rows as a pretty printed JSON array.
pub fn to_json(rows: &[SubnetSummaryRow]) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(rows).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print the rows as JSON to stdout.
pub fn print_json(rows: &[SubnetSummaryRow]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_json() rows = {}", rows.len());
    println!("{}", to_json(rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;
    use crate::processing::summarize_all;

    #[test]
    fn test_to_json() {
        let subnets: Vec<Subnet> = vec!["10.1.2.0/30".parse().unwrap()];
        let json = to_json(&summarize_all(&subnets)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["cidr"], "10.1.2.0/30");
        assert_eq!(value[0]["dhcp_range"], "10.1.2.1 - 10.1.2.2");
        assert_eq!(value[0]["hosts"], 2);
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
