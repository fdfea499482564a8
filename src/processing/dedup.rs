//! Subnet de-duplication logic.
//!
//! Handles removing subnets that describe the same network.

use crate::models::Subnet;
use std::collections::HashSet;
use std::error::Error;

/// Sort subnets by (network, prefix) and drop repeated networks.
///
/// `10.0.0.1/8` and `10.0.0.0/8` describe the same network, only the first
/// one in sorted order is kept.
///
/// # Arguments
/// * `subnets` - The subnets to de-duplicate
///
/// # Returns
/// The de-duplicated, sorted subnets
pub fn de_duplicate_subnets(mut subnets: Vec<Subnet>) -> Vec<Subnet> {
    let before = subnets.len();

    // Dedup - must be sorted first
    subnets.sort_by_key(|s| (s.network(), s.prefix_len(), s.ip()));
    subnets.dedup_by_key(|s| (s.network(), s.prefix_len()));

    if subnets.len() != before {
        log::info!(
            "de_duplicate_subnets() removed {} duplicate subnets",
            before - subnets.len()
        );
    }
    subnets
}

/// Return an error if the same network appears twice.
pub fn check_for_duplicate_subnets(subnets: &[Subnet]) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();

    for sub in subnets.iter() {
        if !seen.insert((sub.network(), sub.prefix_len())) {
            return Err(format!("Duplicate found: {sub}").into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_subnet_list;

    fn subnets(list: &[&str]) -> Vec<Subnet> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_de_duplicate_subnets() {
        let data = subnets(&["10.0.0.1/8", "192.168.0.0/24", "10.0.0.0/8", "10.0.0.0/16"]);
        let data = de_duplicate_subnets(data);
        let text: Vec<String> = data.iter().map(|s| s.to_string()).collect();
        assert_eq!(text, vec!["10.0.0.0/8", "10.0.0.0/16", "192.168.0.0/24"]);
        check_for_duplicate_subnets(&data).expect("Found unexpected duplicates");
    }

    #[test]
    fn test_check_for_duplicate_subnets() {
        let data = subnets(&["10.0.0.1/24", "10.0.0.2/24"]);
        let err = check_for_duplicate_subnets(&data).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate found: 10.0.0.2/24");
    }

    #[test]
    fn test_de_duplicate_list_file() {
        let data = read_subnet_list("src/tests/test_data/subnets_01.txt")
            .expect("Error reading subnet list");
        assert_eq!(data.len(), 10);
        let data = de_duplicate_subnets(data);
        assert_eq!(data.len(), 9, "Expected 9 subnets after de-dup");
        assert_eq!(data[0].to_string(), "8.8.8.0/24");
    }
}
