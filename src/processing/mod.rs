//! Subnet list processing logic.
//!
//! This module contains the logic applied to lists of subnets:
//! - [`dedup`] - De-duplication of subnet records
//! - [`summary`] - Building summary rows for output

mod dedup;
mod summary;

// Re-export public functions
pub use dedup::{check_for_duplicate_subnets, de_duplicate_subnets};
pub use summary::{summarize, summarize_all, SubnetSummaryRow};
