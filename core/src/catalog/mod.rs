//! Shared lookup tables for the framework taxonomies.
//!
//! Both the classifier and the sorter read from these tables, so a group key
//! produced by one is always recognized by the other.

pub mod business;
pub mod iso;
pub mod nist;
pub mod patterns;
pub mod soc2;

pub const GENERAL: &str = "General";
pub const UNCATEGORIZED: &str = "Uncategorized";
