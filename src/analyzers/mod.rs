//! Aggregation and categorization over the cleaned, geocoded table.

pub mod aggregate;
pub mod categorize;
pub mod describe;
pub mod utility;
