use crate::models::PolicyRecord;
use std::collections::HashSet;

/// Number of distinct (trimmed) county names across the dataset
pub fn distinct_county_count(records: &[PolicyRecord]) -> usize {
    let counties: HashSet<&str> = records.iter().map(|r| r.county()).collect();
    counties.len()
}
