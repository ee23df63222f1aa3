use crate::error::Result;
use crate::models::PolicyRecord;
use serde::Serialize;
use std::collections::HashMap;

/// A county's summed year-over-year change in total insured value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyGrowth {
    pub county: String,
    pub growth: f64,
}

/// Rank counties by accumulated TIV growth, descending, at most `limit`
/// entries. Equal growth values order by ascending county name so the
/// ranking is deterministic.
pub fn rank_by_growth(records: &[PolicyRecord], limit: usize) -> Result<Vec<CountyGrowth>> {
    let mut growth_by_county: HashMap<String, f64> = HashMap::new();
    for record in records {
        let delta = record.tiv_growth()?;
        *growth_by_county
            .entry(record.county().to_string())
            .or_insert(0.0) += delta;
    }

    let mut ranking: Vec<CountyGrowth> = growth_by_county
        .into_iter()
        .map(|(county, growth)| CountyGrowth { county, growth })
        .collect();

    ranking.sort_by(|a, b| {
        b.growth
            .total_cmp(&a.growth)
            .then_with(|| a.county.cmp(&b.county))
    });
    ranking.truncate(limit);

    Ok(ranking)
}
