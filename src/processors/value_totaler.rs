use crate::error::Result;
use crate::models::PolicyRecord;

/// Arithmetic sum of the 2012 total insured value column.
///
/// The first unparsable value aborts the whole run; there is no
/// skip-and-continue.
pub fn total_tiv_2012(records: &[PolicyRecord]) -> Result<f64> {
    let mut total = 0.0;
    for record in records {
        total += record.tiv_2012()?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;

    fn record(tiv_2012: &str) -> PolicyRecord {
        PolicyRecord::new(vec![
            "1".to_string(),
            "FL".to_string(),
            "CLAY COUNTY".to_string(),
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            "100".to_string(),
            tiv_2012.to_string(),
        ])
    }

    #[test]
    fn test_sums_all_rows() {
        let records = vec![record("120"), record("40")];
        assert_eq!(total_tiv_2012(&records).unwrap(), 160.0);
    }

    #[test]
    fn test_handles_thousands_separators() {
        let records = vec![record("1,234.5"), record("0.5")];
        assert_eq!(total_tiv_2012(&records).unwrap(), 1235.0);
    }

    #[test]
    fn test_empty_dataset_sums_to_zero() {
        assert_eq!(total_tiv_2012(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_value_aborts() {
        let records = vec![record("120"), record("N/A")];
        let err = total_tiv_2012(&records).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidNumber { .. }));
    }
}
