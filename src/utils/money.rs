use crate::error::{ProcessingError, Result};

/// Parse a monetary field, tolerating `,` thousands separators (e.g. "1,234.56" -> 1234.56)
pub fn parse_amount(raw: &str, column: usize) -> Result<f64> {
    let trimmed = raw.trim();
    let cleaned = trimmed.replace(',', "");
    cleaned
        .parse::<f64>()
        .map_err(|_| ProcessingError::InvalidNumber {
            value: trimmed.to_string(),
            column,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_amount() {
        assert_eq!(parse_amount("100", 8).unwrap(), 100.0);
        assert_eq!(parse_amount("498960.0", 8).unwrap(), 498960.0);
    }

    #[test]
    fn test_parse_amount_with_thousands_separators() {
        assert_eq!(parse_amount("1,234.56", 8).unwrap(), 1234.56);
        assert_eq!(parse_amount("12,345,678.9", 7).unwrap(), 12345678.9);
    }

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  42.5 ", 8).unwrap(), 42.5);
    }

    #[test]
    fn test_parse_negative_amount() {
        assert_eq!(parse_amount("-19.05", 7).unwrap(), -19.05);
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = parse_amount(" N/A ", 8).unwrap_err();
        match err {
            ProcessingError::InvalidNumber { value, column } => {
                assert_eq!(value, "N/A");
                assert_eq!(column, 8);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_empty_amount() {
        assert!(parse_amount("", 8).is_err());
    }
}
