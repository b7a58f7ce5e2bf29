use crate::error::AppError;

/// Strict integer parsing for env/flag values; surrounding whitespace is ignored.
pub(crate) fn parse_int(name: &'static str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidInteger {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_int("TEST_LIMIT", "100").unwrap(), 100);
        assert_eq!(parse_int("TEST_CHATLAB", "0").unwrap(), 0);
        assert_eq!(parse_int("TEST_LIMIT", "-3").unwrap(), -3);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_int("TEST_LIMIT", " 42\n").unwrap(), 42);
    }

    #[test]
    fn rejects_text() {
        let err = parse_int("TEST_LIMIT", "abc").unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid integer for TEST_LIMIT: "abc""#);
    }

    #[test]
    fn rejects_empty_and_fractional() {
        assert!(parse_int("TEST_LIMIT", "").is_err());
        assert!(parse_int("TEST_LIMIT", "1.5").is_err());
    }
}
