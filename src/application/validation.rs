use thiserror::Error;

/// Largest accepted board dimension. The bound exists to keep rendering
/// cost sane, not for algorithmic correctness.
pub const MAX_DIMENSION: usize = 100;

/// Rejected dimension input. The simulation core is never invoked with
/// dimensions that fail these checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    /// Input did not parse as an integer.
    #[error("Numbers only, please (got {0:?})")]
    NotANumber(String),

    /// Zero-sized boards are rejected.
    #[error("Please provide dimensions > 0 and <= {MAX_DIMENSION}")]
    Zero,

    /// Oversized boards are rejected.
    #[error("You're going to have a bad time at {0}. Keep it to {MAX_DIMENSION} or less.")]
    TooLarge(usize),
}

/// Parse a single dimension from raw text input.
pub fn parse_dimension(input: &str) -> Result<usize, DimensionError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| DimensionError::NotANumber(input.to_string()))
}

/// Check a width/height pair against the accepted range.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), DimensionError> {
    if width == 0 || height == 0 {
        return Err(DimensionError::Zero);
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(DimensionError::TooLarge(width.max(height)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_range() {
        assert_eq!(validate_dimensions(1, 1), Ok(()));
        assert_eq!(validate_dimensions(20, 20), Ok(()));
        assert_eq!(validate_dimensions(100, 100), Ok(()));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(validate_dimensions(0, 20), Err(DimensionError::Zero));
        assert_eq!(validate_dimensions(20, 0), Err(DimensionError::Zero));
    }

    #[test]
    fn test_rejects_oversized() {
        assert_eq!(
            validate_dimensions(101, 20),
            Err(DimensionError::TooLarge(101))
        );
        assert_eq!(
            validate_dimensions(20, 500),
            Err(DimensionError::TooLarge(500))
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            parse_dimension("twenty"),
            Err(DimensionError::NotANumber("twenty".to_string()))
        );
        assert_eq!(
            parse_dimension("-5"),
            Err(DimensionError::NotANumber("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_accepts_integers() {
        assert_eq!(parse_dimension("42"), Ok(42));
        assert_eq!(parse_dimension(" 7 "), Ok(7));
    }
}
