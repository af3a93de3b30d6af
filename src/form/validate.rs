//! Length field validation.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Length is required")]
    Required,
    #[error("Length must be a whole number")]
    NotANumber,
    #[error("Should be minimum of 4 character")]
    TooShort,
    #[error("Should be maximum of 25 character")]
    TooLong,
}

/// Parse and range-check the raw length field.
pub fn validate_length(input: &str) -> Result<usize, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::Required);
    }

    let n = match s.parse::<i64>() {
        Ok(n) => n,
        // A digit string too large for i64 is still a number, just out of range.
        Err(_) if is_integer_literal(s) => {
            return Err(if s.starts_with('-') {
                ValidationError::TooShort
            } else {
                ValidationError::TooLong
            });
        }
        Err(_) => return Err(ValidationError::NotANumber),
    };

    if n < MIN_LENGTH as i64 {
        Err(ValidationError::TooShort)
    } else if n > MAX_LENGTH as i64 {
        Err(ValidationError::TooLong)
    } else {
        Ok(n as usize)
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length("25"), Ok(25));
        assert_eq!(validate_length(" 8 "), Ok(8));
        assert_eq!(validate_length("+12"), Ok(12));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(validate_length("3"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("0"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("-7"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("26"), Err(ValidationError::TooLong));
        assert_eq!(
            validate_length("99999999999999999999999"),
            Err(ValidationError::TooLong)
        );
        assert_eq!(
            validate_length("-99999999999999999999999"),
            Err(ValidationError::TooShort)
        );
    }

    #[test]
    fn rejects_missing_and_non_numeric() {
        assert_eq!(validate_length(""), Err(ValidationError::Required));
        assert_eq!(validate_length("   "), Err(ValidationError::Required));
        assert_eq!(validate_length("eight"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("8.5"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("-"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(ValidationError::Required.to_string(), "Length is required");
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Should be minimum of 4 character"
        );
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Should be maximum of 25 character"
        );
    }
}
