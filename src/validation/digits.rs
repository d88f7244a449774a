//! Limit on the number of digits in free text.

use crate::error::{TextGuardError, TextGuardResult};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input contains more than {max_digits} digits")]
pub struct DigitLimitViolation {
    pub max_digits: usize,
}

/// Rejects input containing more than a maximum number of ASCII digits,
/// wherever they appear.
#[derive(Debug, Clone, Copy)]
pub struct MaxDigitsValidator {
    max_digits: usize,
}

impl MaxDigitsValidator {
    /// # Errors
    /// Returns [`TextGuardError::InvalidInput`] when `max_digits` is zero.
    pub fn new(max_digits: usize) -> TextGuardResult<Self> {
        if max_digits == 0 {
            return Err(TextGuardError::invalid_input(
                "max_digits",
                "must be positive",
            ));
        }
        Ok(Self { max_digits })
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn validate(&self, value: &str) -> Result<(), DigitLimitViolation> {
        if is_valid(value, self.max_digits) {
            Ok(())
        } else {
            log::info!("Input exceeds {} digits: [{}]", self.max_digits, value);
            Err(DigitLimitViolation {
                max_digits: self.max_digits,
            })
        }
    }
}

pub fn is_valid(value: &str, max_digits: usize) -> bool {
    value.chars().filter(char::is_ascii_digit).nth(max_digits).is_none()
}
