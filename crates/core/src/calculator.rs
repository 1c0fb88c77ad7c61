//! Chained four-operation accumulator.
//!
//! Each operation consumes the calculator and returns the updated one, so
//! a sequence reads left to right:
//!
//! ```rust
//! use scoreboard_core::calculator::Calculator;
//!
//! let avg = Calculator::new()
//!     .add(80.0)
//!     .add(100.0)
//!     .add(60.0)
//!     .divide(3.0)
//!     .unwrap()
//!     .result();
//! assert_eq!(avg, 80.0);
//! ```

/// Errors returned by [`Calculator`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivideByZero,
}

/// Running `f64` accumulator starting at `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary value instead of `0.0`.
    pub fn with_initial(value: f64) -> Self {
        Self { result: value }
    }

    pub fn add(self, value: f64) -> Self {
        Self {
            result: self.result + value,
        }
    }

    pub fn minus(self, value: f64) -> Self {
        Self {
            result: self.result - value,
        }
    }

    pub fn multiply(self, value: f64) -> Self {
        Self {
            result: self.result * value,
        }
    }

    /// Divide the accumulated value.
    ///
    /// Fails with [`CalculatorError::DivideByZero`] when `value` is zero
    /// (either sign) instead of producing an infinity or NaN.
    pub fn divide(self, value: f64) -> Result<Self, CalculatorError> {
        if value == 0.0 {
            return Err(CalculatorError::DivideByZero);
        }
        Ok(Self {
            result: self.result / value,
        })
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Calculator::new().result(), 0.0);
    }

    #[test]
    fn add_and_minus() {
        let calc = Calculator::new().add(10.0).minus(2.0);
        assert_eq!(calc.result(), 8.0);
    }

    #[test]
    fn multiply_after_add() {
        let calc = Calculator::with_initial(3.0).add(2.0).multiply(4.0);
        assert_eq!(calc.result(), 20.0);
    }

    #[test]
    fn full_chain() {
        let result = Calculator::new()
            .add(10.0)
            .minus(2.0)
            .multiply(2.0)
            .divide(2.0)
            .unwrap()
            .result();
        assert_eq!(result, 8.0);
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        assert_matches!(
            Calculator::with_initial(5.0).divide(0.0),
            Err(CalculatorError::DivideByZero)
        );
        assert_matches!(
            Calculator::with_initial(5.0).divide(-0.0),
            Err(CalculatorError::DivideByZero)
        );
    }

    #[test]
    fn divide_by_zero_message() {
        assert_eq!(
            CalculatorError::DivideByZero.to_string(),
            "Cannot divide by zero"
        );
    }
}
