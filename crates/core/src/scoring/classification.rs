//! Pass/fail classification of three subject scores.

use serde::Serialize;

use crate::calculator::{Calculator, CalculatorError};

/// Minimum average (inclusive) for a passing verdict.
pub const PASS_THRESHOLD: f64 = 60.0;

/// Number of subjects averaged per submission.
const SUBJECT_COUNT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Average of a submission together with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub avg_score: f64,
    pub verdict: Verdict,
}

/// Mean of the three subject scores.
///
/// Accumulates kor, then english, then math before dividing, so the
/// floating-point result is the same for every caller.
pub fn average_score(kor_score: i32, english_score: i32, math_score: i32) -> f64 {
    let total = Calculator::new()
        .add(f64::from(kor_score))
        .add(f64::from(english_score))
        .add(f64::from(math_score));

    match total.divide(SUBJECT_COUNT) {
        Ok(mean) => mean.result(),
        Err(CalculatorError::DivideByZero) => unreachable!("SUBJECT_COUNT is non-zero"),
    }
}

/// Classify a submission. No rounding is applied before comparing against
/// [`PASS_THRESHOLD`], and out-of-range scores are averaged as-is.
pub fn classify(kor_score: i32, english_score: i32, math_score: i32) -> Classification {
    let avg_score = average_score(kor_score, english_score, math_score);
    let verdict = if avg_score >= PASS_THRESHOLD {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    Classification { avg_score, verdict }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
