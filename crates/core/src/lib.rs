//! Domain logic for the scoreboard service.
//!
//! Holds the pieces that do not touch a database or HTTP: the calculator,
//! the pass/fail classification rule, the record store traits, and the
//! [`scoring::ScoreService`] that orchestrates them.

pub mod calculator;
pub mod error;
pub mod scoring;
pub mod types;
