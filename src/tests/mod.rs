//! Unit tests for the crate.
//!
//! Organised by layer: domain invariants, the store-adapter contract,
//! request validation, and one suite per orchestration service, covering
//! happy paths, error cases, and edge cases for all public APIs.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]


use chrono::NaiveDate;

/// Builds a calendar date or fails the test.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
