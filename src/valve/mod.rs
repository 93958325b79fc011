//! Regulator valve-sizing calculation
pub mod sizing;
