//! Shared time discretization, model traits and the simulation pipeline
pub mod grid;
pub mod simulation;
pub mod traits;
