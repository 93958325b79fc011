//! Presentation of a finished run: plots of the output bundle
pub mod plots;
