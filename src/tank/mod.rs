//! Pressurant tank blowdown integration and mass bookkeeping
pub mod blowdown;
pub mod mass;
