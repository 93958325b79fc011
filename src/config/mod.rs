//! Contains the **Configuration** record and the .json file reader
pub mod config;
pub mod json_reader;
