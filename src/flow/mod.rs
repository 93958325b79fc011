//! Oxidizer vapor-pressure profile and regulator demand flow
pub mod demand;
pub mod profile;
