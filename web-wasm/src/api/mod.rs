//! Data source access

pub mod doctors;
