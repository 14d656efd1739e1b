//! Top-level views

pub mod home;
pub mod search;
