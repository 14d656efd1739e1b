//! UI components

pub mod navbar;
pub mod hero_search;
pub mod doctor_card;
pub mod doctor_results;
pub mod error_panel;
pub mod filter_sidebar;
