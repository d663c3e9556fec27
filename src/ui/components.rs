//! Composite interface sections shared across pages

pub mod contact_form;
pub mod footer;
pub mod navbar;
pub mod tech_stack;
