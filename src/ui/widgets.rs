//! Reusable presentational widgets
//!
//! Everything here takes generic message types and carries no app logic.

pub mod project_card;
pub mod ripple_button;
pub mod section_heading;
pub mod skill_bar;
pub mod toast;
