//! Application features outside the UI tree

pub mod settings;

pub use settings::Settings;
