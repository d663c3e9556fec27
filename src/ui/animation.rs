//! Animation state managers driven by the frame subscription

pub mod hover;
pub mod ripple;

pub use hover::{HoverAnimations, RevealAnimation};
pub use ripple::{RippleField, RippleId, RippleToken};
