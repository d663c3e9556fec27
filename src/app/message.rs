//! Application messages

use iced::{Point, Size};

use crate::content::CategoryFilter;
use crate::routing::Route;
use crate::ui::animation::RippleId;

use super::state::RippleSurface;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation and chrome
    Navigate(Route),
    MenuOpened,
    MenuClosed,
    WindowResized(Size),

    // Frame clock
    AnimationTick,

    // Projects page
    CategorySelected(CategoryFilter),
    ProjectHovered(Option<u32>),
    ProjectOpened(u32),

    // Contact form
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageBodyChanged(String),
    ContactSubmitted,
    /// Simulated delivery finished; carries the submission epoch it belongs to
    ContactDelivered(u64),

    // Ripple surfaces
    RipplePressed(RippleSurface, Point),
    RippleExpired(RippleSurface, RippleId),

    // Misc chrome
    SocialPressed(&'static str),
    ToastExpired(u64),
}
