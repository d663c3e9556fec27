//! UI module layering
//!
//! - `widgets`: presentational pieces with generic message types
//! - `components`: composites that know about the app `Message`
//! - `pages`: full-screen views composed from components and widgets
//! - `scene`: ambient animated wireframe backgrounds
//! - `theme`, `icons`, `animation`: shared support

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod scene;
pub mod theme;
pub mod widgets;
