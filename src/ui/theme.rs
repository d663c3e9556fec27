//! Theme system for the portfolio application
//! Dark-first palette with an indigo accent, light mode supported

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Bold font weight (Semibold reads better on macOS SF Pro)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;
#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;
#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0a0a12);
    pub const SURFACE: Color = color!(0x15151f);
    pub const BORDER: Color = color!(0x2a2a3a);
    pub const TEXT_MUTED: Color = color!(0x8888a0);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3c6);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf7f7fb);
    pub const SURFACE: Color = color!(0xececf4);
    pub const BORDER: Color = color!(0xd5d5e2);
    pub const TEXT_MUTED: Color = color!(0x70708a);
    pub const TEXT_SECONDARY: Color = color!(0x50506a);
    pub const TEXT_PRIMARY: Color = color!(0x14141e);
}

/// Indigo accent color (same for both modes)
pub const ACCENT: Color = color!(0x7777ff);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0x9999ff);

/// Dim grid line color used by the ambient scenes
pub const ACCENT_DIM: Color = color!(0x444477);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Accent color with alpha, for soft badge backgrounds
pub fn accent_soft(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..ACCENT
    }
}

/// Elevated surface color (toasts, popovers)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.1, 0.1, 0.14)
    } else {
        Color::from_rgb(0.96, 0.96, 0.98)
    }
}

/// Surface container color (input fields)
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.12, 0.12, 0.17)
    } else {
        Color::from_rgb(0.92, 0.92, 0.95)
    }
}

/// Danger color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Info color
pub fn info(_theme: &Theme) -> Color {
    Color::from_rgb(0.4, 0.7, 0.95)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Shadow color
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Translucent card with a soft border, the "glass" panel of the site
pub fn glass_card(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.04)
    } else {
        Color::from_rgba(1.0, 1.0, 1.0, 0.7)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Solid inner tile (stat tiles, social chips)
pub fn muted_tile(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round accent-tinted icon badge
pub fn accent_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent_soft(0.2))),
        text_color: Some(ACCENT),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header/footer bar backdrop
pub fn chrome_bar(theme: &Theme) -> container::Style {
    let bg = Color {
        a: 0.92,
        ..background(theme)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Borderless text button (footer links, inline links)
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: text_muted(theme),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: ACCENT,
            ..base
        },
        _ => base,
    }
}

/// Category pill; the selected pill is filled with the accent
pub fn pill_button(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    if selected {
        return button::Style {
            background: Some(Background::Color(ACCENT)),
            text_color: Color::WHITE,
            border: Border {
                radius: 999.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };
    }

    let base = button::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: text_muted(theme),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface_elevated(theme))),
            text_color: text_secondary(theme),
            ..base
        },
        _ => base,
    }
}

/// Transparent icon button (hamburger, close, socials)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_muted(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Input and Scrollable Styles
// ============================================================================

/// Form field style
pub fn form_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_muted(theme),
        _ => divider(theme),
    };

    text_input::Style {
        background: Background::Color(surface_container(theme)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT,
    }
}

/// Page scrollbar style
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
