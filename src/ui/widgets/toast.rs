//! Toast notifications
//!
//! A pill-shaped card with a colored status dot, floated over the page
//! content from the bottom-right corner.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Background, Border, Element, Padding, Shadow, Vector};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Info,
}

impl ToastStyle {
    /// Status color, shown on the dot only
    pub fn color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(&iced::Theme::Dark),
            ToastStyle::Error => theme::danger(&iced::Theme::Dark),
            ToastStyle::Info => theme::info(&iced::Theme::Dark),
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let status = toast.style.color();

    let dot = container(Space::new().width(8).height(8)).style(move |_theme| container::Style {
        background: Some(Background::Color(status)),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let message = text(toast.message.clone())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    container(row![dot, message].spacing(12).align_y(Alignment::Center))
        .padding(Padding::new(12.0).left(18.0).right(22.0))
        .max_width(420)
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::surface_elevated(theme))),
            border: Border {
                radius: 22.0.into(),
                width: 1.0,
                color: theme::accent_soft(0.35),
            },
            shadow: Shadow {
                color: theme::shadow_color(theme),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        })
        .into()
}
