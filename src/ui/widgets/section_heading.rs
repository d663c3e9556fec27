//! Section heading widget
//!
//! Title, optional subtitle and an accent underline that sweeps in with the
//! page reveal animation.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length};

use crate::ui::theme::{self, BOLD_WEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingAlign {
    Left,
    Center,
}

/// Create a section heading
///
/// `reveal` is the 0..1 page-entry progress; it drives the underline sweep.
pub fn view<'a, Message: 'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    align: HeadingAlign,
    reveal: f32,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(32)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let underline = container(Space::new().width(64.0 * reveal.max(0.05)).height(3))
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::ACCENT)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut content = column![title_text, Space::new().height(8), underline];

    if let Some(subtitle) = subtitle {
        content = content.push(Space::new().height(12)).push(
            text(subtitle)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        );
    }

    let content = match align {
        HeadingAlign::Left => content.align_x(Alignment::Start),
        HeadingAlign::Center => content.align_x(Alignment::Center),
    };

    match align {
        HeadingAlign::Left => content.into(),
        HeadingAlign::Center => container(content)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
    }
}
