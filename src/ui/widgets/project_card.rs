//! Project card widget
//!
//! Placeholder still at rest; on hover a dark overlay with the description
//! and a view link fades in, driven by a 0..1 hover progress.

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Color, Element, Length};

use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

const CARD_HEIGHT: f32 = 260.0;

/// Create a project card
///
/// # Arguments
/// * `hover_progress` - Overlay opacity (0.0 to 1.0)
/// * `on_open` - Message to send when the view link is pressed
/// * `on_hover` / `on_unhover` - Pointer enter/leave messages
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    description: &'a str,
    tags: &'a [&'a str],
    hover_progress: f32,
    on_open: Message,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    // Rest face: tinted placeholder with a film icon, title and tags
    let placeholder = container(
        svg(svg::Handle::from_memory(icons::VIDEO.as_bytes()))
            .width(40)
            .height(40)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .width(Length::Fill)
    .height(110)
    .center_x(Length::Fill)
    .center_y(110)
    .style(move |_theme| container::Style {
        background: Some(iced::Background::Color(theme::accent_soft(
            0.12 + 0.05 * hover_progress,
        ))),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let tag_row = tags.iter().fold(
        row![].spacing(6).align_y(Alignment::Center),
        |tag_row, tag| {
            tag_row.push(
                container(text(*tag).size(11).color(theme::ACCENT))
                    .padding(iced::Padding::new(3.0).left(8.0).right(8.0))
                    .style(|_theme| container::Style {
                        background: Some(iced::Background::Color(theme::accent_soft(0.15))),
                        border: iced::Border {
                            radius: 999.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            )
        },
    );

    let face = container(
        column![
            placeholder,
            Space::new().height(12),
            text(title)
                .size(16)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            Space::new().height(Length::Fill),
            tag_row,
        ]
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(CARD_HEIGHT)
    .padding(16)
    .style(theme::glass_card);

    // Hover overlay with description and view link
    let overlay: Element<'a, Message> = if hover_progress > 0.01 {
        let opacity = hover_progress;

        let view_link = button(
            row![
                text("View Project")
                    .size(14)
                    .color(Color::from_rgba(1.0, 1.0, 1.0, opacity)),
                Space::new().width(6),
                svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
                    .width(14)
                    .height(14)
                    .style(move |_theme, _status| svg::Style {
                        color: Some(Color::from_rgba(1.0, 1.0, 1.0, opacity)),
                    }),
            ]
            .align_y(Alignment::Center),
        )
        .padding(iced::Padding::new(8.0).left(16.0).right(16.0))
        .style(move |_theme, status| {
            let hovered = matches!(status, iced::widget::button::Status::Hovered);
            let base = if hovered {
                theme::ACCENT_HOVER
            } else {
                theme::ACCENT
            };
            iced::widget::button::Style {
                background: Some(iced::Background::Color(Color {
                    a: if hovered { opacity } else { 0.85 * opacity },
                    ..base
                })),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(on_open);

        container(
            column![
                text(description)
                    .size(13)
                    .color(Color::from_rgba(1.0, 1.0, 1.0, 0.9 * opacity)),
                Space::new().height(Length::Fill),
                view_link,
            ]
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(CARD_HEIGHT)
        .padding(16)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.02,
                0.02,
                0.05,
                0.92 * opacity,
            ))),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    } else {
        Space::new().width(0).height(0).into()
    };

    let card = iced::widget::stack![face, overlay];

    mouse_area(card)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}
