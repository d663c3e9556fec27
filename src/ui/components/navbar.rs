//! Top navigation bar
//!
//! Wide windows get inline links with an accent underline on the active
//! route; narrow windows collapse to a hamburger that opens a full-screen
//! menu overlay.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content;
use crate::routing::{self, Route};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

pub const NAVBAR_HEIGHT: f32 = 72.0;

/// Below this window width the inline links collapse into the menu button
pub const COMPACT_BREAKPOINT: f32 = 720.0;

fn logo<'a>() -> Element<'a, Message> {
    let badge = container(
        text(content::INITIALS)
            .size(15)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .color(theme::ACCENT),
    )
    .width(36)
    .height(36)
    .center_x(36)
    .center_y(36)
    .style(theme::accent_badge);

    button(
        row![
            badge,
            Space::new().width(10),
            text(content::NAME)
                .size(17)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        ]
        .align_y(Alignment::Center),
    )
    .padding(0)
    .style(|_theme, _status| button::Style::default())
    .on_press(Message::Navigate(Route::Home))
    .into()
}

fn nav_link<'a>(current: Route, link: Route) -> Element<'a, Message> {
    let active = routing::is_active(current, link);

    let label = text(link.label())
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(move |theme| text::Style {
            color: Some(if active {
                theme::ACCENT
            } else {
                theme::text_secondary(theme)
            }),
        });

    // The underline keeps its slot when inactive so links never shift
    let underline = container(Space::new().width(Length::Fill).height(2)).style(move |_theme| {
        iced::widget::container::Style {
            background: active.then_some(iced::Background::Color(theme::ACCENT)),
            border: iced::Border {
                radius: 1.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    button(column![label, Space::new().height(4), underline].align_x(Alignment::Center))
        .padding(iced::Padding::new(4.0).left(10.0).right(10.0))
        .style(|_theme, _status| button::Style::default())
        .on_press(Message::Navigate(link))
        .into()
}

/// The navigation bar for the current window width
pub fn view<'a>(current: Route, window_width: f32) -> Element<'a, Message> {
    let trailing: Element<'a, Message> = if window_width < COMPACT_BREAKPOINT {
        button(
            svg(svg::Handle::from_memory(icons::MENU.as_bytes()))
                .width(22)
                .height(22)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        )
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::MenuOpened)
        .into()
    } else {
        Route::NAV_LINKS
            .into_iter()
            .fold(row![].spacing(6).align_y(Alignment::Center), |links, link| {
                links.push(nav_link(current, link))
            })
            .into()
    };

    let bar = row![logo(), Space::new().width(Length::Fill), trailing]
        .align_y(Alignment::Center)
        .padding(iced::Padding::new(0.0).left(32.0).right(32.0));

    container(bar)
        .width(Length::Fill)
        .height(NAVBAR_HEIGHT)
        .center_y(NAVBAR_HEIGHT)
        .style(theme::chrome_bar)
        .into()
}

/// Full-screen menu shown when the compact navbar is expanded
pub fn overlay<'a>(current: Route) -> Element<'a, Message> {
    let close = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(24)
            .height(24)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press(Message::MenuClosed);

    let links = Route::NAV_LINKS
        .into_iter()
        .fold(column![].spacing(8).align_x(Alignment::Center), |links, link| {
            let active = routing::is_active(current, link);
            links.push(
                button(
                    text(link.label())
                        .size(26)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .style(move |theme| text::Style {
                            color: Some(if active {
                                theme::ACCENT
                            } else {
                                theme::text_primary(theme)
                            }),
                        }),
                )
                .padding(12)
                .style(|_theme, _status| button::Style::default())
                .on_press(Message::Navigate(link)),
            )
        });

    let content = column![
        container(close)
            .width(Length::Fill)
            .align_x(Alignment::End)
            .padding(iced::Padding::new(20.0).right(28.0)),
        container(links)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ];

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(iced::Color {
                a: 0.97,
                ..theme::background(theme)
            })),
            ..Default::default()
        })
        .into()
}
