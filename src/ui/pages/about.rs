//! About page: profile card, journey, stats, experience timeline, skills

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message, RippleSurface};
use crate::content;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::ripple_button::{RippleSize, RippleVariant, ripple_button_fill};
use crate::ui::widgets::section_heading::{self, HeadingAlign};

use super::{content_column, grid};

fn profile_card(app: &App) -> Element<'_, Message> {
    let avatar = container(
        svg(svg::Handle::from_memory(icons::USER.as_bytes()))
            .width(44)
            .height(44)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
    )
    .width(96)
    .height(96)
    .center_x(96)
    .center_y(96)
    .style(theme::accent_badge);

    let fact = |icon: &'static str, value: &'static str| {
        row![
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(14)
                .height(14)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ACCENT),
                }),
            Space::new().width(8),
            text(value).size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ]
        .align_y(Alignment::Center)
    };

    container(
        column![
            container(avatar).center_x(Length::Fill),
            Space::new().height(16),
            container(
                text(content::NAME)
                    .size(20)
                    .font(iced::Font {
                        weight: BOLD_WEIGHT,
                        ..Default::default()
                    })
                    .style(|theme| text::Style {
                        color: Some(theme::text_primary(theme)),
                    }),
            )
            .center_x(Length::Fill),
            container(text(content::TAGLINE).size(13).color(theme::ACCENT)).center_x(Length::Fill),
            Space::new().height(20),
            column![
                fact(icons::MAP_PIN, content::LOCATION_CITY),
                fact(icons::MAIL, content::EMAIL),
                fact(icons::PHONE, content::PHONE),
            ]
            .spacing(8),
            Space::new().height(20),
            ripple_button_fill(
                "Download Resume",
                RippleVariant::Outline,
                RippleSize::Md,
                app.ui.ripples.tokens(RippleSurface::AboutResume),
                app.core.settings.timing.ripple_duration(),
                |at| Message::RipplePressed(RippleSurface::AboutResume, at),
            ),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(28)
    .style(theme::glass_card)
    .into()
}

fn journey<'a>() -> Element<'a, Message> {
    content::JOURNEY
        .into_iter()
        .fold(
            column![
                text("My Journey")
                    .size(20)
                    .font(iced::Font {
                        weight: BOLD_WEIGHT,
                        ..Default::default()
                    })
                    .color(theme::ACCENT),
                Space::new().height(4),
            ]
            .spacing(12),
            |prose, paragraph| {
                prose.push(text(paragraph).size(14).style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }))
            },
        )
        .into()
}

fn stat_tiles<'a>() -> Element<'a, Message> {
    let tiles = content::STATS
        .iter()
        .map(|stat| {
            container(
                column![
                    text(stat.value)
                        .size(30)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .color(theme::ACCENT),
                    Space::new().height(4),
                    text(stat.label).size(13).style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                ]
                .align_x(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(24)
            .center_x(Length::Fill)
            .style(theme::muted_tile)
            .into()
        })
        .collect();

    grid(tiles, 3, 20.0)
}

fn timeline<'a>(reveal: f32) -> Element<'a, Message> {
    content::TIMELINE
        .iter()
        .fold(
            column![
                section_heading::view("Experience", None, HeadingAlign::Left, reveal),
                Space::new().height(8),
            ]
            .spacing(16),
            |entries, entry| {
                entries.push(
                    container(
                        column![
                            text(entry.years).size(12).font(iced::Font {
                                weight: MEDIUM_WEIGHT,
                                ..Default::default()
                            }).color(theme::ACCENT),
                            Space::new().height(4),
                            text(entry.position)
                                .size(17)
                                .font(iced::Font {
                                    weight: BOLD_WEIGHT,
                                    ..Default::default()
                                })
                                .style(|theme| text::Style {
                                    color: Some(theme::text_primary(theme)),
                                }),
                            text(entry.company).size(13).style(|theme| text::Style {
                                color: Some(theme::text_secondary(theme)),
                            }),
                            Space::new().height(8),
                            text(entry.description).size(13).style(|theme| text::Style {
                                color: Some(theme::text_muted(theme)),
                            }),
                        ]
                        .width(Length::Fill),
                    )
                    .width(Length::Fill)
                    .padding(24)
                    .style(theme::glass_card),
                )
            },
        )
        .into()
}

fn skills_grid<'a>(reveal: f32) -> Element<'a, Message> {
    let cards = content::SKILLS
        .iter()
        .map(|skill| {
            container(
                column![
                    text(skill.icon).size(26),
                    Space::new().height(10),
                    text(skill.title)
                        .size(16)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .style(|theme| text::Style {
                            color: Some(theme::text_primary(theme)),
                        }),
                    Space::new().height(8),
                    text(skill.description).size(13).style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                ]
                .width(Length::Fill),
            )
            .width(Length::Fill)
            .height(180)
            .padding(20)
            .style(theme::glass_card)
            .into()
        })
        .collect();

    column![
        section_heading::view("My Skills", None, HeadingAlign::Left, reveal),
        Space::new().height(20),
        grid(cards, 3, 20.0),
    ]
    .into()
}

pub fn view(app: &App) -> Element<'_, Message> {
    let reveal = app.ui.page.reveal().progress();

    let top = row![
        container(profile_card(app)).width(Length::FillPortion(2)),
        container(journey()).width(Length::FillPortion(3)),
    ]
    .spacing(28);

    content_column(column![
        section_heading::view("About Me", None, HeadingAlign::Left, reveal),
        Space::new().height(28),
        top,
        Space::new().height(40),
        stat_tiles(),
        Space::new().height(48),
        timeline(reveal),
        Space::new().height(48),
        skills_grid(reveal),
    ])
}
