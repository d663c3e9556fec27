//! Contact page: info card, contact form, FAQ

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::state::ContactState;
use crate::app::{App, Message, RippleSurface};
use crate::content;
use crate::ui::components::contact_form;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::section_heading::{self, HeadingAlign};

use super::{content_column, grid};

fn detail(
    icon: &'static str,
    label: &'static str,
    lines: &'static [&'static str],
) -> Element<'static, Message> {
    let badge = container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(16)
            .height(16)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
    )
    .width(36)
    .height(36)
    .center_x(36)
    .center_y(36)
    .style(theme::accent_badge);

    let body = lines.iter().fold(
        column![
            text(label).size(14).font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }).style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        ]
        .spacing(2),
        |body, line| {
            body.push(text(*line).size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }))
        },
    );

    row![badge, Space::new().width(14), body]
        .align_y(Alignment::Start)
        .into()
}

fn info_card<'a>() -> Element<'a, Message> {
    let socials = content::SOCIALS.into_iter().fold(
        row![].spacing(4).align_y(Alignment::Center),
        |socials, network| {
            socials.push(
                button(
                    svg(svg::Handle::from_memory(icons::social(network).as_bytes()))
                        .width(18)
                        .height(18)
                        .style(|theme, _status| svg::Style {
                            color: Some(theme::text_muted(theme)),
                        }),
                )
                .padding(8)
                .style(theme::icon_button)
                .on_press(Message::SocialPressed(network)),
            )
        },
    );

    container(
        column![
            text("Contact Information")
                .size(18)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            Space::new().height(24),
            detail(icons::MAIL, "Email", &[content::EMAIL]),
            detail(icons::PHONE, "Phone", &[content::PHONE]),
            detail(
                icons::MAP_PIN,
                "Location",
                &[content::LOCATION_CITY, content::LOCATION_COUNTRY],
            ),
            detail(
                icons::CLOCK,
                "Working Hours",
                &[content::HOURS_WEEK, content::HOURS_WEEKEND],
            ),
            Space::new().height(20),
            socials,
        ]
        .spacing(18)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(28)
    .style(theme::glass_card)
    .into()
}

fn faq<'a>(reveal: f32) -> Element<'a, Message> {
    let cards = content::FAQ
        .iter()
        .map(|entry| {
            container(
                column![
                    text(entry.question)
                        .size(15)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .style(|theme| text::Style {
                            color: Some(theme::text_primary(theme)),
                        }),
                    Space::new().height(10),
                    text(entry.answer).size(13).style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                ]
                .width(Length::Fill),
            )
            .width(Length::Fill)
            .padding(24)
            .style(theme::glass_card)
            .into()
        })
        .collect();

    column![
        section_heading::view(
            "Frequently Asked Questions",
            None,
            HeadingAlign::Left,
            reveal,
        ),
        Space::new().height(20),
        grid(cards, 2, 20.0),
    ]
    .into()
}

pub fn view<'a>(app: &'a App, contact: &'a ContactState) -> Element<'a, Message> {
    let reveal = app.ui.page.reveal().progress();

    let form_card = container(
        column![
            text("Send Me a Message")
                .size(18)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            Space::new().height(20),
            contact_form::view(
                &contact.fields,
                contact.sending,
                app.ui.ripples.tokens(RippleSurface::ContactSubmit),
                app.core.settings.timing.ripple_duration(),
            ),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(28)
    .style(theme::glass_card);

    let body = row![
        container(info_card()).width(Length::FillPortion(2)),
        container(form_card).width(Length::FillPortion(3)),
    ]
    .spacing(28);

    content_column(column![
        section_heading::view(
            "Get In Touch",
            Some("Have a project in mind? Let's talk about it."),
            HeadingAlign::Center,
            reveal,
        ),
        Space::new().height(32),
        body,
        Space::new().height(48),
        faq(reveal),
    ])
}
