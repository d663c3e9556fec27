//! Site footer: brand blurb, quick links, contact details, copyright

use chrono::Datelike;
use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content;
use crate::routing::Route;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

const QUICK_LINKS: [(&str, Route); 4] = [
    ("About Me", Route::Home),
    ("Technical Stack", Route::Stack),
    ("Projects", Route::Projects),
    ("Contact", Route::Contact),
];

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(15)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}

fn brand_column<'a>() -> Element<'a, Message> {
    let socials = content::SOCIALS.into_iter().fold(
        row![].spacing(4).align_y(Alignment::Center),
        |socials, name| {
            socials.push(
                button(
                    svg(svg::Handle::from_memory(icons::social(name).as_bytes()))
                        .width(18)
                        .height(18)
                        .style(|theme, _status| svg::Style {
                            color: Some(theme::text_muted(theme)),
                        }),
                )
                .padding(8)
                .style(theme::icon_button)
                .on_press(Message::SocialPressed(name)),
            )
        },
    );

    column![
        heading(content::NAME),
        text(content::ROLE).size(11).color(theme::ACCENT),
        Space::new().height(12),
        text(content::FOOTER_BLURB)
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(12),
        socials,
    ]
    .width(Length::FillPortion(2))
    .into()
}

fn links_column<'a>() -> Element<'a, Message> {
    QUICK_LINKS
        .into_iter()
        .fold(
            column![heading("Quick Links"), Space::new().height(8)].spacing(2),
            |links, (label, route)| {
                links.push(
                    button(text(label).size(13))
                        .padding(iced::Padding::new(4.0).left(0.0))
                        .style(theme::link_button)
                        .on_press(Message::Navigate(route)),
                )
            },
        )
        .width(Length::FillPortion(1))
        .into()
}

fn contact_column<'a>() -> Element<'a, Message> {
    let line = |icon: &'static str, value: &'static str| {
        row![
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(14)
                .height(14)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ACCENT),
                }),
            Space::new().width(8),
            text(value).size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .align_y(Alignment::Center)
    };

    column![
        heading("Contact"),
        Space::new().height(10),
        line(icons::MAIL, content::EMAIL),
        line(icons::PHONE, content::PHONE),
        line(icons::MAP_PIN, content::LOCATION_CITY),
    ]
    .spacing(8)
    .width(Length::FillPortion(1))
    .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let columns = row![brand_column(), links_column(), contact_column()].spacing(40);

    let divider = container(Space::new().width(Length::Fill).height(1)).style(|theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        }
    });

    let copyright = text(format!(
        "© {} {} All rights reserved.",
        chrono::Local::now().year(),
        content::NAME,
    ))
    .size(12)
    .style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    container(
        column![
            columns,
            Space::new().height(28),
            divider,
            Space::new().height(18),
            container(copyright).center_x(Length::Fill),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(iced::Padding::new(36.0).left(48.0).right(48.0))
    .style(theme::chrome_bar)
    .into()
}
