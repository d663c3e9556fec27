//! Home page: hero, call-to-action buttons, socials, about teaser

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message, RippleSurface};
use crate::content;
use crate::routing::Route;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::ripple_button::{RippleSize, RippleVariant, ripple_button};

use super::content_column;

pub fn view(app: &App) -> Element<'_, Message> {
    let reveal = app.ui.page.reveal().progress();
    let timing = &app.core.settings.timing;

    let role_badge = container(
        text(content::ROLE_LONG)
            .size(12)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .color(theme::ACCENT),
    )
    .padding(iced::Padding::new(6.0).left(14.0).right(14.0))
    .style(theme::accent_badge);

    let name = text(content::NAME)
        .size(52)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let blurb = container(
        text(content::HERO_BLURB)
            .size(15)
            .align_x(Alignment::Center)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .max_width(620);

    let actions = row![
        ripple_button(
            "Get in Touch",
            RippleVariant::Accent,
            RippleSize::Lg,
            app.ui.ripples.tokens(RippleSurface::HeroContact),
            timing.ripple_duration(),
            |at| Message::RipplePressed(RippleSurface::HeroContact, at),
        ),
        ripple_button(
            "View Projects",
            RippleVariant::Outline,
            RippleSize::Lg,
            app.ui.ripples.tokens(RippleSurface::HeroProjects),
            timing.ripple_duration(),
            |at| Message::RipplePressed(RippleSurface::HeroProjects, at),
        ),
    ]
    .spacing(16);

    let socials = content::SOCIALS.into_iter().fold(
        row![].spacing(4).align_y(Alignment::Center),
        |socials, network| {
            socials.push(
                button(
                    svg(svg::Handle::from_memory(icons::social(network).as_bytes()))
                        .width(20)
                        .height(20)
                        .style(|theme, _status| svg::Style {
                            color: Some(theme::text_muted(theme)),
                        }),
                )
                .padding(10)
                .style(theme::icon_button)
                .on_press(Message::SocialPressed(network)),
            )
        },
    );

    let hero = column![
        role_badge,
        Space::new().height(20),
        name,
        Space::new().height(16),
        blurb,
        Space::new().height(28),
        actions,
        Space::new().height(20),
        socials,
    ]
    .align_x(Alignment::Center);

    // Teaser card pointing at the full about page
    let teaser = container(
        column![
            text("About Me")
                .size(20)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .color(theme::ACCENT),
            Space::new().height(12),
            text(content::ABOUT_TEASER)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(14),
            button(
                row![
                    text("Learn more").size(14).color(theme::ACCENT),
                    Space::new().width(6),
                    svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
                        .width(14)
                        .height(14)
                        .style(|_theme, _status| svg::Style {
                            color: Some(theme::ACCENT),
                        }),
                ]
                .align_y(Alignment::Center),
            )
            .padding(0)
            .style(theme::link_button)
            .on_press(Message::Navigate(Route::About)),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(28)
    .style(theme::glass_card);

    content_column(
        column![
            Space::new().height(60.0 * (1.0 - reveal)),
            hero,
            Space::new().height(64),
            teaser,
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
}
