//! Stack page: toolbox intro, proficiency sections, workflow phases

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::content;
use crate::ui::components::tech_stack;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::section_heading::{self, HeadingAlign};

use super::{content_column, grid};

fn toolbox_intro<'a>() -> Element<'a, Message> {
    let badge = container(
        svg(svg::Handle::from_memory(icons::CODE.as_bytes()))
            .width(22)
            .height(22)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
    )
    .width(44)
    .height(44)
    .center_x(44)
    .center_y(44)
    .style(theme::accent_badge);

    let prose = content::TOOLBOX_INTRO.into_iter().fold(
        column![].spacing(10),
        |prose, paragraph| {
            prose.push(text(paragraph).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }))
        },
    );

    container(
        row![
            badge,
            Space::new().width(20),
            column![
                text("My Toolbox")
                    .size(18)
                    .font(iced::Font {
                        weight: BOLD_WEIGHT,
                        ..Default::default()
                    })
                    .style(|theme| text::Style {
                        color: Some(theme::text_primary(theme)),
                    }),
                Space::new().height(10),
                prose,
            ]
            .width(Length::Fill),
        ]
        .align_y(Alignment::Start),
    )
    .width(Length::Fill)
    .padding(28)
    .style(theme::glass_card)
    .into()
}

fn workflow<'a>(reveal: f32) -> Element<'a, Message> {
    let cards = content::WORKFLOW
        .iter()
        .map(|phase| {
            let steps = phase.steps.iter().fold(column![].spacing(6), |steps, step| {
                steps.push(
                    row![
                        text("•").size(13).color(theme::ACCENT),
                        Space::new().width(8),
                        text(*step).size(13).style(|theme| text::Style {
                            color: Some(theme::text_muted(theme)),
                        }),
                    ]
                    .align_y(Alignment::Start),
                )
            });

            container(
                column![
                    text(phase.phase)
                        .size(30)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .color(theme::accent_soft(0.55)),
                    Space::new().height(8),
                    text(phase.title)
                        .size(17)
                        .font(iced::Font {
                            weight: BOLD_WEIGHT,
                            ..Default::default()
                        })
                        .style(|theme| text::Style {
                            color: Some(theme::text_primary(theme)),
                        }),
                    Space::new().height(12),
                    steps,
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
        section_heading::view("My Workflow", None, HeadingAlign::Left, reveal),
        Space::new().height(20),
        grid(cards, 3, 20.0),
    ]
    .into()
}

pub fn view(app: &App) -> Element<'_, Message> {
    let reveal = app.ui.page.reveal().progress();

    let sections = grid(
        content::TECH_SECTIONS
            .iter()
            .map(|section| tech_stack::view(section, reveal))
            .collect(),
        2,
        20.0,
    );

    content_column(column![
        section_heading::view(
            "Technical Stack",
            Some("Tools and software I rely on every day"),
            HeadingAlign::Center,
            reveal,
        ),
        Space::new().height(32),
        toolbox_intro(),
        Space::new().height(32),
        sections,
        Space::new().height(48),
        workflow(reveal),
    ])
}
