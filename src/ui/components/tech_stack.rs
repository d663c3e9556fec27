//! Tech stack card: one proficiency group on a glass panel

use iced::widget::{Space, column, container, text};
use iced::{Element, Length};

use crate::content::TechSection;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::skill_bar;

/// Render one stack section; `reveal` sweeps the bars in on page entry
pub fn view<'a, Message: 'a>(section: &'a TechSection, reveal: f32) -> Element<'a, Message> {
    let bars = section.items.iter().fold(
        column![].spacing(14),
        |bars, item| bars.push(skill_bar::view(item.name, item.level, reveal)),
    );

    container(
        column![
            text(section.title)
                .size(18)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .color(theme::ACCENT),
            Space::new().height(18),
            bars,
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(24)
    .style(theme::glass_card)
    .into()
}
