//! Proficiency bar widget
//!
//! Label, numeric level and an accent bar whose fill sweeps in with the
//! page reveal.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};

use crate::ui::theme::{self, MEDIUM_WEIGHT};

const BAR_HEIGHT: f32 = 8.0;

/// Create a skill bar; `level` is on a 0-10 scale, `reveal` is 0..1
pub fn view<'a, Message: 'a>(name: &'a str, level: f32, reveal: f32) -> Element<'a, Message> {
    let fraction = (level / 10.0).clamp(0.0, 1.0) * reveal.clamp(0.0, 1.0);

    let label = text(name)
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let value = text(format!("{:.1}/10", level))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let header = row![label, Space::new().width(Length::Fill), value]
        .align_y(iced::Alignment::Center);

    // Fill and remainder split the track with portion widths
    let fill_portion = (fraction * 1000.0).round().max(1.0) as u16;
    let rest_portion = 1000u16.saturating_sub(fill_portion).max(1);

    let fill = container(Space::new().height(BAR_HEIGHT))
        .width(Length::FillPortion(fill_portion))
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(theme::ACCENT)),
            border: iced::Border {
                radius: (BAR_HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let rest = Space::new()
        .width(Length::FillPortion(rest_portion))
        .height(BAR_HEIGHT);

    let track = container(row![fill, rest])
        .width(Length::Fill)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                radius: (BAR_HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    column![header, Space::new().height(6), track].into()
}
