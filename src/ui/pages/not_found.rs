//! 404 page

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message, RippleSurface};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::ripple_button::{RippleSize, RippleVariant, ripple_button};

use super::content_column;

pub fn view(app: &App) -> Element<'_, Message> {
    let reveal = app.ui.page.reveal().progress();

    let card = container(
        column![
            text("404")
                .size(72)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .color(theme::ACCENT),
            Space::new().height(8),
            text("Oops! Page not found")
                .size(18)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(24),
            ripple_button(
                "Return to Home",
                RippleVariant::Accent,
                RippleSize::Md,
                app.ui.ripples.tokens(RippleSurface::NotFoundHome),
                app.core.settings.timing.ripple_duration(),
                |at| Message::RipplePressed(RippleSurface::NotFoundHome, at),
            ),
        ]
        .align_x(Alignment::Center),
    )
    .padding(56)
    .style(theme::glass_card);

    content_column(
        column![
            Space::new().height(80.0 + 40.0 * (1.0 - reveal)),
            container(card).center_x(Length::Fill),
        ]
        .width(Length::Fill),
    )
}
