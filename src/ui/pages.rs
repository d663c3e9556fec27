//! Page views
//!
//! One module per route. Pages are pure functions of application state; all
//! interaction flows back through messages.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod stack;

use iced::widget::{Space, column, container, row};
use iced::{Element, Length};

/// Width cap shared by every page body
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

/// Center a page body and cap its width
fn content_column<'a, Message: 'a>(
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        container(body)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(iced::Padding::new(48.0).left(32.0).right(32.0))
    .into()
}

/// Lay elements out in equal-width rows of `per_row`
fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    per_row: usize,
    spacing: f32,
) -> Element<'a, Message> {
    let mut rows = column![].spacing(spacing);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut line = row![].spacing(spacing);
        let mut filled = 0;
        for item in items.by_ref().take(per_row) {
            line = line.push(container(item).width(Length::FillPortion(1)));
            filled += 1;
        }
        // Pad the last row so earlier cells keep their width
        while filled < per_row {
            line = line.push(container(Space::new()).width(Length::FillPortion(1)));
            filled += 1;
        }
        rows = rows.push(line);
    }

    rows.into()
}
