//! Contact form
//!
//! Four text fields and a ripple submit button. Submission is simulated:
//! while the send delay runs the button is swapped for an inert
//! "Sending..." face so repeated presses do nothing.

use std::time::Duration;

use iced::widget::{Space, column, text, text_input};
use iced::{Element, Length};

use crate::app::{ContactFields, Message, RippleSurface};
use crate::ui::animation::RippleToken;
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::ripple_button::{
    RippleSize, RippleVariant, ripple_button_disabled, ripple_button_fill,
};

fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label)
            .size(13)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(6),
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(10)
            .size(14)
            .style(theme::form_input),
    ]
    .width(Length::Fill)
    .into()
}

pub fn view<'a>(
    fields: &'a ContactFields,
    sending: bool,
    tokens: &'a [RippleToken],
    ripple_duration: Duration,
) -> Element<'a, Message> {
    let submit: Element<'a, Message> = if sending {
        ripple_button_disabled("Sending...", RippleVariant::Accent, RippleSize::Md)
    } else {
        ripple_button_fill(
            "Send Message",
            RippleVariant::Accent,
            RippleSize::Md,
            tokens,
            ripple_duration,
            |at| Message::RipplePressed(RippleSurface::ContactSubmit, at),
        )
    };

    column![
        field("Name", "Your name", &fields.name, Message::NameChanged),
        field(
            "Email",
            "your.email@example.com",
            &fields.email,
            Message::EmailChanged,
        ),
        field(
            "Subject",
            "What is this regarding?",
            &fields.subject,
            Message::SubjectChanged,
        ),
        field(
            "Message",
            "Tell me about your project...",
            &fields.message,
            Message::MessageBodyChanged,
        ),
        Space::new().height(4),
        submit,
    ]
    .spacing(16)
    .width(Length::Fill)
    .into()
}
