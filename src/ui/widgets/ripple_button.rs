//! Button with an expanding press ripple
//!
//! A styled label stacked under a transparent overlay widget. The overlay
//! captures left presses, reports the press position local to the control,
//! and draws every live ripple as a growing, fading circle. Token lifetime
//! is owned by application state, not by the widget.

use std::time::Duration;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::widget::{container, stack, text};
use iced::{Background, Border, Color, Element, Length, Point, Rectangle, Size, Theme};

use crate::ui::animation::RippleToken;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Visual variants matching the site's button styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleVariant {
    Default,
    Outline,
    Accent,
}

/// Button sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleSize {
    Sm,
    Md,
    Lg,
}

impl RippleSize {
    fn text_size(&self) -> f32 {
        match self {
            RippleSize::Sm => 13.0,
            RippleSize::Md => 15.0,
            RippleSize::Lg => 17.0,
        }
    }

    fn padding(&self) -> iced::Padding {
        match self {
            RippleSize::Sm => iced::Padding::new(4.0).left(12.0).right(12.0),
            RippleSize::Md => iced::Padding::new(8.0).left(16.0).right(16.0),
            RippleSize::Lg => iced::Padding::new(12.0).left(24.0).right(24.0),
        }
    }
}

/// Transparent press-capture and ripple-drawing layer
struct RippleOverlay<'a, Message> {
    tokens: &'a [RippleToken],
    duration: Duration,
    on_press: Box<dyn Fn(Point) -> Message + 'a>,
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for RippleOverlay<'a, Message>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::stateless()
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn update(
        &mut self,
        _tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_over(bounds) {
                let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                shell.publish((self.on_press)(local));
                shell.capture_event();
            }
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        if self.tokens.is_empty() {
            return;
        }

        let bounds = layout.bounds();
        let max_radius = bounds.width.max(bounds.height);

        // Clip so expanding circles never spill past the button edge
        renderer.with_layer(bounds, |renderer| {
            for token in self.tokens {
                let progress = (token.spawned.elapsed().as_secs_f32()
                    / self.duration.as_secs_f32())
                .clamp(0.0, 1.0);
                if progress >= 1.0 {
                    continue;
                }

                let radius = 5.0 + progress * max_radius;
                let alpha = 0.3 * (1.0 - progress);
                let circle = Rectangle {
                    x: bounds.x + token.at.x - radius,
                    y: bounds.y + token.at.y - radius,
                    width: radius * 2.0,
                    height: radius * 2.0,
                };

                renderer.fill_quad(
                    renderer::Quad {
                        bounds: circle,
                        border: Border::default().rounded(radius),
                        ..Default::default()
                    },
                    Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha)),
                );
            }
        });
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<RippleOverlay<'a, Message>> for Element<'a, Message, Theme> {
    fn from(overlay: RippleOverlay<'a, Message>) -> Self {
        Element::new(overlay)
    }
}

fn face_style(theme: &Theme, variant: RippleVariant, enabled: bool) -> container::Style {
    let radius = Border {
        radius: 8.0.into(),
        ..Default::default()
    };
    match variant {
        RippleVariant::Accent => container::Style {
            background: Some(Background::Color(if enabled {
                theme::ACCENT
            } else {
                theme::accent_soft(0.4)
            })),
            text_color: Some(Color::WHITE),
            border: radius,
            ..Default::default()
        },
        RippleVariant::Outline => container::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: Some(theme::text_primary(theme)),
            border: Border {
                width: 1.0,
                color: theme::border_color(theme),
                ..radius
            },
            ..Default::default()
        },
        RippleVariant::Default => container::Style {
            background: Some(Background::Color(theme::surface(theme))),
            text_color: Some(theme::text_primary(theme)),
            border: radius,
            ..Default::default()
        },
    }
}

/// Create a ripple button
///
/// # Arguments
/// * `label` - Button caption
/// * `tokens` - Live ripples for this surface, owned by app state
/// * `duration` - Configured ripple lifetime, used to scale the animation
/// * `on_press` - Maps the local press position to a message
pub fn ripple_button<'a, Message: 'a>(
    label: &'a str,
    variant: RippleVariant,
    size: RippleSize,
    tokens: &'a [RippleToken],
    duration: Duration,
    on_press: impl Fn(Point) -> Message + 'a,
) -> Element<'a, Message> {
    let face = container(
        text(label)
            .size(size.text_size())
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .align_x(iced::Alignment::Center),
    )
    .padding(size.padding())
    .style(move |theme| face_style(theme, variant, true));

    let overlay = RippleOverlay {
        tokens,
        duration,
        on_press: Box::new(on_press),
    };

    stack![face, overlay].into()
}

/// Ripple button variant that stretches to its parent width
pub fn ripple_button_fill<'a, Message: 'a>(
    label: &'a str,
    variant: RippleVariant,
    size: RippleSize,
    tokens: &'a [RippleToken],
    duration: Duration,
    on_press: impl Fn(Point) -> Message + 'a,
) -> Element<'a, Message> {
    let face = container(
        text(label)
            .size(size.text_size())
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .width(Length::Fill)
            .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(size.padding())
    .style(move |theme| face_style(theme, variant, true));

    let overlay = RippleOverlay {
        tokens,
        duration,
        on_press: Box::new(on_press),
    };

    stack![face, overlay].into()
}

/// Inert variant shown while an action is in flight; captures nothing
pub fn ripple_button_disabled<'a, Message: 'a>(
    label: &'a str,
    variant: RippleVariant,
    size: RippleSize,
) -> Element<'a, Message> {
    container(
        text(label)
            .size(size.text_size())
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .width(Length::Fill)
            .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(size.padding())
    .style(move |theme| face_style(theme, variant, false))
    .into()
}
