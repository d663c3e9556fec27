//! Application shell: state, messages, update dispatch and the root view

pub mod message;
pub mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::Settings;
use crate::routing::Route;

pub use message::Message;
pub use state::{App, ContactFields, RippleSurface, SubmissionError};

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = App::default();

        // First run: materialise the settings file with defaults
        if Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(error) = app.core.settings.save() {
                tracing::warn!(%error, "could not write default settings");
            }
        }

        // Optional deep link: `showreel /projects` starts on that page.
        // Unknown paths land on the 404 view, same as in-app navigation.
        if let Some(path) = std::env::args().nth(1) {
            let route = Route::from_path(&path);
            if route == Route::NotFound {
                tracing::error!(path = %path, "start path did not match any route");
            }
            app.ui.route = route;
            app.ui.page = app.fresh_page(route);
        }

        (app, Task::none())
    }

    /// Window title follows the current route
    pub fn title(&self) -> String {
        format!("Luca S. — Video Editor · {}", self.ui.route.label())
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ];

        if wants_frame_clock(
            self.has_active_animations(),
            self.core.settings.display.reduced_motion,
        ) {
            subscriptions.push(iced::window::frames().map(|_| Message::AnimationTick));
        }

        Subscription::batch(subscriptions)
    }
}

/// The frame clock runs only while something on screen is moving
fn wants_frame_clock(has_active_animations: bool, reduced_motion: bool) -> bool {
    has_active_animations && !reduced_motion
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_idle_when_nothing_animates() {
        assert!(!wants_frame_clock(false, false));
    }

    #[test]
    fn test_frame_clock_runs_for_animations() {
        assert!(wants_frame_clock(true, false));
    }

    #[test]
    fn test_reduced_motion_suppresses_frame_clock() {
        assert!(!wants_frame_clock(true, true));
    }
}
