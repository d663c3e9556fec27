//! Routing, menu and window messages

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, MenuState};
use crate::routing::Route;
use crate::ui::components::navbar;

impl App {
    pub(super) fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(route) => {
                // Re-selecting the current route only dismisses the menu;
                // the page, its scene and any form draft stay put
                if *route == self.ui.route {
                    self.ui.menu = MenuState::Closed;
                    return Some(Task::none());
                }

                if *route == Route::NotFound {
                    tracing::error!(path = route.path(), "navigated to an unknown path");
                } else {
                    tracing::info!(path = route.path(), "navigate");
                }

                self.ui.route = *route;
                self.ui.menu = MenuState::Closed;
                // Old ripples belong to controls that no longer exist
                self.ui.ripples.clear();
                self.ui.page = self.fresh_page(*route);
                Some(Task::none())
            }
            Message::MenuOpened => {
                self.ui.menu = MenuState::Open;
                Some(Task::none())
            }
            Message::MenuClosed => {
                self.ui.menu = MenuState::Closed;
                Some(Task::none())
            }
            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
                // The menu only exists in compact mode
                if size.width >= navbar::COMPACT_BREAKPOINT {
                    self.ui.menu = MenuState::Closed;
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PageState;
    use crate::ui::scene::SceneKind;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn test_navigate_swaps_page_and_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::MenuOpened);
        let _ = app.update(Message::Navigate(Route::About));

        assert_eq!(app.ui.route, Route::About);
        assert_eq!(app.ui.menu, MenuState::Closed);
        assert_eq!(
            app.ui.page.scene().map(|scene| scene.kind()),
            Some(SceneKind::Torus)
        );
    }

    #[test]
    fn test_navigate_to_current_route_keeps_page() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Contact));
        if let PageState::Contact { contact, .. } = &mut app.ui.page {
            contact.fields.name = "Ada".into();
        }

        let _ = app.update(Message::Navigate(Route::Contact));
        match &app.ui.page {
            PageState::Contact { contact, .. } => assert_eq!(contact.fields.name, "Ada"),
            _ => panic!("expected contact page"),
        }
    }

    #[test]
    fn test_navigation_drops_live_ripples() {
        let mut app = app();
        app.ui
            .ripples
            .press(crate::app::RippleSurface::HeroContact, iced::Point::ORIGIN);
        let _ = app.update(Message::Navigate(Route::Stack));
        assert!(!app.ui.ripples.any_active());
    }

    #[test]
    fn test_reduced_motion_navigation_mounts_revealed_pages() {
        let mut app = app();
        app.core.settings.display.reduced_motion = true;
        let _ = app.update(Message::Navigate(Route::Stack));

        assert!(app.ui.page.reveal().progress() >= 1.0);
        assert!(!app.ui.page.reveal().is_animating());
    }

    #[test]
    fn test_widening_window_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::MenuOpened);
        let _ = app.update(Message::WindowResized(iced::Size::new(1400.0, 900.0)));
        assert_eq!(app.ui.menu, MenuState::Closed);
    }
}
