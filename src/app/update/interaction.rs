//! Frame ticks, ripples, toasts and the odd chrome press

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, PageState, RippleSurface};
use crate::content::CategoryFilter;
use crate::routing::Route;
use crate::ui::widgets::toast::Toast;

impl App {
    pub(super) fn handle_interaction(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                let dt = self
                    .ui
                    .last_tick
                    .map(|last| (now - last).as_secs_f32())
                    // First frame after idling gets a nominal step
                    .unwrap_or(1.0 / 60.0)
                    .min(0.1);
                self.ui.last_tick = Some(now);

                match &mut self.ui.page {
                    PageState::Home { scene, reveal }
                    | PageState::About { scene, reveal }
                    | PageState::Stack { scene, reveal } => {
                        scene.advance(dt);
                        reveal.tick(now);
                    }
                    PageState::Projects {
                        scene,
                        reveal,
                        projects,
                    } => {
                        scene.advance(dt);
                        reveal.tick(now);
                        projects.card_hover.tick(now);
                    }
                    PageState::Contact { scene, reveal, .. } => {
                        scene.advance(dt);
                        reveal.tick(now);
                    }
                    PageState::NotFound { reveal } => reveal.tick(now),
                }
                Some(Task::none())
            }
            Message::RipplePressed(surface, at) => {
                let surface = *surface;
                let id = self.ui.ripples.press(surface, *at);
                let lifetime = self.core.settings.timing.ripple_duration();

                let expiry = Task::perform(
                    async move { tokio::time::sleep(lifetime).await },
                    move |_| Message::RippleExpired(surface, id),
                );

                Some(Task::batch([expiry, self.ripple_action(surface)]))
            }
            Message::RippleExpired(surface, id) => {
                self.ui.ripples.expire(*surface, *id);
                Some(Task::none())
            }
            Message::SocialPressed(name) => {
                tracing::info!(network = *name, "social link pressed");
                Some(self.show_toast(Toast::info(format!("Opening {name}..."))))
            }
            Message::ToastExpired(epoch) => {
                if *epoch == self.ui.toast_epoch {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// The action behind each ripple surface, run alongside the animation
    fn ripple_action(&mut self, surface: RippleSurface) -> Task<Message> {
        match action_message(surface) {
            Some(message) => Task::done(message),
            // The resume button is the odd one out, it only answers with a toast
            None => self.show_toast(Toast::info("Resume download coming soon")),
        }
    }

    /// Replace the visible toast and schedule its own hide timer
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_epoch += 1;
        let epoch = self.ui.toast_epoch;
        let lifetime = self.core.settings.timing.toast_duration();

        Task::perform(async move { tokio::time::sleep(lifetime).await }, move |_| {
            Message::ToastExpired(epoch)
        })
    }
}

/// The follow-up message a pressed surface resolves to, if any
fn action_message(surface: RippleSurface) -> Option<Message> {
    match surface {
        RippleSurface::HeroContact | RippleSurface::ProjectsCta => {
            Some(Message::Navigate(Route::Contact))
        }
        RippleSurface::HeroProjects => Some(Message::Navigate(Route::Projects)),
        RippleSurface::NotFoundHome => Some(Message::Navigate(Route::Home)),
        RippleSurface::ProjectsReset => Some(Message::CategorySelected(CategoryFilter::All)),
        RippleSurface::ContactSubmit => Some(Message::ContactSubmitted),
        RippleSurface::AboutResume => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn test_ripple_press_spawns_token() {
        let mut app = app();
        let _ = app.update(Message::RipplePressed(
            RippleSurface::HeroContact,
            iced::Point::new(12.0, 8.0),
        ));
        assert_eq!(app.ui.ripples.tokens(RippleSurface::HeroContact).len(), 1);
    }

    #[test]
    fn test_ripple_expiry_is_per_token() {
        let mut app = app();
        let first = app
            .ui
            .ripples
            .press(RippleSurface::ContactSubmit, iced::Point::ORIGIN);
        app.ui
            .ripples
            .press(RippleSurface::ContactSubmit, iced::Point::ORIGIN);

        let _ = app.update(Message::RippleExpired(RippleSurface::ContactSubmit, first));
        assert_eq!(app.ui.ripples.tokens(RippleSurface::ContactSubmit).len(), 1);
    }

    #[test]
    fn test_stale_toast_timer_does_not_hide_newer_toast() {
        let mut app = app();
        let _ = app.show_toast(Toast::info("first"));
        let stale_epoch = app.ui.toast_epoch;
        let _ = app.show_toast(Toast::info("second"));

        let _ = app.update(Message::ToastExpired(stale_epoch));
        assert!(app.ui.toast.is_some());

        let _ = app.update(Message::ToastExpired(app.ui.toast_epoch));
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn test_tick_advances_reveal() {
        let mut app = app();
        let _ = app.update(Message::AnimationTick);
        assert!(app.ui.last_tick.is_some());
    }

    #[test]
    fn test_reset_surface_restores_all_filter() {
        assert!(matches!(
            action_message(RippleSurface::ProjectsReset),
            Some(Message::CategorySelected(CategoryFilter::All))
        ));
    }

    #[test]
    fn test_navigation_surfaces_map_to_their_routes() {
        assert!(matches!(
            action_message(RippleSurface::HeroContact),
            Some(Message::Navigate(Route::Contact))
        ));
        assert!(matches!(
            action_message(RippleSurface::HeroProjects),
            Some(Message::Navigate(Route::Projects))
        ));
        assert!(matches!(
            action_message(RippleSurface::NotFoundHome),
            Some(Message::Navigate(Route::Home))
        ));
        assert!(matches!(
            action_message(RippleSurface::ContactSubmit),
            Some(Message::ContactSubmitted)
        ));
    }
}
