//! Projects page: category filter and card hover state

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, PageState};
use crate::content;
use crate::ui::widgets::toast::Toast;

impl App {
    pub(super) fn handle_projects(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CategorySelected(filter) => {
                let reduced = self.core.settings.display.reduced_motion;
                if let PageState::Projects { projects, .. } = &mut self.ui.page {
                    projects.filter = *filter;
                    // A card under the pointer may have just been filtered out
                    if reduced {
                        projects.card_hover.snap_hovered(None);
                    } else {
                        projects.card_hover.set_hovered(None);
                    }
                }
                Some(Task::none())
            }
            Message::ProjectHovered(id) => {
                // No frame clock under reduced motion, so jump to the end value
                let reduced = self.core.settings.display.reduced_motion;
                if let PageState::Projects { projects, .. } = &mut self.ui.page {
                    if reduced {
                        projects.card_hover.snap_hovered(*id);
                    } else {
                        projects.card_hover.set_hovered(*id);
                    }
                }
                Some(Task::none())
            }
            Message::ProjectOpened(id) => {
                let Some(project) = content::project_by_id(*id) else {
                    tracing::warn!(id = *id, "pressed a project that is not in the catalog");
                    return Some(Task::none());
                };
                tracing::info!(id = *id, title = project.title, "project opened");
                Some(self.show_toast(Toast::info(format!("Opening \"{}\"...", project.title))))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, CategoryFilter};
    use crate::routing::Route;

    fn app_on_projects() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Projects));
        app
    }

    #[test]
    fn test_filter_selection_sticks() {
        let mut app = app_on_projects();
        let _ = app.update(Message::CategorySelected(CategoryFilter::Only(
            Category::Documentary,
        )));

        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert_eq!(projects.filter, CategoryFilter::Only(Category::Documentary));
            }
            _ => panic!("expected projects page"),
        }
    }

    #[test]
    fn test_hover_is_exclusive_across_cards() {
        let mut app = app_on_projects();
        let _ = app.update(Message::ProjectHovered(Some(1)));
        let _ = app.update(Message::ProjectHovered(Some(2)));

        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert!(!projects.card_hover.is_hovered(&1));
                assert!(projects.card_hover.is_hovered(&2));
            }
            _ => panic!("expected projects page"),
        }
    }

    #[test]
    fn test_filter_change_drops_hover() {
        let mut app = app_on_projects();
        let _ = app.update(Message::ProjectHovered(Some(3)));
        let _ = app.update(Message::CategorySelected(CategoryFilter::Only(
            Category::Corporate,
        )));

        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert!(!projects.card_hover.is_hovered(&3));
            }
            _ => panic!("expected projects page"),
        }
    }

    #[test]
    fn test_reduced_motion_hover_reaches_full_progress() {
        let mut app = app_on_projects();
        app.core.settings.display.reduced_motion = true;

        let _ = app.update(Message::ProjectHovered(Some(2)));
        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert_eq!(projects.card_hover.progress(&2), 1.0);
            }
            _ => panic!("expected projects page"),
        }

        let _ = app.update(Message::ProjectHovered(None));
        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert_eq!(projects.card_hover.progress(&2), 0.0);
            }
            _ => panic!("expected projects page"),
        }
    }

    #[test]
    fn test_reset_restores_all_filter() {
        let mut app = app_on_projects();
        let _ = app.update(Message::CategorySelected(CategoryFilter::Only(
            Category::Corporate,
        )));
        let _ = app.update(Message::CategorySelected(CategoryFilter::All));

        match &app.ui.page {
            PageState::Projects { projects, .. } => {
                assert_eq!(projects.filter, CategoryFilter::All);
            }
            _ => panic!("expected projects page"),
        }
    }

    #[test]
    fn test_opening_a_project_toasts() {
        let mut app = app_on_projects();
        let _ = app.update(Message::ProjectOpened(1));
        assert!(app.ui.toast.is_some());
    }

    #[test]
    fn test_unknown_project_id_is_harmless() {
        let mut app = app_on_projects();
        let _ = app.update(Message::ProjectOpened(99));
        assert!(app.ui.toast.is_none());
    }
}
