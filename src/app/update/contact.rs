//! Contact form edits and the simulated submission

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, PageState};
use crate::ui::widgets::toast::Toast;

impl App {
    pub(super) fn handle_contact(&mut self, message: &Message) -> Option<Task<Message>> {
        // Every contact message is meaningless off the contact page
        let PageState::Contact { contact, .. } = &mut self.ui.page else {
            return match message {
                Message::NameChanged(_)
                | Message::EmailChanged(_)
                | Message::SubjectChanged(_)
                | Message::MessageBodyChanged(_)
                | Message::ContactSubmitted
                | Message::ContactDelivered(_) => Some(Task::none()),
                _ => None,
            };
        };

        match message {
            Message::NameChanged(value) => {
                contact.fields.name = value.clone();
                Some(Task::none())
            }
            Message::EmailChanged(value) => {
                contact.fields.email = value.clone();
                Some(Task::none())
            }
            Message::SubjectChanged(value) => {
                contact.fields.subject = value.clone();
                Some(Task::none())
            }
            Message::MessageBodyChanged(value) => {
                contact.fields.message = value.clone();
                Some(Task::none())
            }
            Message::ContactSubmitted => Some(self.submit()),
            Message::ContactDelivered(epoch) => {
                if contact.sending && *epoch == contact.submit_epoch {
                    contact.fields.clear();
                    contact.sending = false;
                    tracing::info!("contact form delivered");
                    Some(self.show_toast(Toast::success("Message sent successfully!")))
                } else {
                    // Completion of a submission that was superseded
                    Some(Task::none())
                }
            }
            _ => None,
        }
    }

    fn submit(&mut self) -> Task<Message> {
        let delay = self.core.settings.timing.submit_delay();

        let PageState::Contact { contact, .. } = &mut self.ui.page else {
            return Task::none();
        };

        if contact.sending {
            return Task::none();
        }

        if let Err(error) = contact.fields.validate() {
            tracing::warn!(%error, "contact form rejected");
            return self.show_toast(Toast::error(error.to_string()));
        }

        contact.sending = true;
        contact.submit_epoch += 1;
        let epoch = contact.submit_epoch;
        tracing::info!("contact form submitted");

        Task::perform(async move { tokio::time::sleep(delay).await }, move |_| {
            Message::ContactDelivered(epoch)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ContactState;
    use crate::routing::Route;

    fn app_on_contact() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Contact));
        app
    }

    fn contact(app: &App) -> &ContactState {
        match &app.ui.page {
            PageState::Contact { contact, .. } => contact,
            _ => panic!("expected contact page"),
        }
    }

    fn fill_fields(app: &mut App) {
        for message in [
            Message::NameChanged("Ada".into()),
            Message::EmailChanged("ada@example.com".into()),
            Message::SubjectChanged("Edit".into()),
            Message::MessageBodyChanged("A short film needs cutting.".into()),
        ] {
            let _ = app.update(message);
        }
    }

    #[test]
    fn test_empty_submit_is_rejected_and_preserves_fields() {
        let mut app = app_on_contact();
        let _ = app.update(Message::NameChanged("Ada".into()));
        let _ = app.update(Message::ContactSubmitted);

        let state = contact(&app);
        assert!(!state.sending);
        assert_eq!(state.fields.name, "Ada");
        assert!(matches!(
            app.ui.toast,
            Some(Toast {
                style: crate::ui::widgets::toast::ToastStyle::Error,
                ..
            })
        ));
    }

    #[test]
    fn test_full_submit_enters_sending() {
        let mut app = app_on_contact();
        fill_fields(&mut app);
        let _ = app.update(Message::ContactSubmitted);

        assert!(contact(&app).sending);
    }

    #[test]
    fn test_second_submit_while_sending_is_ignored() {
        let mut app = app_on_contact();
        fill_fields(&mut app);
        let _ = app.update(Message::ContactSubmitted);
        let epoch = contact(&app).submit_epoch;

        let _ = app.update(Message::ContactSubmitted);
        assert_eq!(contact(&app).submit_epoch, epoch);
    }

    #[test]
    fn test_delivery_clears_fields_and_toasts_success() {
        let mut app = app_on_contact();
        fill_fields(&mut app);
        let _ = app.update(Message::ContactSubmitted);
        let epoch = contact(&app).submit_epoch;

        let _ = app.update(Message::ContactDelivered(epoch));
        let state = contact(&app);
        assert!(!state.sending);
        assert!(state.fields.name.is_empty());
        assert!(matches!(
            app.ui.toast,
            Some(Toast {
                style: crate::ui::widgets::toast::ToastStyle::Success,
                ..
            })
        ));
    }

    #[test]
    fn test_stale_delivery_is_ignored() {
        let mut app = app_on_contact();
        fill_fields(&mut app);
        let _ = app.update(Message::ContactSubmitted);
        let epoch = contact(&app).submit_epoch;

        let _ = app.update(Message::ContactDelivered(epoch + 5));
        let state = contact(&app);
        assert!(state.sending);
        assert_eq!(state.fields.name, "Ada");
    }

    #[test]
    fn test_contact_messages_off_page_are_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::NameChanged("Ada".into()));
        let _ = app.update(Message::ContactDelivered(1));
        assert!(matches!(app.ui.page, PageState::Home { .. }));
    }
}
