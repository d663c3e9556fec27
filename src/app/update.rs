//! Message dispatch
//!
//! Each handler claims the messages it owns and returns `None` for the
//! rest, so the dispatcher stays a straight waterfall.

mod contact;
mod interaction;
mod navigation;
mod projects;

use iced::Task;

use super::message::Message;
use super::state::App;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_projects(&message) {
            return task;
        }
        if let Some(task) = self.handle_contact(&message) {
            return task;
        }
        if let Some(task) = self.handle_interaction(&message) {
            return task;
        }

        Task::none()
    }
}
