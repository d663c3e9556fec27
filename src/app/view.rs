//! Root view: scene underlay, chrome, page body, overlays

use iced::widget::{Stack, column, container, scrollable};
use iced::{Element, Length};

use crate::ui::components::{footer, navbar};
use crate::ui::widgets::toast::view_toast;
use crate::ui::{pages, scene, theme};

use super::message::Message;
use super::state::{App, MenuState, PageState};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match &self.ui.page {
            PageState::Home { .. } => pages::home::view(self),
            PageState::About { .. } => pages::about::view(self),
            PageState::Stack { .. } => pages::stack::view(self),
            PageState::Projects { projects, .. } => pages::projects::view(self, projects),
            PageState::Contact { contact, .. } => pages::contact::view(self, contact),
            PageState::NotFound { .. } => pages::not_found::view(self),
        };

        let body = scrollable(column![page, footer::view()].width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::page_scrollable);

        let chrome = column![navbar::view(self.ui.route, self.ui.window_width), body];

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        // Solid backdrop so the scene never shows the window through
        layers = layers.push(
            container(iced::widget::Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::main_content),
        );

        if !self.core.settings.display.reduced_motion {
            if let Some(ambient) = self.ui.page.scene() {
                layers = layers.push(scene::view(ambient));
            }
        }

        layers = layers.push(chrome);

        if self.ui.menu == MenuState::Open {
            layers = layers.push(navbar::overlay(self.ui.route));
        }

        if let Some(toast) = &self.ui.toast {
            layers = layers.push(
                container(view_toast(toast))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .padding(24),
            );
        }

        layers.into()
    }
}
