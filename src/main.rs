//! Showreel - portfolio application for a freelance video editor
//!
//! Single-window iced application with routed pages, ambient animated
//! backgrounds and a simulated contact form.

mod app;
mod content;
mod features;
mod routing;
mod ui;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Showreel");

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(1280.0, 860.0))
        .run()
}
