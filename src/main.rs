mod app;

use app::State;
use iced::Size;
use tracing_subscriber::EnvFilter;

use pickfield::config;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();
    let window_size = Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Pickfield");

    iced::application(move || State::new(&config), State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .window_size(window_size)
        .run()
}
