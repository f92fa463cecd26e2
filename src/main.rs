use card_carousel::app;
use card_carousel::config::AppConfig;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("card_carousel", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();

    iced::application("Card Carousel", app::update, app::view)
        .subscription(app::subscription)
        .theme(app::theme)
        .window_size(iced::Size::new(1280.0, 640.0))
        .run_with(move || app::boot(config))
}
