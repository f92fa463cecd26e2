//! Demo gallery application wiring the carousel into an iced program

use crate::carousel::{self, CarouselMessage, CarouselState};
use crate::config::AppConfig;
use crate::constants::{card, carousel as layout, motion};
use crate::packages::{self, Package};
use crate::{cards, theme};
use iced::{
    Element, Length, Subscription, Task, Theme,
    widget::{column, container, scrollable},
    window,
};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    WindowResized(iced::Size),
    MotionTick(Instant),
}

/// Application state for the package gallery
#[derive(Debug)]
pub struct Gallery {
    carousel: CarouselState,
    packages: Vec<Package>,
    config: AppConfig,
}

impl Gallery {
    fn new(config: AppConfig) -> Self {
        let packages = packages::featured();
        let carousel = CarouselState::with_layout(
            packages.len(),
            card::BASE_WIDTH,
            layout::GAP,
            config.cards_per_page,
        );

        Self {
            carousel,
            packages,
            config,
        }
    }
}

/// Build the initial state and the task that fetches the first window size.
/// Arrow visibility stays undetermined (both hidden) until that size, a
/// resize event, or a viewport report arrives.
pub fn boot(config: AppConfig) -> (Gallery, Task<Message>) {
    let state = Gallery::new(config);
    let initial_size = window::get_latest()
        .and_then(window::get_size)
        .map(Message::WindowResized);

    (state, initial_size)
}

pub fn update(state: &mut Gallery, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(CarouselMessage::Next) => {
            match state.carousel.go_right(state.config.smooth_scroll) {
                Some(offset) => scrollable::scroll_to(state.carousel.scrollable_id(), offset),
                None => Task::none(),
            }
        }
        Message::Carousel(CarouselMessage::Previous) => {
            match state.carousel.go_left(state.config.smooth_scroll) {
                Some(offset) => scrollable::scroll_to(state.carousel.scrollable_id(), offset),
                None => Task::none(),
            }
        }
        Message::Carousel(CarouselMessage::Scrolled(viewport)) => {
            state.carousel.sync_viewport(&viewport);
            Task::none()
        }
        Message::WindowResized(size) => {
            state.carousel.set_viewport_width(size.width);
            Task::none()
        }
        Message::MotionTick(now) => match state.carousel.tick(now) {
            Some(offset) => scrollable::scroll_to(state.carousel.scrollable_id(), offset),
            None => Task::none(),
        },
    }
}

pub fn view(state: &Gallery) -> Element<'_, Message> {
    let items = state
        .packages
        .iter()
        .map(cards::package_card)
        .collect::<Vec<_>>();

    let strip =
        carousel::carousel("Featured packages", items, &state.carousel).map(Message::Carousel);

    container(column![strip].width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([30, 0])
        .style(theme::Container::Default.style())
        .into()
}

pub fn subscription(state: &Gallery) -> Subscription<Message> {
    let resizes = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

    if state.carousel.is_animating() {
        let frames = iced::time::every(motion::FRAME_INTERVAL)
            .map(|instant| Message::MotionTick(instant.into()));
        Subscription::batch([resizes, frames])
    } else {
        resizes
    }
}

pub fn theme(_state: &Gallery) -> Theme {
    theme::GalleryTheme::theme()
}
