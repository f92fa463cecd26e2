//! Card views for the carousel strip

use crate::constants::card;
use crate::packages::Package;
use crate::theme;
use iced::{
    Element, Length,
    widget::{Space, column, container, text},
};

/// Render one fixed-width package card
pub fn package_card<'a, M: 'a>(package: &'a Package) -> Element<'a, M> {
    let image_area = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(card::BASE_HEIGHT))
        .style(theme::Container::Card.style());

    let details = column![
        text(&package.name)
            .size(16)
            .color(theme::GalleryTheme::TEXT_PRIMARY),
        text(&package.destination)
            .size(13)
            .color(theme::GalleryTheme::TEXT_SECONDARY),
        text(format!(
            "{} nights · ${}",
            package.nights, package.price_usd
        ))
        .size(13)
        .color(theme::GalleryTheme::TEXT_SECONDARY),
    ]
    .spacing(4)
    .padding([8, 4]);

    container(column![image_area, details])
        .width(Length::Fixed(card::BASE_WIDTH))
        .height(Length::Fixed(card::TOTAL_HEIGHT))
        .into()
}
