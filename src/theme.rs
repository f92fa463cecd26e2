//! Dark theme with high contrast electric blue accents

use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Const palette shared by every styled widget
#[derive(Debug, Clone, Copy)]
pub struct GalleryTheme;

impl GalleryTheme {
    // Core colors
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.0, 0.5, 1.0); // #0080FF
    pub const ACCENT_BLUE_GLOW: Color = Color::from_rgba(0.0, 0.5, 1.0, 0.3);

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1); // #1A1A1A
    pub const BUTTON_BG: Color = Color::from_rgb(0.15, 0.15, 0.15); // #262626
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7); // #B3B3B3

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BLACK;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT_BLUE;

        Theme::custom("Gallery".to_string(), palette)
    }
}

/// Container styles using closures
pub enum Container {
    Default,
    Card,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Default => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: Some(Background::Color(GalleryTheme::BLACK)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Card => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: Some(Background::Color(GalleryTheme::CARD_BG)),
                border: Border {
                    color: GalleryTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

/// Button styles using closures
pub enum Button {
    Arrow,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Arrow => |_, status| {
                let base = button::Style {
                    background: Some(Background::Color(GalleryTheme::BUTTON_BG)),
                    text_color: GalleryTheme::TEXT_PRIMARY,
                    border: Border {
                        color: GalleryTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                };

                match status {
                    button::Status::Hovered | button::Status::Pressed => button::Style {
                        border: Border {
                            color: GalleryTheme::ACCENT_BLUE,
                            ..base.border
                        },
                        shadow: Shadow {
                            color: GalleryTheme::ACCENT_BLUE_GLOW,
                            offset: iced::Vector::new(0.0, 0.0),
                            blur_radius: 8.0,
                        },
                        ..base
                    },
                    button::Status::Active | button::Status::Disabled => base,
                }
            },
        }
    }
}
