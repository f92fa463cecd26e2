//! Horizontal card carousel for iced
//!
//! A fixed-width card strip paged by arrow buttons. Each press scrolls by
//! one page of cards (card width times cards-per-page, plus the gaps
//! between them) with an eased animation, and the arrows hide themselves
//! at the scroll boundaries. Geometry is injected through layout signals
//! (viewport reports and window resizes) rather than queried, so the
//! paging and visibility rules in [`carousel::CarouselState`] are plain
//! state that tests drive directly.

pub mod app;
pub mod cards;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod motion;
pub mod packages;
pub mod theme;

pub use carousel::{CarouselMessage, CarouselState};
pub use config::AppConfig;
