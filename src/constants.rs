//! Centralized layout constants for the carousel
//!
//! All spacing and sizing values live here so the view code and the scroll
//! math stay in agreement. The scroll distance is derived from these values;
//! changing a constant here changes both the rendered layout and the paging
//! distance together.

/// Card dimensions
pub mod card {
    /// Width of a package card in pixels
    pub const BASE_WIDTH: f32 = 200.0;

    /// Height of the card image area in pixels
    pub const BASE_HEIGHT: f32 = 180.0;

    /// Text area height below the image
    pub const TEXT_AREA_HEIGHT: f32 = 80.0;

    /// Total card height including text area
    pub const TOTAL_HEIGHT: f32 = BASE_HEIGHT + TEXT_AREA_HEIGHT;
}

/// Carousel strip layout
pub mod carousel {
    /// Gap between adjacent cards in pixels
    pub const GAP: f32 = 20.0;

    /// Cards advanced per arrow press
    pub const CARDS_PER_PAGE: usize = 4;

    /// Minimum cards per page accepted from configuration
    pub const MIN_CARDS_PER_PAGE: usize = 1;

    /// Maximum cards per page accepted from configuration
    pub const MAX_CARDS_PER_PAGE: usize = 8;

    /// Leading padding so the strip starts off the container edge
    pub const EDGE_PADDING: f32 = 20.0;

    /// Tolerance when testing for the right-hand scroll boundary.
    /// Absorbs sub-pixel rounding so the arrow does not flicker at the
    /// exact end position.
    pub const EDGE_TOLERANCE: f32 = 1.0;

    /// Fixed height of the scrollable strip
    pub const STRIP_HEIGHT: f32 = super::card::TOTAL_HEIGHT + 20.0;

    /// Width reserved for each arrow button slot in the header row
    pub const ARROW_SLOT_WIDTH: f32 = 40.0;
}

/// Scroll animation timing
pub mod motion {
    use std::time::Duration;

    /// Duration of one arrow-triggered scroll animation
    pub const SCROLL_DURATION: Duration = Duration::from_millis(300);

    /// Interval between animation frames while a scroll is in flight
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
