//! Horizontal card carousel
//!
//! [`CarouselState`] holds the scroll geometry and exposes the paging and
//! arrow-visibility rules; [`carousel`] renders the strip. All geometry
//! arrives through [`CarouselState::apply_metrics`] (from viewport reports)
//! or [`CarouselState::set_viewport_width`] (from window-size signals), so
//! the logic is fully exercisable without a renderer.

use crate::constants::{card, carousel as layout, motion as motion_constants};
use crate::motion::{Easing, Transition};
use crate::theme;
use iced::{
    Element, Length,
    widget::scrollable::Id as ScrollableId,
    widget::{Space, button, column, container, row, scrollable, text},
};
use std::time::Instant;

/// State for a card carousel
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Scrollable widget ID for programmatic scrolling
    scrollable_id: ScrollableId,
    /// Current scroll position in pixels
    scroll_position: f32,
    /// Visible width of the scrollable strip
    viewport_width: f32,
    /// Total width of the strip content
    content_width: f32,
    /// Width of a single card
    card_width: f32,
    /// Gap between adjacent cards
    gap: f32,
    /// Cards advanced per arrow press
    cards_per_page: usize,
    /// Total number of cards in the strip
    total_items: usize,
    /// Set once the first layout signal has arrived. Until then the
    /// geometry is unknown and both arrows stay hidden.
    metrics_ready: bool,
    /// In-flight smooth scroll, if any
    motion: Transition,
}

impl CarouselState {
    /// Create state for `total_items` cards with the default layout
    pub fn new(total_items: usize) -> Self {
        Self::with_layout(
            total_items,
            card::BASE_WIDTH,
            layout::GAP,
            layout::CARDS_PER_PAGE,
        )
    }

    /// Create state with explicit card geometry
    pub fn with_layout(total_items: usize, card_width: f32, gap: f32, cards_per_page: usize) -> Self {
        Self {
            scrollable_id: ScrollableId::unique(),
            scroll_position: 0.0,
            viewport_width: 0.0,
            content_width: 0.0,
            card_width,
            gap,
            cards_per_page,
            total_items,
            metrics_ready: false,
            motion: Transition::new(0.0, motion_constants::SCROLL_DURATION, Easing::EaseOutCubic),
        }
    }

    /// ID of the scrollable this state controls
    pub fn scrollable_id(&self) -> ScrollableId {
        self.scrollable_id.clone()
    }

    /// Pixels moved per arrow press: one page of cards plus the gaps
    /// between them
    pub fn scroll_amount(&self) -> f32 {
        self.card_width * self.cards_per_page as f32
            + self.gap * (self.cards_per_page.saturating_sub(1)) as f32
    }

    /// Maximum scroll position (content width minus viewport width)
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Current scroll position in pixels
    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    /// Whether a smooth scroll is currently in flight
    pub fn is_animating(&self) -> bool {
        self.motion.is_active()
    }

    /// Left arrow is shown only once the strip has scrolled off the start
    pub fn can_go_left(&self) -> bool {
        self.metrics_ready && self.scroll_position > 0.0
    }

    /// Right arrow is shown while there is still content past the viewport
    pub fn can_go_right(&self) -> bool {
        self.metrics_ready
            && self.scroll_position < self.max_scroll() - layout::EDGE_TOLERANCE
    }

    /// Update the total number of cards
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        if self.metrics_ready {
            self.content_width = self.natural_content_width();
            self.scroll_position = self.scroll_position.min(self.max_scroll());
        }
    }

    /// Record geometry reported by the scrollable's viewport
    pub fn sync_viewport(&mut self, viewport: &scrollable::Viewport) {
        self.apply_metrics(
            viewport.content_bounds().width,
            viewport.bounds().width,
            viewport.absolute_offset().x,
        );
    }

    /// Record geometry directly. This is the injection seam the viewport
    /// and resize signals feed; tests drive it with synthetic values.
    pub fn apply_metrics(&mut self, content_width: f32, viewport_width: f32, scroll_x: f32) {
        if self.total_items == 0 {
            return;
        }
        self.content_width = content_width;
        self.viewport_width = viewport_width;
        self.scroll_position = scroll_x;
        self.metrics_ready = true;
    }

    /// Re-evaluate geometry from a window-size signal. The content width is
    /// derived from the card layout; the next viewport report corrects any
    /// residual difference.
    pub fn set_viewport_width(&mut self, width: f32) {
        if self.total_items == 0 {
            return;
        }
        self.viewport_width = width;
        self.content_width = self.natural_content_width();
        self.metrics_ready = true;
        // Keep the position valid if the viewport grew
        self.scroll_position = self.scroll_position.min(self.max_scroll());
        log::debug!(
            "carousel metrics: viewport={:.0} content={:.0} max_scroll={:.0}",
            self.viewport_width,
            self.content_width,
            self.max_scroll()
        );
    }

    /// Page right by one scroll amount. Returns the offset to jump to when
    /// `smooth` is off; with `smooth` on, the in-flight transition feeds
    /// offsets through [`CarouselState::tick`] instead.
    pub fn go_right(&mut self, smooth: bool) -> Option<scrollable::AbsoluteOffset> {
        if !self.can_go_right() {
            return None;
        }
        let target = (self.anchor() + self.scroll_amount()).min(self.max_scroll());
        self.scroll_toward(target, smooth)
    }

    /// Page left by one scroll amount. Same contract as
    /// [`CarouselState::go_right`], mirrored direction.
    pub fn go_left(&mut self, smooth: bool) -> Option<scrollable::AbsoluteOffset> {
        if !self.can_go_left() {
            return None;
        }
        let target = (self.anchor() - self.scroll_amount()).max(0.0);
        self.scroll_toward(target, smooth)
    }

    /// Advance the scroll animation. Returns the offset to apply for this
    /// frame, or `None` once the animation has settled.
    pub fn tick(&mut self, now: Instant) -> Option<scrollable::AbsoluteOffset> {
        if !self.motion.is_active() {
            return None;
        }
        self.motion.update_at(now);
        self.scroll_position = self.motion.value();
        Some(self.scroll_offset())
    }

    /// Current position as an absolute scrollable offset
    pub fn scroll_offset(&self) -> scrollable::AbsoluteOffset {
        scrollable::AbsoluteOffset {
            x: self.scroll_position,
            y: 0.0,
        }
    }

    /// Base position for the next page target. Repeated presses during an
    /// animation chain from the in-flight target rather than the partial
    /// position.
    fn anchor(&self) -> f32 {
        if self.motion.is_active() {
            self.motion.target()
        } else {
            self.scroll_position
        }
    }

    fn scroll_toward(&mut self, target: f32, smooth: bool) -> Option<scrollable::AbsoluteOffset> {
        log::debug!(
            "carousel scroll: {:.0} -> {:.0} (smooth: {})",
            self.scroll_position,
            target,
            smooth
        );
        if smooth {
            self.motion.start(self.scroll_position, target);
            None
        } else {
            self.scroll_position = target;
            Some(self.scroll_offset())
        }
    }

    /// Content width implied by the card layout: leading edge padding plus
    /// the cards and the gaps between them
    fn natural_content_width(&self) -> f32 {
        if self.total_items == 0 {
            return 0.0;
        }
        layout::EDGE_PADDING
            + self.card_width * self.total_items as f32
            + self.gap * (self.total_items - 1) as f32
    }
}

/// Message for carousel navigation
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Previous,
    Next,
    Scrolled(scrollable::Viewport),
}

/// Render a titled carousel strip with arrow controls.
///
/// With no items this renders an empty element and wires no scroll
/// listener, so pages without carousel content stay inert.
pub fn carousel<'a>(
    title: &'a str,
    items: Vec<Element<'a, CarouselMessage>>,
    state: &CarouselState,
) -> Element<'a, CarouselMessage> {
    if items.is_empty() {
        return container(Space::with_height(0)).into();
    }

    let left_button = arrow_slot(state.can_go_left(), "‹", CarouselMessage::Previous);
    let right_button = arrow_slot(state.can_go_right(), "›", CarouselMessage::Next);

    let mut item_row = row![].spacing(layout::GAP);
    for item in items {
        item_row = item_row.push(item);
    }

    let strip = scrollable(row![
        Space::with_width(layout::EDGE_PADDING), // Start off the container edge
        item_row
    ])
    .id(state.scrollable_id())
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    ))
    .on_scroll(CarouselMessage::Scrolled)
    .width(Length::Fill)
    .height(Length::Fixed(layout::STRIP_HEIGHT));

    column![
        container(
            row![
                text(title)
                    .size(24)
                    .color(theme::GalleryTheme::TEXT_PRIMARY),
                Space::with_width(Length::Fill),
                row![left_button, Space::with_width(5), right_button]
                    .align_y(iced::Alignment::Center),
            ]
            .align_y(iced::Alignment::Center)
            .width(Length::Fill)
        )
        .padding([10, 20]),
        Space::with_height(10),
        strip,
    ]
    .width(Length::Fill)
    .into()
}

/// An arrow button inside a fixed-width slot. Hidden arrows leave the slot
/// empty so the header does not reflow at the scroll boundaries.
fn arrow_slot<'a>(
    visible: bool,
    glyph: &'a str,
    on_press: CarouselMessage,
) -> Element<'a, CarouselMessage> {
    let slot = if visible {
        container(
            button(
                text(glyph)
                    .size(20)
                    .color(theme::GalleryTheme::TEXT_PRIMARY),
            )
            .on_press(on_press)
            .padding([4, 10])
            .style(theme::Button::Arrow.style()),
        )
    } else {
        container(Space::with_width(0))
    };

    slot.width(Length::Fixed(layout::ARROW_SLOT_WIDTH))
        .center_x(Length::Fixed(layout::ARROW_SLOT_WIDTH))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ready_state() -> CarouselState {
        // 2000 px of content in an 800 px viewport: max_scroll = 1200
        let mut state = CarouselState::with_layout(12, 200.0, 20.0, 4);
        state.apply_metrics(2000.0, 800.0, 0.0);
        state
    }

    #[test]
    fn test_scroll_amount_from_card_geometry() {
        let state = CarouselState::with_layout(12, 200.0, 20.0, 4);
        // 4 cards plus the 3 gaps between them
        assert_eq!(state.scroll_amount(), 860.0);

        let narrow = CarouselState::with_layout(12, 150.0, 20.0, 4);
        assert_eq!(narrow.scroll_amount(), 660.0);
    }

    #[test]
    fn test_arrows_hidden_before_first_layout_signal() {
        let state = CarouselState::new(12);
        assert!(!state.can_go_left());
        assert!(!state.can_go_right());
    }

    #[test]
    fn test_arrow_visibility_at_start() {
        let state = ready_state();
        assert!(!state.can_go_left());
        assert!(state.can_go_right());
    }

    #[test]
    fn test_arrow_visibility_mid_scroll() {
        let mut state = ready_state();
        state.apply_metrics(2000.0, 800.0, 600.0);
        assert!(state.can_go_left());
        assert!(state.can_go_right());
    }

    #[test]
    fn test_arrow_visibility_at_end() {
        let mut state = ready_state();
        state.apply_metrics(2000.0, 800.0, 1200.0);
        assert!(state.can_go_left());
        assert!(!state.can_go_right());
    }

    #[test]
    fn test_right_arrow_tolerance_near_end() {
        // Sub-pixel short of the boundary still counts as the end
        let mut state = ready_state();
        state.apply_metrics(2000.0, 800.0, 1199.5);
        assert!(!state.can_go_right());

        state.apply_metrics(2000.0, 800.0, 1198.0);
        assert!(state.can_go_right());
    }

    #[test]
    fn test_navigation_is_symmetric() {
        let mut state = CarouselState::with_layout(30, 200.0, 20.0, 4);
        state.apply_metrics(6600.0, 800.0, 1000.0);

        let start = state.scroll_position();
        state.go_right(false).expect("should scroll right");
        assert_eq!(state.scroll_position(), start + state.scroll_amount());

        state.go_left(false).expect("should scroll left");
        assert_eq!(state.scroll_position(), start);
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let mut state = ready_state();
        state.apply_metrics(2000.0, 800.0, 500.0);

        state.go_right(false).expect("should scroll right");
        assert_eq!(state.scroll_position(), 1200.0); // clamped to max_scroll

        state.go_left(false).expect("should scroll left");
        assert_eq!(state.scroll_position(), 340.0);

        state.go_left(false).expect("should scroll left");
        assert_eq!(state.scroll_position(), 0.0); // clamped to start
    }

    #[test]
    fn test_navigation_refused_at_boundaries() {
        let mut state = ready_state();
        assert!(state.go_left(false).is_none());

        state.apply_metrics(2000.0, 800.0, 1200.0);
        assert!(state.go_right(false).is_none());
    }

    #[test]
    fn test_empty_carousel_ignores_metrics() {
        let mut state = CarouselState::new(0);
        state.apply_metrics(2000.0, 800.0, 0.0);
        state.set_viewport_width(800.0);
        assert!(!state.can_go_left());
        assert!(!state.can_go_right());
        assert!(state.go_right(false).is_none());
    }

    #[test]
    fn test_viewport_width_derives_content_width() {
        let mut state = CarouselState::with_layout(10, 200.0, 20.0, 4);
        state.set_viewport_width(800.0);
        // 20 edge padding + 10 cards + 9 gaps
        assert_eq!(state.max_scroll(), 2200.0 - 800.0);
        assert!(state.can_go_right());
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut state = CarouselState::with_layout(10, 200.0, 20.0, 4);
        state.set_viewport_width(800.0);
        state.apply_metrics(2200.0, 800.0, 1400.0);

        // Widening the window shrinks max_scroll; position follows
        state.set_viewport_width(1800.0);
        assert_eq!(state.scroll_position(), 400.0);
    }

    #[test]
    fn test_smooth_scroll_animates_to_target() {
        let mut state = ready_state();
        assert!(state.go_right(true).is_none());
        assert!(state.is_animating());

        let done = Instant::now() + Duration::from_secs(1);
        let offset = state.tick(done).expect("final frame");
        assert_eq!(offset.x, 860.0);
        assert_eq!(state.scroll_position(), 860.0);

        assert!(!state.is_animating());
        assert!(state.tick(done).is_none());
    }

    #[test]
    fn test_repeated_presses_chain_from_target() {
        let mut state = CarouselState::with_layout(30, 200.0, 20.0, 4);
        state.apply_metrics(6600.0, 800.0, 0.0);

        state.go_right(true);
        state.go_right(true);

        let done = Instant::now() + Duration::from_secs(1);
        state.tick(done);
        assert_eq!(state.scroll_position(), 1720.0);
    }

    #[test]
    fn test_shrinking_item_count_clamps_position() {
        let mut state = CarouselState::with_layout(10, 200.0, 20.0, 4);
        state.set_viewport_width(800.0);
        state.apply_metrics(2200.0, 800.0, 1400.0);

        state.set_total_items(5);
        // 20 + 5 * 200 + 4 * 20 = 1100 content, 300 max
        assert_eq!(state.scroll_position(), 300.0);
    }
}
