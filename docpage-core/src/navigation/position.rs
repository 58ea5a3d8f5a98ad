//! Scroll-position state machine for the root navigation.
//!
//! The sidebar navigation scrolls with the page until its container reaches
//! the fixed header, then sticks (`fixed`). Once the navigation's bottom
//! reaches the bottom of its container it stops following (`bottom`) and
//! re-engages when scrolled back up past the header.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Height reserved for the persistent page header, in pixels.
pub const DEFAULT_FIXED_HEADER_OFFSET: f64 = 64.0;

/// Slack when comparing the navigation bottom with its container bottom.
pub const DEFAULT_BOTTOM_TOLERANCE: f64 = 20.0;

/// Width subtracted from the container when computing the navigation max width.
pub const WIDTH_GUTTER: f64 = 20.0;

/// Position of the root navigation relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Scrolls with the page.
    #[default]
    Top,
    /// Pinned below the header.
    Fixed,
    /// Parked at the bottom of its container.
    Bottom,
}

impl Position {
    /// Lowercase name, used for CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Fixed => "fixed",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A viewport-relative bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Rect {
    /// Creates a rect from its edges in CSS order.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }
}

/// Measured boxes of the navigation list and its parent container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavGeometry {
    /// The navigation list itself.
    pub nav: Rect,
    /// The element containing the navigation.
    pub container: Rect,
}

/// Thresholds the state machine compares against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Header height; the container sticks once its top passes this line.
    pub header_offset: f64,
    /// Slack for the bottom-reached test.
    pub bottom_tolerance: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_FIXED_HEADER_OFFSET,
            bottom_tolerance: DEFAULT_BOTTOM_TOLERANCE,
        }
    }
}

/// Computes the next position. Rules are checked in order, first match wins:
///
/// 1. `top` and container top at or above the header line → `fixed`
/// 2. not `top` and container top below the header line → `top`
/// 3. not `bottom` and nav bottom within tolerance of container bottom → `bottom`
/// 4. `bottom` and nav top at or below the header line → `fixed`
#[must_use]
pub fn next_position(current: Position, geometry: &NavGeometry, thresholds: &Thresholds) -> Position {
    let container = geometry.container;
    let nav = geometry.nav;

    if current == Position::Top && container.top <= thresholds.header_offset {
        Position::Fixed
    } else if current != Position::Top && container.top > thresholds.header_offset {
        Position::Top
    } else if current != Position::Bottom
        && nav.bottom >= container.bottom - thresholds.bottom_tolerance
    {
        Position::Bottom
    } else if current == Position::Bottom && nav.top >= thresholds.header_offset {
        Position::Fixed
    } else {
        current
    }
}

/// A change of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Previous position.
    pub from: Position,
    /// New position.
    pub to: Position,
}

/// Position and measured bounds owned by the root navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTracker {
    position: Position,
    min_height: Option<f64>,
    max_width: Option<f64>,
    thresholds: Thresholds,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl PositionTracker {
    /// Creates a tracker in the `top` position with nothing measured.
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self {
            position: Position::Top,
            min_height: None,
            max_width: None,
            thresholds,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Last measured navigation height.
    #[must_use]
    pub const fn min_height(&self) -> Option<f64> {
        self.min_height
    }

    /// Last measured maximum width.
    #[must_use]
    pub const fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Re-evaluates the position after a scroll or touch move.
    ///
    /// Returns the transition if the position changed. Missing geometry
    /// (navigation not mounted) leaves the state untouched.
    pub fn on_scroll(&mut self, geometry: Option<&NavGeometry>) -> Option<Transition> {
        let geometry = geometry?;
        let next = next_position(self.position, geometry, &self.thresholds);
        if next == self.position {
            return None;
        }

        let transition = Transition {
            from: self.position,
            to: next,
        };
        debug!(from = %transition.from, to = %transition.to, "navigation position changed");
        self.position = next;
        Some(transition)
    }

    /// Records the navigation height. Returns `true` only when it changed.
    #[allow(clippy::float_cmp)]
    pub fn update_min_height(&mut self, nav: Option<&Rect>) -> bool {
        let Some(nav) = nav else {
            return false;
        };
        let height = nav.height();
        if self.min_height == Some(height) {
            return false;
        }
        self.min_height = Some(height);
        true
    }

    /// Records the navigation max width from its parent box. Returns `true`
    /// only when it changed.
    #[allow(clippy::float_cmp)]
    pub fn update_max_width(&mut self, parent: Option<&Rect>) -> bool {
        let Some(parent) = parent else {
            return false;
        };
        let width = parent.width() - WIDTH_GUTTER;
        if self.max_width == Some(width) {
            return false;
        }
        self.max_width = Some(width);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: f64 = DEFAULT_FIXED_HEADER_OFFSET;

    fn geometry(container_top: f64, container_bottom: f64, nav_top: f64, nav_bottom: f64) -> NavGeometry {
        NavGeometry {
            nav: Rect::new(nav_top, 300.0, nav_bottom, 0.0),
            container: Rect::new(container_top, 320.0, container_bottom, 0.0),
        }
    }

    #[test]
    fn test_position_names() {
        assert_eq!(Position::Top.to_string(), "top");
        assert_eq!(Position::Fixed.as_str(), "fixed");
        assert_eq!(Position::Bottom.as_str(), "bottom");
        assert_eq!(Position::default(), Position::Top);
    }

    #[test]
    fn test_top_to_fixed_at_threshold() {
        let mut tracker = PositionTracker::default();
        let g = geometry(OFFSET, 2000.0, OFFSET, OFFSET + 400.0);
        let t = tracker.on_scroll(Some(&g)).unwrap();
        assert_eq!(t, Transition { from: Position::Top, to: Position::Fixed });
        assert_eq!(tracker.position(), Position::Fixed);
    }

    #[test]
    fn test_stays_top_below_threshold() {
        let mut tracker = PositionTracker::default();
        let g = geometry(OFFSET + 1.0, 2000.0, OFFSET + 1.0, OFFSET + 400.0);
        assert!(tracker.on_scroll(Some(&g)).is_none());
        assert_eq!(tracker.position(), Position::Top);
    }

    #[test]
    fn test_fixed_back_to_top() {
        let mut tracker = PositionTracker::default();
        tracker.on_scroll(Some(&geometry(-100.0, 2000.0, OFFSET + 20.0, 500.0)));
        assert_eq!(tracker.position(), Position::Fixed);

        let t = tracker.on_scroll(Some(&geometry(OFFSET + 50.0, 2000.0, OFFSET + 50.0, 500.0)));
        assert_eq!(t, Some(Transition { from: Position::Fixed, to: Position::Top }));
    }

    #[test]
    fn test_fixed_to_bottom_when_nav_reaches_container_bottom() {
        let mut tracker = PositionTracker::default();
        tracker.on_scroll(Some(&geometry(-100.0, 2000.0, OFFSET + 20.0, 500.0)));

        // Container bottom at 510, nav bottom at 495: within the 20px tolerance.
        let t = tracker.on_scroll(Some(&geometry(-1500.0, 510.0, 100.0, 495.0)));
        assert_eq!(t, Some(Transition { from: Position::Fixed, to: Position::Bottom }));
    }

    #[test]
    fn test_top_to_bottom_when_container_below_header() {
        // A short container still below the header: rule 3 applies from top.
        let mut tracker = PositionTracker::default();
        let t = tracker.on_scroll(Some(&geometry(200.0, 420.0, 200.0, 410.0)));
        assert_eq!(t, Some(Transition { from: Position::Top, to: Position::Bottom }));
    }

    #[test]
    fn test_bottom_back_to_fixed() {
        let mut tracker = PositionTracker::default();
        tracker.on_scroll(Some(&geometry(-100.0, 2000.0, OFFSET + 20.0, 500.0)));
        tracker.on_scroll(Some(&geometry(-1500.0, 510.0, 100.0, 495.0)));
        assert_eq!(tracker.position(), Position::Bottom);

        // Scrolling back up: nav top moves below the header line, container
        // top still above it, nav bottom clear of the container bottom.
        let t = tracker.on_scroll(Some(&geometry(-1000.0, 1010.0, OFFSET + 10.0, 480.0)));
        assert_eq!(t, Some(Transition { from: Position::Bottom, to: Position::Fixed }));
    }

    #[test]
    fn test_bottom_holds_while_nav_above_header() {
        let mut tracker = PositionTracker::default();
        tracker.on_scroll(Some(&geometry(-100.0, 2000.0, OFFSET + 20.0, 500.0)));
        tracker.on_scroll(Some(&geometry(-1500.0, 510.0, 100.0, 495.0)));

        let t = tracker.on_scroll(Some(&geometry(-1600.0, 410.0, 0.0, 395.0)));
        assert!(t.is_none());
        assert_eq!(tracker.position(), Position::Bottom);
    }

    #[test]
    fn test_scroll_without_geometry_is_noop() {
        let mut tracker = PositionTracker::default();
        assert!(tracker.on_scroll(None).is_none());
        assert_eq!(tracker.position(), Position::Top);
    }

    #[test]
    fn test_min_height_write_is_gated() {
        let mut tracker = PositionTracker::default();
        let nav = Rect::new(100.0, 300.0, 600.0, 0.0);
        assert!(tracker.update_min_height(Some(&nav)));
        assert_eq!(tracker.min_height(), Some(500.0));
        assert!(!tracker.update_min_height(Some(&nav)));

        let moved = Rect::new(-50.0, 300.0, 450.0, 0.0);
        assert!(!tracker.update_min_height(Some(&moved)), "same height, new offset");

        let taller = Rect::new(100.0, 300.0, 700.0, 0.0);
        assert!(tracker.update_min_height(Some(&taller)));
        assert_eq!(tracker.min_height(), Some(600.0));
    }

    #[test]
    fn test_max_width_subtracts_gutter() {
        let mut tracker = PositionTracker::default();
        let parent = Rect::new(0.0, 320.0, 900.0, 20.0);
        assert!(tracker.update_max_width(Some(&parent)));
        assert_eq!(tracker.max_width(), Some(280.0));
        assert!(!tracker.update_max_width(Some(&parent)));
    }

    #[test]
    fn test_measurements_without_anchor_are_noops() {
        let mut tracker = PositionTracker::default();
        assert!(!tracker.update_min_height(None));
        assert!(!tracker.update_max_width(None));
        assert_eq!(tracker.min_height(), None);
        assert_eq!(tracker.max_width(), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = PositionTracker::new(Thresholds {
            header_offset: 100.0,
            bottom_tolerance: 0.0,
        });
        assert!(tracker.on_scroll(Some(&geometry(90.0, 2000.0, 90.0, 400.0))).is_some());
        assert_eq!(tracker.position(), Position::Fixed);
    }
}
