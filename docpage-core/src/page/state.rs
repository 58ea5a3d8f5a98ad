//! Page-level state: root navigation position, sidebar height and the two
//! mobile inline navigation panels.

use crate::navigation::observer::{Handler, ListenerRegistry, ViewportEvent};
use crate::navigation::position::{NavGeometry, Position, PositionTracker, Thresholds};

/// One of the two collapsible inline navigation panels shown on small screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobilePanel {
    /// Above the article.
    Top,
    /// Below the article.
    Bottom,
}

impl MobilePanel {
    /// Lowercase name, used in element ids and tracking labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Icon on a panel's toggle link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIcon {
    /// Panel closed.
    Ellipsis,
    /// Panel open.
    ChevronUp,
}

/// State owned by the article page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    tracker: PositionTracker,
    mobile_top_open: bool,
    mobile_bottom_open: bool,
}

impl PageState {
    /// Fresh state: navigation at `top`, nothing measured, panels closed.
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self {
            tracker: PositionTracker::new(thresholds),
            mobile_top_open: false,
            mobile_bottom_open: false,
        }
    }

    /// Root navigation position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.tracker.position()
    }

    /// Measured navigation height, used as the sidebar's minimum height.
    #[must_use]
    pub const fn min_height(&self) -> Option<f64> {
        self.tracker.min_height()
    }

    /// Measured navigation max width.
    #[must_use]
    pub const fn max_width(&self) -> Option<f64> {
        self.tracker.max_width()
    }

    /// Underlying position tracker.
    #[must_use]
    pub const fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Sidebar minimum height in `rem` (10px per rem plus 4rem padding).
    #[must_use]
    pub fn sidebar_min_height_rem(&self) -> f64 {
        self.min_height().unwrap_or(0.0) / 10.0 + 4.0
    }

    /// Returns `true` if `panel` is expanded.
    #[must_use]
    pub const fn is_open(&self, panel: MobilePanel) -> bool {
        match panel {
            MobilePanel::Top => self.mobile_top_open,
            MobilePanel::Bottom => self.mobile_bottom_open,
        }
    }

    /// Flips `panel` and returns its new state. Panels are independent.
    pub const fn toggle_mobile(&mut self, panel: MobilePanel) -> bool {
        let flag = match panel {
            MobilePanel::Top => &mut self.mobile_top_open,
            MobilePanel::Bottom => &mut self.mobile_bottom_open,
        };
        *flag = !*flag;
        *flag
    }

    /// Icon for `panel`'s toggle link.
    #[must_use]
    pub const fn panel_icon(&self, panel: MobilePanel) -> PanelIcon {
        if self.is_open(panel) {
            PanelIcon::ChevronUp
        } else {
            PanelIcon::Ellipsis
        }
    }

    /// Measures the navigation when its listeners are (re)attached.
    ///
    /// Call this whenever [`ScrollBinding::sync`] reports
    /// [`BindingChange::Attached`], so a freshly mounted or re-bound
    /// sidebar has its height and width before the first resize. Writes
    /// are change-gated like the resize handlers. Returns `true` if either
    /// measurement changed.
    ///
    /// [`ScrollBinding::sync`]: crate::navigation::observer::ScrollBinding::sync
    /// [`BindingChange::Attached`]: crate::navigation::observer::BindingChange::Attached
    pub fn on_attach(&mut self, geometry: Option<&NavGeometry>) -> bool {
        let height = self.tracker.update_min_height(geometry.map(|g| &g.nav));
        let width = self.tracker.update_max_width(geometry.map(|g| &g.container));
        height || width
    }

    /// Runs the handlers registered for `event`.
    ///
    /// Only listeners present in `registry` fire, so a detached or disabled
    /// navigation ignores viewport events. Returns `true` if any state
    /// changed. `geometry` is `None` while the navigation is not mounted.
    pub fn dispatch(
        &mut self,
        registry: &ListenerRegistry,
        event: ViewportEvent,
        geometry: Option<&NavGeometry>,
    ) -> bool {
        let mut changed = false;
        for handler in registry.handlers_for(event) {
            changed |= match handler {
                Handler::OnScroll => self.tracker.on_scroll(geometry).is_some(),
                Handler::UpdateMinHeight => self.tracker.update_min_height(geometry.map(|g| &g.nav)),
                Handler::UpdateMaxWidth => {
                    self.tracker.update_max_width(geometry.map(|g| &g.container))
                }
            };
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::observer::ScrollObserver;
    use crate::navigation::position::Rect;

    #[test]
    fn test_panels_toggle_independently() {
        let mut state = PageState::default();
        assert!(!state.is_open(MobilePanel::Top));
        assert!(state.toggle_mobile(MobilePanel::Top));
        assert!(state.is_open(MobilePanel::Top));
        assert!(!state.is_open(MobilePanel::Bottom));
        assert!(state.toggle_mobile(MobilePanel::Bottom));
        assert!(!state.toggle_mobile(MobilePanel::Top));
        assert!(state.is_open(MobilePanel::Bottom));
    }

    #[test]
    fn test_panel_icon_flips() {
        let mut state = PageState::default();
        assert_eq!(state.panel_icon(MobilePanel::Bottom), PanelIcon::Ellipsis);
        state.toggle_mobile(MobilePanel::Bottom);
        assert_eq!(state.panel_icon(MobilePanel::Bottom), PanelIcon::ChevronUp);
        assert_eq!(state.panel_icon(MobilePanel::Top), PanelIcon::Ellipsis);
    }

    #[test]
    fn test_sidebar_min_height_rem() {
        let mut state = PageState::default();
        assert!((state.sidebar_min_height_rem() - 4.0).abs() < f64::EPSILON);

        let mut registry = ListenerRegistry::new();
        registry.subscribe(ViewportEvent::Resize, Handler::UpdateMinHeight);
        let geometry = NavGeometry {
            nav: Rect::new(0.0, 200.0, 320.0, 0.0),
            container: Rect::new(0.0, 220.0, 900.0, 0.0),
        };
        assert!(state.dispatch(&registry, ViewportEvent::Resize, Some(&geometry)));
        assert!((state.sidebar_min_height_rem() - 36.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dispatch_without_listeners_is_ignored() {
        let mut state = PageState::default();
        let registry = ListenerRegistry::new();
        let geometry = NavGeometry {
            nav: Rect::new(-10.0, 200.0, 300.0, 0.0),
            container: Rect::new(-10.0, 220.0, 900.0, 0.0),
        };
        assert!(!state.dispatch(&registry, ViewportEvent::Scroll, Some(&geometry)));
        assert_eq!(state.position(), Position::Top);
    }

    #[test]
    fn test_on_attach_measures_without_resize() {
        let mut state = PageState::default();
        let geometry = NavGeometry {
            nav: Rect::new(0.0, 200.0, 320.0, 0.0),
            container: Rect::new(0.0, 220.0, 900.0, 0.0),
        };
        assert!(state.on_attach(Some(&geometry)));
        assert_eq!(state.min_height(), Some(320.0));
        assert_eq!(state.max_width(), Some(200.0));
        assert!(!state.on_attach(Some(&geometry)));
    }

    #[test]
    fn test_on_attach_unmounted_keeps_measurements() {
        let mut state = PageState::default();
        assert!(!state.on_attach(None));
        assert_eq!(state.min_height(), None);
        assert_eq!(state.max_width(), None);
    }

    #[test]
    fn test_resize_second_dispatch_is_idempotent() {
        let mut state = PageState::default();
        let mut registry = ListenerRegistry::new();
        registry.subscribe(ViewportEvent::Resize, Handler::UpdateMinHeight);
        registry.subscribe(ViewportEvent::Resize, Handler::UpdateMaxWidth);
        let geometry = NavGeometry {
            nav: Rect::new(0.0, 200.0, 320.0, 0.0),
            container: Rect::new(0.0, 220.0, 900.0, 0.0),
        };
        assert!(state.dispatch(&registry, ViewportEvent::Resize, Some(&geometry)));
        assert!(!state.dispatch(&registry, ViewportEvent::Resize, Some(&geometry)));
        assert_eq!(state.max_width(), Some(200.0));
    }
}
