//! Article navigation tree.
//!
//! The navigation for an article is a nested list of items. It is stored as
//! an arena ([`NavigationArena`]) and viewed through a [`NavigationTree`],
//! which owns per-level expansion state. The root tree additionally drives
//! a scroll-position state machine ([`PositionTracker`]) whose viewport
//! listeners are registered through an injected [`ScrollObserver`].

pub mod active;
pub mod expansion;
pub mod item;
pub mod observer;
pub mod position;
pub mod tree;
pub mod validate;

pub use active::{is_active, resolve_path};
pub use expansion::{ExpansionState, ToggleOutcome};
pub use item::{
    ItemShape, NavigationArena, NavigationContext, NavigationEntry, NavigationItem, NodeId,
};
pub use observer::{
    BindingChange, BindingDeps, Handler, ListenerId, ListenerRegistry, ScrollBinding,
    ScrollObserver, ViewportEvent,
};
pub use position::{NavGeometry, Position, PositionTracker, Rect, Thresholds, Transition};
pub use tree::{NavRow, NavigationTree};
pub use validate::validate_navigation;
