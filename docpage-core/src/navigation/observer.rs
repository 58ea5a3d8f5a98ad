//! Viewport listener registration for the root navigation.
//!
//! The root navigation reacts to scroll, touch-move and resize events. The
//! event source is abstracted as a [`ScrollObserver`] with explicit
//! `subscribe`/`unsubscribe`, and [`ScrollBinding`] owns the lifecycle:
//! whenever one of its [`BindingDeps`] changes, every listener it registered
//! is removed before the new set is attached.

use tracing::debug;

use super::position::Position;

/// Viewport events the navigation listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    /// Page scrolled.
    Scroll,
    /// Touch moved (mobile scrolling).
    TouchMove,
    /// Viewport resized.
    Resize,
}

/// Work performed when a subscribed event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Re-evaluate the position state machine.
    OnScroll,
    /// Re-measure the navigation height.
    UpdateMinHeight,
    /// Re-measure the navigation max width.
    UpdateMaxWidth,
}

/// Listeners registered by the root navigation.
pub const ROOT_LISTENERS: [(ViewportEvent, Handler); 4] = [
    (ViewportEvent::Resize, Handler::UpdateMinHeight),
    (ViewportEvent::Resize, Handler::UpdateMaxWidth),
    (ViewportEvent::Scroll, Handler::OnScroll),
    (ViewportEvent::TouchMove, Handler::OnScroll),
];

/// Handle returned by [`ScrollObserver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Source of viewport events.
pub trait ScrollObserver {
    /// Registers `handler` for `event`.
    fn subscribe(&mut self, event: ViewportEvent, handler: Handler) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// A registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    /// Registration handle.
    pub id: ListenerId,
    /// Event listened to.
    pub event: ViewportEvent,
    /// Work to run.
    pub handler: Handler,
}

/// In-process listener table, standing in for the window's registry.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers subscribed to `event`, in registration order.
    #[must_use]
    pub fn handlers_for(&self, event: ViewportEvent) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|l| l.event == event)
            .map(|l| l.handler)
            .collect()
    }

    /// All registered listeners.
    #[must_use]
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl ScrollObserver for ListenerRegistry {
    fn subscribe(&mut self, event: ViewportEvent, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, event, handler });
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }
}

/// Inputs that force the root binding to re-register its listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDeps {
    /// Identity of the root navigation (its path).
    pub root: String,
    /// Whether this tree is the root instance.
    pub is_root: bool,
    /// Whether the navigation element is mounted.
    pub mounted: bool,
    /// Current position.
    pub position: Position,
    /// Root expansion revision.
    pub expansion_revision: u64,
    /// Whether scroll tracking is enabled.
    pub auto_scroll: bool,
}

impl BindingDeps {
    /// Returns `true` when these inputs call for attached listeners.
    #[must_use]
    pub const fn wants_listeners(&self) -> bool {
        self.is_root && self.mounted && self.auto_scroll
    }
}

/// What [`ScrollBinding::sync`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingChange {
    /// Inputs unchanged; nothing touched.
    Unchanged,
    /// Previous listeners removed and a fresh set attached.
    Attached,
    /// Previous listeners removed; none attached.
    Detached,
}

/// Lifecycle of the root navigation's listeners.
#[derive(Debug, Default)]
pub struct ScrollBinding {
    deps: Option<BindingDeps>,
    active: Vec<ListenerId>,
}

impl ScrollBinding {
    /// Creates a binding with nothing attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles registered listeners with `deps`.
    ///
    /// A no-op when `deps` equals the previous call's. Otherwise all
    /// listeners from the previous call are removed first, then the root
    /// set is attached if `deps` asks for it. On [`BindingChange::Attached`]
    /// the caller measures the navigation with
    /// [`PageState::on_attach`](crate::page::PageState::on_attach).
    pub fn sync<O: ScrollObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        deps: BindingDeps,
    ) -> BindingChange {
        if self.deps.as_ref() == Some(&deps) {
            return BindingChange::Unchanged;
        }

        self.teardown(observer);
        let attach = deps.wants_listeners();
        self.deps = Some(deps);

        if !attach {
            return BindingChange::Detached;
        }

        self.active = ROOT_LISTENERS
            .iter()
            .map(|&(event, handler)| observer.subscribe(event, handler))
            .collect();
        debug!(count = self.active.len(), "viewport listeners attached");
        BindingChange::Attached
    }

    /// Removes every listener this binding registered. Returns how many
    /// were removed.
    pub fn teardown<O: ScrollObserver + ?Sized>(&mut self, observer: &mut O) -> usize {
        let removed = self
            .active
            .drain(..)
            .filter(|&id| observer.unsubscribe(id))
            .count();
        if removed > 0 {
            debug!(count = removed, "viewport listeners removed");
        }
        removed
    }

    /// Returns `true` while listeners are registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.active.is_empty()
    }
}
