//! Inline component registry.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A zero-argument renderable spliced into article content.
pub trait InlineComponent: Send + Sync {
    /// Produces the component's HTML.
    fn render(&self) -> String;
}

impl<F> InlineComponent for F
where
    F: Fn() -> String + Send + Sync,
{
    fn render(&self) -> String {
        self()
    }
}

/// A pre-rendered HTML fragment, typically loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    /// Wraps raw HTML. The fragment is emitted verbatim.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }
}

impl InlineComponent for HtmlFragment {
    fn render(&self) -> String {
        self.0.clone()
    }
}

/// Name lookup used by the splicer.
pub trait ComponentLookup {
    /// Returns `true` if a component called `name` is registered.
    fn contains(&self, name: &str) -> bool;
}

impl<S, H> ComponentLookup for HashSet<S, H>
where
    S: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn contains(&self, name: &str) -> bool {
        Self::contains(self, name)
    }
}

/// Components available to article content, keyed by placeholder name.
#[derive(Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, Box<dyn InlineComponent>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` under `name`, returning any component it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        component: impl InlineComponent + 'static,
    ) -> Option<Box<dyn InlineComponent>> {
        self.components.insert(name.into(), Box::new(component))
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, component: impl InlineComponent + 'static) -> Self {
        self.register(name, component);
        self
    }

    /// Renders the component called `name`.
    #[must_use]
    pub fn render(&self, name: &str) -> Option<String> {
        self.components.get(name).map(|c| c.render())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentLookup for ComponentRegistry {
    fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_render() {
        let registry = ComponentRegistry::new()
            .with("Faq", HtmlFragment::new("<section>faq</section>"))
            .with("Clock", || "<time>now</time>".to_string());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Faq"));
        assert!(!registry.contains("faq"));
        assert_eq!(registry.render("Clock").as_deref(), Some("<time>now</time>"));
        assert!(registry.render("Missing").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Faq", "Clock"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.register("Faq", HtmlFragment::new("a")).is_none());
        let old = registry.register("Faq", HtmlFragment::new("b"));
        assert_eq!(old.map(|c| c.render()).as_deref(), Some("a"));
        assert_eq!(registry.render("Faq").as_deref(), Some("b"));
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ComponentRegistry::new().with("Faq", HtmlFragment::new(""));
        assert_eq!(
            format!("{registry:?}"),
            r#"ComponentRegistry { components: ["Faq"] }"#
        );
    }
}
