//! Article body: placeholder splicing and markdown rendering.

pub mod markdown;
pub mod registry;
pub mod splicer;

pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use registry::{ComponentLookup, ComponentRegistry, HtmlFragment, InlineComponent};
pub use splicer::{ContentSegment, placeholders, splice, unregistered_placeholders};

/// Renders article `content` to HTML.
///
/// Markdown segments go through `markdown` one at a time; component
/// segments are replaced by the registered component's output.
pub fn render_content<M>(content: &str, markdown: &M, components: &ComponentRegistry) -> String
where
    M: MarkdownRenderer + ?Sized,
{
    splice(content, components)
        .into_iter()
        .filter_map(|segment| match segment {
            ContentSegment::Markdown(text) => Some(markdown.render(text)),
            ContentSegment::Component(name) => components.render(name),
        })
        .collect()
}
