//! Markdown rendering seam.

use pulldown_cmark::{Options, Parser, html};

/// Turns one markdown segment into HTML.
pub trait MarkdownRenderer: Send + Sync {
    /// Renders `markdown` to an HTML string.
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by `pulldown-cmark`, with the GitHub
/// extensions documentation sites commonly rely on.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    /// Renderer with explicit parser options.
    #[must_use]
    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
