//! `docpage` Render - turns a page context into HTML
//!
//! Splits article content into markdown and component segments, renders
//! markdown through a pluggable [`content::MarkdownRenderer`], and lays the
//! result out with the navigation tree, mobile panels, "last updated" note
//! and report-issue link.

pub mod content;
pub mod error;
pub mod html;
pub mod issue;
pub mod renderer;

pub use error::RenderError;
pub use renderer::PageRenderer;
