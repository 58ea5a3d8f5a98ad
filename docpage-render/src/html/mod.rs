//! HTML output.
//!
//! - [`nav`]: navigation tree lists
//! - [`page`]: the article document
//! - [`escape`]: text, attribute and id helpers

pub mod escape;
pub mod nav;
pub mod page;

pub use nav::{NavOptions, render_navigation};
pub use page::{ArticleView, NavigationHtml, render_article};
