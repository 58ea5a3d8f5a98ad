//! `docpage` - documentation article page renderer
//!
//! Command-line front end over `docpage-core` and `docpage-render`: loads
//! the site configuration and page contexts, renders pages to HTML and
//! serves them for local preview.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod server;
