//! `docpage` Core - navigation tree, page state and configuration schema
//!
//! This crate holds the rendering-independent parts of an article page:
//! the navigation arena and its expansion/position state machines, the
//! page-level state, and the site configuration types shared by
//! `docpage` (CLI/server) and `docpage-render` (HTML output).

pub mod config;
pub mod error;
pub mod navigation;
pub mod page;
