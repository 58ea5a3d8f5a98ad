//! Site configuration and page context loading for the CLI.
//!
//! The schema lives in `docpage-core`; this module reads files, applies
//! environment overrides and validates.

pub mod loader;
pub mod validation;

pub use loader::{
    DEFAULT_CONFIG_FILE, ENV_FIXED_HEADER_OFFSET, ENV_GITHUB_REPOSITORY, LoadedSite, PageFormat,
    load_page_context, load_pages_dir, load_site_config, load_site_config_with,
};
pub use validation::{ValidationResult, Validator, validate_page};
