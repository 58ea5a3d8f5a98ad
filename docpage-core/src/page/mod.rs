//! Page-level inputs and state.
//!
//! - [`PageContext`]: what the data layer supplies for one article
//! - [`Location`]: the current pathname, query and hash
//! - [`PageState`]: scroll position, sidebar height and mobile panel flags

pub mod context;
pub mod location;
pub mod state;

pub use context::{PageContext, format_timestamp};
pub use location::Location;
pub use state::{MobilePanel, PageState, PanelIcon};
