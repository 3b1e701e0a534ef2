//! Interactive menu engine.
//!
//! A [`MenuHost`] registers its actions as [`MenuItem`]s. The
//! [`MenuRegistry`] sorts them and groups them into one level of sections,
//! the [`Navigator`] renders a numbered view and resolves input against it,
//! and the [`MenuSession`] drives the whole thing turn by turn.

mod entry;
mod navigator;
mod registry;
mod session;


pub use entry::{ActionFn, DEFAULT_ORDER, INTERNAL_PREFIX, MenuEntry, MenuHost, MenuItem};
pub use navigator::{
    BACK_ID, BACK_LABEL, BACK_TOKENS, DisplayRow, NavigationResult, Navigator, SECTION_MARKER,
    View,
};
pub use registry::MenuRegistry;
pub use session::{MenuSession, SessionOptions, SessionSummary};
