//! The Session aggregate, its queries, and merged-session construction.

mod merge;
#[allow(clippy::module_inception)]
mod session;

pub use merge::{create_merged_session, MergedSessionOptions, ToolType};
pub use session::{append_log_to_active_tab, InputMode, Session, SessionRef};
