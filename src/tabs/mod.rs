//! The unified tab model: entity types and the pure transition functions
//! that create, close, reopen, and navigate tabs of both kinds.

pub mod close;
pub mod create;
pub mod history;
pub mod model;
pub mod navigate;
pub mod order;
pub mod reopen;

pub use close::{close_file_tab, close_tab};
pub use create::{create_tab, CreateOutcome, TabOptions};
pub use history::{
    ClosedTab, ClosedTabEntry, UnifiedClosedTabEntry, MAX_CLOSED_TAB_HISTORY,
};
pub use model::{
    AgentSessionId, AiTab, FileLocation, FilePreviewTab, LogEntry, LogKind, LogSource,
    ShowThinking, StagedImage, TabId, TabState, TokenUsage, UnifiedTabRef, WizardState,
};
pub use navigate::{
    navigable_tabs, navigate_to_last_tab, navigate_to_last_unified_tab, navigate_to_next_tab,
    navigate_to_next_unified_tab, navigate_to_prev_tab, navigate_to_prev_unified_tab,
    navigate_to_tab_by_index, navigate_to_unified_tab_by_index, set_active_tab,
};
pub use order::{build_unified_tabs, ensure_in_unified_tab_order, UnifiedTab};
pub use reopen::{reopen_closed_tab, reopen_unified_closed_tab, ReopenOutcome};
