pub mod session;
pub mod store;
pub mod tabs;
pub mod util;

pub use session::{
    append_log_to_active_tab, create_merged_session, InputMode, MergedSessionOptions, Session,
    SessionRef, ToolType,
};
pub use store::{SessionStore, StoreError};
pub use tabs::{
    build_unified_tabs, close_file_tab, close_tab, create_tab, ensure_in_unified_tab_order,
    navigable_tabs, navigate_to_last_tab, navigate_to_last_unified_tab, navigate_to_next_tab,
    navigate_to_next_unified_tab, navigate_to_prev_tab, navigate_to_prev_unified_tab,
    navigate_to_tab_by_index, navigate_to_unified_tab_by_index, reopen_closed_tab,
    reopen_unified_closed_tab, set_active_tab, AgentSessionId, AiTab, ClosedTab, ClosedTabEntry,
    CreateOutcome, FileLocation, FilePreviewTab, LogEntry, LogKind, LogSource, ReopenOutcome,
    ShowThinking, StagedImage, TabId, TabOptions, TabState, TokenUsage, UnifiedClosedTabEntry,
    UnifiedTab, UnifiedTabRef, WizardState, MAX_CLOSED_TAB_HISTORY,
};
pub use util::extract_quick_tab_name;
