//! The Session aggregate: all tab-related state for one workspace.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tabs::history::{ClosedTabEntry, UnifiedClosedTabEntry};
use crate::tabs::model::{AiTab, FilePreviewTab, LogEntry, TabId, TabState, UnifiedTabRef};

/// Shared handle to an immutable session snapshot.
///
/// Transition functions take `&SessionRef` and return a new handle; the
/// documented no-op paths return a clone of the input handle so callers can
/// use `Arc::ptr_eq` to skip re-render.
pub type SessionRef = Arc<Session>;

/// Which input surface the session presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Ai,
    Terminal,
}

/// One workspace session: two tab registries, the unified order that
/// interleaves them, the active pointers, and the close histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    /// AI tab registry; never empty in a well-formed session.
    pub ai_tabs: Vec<AiTab>,
    /// File preview registry; may be empty.
    pub file_preview_tabs: Vec<FilePreviewTab>,
    /// The AI tab considered current for return-to purposes.
    pub active_tab_id: Option<TabId>,
    /// The file tab currently displayed. When set it takes rendering
    /// precedence over `active_tab_id`, which is preserved so switching away
    /// returns to the right AI tab.
    pub active_file_tab_id: Option<TabId>,
    /// Single cross-kind navigation sequence. Orphans and dangling refs are
    /// tolerated between operations and repaired by the reconciler.
    pub unified_tab_order: Vec<UnifiedTabRef>,
    /// Legacy bounded history of closed AI tabs, most-recent-first.
    pub closed_tab_history: Vec<ClosedTabEntry>,
    /// Bounded history of closed tabs of either kind, most-recent-first.
    pub unified_closed_tab_history: Vec<UnifiedClosedTabEntry>,
    pub input_mode: InputMode,
    pub auto_run_folder_path: Option<PathBuf>,
}

impl Session {
    /// Create a well-formed session: one fresh AI tab, active and present in
    /// the unified order.
    pub fn new() -> Self {
        let tab = AiTab::new();
        let tab_id = tab.id.clone();
        Self {
            id: Uuid::new_v4(),
            ai_tabs: vec![tab],
            file_preview_tabs: Vec::new(),
            active_tab_id: Some(tab_id.clone()),
            active_file_tab_id: None,
            unified_tab_order: vec![UnifiedTabRef::Ai(tab_id)],
            closed_tab_history: Vec::new(),
            unified_closed_tab_history: Vec::new(),
            input_mode: InputMode::Ai,
            auto_run_folder_path: None,
        }
    }

    /// Look up an AI tab by id.
    pub fn ai_tab(&self, id: &TabId) -> Option<&AiTab> {
        self.ai_tabs.iter().find(|t| &t.id == id)
    }

    /// Look up a file preview tab by id.
    pub fn file_tab(&self, id: &TabId) -> Option<&FilePreviewTab> {
        self.file_preview_tabs.iter().find(|t| &t.id == id)
    }

    /// The tab matching `active_tab_id`, falling back to the first AI tab
    /// when the pointer is stale. `None` only when there are no tabs at all.
    pub fn active_tab(&self) -> Option<&AiTab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.ai_tab(id))
            .or_else(|| self.ai_tabs.first())
    }

    /// The first tab currently running an agent turn.
    pub fn write_mode_tab(&self) -> Option<&AiTab> {
        self.ai_tabs.iter().find(|t| t.state == TabState::Busy)
    }

    /// All tabs currently running an agent turn.
    pub fn busy_tabs(&self) -> Vec<&AiTab> {
        self.ai_tabs
            .iter()
            .filter(|t| t.state == TabState::Busy)
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a log entry to the session's active tab.
///
/// A session whose active tab cannot be resolved is internal state drift,
/// not caller error: this logs a diagnostic and returns the input handle
/// unchanged rather than panicking inside a render cycle.
pub fn append_log_to_active_tab(session: &SessionRef, entry: LogEntry) -> SessionRef {
    let position = session
        .active_tab_id
        .as_ref()
        .and_then(|id| session.ai_tabs.iter().position(|t| &t.id == id))
        .or(if session.ai_tabs.is_empty() { None } else { Some(0) });

    let Some(position) = position else {
        tracing::error!(session_id = %session.id, "log append could not resolve an active tab");
        return Arc::clone(session);
    };

    let mut next = (**session).clone();
    next.ai_tabs[position].logs.push(entry);
    Arc::new(next)
}
