//! Session builders used across the integration suite.

use std::path::PathBuf;
use std::sync::Arc;

use tabdeck::{AiTab, FilePreviewTab, Session, SessionRef, TabId, UnifiedTabRef};

/// A session with `count` AI tabs named `t1..tN`, the first one active, and
/// every tab present in the unified order.
pub fn session_with_ai_tabs(count: usize) -> SessionRef {
    let mut session = Session::new();
    session.ai_tabs.clear();
    session.unified_tab_order.clear();
    for i in 0..count {
        let mut tab = AiTab::new();
        tab.name = Some(format!("t{}", i + 1));
        session
            .unified_tab_order
            .push(UnifiedTabRef::Ai(tab.id.clone()));
        session.ai_tabs.push(tab);
    }
    session.active_tab_id = session.ai_tabs.first().map(|t| t.id.clone());
    Arc::new(session)
}

/// Append a file preview tab to both the registry and the unified order.
pub fn with_file_tab(session: &SessionRef, path: &str) -> (SessionRef, TabId) {
    let tab = FilePreviewTab::new(PathBuf::from(path), format!("contents of {path}"));
    let id = tab.id.clone();
    let mut next = (**session).clone();
    next.unified_tab_order.push(UnifiedTabRef::File(id.clone()));
    next.file_preview_tabs.push(tab);
    (Arc::new(next), id)
}

/// Point `active_tab_id` at the AI tab at `index`.
pub fn activate_ai_index(session: &SessionRef, index: usize) -> SessionRef {
    let mut next = (**session).clone();
    next.active_tab_id = Some(next.ai_tabs[index].id.clone());
    Arc::new(next)
}

/// Point `active_file_tab_id` at the given file tab.
pub fn activate_file(session: &SessionRef, id: &TabId) -> SessionRef {
    let mut next = (**session).clone();
    next.active_file_tab_id = Some(id.clone());
    Arc::new(next)
}
