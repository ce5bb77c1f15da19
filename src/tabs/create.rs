//! AI tab creation.

use std::sync::Arc;

use crate::session::SessionRef;
use crate::tabs::model::{AgentSessionId, AiTab, LogEntry, ShowThinking, TabId};

/// Optional seed values for a new AI tab. Everything left at `Default`
/// produces a fresh, empty tab.
#[derive(Debug, Clone, Default)]
pub struct TabOptions {
    pub name: Option<String>,
    pub agent_session_id: Option<AgentSessionId>,
    pub logs: Vec<LogEntry>,
    pub input_value: String,
    pub starred: bool,
    pub show_thinking: ShowThinking,
}

/// Result of [`create_tab`].
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub session: SessionRef,
    pub tab_id: TabId,
}

/// Append a new AI tab and make it active. Always succeeds.
///
/// The unified order is left untouched: callers append the ref themselves or
/// rely on the reconciler to pick the tab up as an orphan.
pub fn create_tab(session: &SessionRef, options: TabOptions) -> CreateOutcome {
    let mut tab = AiTab::new();
    tab.name = options.name;
    tab.agent_session_id = options.agent_session_id;
    tab.logs = options.logs;
    tab.input_value = options.input_value;
    tab.starred = options.starred;
    tab.show_thinking = options.show_thinking;

    let tab_id = tab.id.clone();
    let mut next = (**session).clone();
    next.ai_tabs.push(tab);
    next.active_tab_id = Some(tab_id.clone());
    next.active_file_tab_id = None;

    CreateOutcome {
        session: Arc::new(next),
        tab_id,
    }
}
