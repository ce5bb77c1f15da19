//! Merged-session construction: collapsing multiple prior conversations
//! into one fresh session seeded with their combined logs and usage.

use std::path::PathBuf;

use uuid::Uuid;

use crate::session::session::{InputMode, Session};
use crate::tabs::model::{
    AiTab, LogEntry, LogSource, ShowThinking, TokenUsage, UnifiedTabRef,
};

/// Which tool drives the merged session's input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolType {
    #[default]
    Agent,
    Terminal,
}

/// Inputs for [`create_merged_session`]. Logs, usage, and settings come from
/// the conversations being collapsed; the core does not fetch them.
#[derive(Debug, Clone, Default)]
pub struct MergedSessionOptions {
    pub name: Option<String>,
    pub logs: Vec<LogEntry>,
    pub usage: TokenUsage,
    pub save_to_history: bool,
    pub show_thinking: ShowThinking,
    pub tool_type: ToolType,
    pub project_root: PathBuf,
}

/// Build a brand-new session with a single AI tab seeded from `options`.
pub fn create_merged_session(options: MergedSessionOptions) -> Session {
    let mut tab = AiTab::new();
    tab.name = options.name;
    tab.logs = options.logs;
    tab.logs.push(LogEntry::shell(
        LogSource::System,
        "Merged previous conversations into this session",
    ));
    tab.usage = options.usage;
    tab.save_to_history = options.save_to_history;
    tab.show_thinking = options.show_thinking;

    let tab_id = tab.id.clone();
    Session {
        id: Uuid::new_v4(),
        ai_tabs: vec![tab],
        file_preview_tabs: Vec::new(),
        active_tab_id: Some(tab_id.clone()),
        active_file_tab_id: None,
        unified_tab_order: vec![UnifiedTabRef::Ai(tab_id)],
        closed_tab_history: Vec::new(),
        unified_closed_tab_history: Vec::new(),
        input_mode: if options.tool_type == ToolType::Terminal {
            InputMode::Terminal
        } else {
            InputMode::Ai
        },
        auto_run_folder_path: Some(options.project_root),
    }
}
