//! Tab entity types shared by all transition functions.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Opaque identifier for a tab (AI or file preview).
///
/// Ids are caller-unique strings; a restored tab never reuses the id it had
/// before closing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(String);

impl TabId {
    /// Generate a fresh, unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of the backing agent conversation.
///
/// Two AI tabs sharing the same conversation id are the same logical
/// conversation and must never coexist; reopen reconciles them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentSessionId(String);

impl AgentSessionId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a tab's agent is currently doing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    #[default]
    Idle,
    Busy,
}

/// Thinking-trace visibility for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowThinking {
    #[default]
    Off,
    Compact,
    Full,
}

/// Who produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    User,
    Agent,
    System,
}

/// Which channel a log entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Message,
    Shell,
}

/// One entry in a tab's conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub source: LogSource,
    pub kind: LogKind,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn message(source: LogSource, text: impl Into<String>) -> Self {
        Self {
            source,
            kind: LogKind::Message,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn shell(source: LogSource, text: impl Into<String>) -> Self {
        Self {
            source,
            kind: LogKind::Shell,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// An image attached to the draft input, not yet sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedImage {
    pub path: PathBuf,
    pub added_at: DateTime<Utc>,
}

/// Accumulated token and cost usage for a tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub cached_tokens: i64,
    pub total_tokens: i64,
    pub cost: f64,
}

/// State of an in-tab setup wizard. The payload beyond `mode` is opaque to
/// the tab model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub is_active: bool,
    pub mode: String,
    #[serde(default)]
    pub fields: Value,
}

/// A tab backed by an agent conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTab {
    pub id: TabId,
    /// Backing conversation, if one has been started.
    pub agent_session_id: Option<AgentSessionId>,
    /// Display name; derived lazily by callers when absent.
    pub name: Option<String>,
    pub starred: bool,
    pub logs: Vec<LogEntry>,
    /// Draft text in the input box.
    pub input_value: String,
    pub staged_images: Vec<StagedImage>,
    pub state: TabState,
    /// New content arrived while the tab was not focused.
    pub has_unread: bool,
    pub wizard_state: Option<WizardState>,
    pub show_thinking: ShowThinking,
    pub usage: TokenUsage,
    /// Whether the conversation should be saved to history on close.
    pub save_to_history: bool,
}

impl AiTab {
    /// Create a fresh, empty tab with a generated id.
    pub fn new() -> Self {
        Self {
            id: TabId::generate(),
            agent_session_id: None,
            name: None,
            starred: false,
            logs: Vec::new(),
            input_value: String::new(),
            staged_images: Vec::new(),
            state: TabState::Idle,
            has_unread: false,
            wizard_state: None,
            show_thinking: ShowThinking::Off,
            usage: TokenUsage::default(),
            save_to_history: true,
        }
    }

    /// Whether the tab's setup wizard is currently active.
    pub fn has_active_wizard(&self) -> bool {
        self.wizard_state.as_ref().is_some_and(|w| w.is_active)
    }

    /// Whether the tab is eligible for selection under the unread-only
    /// navigation filter: unread content, a non-blank draft, or staged
    /// images all qualify.
    pub fn is_navigable(&self) -> bool {
        self.has_unread || !self.input_value.trim().is_empty() || !self.staged_images.is_empty()
    }
}

impl Default for AiTab {
    fn default() -> Self {
        Self::new()
    }
}

/// A remembered location within a previewed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLocation {
    pub scroll_top: usize,
}

/// A tab displaying file content, keyed by filesystem path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePreviewTab {
    pub id: TabId,
    /// Identity for duplicate reconciliation: two tabs never share a path.
    pub path: PathBuf,
    pub name: String,
    pub extension: Option<String>,
    pub content: String,
    pub scroll_top: usize,
    pub search_query: String,
    pub edit_mode: bool,
    pub edit_content: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    /// Prior locations within the file, for in-file back/forward.
    pub navigation_history: Vec<FileLocation>,
    pub navigation_index: usize,
}

impl FilePreviewTab {
    /// Create a preview tab for `path`, deriving display name and extension
    /// from the path itself.
    pub fn new(path: PathBuf, content: String) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| path.display().to_string());
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(String::from);
        let now = Utc::now();
        Self {
            id: TabId::generate(),
            path,
            name,
            extension,
            content,
            scroll_top: 0,
            search_query: String::new(),
            edit_mode: false,
            edit_content: String::new(),
            created_at: now,
            last_modified: now,
            navigation_history: vec![FileLocation { scroll_top: 0 }],
            navigation_index: 0,
        }
    }

    /// The tab's current location, as recorded on reopen.
    pub fn current_location(&self) -> FileLocation {
        FileLocation {
            scroll_top: self.scroll_top,
        }
    }
}

/// Reference into one of the two tab registries.
///
/// A lightweight pointer, not an owner; the owning collection is always the
/// matching registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum UnifiedTabRef {
    Ai(TabId),
    File(TabId),
}

impl UnifiedTabRef {
    pub fn id(&self) -> &TabId {
        match self {
            UnifiedTabRef::Ai(id) | UnifiedTabRef::File(id) => id,
        }
    }
}
