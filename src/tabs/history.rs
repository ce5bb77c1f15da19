//! Bounded recency buffers of recently-closed tabs.
//!
//! Two variants coexist: the legacy buffer holds only AI tabs, the unified
//! buffer holds closed tabs of either kind. Both are most-recent-first and
//! capped at [`MAX_CLOSED_TAB_HISTORY`] entries; a tab is permanently gone
//! only once it is evicted from a full buffer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tabs::model::{AiTab, FilePreviewTab};

/// Maximum entries kept in either close-history buffer.
pub const MAX_CLOSED_TAB_HISTORY: usize = 25;

/// Legacy history entry: an AI tab plus the registry position it occupied at
/// close time, used to reinsert it approximately where it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedTabEntry {
    pub tab: AiTab,
    pub index: usize,
    pub closed_at: DateTime<Utc>,
}

/// A closed tab of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tab", rename_all = "lowercase")]
pub enum ClosedTab {
    Ai(AiTab),
    File(FilePreviewTab),
}

/// Unified history entry, recording the tab's position in the unified order
/// at close time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedClosedTabEntry {
    #[serde(flatten)]
    pub tab: ClosedTab,
    pub unified_index: usize,
    pub closed_at: DateTime<Utc>,
}

/// Prepend `entry`, evicting from the back past the cap.
pub(crate) fn push_front_bounded<T>(history: &mut Vec<T>, entry: T) {
    history.insert(0, entry);
    history.truncate(MAX_CLOSED_TAB_HISTORY);
}
