//! Reopening recently-closed tabs, with duplicate reconciliation.
//!
//! A conversation or file that is already open never gets a second tab: the
//! existing tab is activated instead and the consumed history entry is
//! dropped all the same.

use std::sync::Arc;

use crate::session::SessionRef;
use crate::tabs::history::{ClosedTab, UnifiedClosedTabEntry};
use crate::tabs::model::{TabId, UnifiedTabRef};
use crate::tabs::order::ensure_in_unified_tab_order;

/// Result of a reopen: the new snapshot, the ref that became active, and
/// whether an already-open tab was reconciled instead of restored.
#[derive(Debug, Clone)]
pub struct ReopenOutcome {
    pub session: SessionRef,
    pub activated: UnifiedTabRef,
    pub was_duplicate: bool,
}

/// Reopen the most recently closed AI tab from the legacy history.
///
/// Restored tabs get a fresh id and are reinserted at
/// `min(original_index, current_len)`. When a live tab already shares the
/// entry's conversation id, that tab is activated instead.
pub fn reopen_closed_tab(session: &SessionRef) -> Option<ReopenOutcome> {
    if session.closed_tab_history.is_empty() {
        return None;
    }

    let mut next = (**session).clone();
    let entry = next.closed_tab_history.remove(0);

    if let Some(conversation) = entry.tab.agent_session_id.as_ref() {
        if let Some(existing) = next
            .ai_tabs
            .iter()
            .find(|t| t.agent_session_id.as_ref() == Some(conversation))
        {
            let existing_id = existing.id.clone();
            next.active_tab_id = Some(existing_id.clone());
            next.active_file_tab_id = None;
            return Some(ReopenOutcome {
                session: Arc::new(next),
                activated: UnifiedTabRef::Ai(existing_id),
                was_duplicate: true,
            });
        }
    }

    let mut tab = entry.tab;
    tab.id = TabId::generate();
    let tab_id = tab.id.clone();
    let insert_at = entry.index.min(next.ai_tabs.len());
    next.ai_tabs.insert(insert_at, tab);
    next.active_tab_id = Some(tab_id.clone());
    next.active_file_tab_id = None;

    Some(ReopenOutcome {
        session: Arc::new(next),
        activated: UnifiedTabRef::Ai(tab_id),
        was_duplicate: false,
    })
}

/// Reopen the most recently closed tab of either kind.
///
/// Prefers the unified history and falls back to the legacy one (treated as
/// AI-kind entries) while older sessions migrate. Duplicates reconcile by
/// conversation id for AI tabs and by path for file tabs; reconciliation
/// also repairs the unified order in case the live tab's ref was orphaned.
pub fn reopen_unified_closed_tab(session: &SessionRef) -> Option<ReopenOutcome> {
    if session.unified_closed_tab_history.is_empty() && session.closed_tab_history.is_empty() {
        return None;
    }

    let mut next = (**session).clone();
    let entry = if next.unified_closed_tab_history.is_empty() {
        let legacy = next.closed_tab_history.remove(0);
        UnifiedClosedTabEntry {
            tab: ClosedTab::Ai(legacy.tab),
            unified_index: legacy.index,
            closed_at: legacy.closed_at,
        }
    } else {
        next.unified_closed_tab_history.remove(0)
    };

    match entry.tab {
        ClosedTab::Ai(mut tab) => {
            if let Some(conversation) = tab.agent_session_id.clone() {
                let existing_id = next
                    .ai_tabs
                    .iter()
                    .find(|t| t.agent_session_id.as_ref() == Some(&conversation))
                    .map(|t| t.id.clone());
                if let Some(existing_id) = existing_id {
                    let tab_ref = UnifiedTabRef::Ai(existing_id.clone());
                    if let Some(order) =
                        ensure_in_unified_tab_order(&next.unified_tab_order, &tab_ref)
                    {
                        next.unified_tab_order = order;
                    }
                    next.active_tab_id = Some(existing_id);
                    next.active_file_tab_id = None;
                    return Some(ReopenOutcome {
                        session: Arc::new(next),
                        activated: tab_ref,
                        was_duplicate: true,
                    });
                }
            }

            tab.id = TabId::generate();
            let tab_ref = UnifiedTabRef::Ai(tab.id.clone());
            next.active_tab_id = Some(tab.id.clone());
            next.active_file_tab_id = None;
            next.ai_tabs.push(tab);
            next.unified_tab_order.push(tab_ref.clone());
            Some(ReopenOutcome {
                session: Arc::new(next),
                activated: tab_ref,
                was_duplicate: false,
            })
        }
        ClosedTab::File(mut tab) => {
            let existing_id = next
                .file_preview_tabs
                .iter()
                .find(|t| t.path == tab.path)
                .map(|t| t.id.clone());
            if let Some(existing_id) = existing_id {
                let tab_ref = UnifiedTabRef::File(existing_id.clone());
                if let Some(order) =
                    ensure_in_unified_tab_order(&next.unified_tab_order, &tab_ref)
                {
                    next.unified_tab_order = order;
                }
                next.active_file_tab_id = Some(existing_id);
                return Some(ReopenOutcome {
                    session: Arc::new(next),
                    activated: tab_ref,
                    was_duplicate: true,
                });
            }

            // Stale in-file navigation must not resurface after reopen.
            tab.navigation_history = vec![tab.current_location()];
            tab.navigation_index = 0;
            tab.id = TabId::generate();
            let tab_ref = UnifiedTabRef::File(tab.id.clone());
            next.active_file_tab_id = Some(tab.id.clone());
            next.file_preview_tabs.push(tab);
            next.unified_tab_order.push(tab_ref.clone());
            Some(ReopenOutcome {
                session: Arc::new(next),
                activated: tab_ref,
                was_duplicate: false,
            })
        }
    }
}
