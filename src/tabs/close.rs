//! Tab closure for both registries.

use std::sync::Arc;

use chrono::Utc;

use crate::session::SessionRef;
use crate::tabs::history::{
    push_front_bounded, ClosedTab, ClosedTabEntry, UnifiedClosedTabEntry,
};
use crate::tabs::model::{AiTab, TabId, UnifiedTabRef};

/// Close an AI tab.
///
/// Returns `None` when `tab_id` is not in the registry. Unless
/// `skip_history`, the tab is prepended to the legacy close history with the
/// index it occupied. When the closed tab was active, the left neighbor
/// becomes active (index 0 picks the new first tab). With
/// `recreate_if_empty`, closing the last tab synthesizes a fresh one, which
/// is not itself added to history.
pub fn close_tab(
    session: &SessionRef,
    tab_id: &TabId,
    recreate_if_empty: bool,
    skip_history: bool,
) -> Option<SessionRef> {
    let index = session.ai_tabs.iter().position(|t| &t.id == tab_id)?;

    let mut next = (**session).clone();
    let closed = next.ai_tabs.remove(index);
    let was_active = next.active_tab_id.as_ref() == Some(tab_id);

    if !skip_history {
        push_front_bounded(
            &mut next.closed_tab_history,
            ClosedTabEntry {
                tab: closed,
                index,
                closed_at: Utc::now(),
            },
        );
    }

    if next.ai_tabs.is_empty() {
        if recreate_if_empty {
            let fresh = AiTab::new();
            next.active_tab_id = Some(fresh.id.clone());
            next.ai_tabs.push(fresh);
        } else {
            // Caller is tearing the session down.
            next.active_tab_id = None;
        }
    } else if was_active {
        let neighbor = if index == 0 { 0 } else { index - 1 };
        next.active_tab_id = Some(next.ai_tabs[neighbor].id.clone());
    }

    Some(Arc::new(next))
}

/// Close a file preview tab.
///
/// Neighbor selection runs over the unified order filtered to file-kind
/// refs, with the same left-preferred rule as [`close_tab`]. The entry is
/// always recorded in the unified close history, together with the unified
/// index it occupied (or the order length when the ref was orphaned), and
/// its ref is removed from the unified order. When no file tabs remain the
/// session falls back to displaying its AI tab.
pub fn close_file_tab(session: &SessionRef, file_tab_id: &TabId) -> Option<SessionRef> {
    let registry_index = session
        .file_preview_tabs
        .iter()
        .position(|t| &t.id == file_tab_id)?;

    let mut next = (**session).clone();
    let closed = next.file_preview_tabs.remove(registry_index);
    let target = UnifiedTabRef::File(file_tab_id.clone());

    let unified_index = next
        .unified_tab_order
        .iter()
        .position(|r| r == &target)
        .unwrap_or(next.unified_tab_order.len());

    // Position among file-kind refs, captured before the ref is removed.
    let file_position = next
        .unified_tab_order
        .iter()
        .filter_map(|r| match r {
            UnifiedTabRef::File(id) => Some(id),
            UnifiedTabRef::Ai(_) => None,
        })
        .position(|id| id == file_tab_id);

    let was_active = next.active_file_tab_id.as_ref() == Some(file_tab_id);

    push_front_bounded(
        &mut next.unified_closed_tab_history,
        UnifiedClosedTabEntry {
            tab: ClosedTab::File(closed),
            unified_index,
            closed_at: Utc::now(),
        },
    );

    next.unified_tab_order.retain(|r| r != &target);

    if next.file_preview_tabs.is_empty() {
        next.active_file_tab_id = None;
    } else if was_active {
        let remaining: Vec<TabId> = next
            .unified_tab_order
            .iter()
            .filter_map(|r| match r {
                UnifiedTabRef::File(id)
                    if next.file_preview_tabs.iter().any(|t| &t.id == id) =>
                {
                    Some(id.clone())
                }
                _ => None,
            })
            .collect();

        let pick = match file_position {
            Some(position) if position > 0 => {
                remaining.get(position - 1).or_else(|| remaining.last())
            }
            // Closed the first file tab (or an orphan): take the new first.
            _ => remaining.first(),
        };
        next.active_file_tab_id = pick
            .cloned()
            .or_else(|| next.file_preview_tabs.first().map(|t| t.id.clone()));
    }

    Some(Arc::new(next))
}
