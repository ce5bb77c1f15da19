//! Reconciliation between the unified order and the tab registries.

use std::collections::HashSet;

use crate::session::Session;
use crate::tabs::model::{AiTab, FilePreviewTab, TabId, UnifiedTabRef};

/// A resolved entry of the unified sequence, borrowing from a registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnifiedTab<'a> {
    Ai(&'a AiTab),
    File(&'a FilePreviewTab),
}

impl UnifiedTab<'_> {
    pub fn id(&self) -> &TabId {
        match self {
            UnifiedTab::Ai(tab) => &tab.id,
            UnifiedTab::File(tab) => &tab.id,
        }
    }
}

/// The canonical, fully-repaired tab sequence.
///
/// Walks the unified order keeping only refs that resolve (dangling refs are
/// dropped silently), then appends orphaned AI tabs and orphaned file tabs
/// in registry order. A read view: the stored order itself is not mutated.
pub fn build_unified_tabs(session: &Session) -> Vec<UnifiedTab<'_>> {
    let mut tabs = Vec::with_capacity(session.ai_tabs.len() + session.file_preview_tabs.len());
    let mut seen: HashSet<&UnifiedTabRef> = HashSet::new();

    for tab_ref in &session.unified_tab_order {
        if !seen.insert(tab_ref) {
            continue;
        }
        match tab_ref {
            UnifiedTabRef::Ai(id) => {
                if let Some(tab) = session.ai_tab(id) {
                    tabs.push(UnifiedTab::Ai(tab));
                }
            }
            UnifiedTabRef::File(id) => {
                if let Some(tab) = session.file_tab(id) {
                    tabs.push(UnifiedTab::File(tab));
                }
            }
        }
    }

    for tab in &session.ai_tabs {
        if !seen.contains(&UnifiedTabRef::Ai(tab.id.clone())) {
            tabs.push(UnifiedTab::Ai(tab));
        }
    }
    for tab in &session.file_preview_tabs {
        if !seen.contains(&UnifiedTabRef::File(tab.id.clone())) {
            tabs.push(UnifiedTab::File(tab));
        }
    }

    tabs
}

/// Append `entry` to the order unless it is already present.
///
/// Presence requires kind AND id to match; the same id under the other kind
/// does not count. Returns `None` when the order already contains the entry,
/// so callers can keep the existing allocation untouched (the "unchanged"
/// sentinel of the identity contract).
pub fn ensure_in_unified_tab_order(
    order: &[UnifiedTabRef],
    entry: &UnifiedTabRef,
) -> Option<Vec<UnifiedTabRef>> {
    if order.contains(entry) {
        return None;
    }
    let mut next = order.to_vec();
    next.push(entry.clone());
    Some(next)
}
