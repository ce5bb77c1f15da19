//! Stateless navigation over the AI registry and the unified order.
//!
//! Both flavors share the same shape: build the candidate list (optionally
//! filtered to navigable tabs), locate the current tab in it, then move with
//! wrap-around. File tabs are always navigable regardless of the filter.

use std::sync::Arc;

use crate::session::{Session, SessionRef};
use crate::tabs::model::{AiTab, TabId, UnifiedTabRef};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Prev,
}

/// Make an AI tab the active one.
///
/// Returns `None` if the tab is unknown. Selecting an AI tab always
/// dismisses a displayed file tab; when the tab is already active and no
/// file tab is shown, the input handle is returned unchanged (callers rely
/// on `Arc::ptr_eq` to skip re-render).
pub fn set_active_tab(session: &SessionRef, tab_id: &TabId) -> Option<SessionRef> {
    session.ai_tabs.iter().position(|t| &t.id == tab_id)?;

    if session.active_tab_id.as_ref() == Some(tab_id) && session.active_file_tab_id.is_none() {
        return Some(Arc::clone(session));
    }

    Some(activate_ai(session, tab_id.clone()))
}

/// AI tabs eligible for navigation. Without the unread-only filter this is
/// every tab in registry order.
pub fn navigable_tabs(session: &Session, unread_only: bool) -> Vec<&AiTab> {
    session
        .ai_tabs
        .iter()
        .filter(|t| !unread_only || t.is_navigable())
        .collect()
}

/// Move to the next AI tab, wrapping at the end.
pub fn navigate_to_next_tab(session: &SessionRef, unread_only: bool) -> Option<SessionRef> {
    step_ai(session, unread_only, Direction::Next)
}

/// Move to the previous AI tab, wrapping at the start.
pub fn navigate_to_prev_tab(session: &SessionRef, unread_only: bool) -> Option<SessionRef> {
    step_ai(session, unread_only, Direction::Prev)
}

/// Jump to the AI tab at `index` within the (optionally filtered) list.
/// Out-of-range indices fail; jumping to the already-active tab is an
/// identity no-op.
pub fn navigate_to_tab_by_index(
    session: &SessionRef,
    index: usize,
    unread_only: bool,
) -> Option<SessionRef> {
    let candidates = navigable_indices(session, unread_only);
    let &registry_index = candidates.get(index)?;
    let tab_id = session.ai_tabs[registry_index].id.clone();

    if session.active_tab_id.as_ref() == Some(&tab_id) && session.active_file_tab_id.is_none() {
        return Some(Arc::clone(session));
    }
    Some(activate_ai(session, tab_id))
}

/// Jump to the last AI tab in the (optionally filtered) list.
pub fn navigate_to_last_tab(session: &SessionRef, unread_only: bool) -> Option<SessionRef> {
    let candidates = navigable_indices(session, unread_only);
    if candidates.is_empty() {
        return None;
    }
    navigate_to_tab_by_index(session, candidates.len() - 1, unread_only)
}

/// Move to the next tab in the unified order, wrapping at the end.
pub fn navigate_to_next_unified_tab(
    session: &SessionRef,
    unread_only: bool,
) -> Option<SessionRef> {
    step_unified(session, unread_only, Direction::Next)
}

/// Move to the previous tab in the unified order, wrapping at the start.
pub fn navigate_to_prev_unified_tab(
    session: &SessionRef,
    unread_only: bool,
) -> Option<SessionRef> {
    step_unified(session, unread_only, Direction::Prev)
}

/// Jump to the tab at `index` within the (optionally filtered) unified
/// sequence.
pub fn navigate_to_unified_tab_by_index(
    session: &SessionRef,
    index: usize,
    unread_only: bool,
) -> Option<SessionRef> {
    let candidates = unified_candidates(session, unread_only);
    let target = candidates.get(index)?.clone();

    if current_unified_ref(session).as_ref() == Some(&target) {
        return Some(Arc::clone(session));
    }
    Some(activate_unified(session, &target))
}

/// Jump to the last tab in the (optionally filtered) unified sequence.
pub fn navigate_to_last_unified_tab(
    session: &SessionRef,
    unread_only: bool,
) -> Option<SessionRef> {
    let candidates = unified_candidates(session, unread_only);
    if candidates.is_empty() {
        return None;
    }
    navigate_to_unified_tab_by_index(session, candidates.len() - 1, unread_only)
}

fn navigable_indices(session: &Session, unread_only: bool) -> Vec<usize> {
    session
        .ai_tabs
        .iter()
        .enumerate()
        .filter(|(_, t)| !unread_only || t.is_navigable())
        .map(|(i, _)| i)
        .collect()
}

fn activate_ai(session: &SessionRef, tab_id: TabId) -> SessionRef {
    let mut next = (**session).clone();
    next.active_tab_id = Some(tab_id);
    next.active_file_tab_id = None;
    Arc::new(next)
}

fn step_ai(session: &SessionRef, unread_only: bool, direction: Direction) -> Option<SessionRef> {
    if session.ai_tabs.len() < 2 {
        return None;
    }
    let candidates = navigable_indices(session, unread_only);
    if candidates.is_empty() {
        return None;
    }

    let current = session
        .active_tab_id
        .as_ref()
        .and_then(|id| session.ai_tabs.iter().position(|t| &t.id == id));
    let position = current.and_then(|c| candidates.iter().position(|&i| i == c));

    let target = match position {
        // Active tab filtered out: jump to the edge of the filtered list.
        None => match direction {
            Direction::Next => 0,
            Direction::Prev => candidates.len() - 1,
        },
        Some(p) => {
            if candidates.len() == 1 {
                // The only candidate is the current tab; nowhere to go.
                return None;
            }
            match direction {
                Direction::Next => (p + 1) % candidates.len(),
                Direction::Prev => (p + candidates.len() - 1) % candidates.len(),
            }
        }
    };

    let tab_id = session.ai_tabs[candidates[target]].id.clone();
    Some(activate_ai(session, tab_id))
}

/// The ref the session currently displays: the file tab when one is shown,
/// the active AI tab otherwise.
fn current_unified_ref(session: &Session) -> Option<UnifiedTabRef> {
    if let Some(id) = &session.active_file_tab_id {
        return Some(UnifiedTabRef::File(id.clone()));
    }
    session.active_tab_id.clone().map(UnifiedTabRef::Ai)
}

fn resolves(session: &Session, tab_ref: &UnifiedTabRef) -> bool {
    match tab_ref {
        UnifiedTabRef::Ai(id) => session.ai_tab(id).is_some(),
        UnifiedTabRef::File(id) => session.file_tab(id).is_some(),
    }
}

/// Resolvable refs passing the navigable predicate; file-kind refs always
/// pass.
fn unified_candidates(session: &Session, unread_only: bool) -> Vec<UnifiedTabRef> {
    session
        .unified_tab_order
        .iter()
        .filter(|r| match r {
            UnifiedTabRef::Ai(id) => session
                .ai_tab(id)
                .is_some_and(|t| !unread_only || t.is_navigable()),
            UnifiedTabRef::File(id) => session.file_tab(id).is_some(),
        })
        .cloned()
        .collect()
}

fn activate_unified(session: &SessionRef, target: &UnifiedTabRef) -> SessionRef {
    let mut next = (**session).clone();
    match target {
        UnifiedTabRef::Ai(id) => {
            next.active_tab_id = Some(id.clone());
            next.active_file_tab_id = None;
        }
        UnifiedTabRef::File(id) => {
            // The AI pointer is preserved for return-to.
            next.active_file_tab_id = Some(id.clone());
        }
    }
    Arc::new(next)
}

fn step_unified(
    session: &SessionRef,
    unread_only: bool,
    direction: Direction,
) -> Option<SessionRef> {
    let resolvable = session
        .unified_tab_order
        .iter()
        .filter(|r| resolves(session, r))
        .count();
    if resolvable < 2 {
        return None;
    }

    let candidates = unified_candidates(session, unread_only);
    if candidates.is_empty() {
        return None;
    }

    let current = current_unified_ref(session);
    let position = current
        .as_ref()
        .and_then(|c| candidates.iter().position(|r| r == c));

    let target = match position {
        None => match direction {
            Direction::Next => 0,
            Direction::Prev => candidates.len() - 1,
        },
        Some(p) => {
            if candidates.len() == 1 {
                return None;
            }
            match direction {
                Direction::Next => (p + 1) % candidates.len(),
                Direction::Prev => (p + candidates.len() - 1) % candidates.len(),
            }
        }
    };

    Some(activate_unified(session, &candidates[target]))
}
