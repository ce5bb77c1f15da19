//! Mixed-kind navigation and order reconciliation.

use std::sync::Arc;

use tabdeck::{
    build_unified_tabs, close_file_tab, create_tab, navigate_to_next_unified_tab,
    navigate_to_prev_unified_tab, navigate_to_unified_tab_by_index, AiTab, TabOptions, TabId,
    UnifiedTab, UnifiedTabRef,
};

use super::common::fixtures::{
    activate_ai_index, activate_file, session_with_ai_tabs, with_file_tab,
};

#[test]
fn test_next_wraps_from_last_ai_entry_to_first() {
    // Order: [ai a1, file f1, ai a2], active a2.
    let session = session_with_ai_tabs(2);
    let (session, file_id) = with_file_tab(&session, "/notes.md");
    let mut base = (*session).clone();
    base.unified_tab_order = vec![
        UnifiedTabRef::Ai(base.ai_tabs[0].id.clone()),
        UnifiedTabRef::File(file_id),
        UnifiedTabRef::Ai(base.ai_tabs[1].id.clone()),
    ];
    let session = activate_ai_index(&Arc::new(base), 1);

    let next = navigate_to_next_unified_tab(&session, false).unwrap();
    assert_eq!(next.active_tab_id, Some(next.ai_tabs[0].id.clone()));
    assert!(next.active_file_tab_id.is_none());
}

#[test]
fn test_round_trip_through_mixed_kinds() {
    let session = session_with_ai_tabs(2);
    let (session, file_id) = with_file_tab(&session, "/a.toml");

    // t1 -> t2 -> f1 -> t1.
    let step1 = navigate_to_next_unified_tab(&session, false).unwrap();
    assert_eq!(step1.active_tab_id, Some(step1.ai_tabs[1].id.clone()));

    let step2 = navigate_to_next_unified_tab(&step1, false).unwrap();
    assert_eq!(step2.active_file_tab_id, Some(file_id));
    // Entering a file tab keeps the AI pointer for return-to.
    assert_eq!(step2.active_tab_id, step1.active_tab_id);

    let step3 = navigate_to_next_unified_tab(&step2, false).unwrap();
    assert_eq!(step3.active_tab_id, Some(step3.ai_tabs[0].id.clone()));
    assert!(step3.active_file_tab_id.is_none());
}

#[test]
fn test_prev_with_missing_active_ref_falls_back_to_last() {
    let session = session_with_ai_tabs(2);
    let (session, file_id) = with_file_tab(&session, "/z.rs");
    let mut base = (*session).clone();
    // Active pointer references a tab that no longer exists.
    base.active_tab_id = Some(TabId::from("vanished"));
    let session = Arc::new(base);

    let next = navigate_to_prev_unified_tab(&session, false).unwrap();
    assert_eq!(next.active_file_tab_id, Some(file_id));
}

#[test]
fn test_by_index_walks_the_order() {
    let session = session_with_ai_tabs(2);
    let (session, file_id) = with_file_tab(&session, "/mid.rs");

    let next = navigate_to_unified_tab_by_index(&session, 2, false).unwrap();
    assert_eq!(next.active_file_tab_id, Some(file_id));
}

#[test]
fn test_build_unified_tabs_repairs_without_mutating() {
    let session = session_with_ai_tabs(2);
    let (session, _) = with_file_tab(&session, "/seen.rs");

    // A created tab is an orphan until the caller (or reconciler) adds it.
    let outcome = create_tab(&session, TabOptions::default());
    let session = outcome.session;
    let mut base = (*session).clone();
    // And a dangling ref survives from an earlier close.
    base.unified_tab_order
        .insert(0, UnifiedTabRef::Ai(TabId::from("dangling")));
    let session = Arc::new(base);

    let unified = build_unified_tabs(&session);
    assert_eq!(unified.len(), 4);
    // Ordered entries first, the orphaned new tab appended last among AI tabs.
    assert_eq!(unified[0].id(), &session.ai_tabs[0].id);
    assert_eq!(unified[2].id(), &session.file_preview_tabs[0].id);
    assert_eq!(unified[3].id(), &outcome.tab_id);
    assert!(matches!(unified[3], UnifiedTab::Ai(_)));

    // The stored order still carries the dangling ref; the view dropped it.
    assert_eq!(session.unified_tab_order.len(), 4);
}

#[test]
fn test_file_close_midway_keeps_unified_navigation_consistent() {
    let session = session_with_ai_tabs(2);
    let (session, f1) = with_file_tab(&session, "/one.rs");
    let (session, f2) = with_file_tab(&session, "/two.rs");
    let session = activate_file(&session, &f1);

    let next = close_file_tab(&session, &f1).unwrap();
    // The surviving file tab becomes active and the order has no hole.
    assert_eq!(next.active_file_tab_id, Some(f2.clone()));
    assert!(!next
        .unified_tab_order
        .iter()
        .any(|r| r == &UnifiedTabRef::File(f1.clone())));

    let wrapped = navigate_to_next_unified_tab(&next, false).unwrap();
    assert_eq!(wrapped.active_tab_id, Some(wrapped.ai_tabs[0].id.clone()));
    assert!(wrapped.active_file_tab_id.is_none());
}

#[test]
fn test_unified_order_tolerates_unordered_registry_growth() {
    let session = session_with_ai_tabs(1);
    let mut base = (*session).clone();
    // Registry tab with no order entry at all.
    let orphan = AiTab::new();
    let orphan_id = orphan.id.clone();
    base.ai_tabs.push(orphan);
    let session = Arc::new(base);

    let unified = build_unified_tabs(&session);
    assert_eq!(unified.len(), 2);
    assert_eq!(unified[1].id(), &orphan_id);

    // With two resolvable tabs the navigator still refuses: only entries in
    // the stored order are navigable until the caller repairs it.
    assert!(navigate_to_next_unified_tab(&session, false).is_none());
}
