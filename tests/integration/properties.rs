//! Property-based tests for the transition algebra.

use proptest::prelude::*;

use tabdeck::{
    close_tab, ensure_in_unified_tab_order, navigate_to_next_tab, navigate_to_prev_tab,
    reopen_closed_tab, TabId, UnifiedTabRef, MAX_CLOSED_TAB_HISTORY,
};

use super::common::fixtures::{activate_ai_index, session_with_ai_tabs};

fn tab_ref_strategy() -> impl Strategy<Value = UnifiedTabRef> {
    (0u8..6, any::<bool>()).prop_map(|(n, is_ai)| {
        let id = TabId::from(format!("id-{n}"));
        if is_ai {
            UnifiedTabRef::Ai(id)
        } else {
            UnifiedTabRef::File(id)
        }
    })
}

proptest! {
    #[test]
    fn prop_close_history_never_exceeds_cap(closes in 1usize..60) {
        let mut session = session_with_ai_tabs(closes + 1);
        for _ in 0..closes {
            let id = session.ai_tabs.last().unwrap().id.clone();
            session = close_tab(&session, &id, true, false).unwrap();
            prop_assert!(session.closed_tab_history.len() <= MAX_CLOSED_TAB_HISTORY);
        }
        prop_assert_eq!(
            session.closed_tab_history.len(),
            closes.min(MAX_CLOSED_TAB_HISTORY)
        );
    }

    #[test]
    fn prop_close_on_active_shrinks_by_one_or_resets(count in 1usize..12) {
        let session = session_with_ai_tabs(count);
        let active = session.active_tab_id.clone().unwrap();
        let next = close_tab(&session, &active, true, false).unwrap();
        if count == 1 {
            prop_assert_eq!(next.ai_tabs.len(), 1);
            prop_assert_ne!(&next.ai_tabs[0].id, &active);
        } else {
            prop_assert_eq!(next.ai_tabs.len(), count - 1);
        }
        // The active pointer always resolves afterwards.
        prop_assert!(next.active_tab().is_some());
    }

    #[test]
    fn prop_next_n_times_returns_to_start(count in 2usize..10, start in 0usize..10) {
        let start = start % count;
        let mut session = activate_ai_index(&session_with_ai_tabs(count), start);
        let origin = session.active_tab_id.clone();
        for _ in 0..count {
            session = navigate_to_next_tab(&session, false).unwrap();
        }
        prop_assert_eq!(session.active_tab_id.clone(), origin);
    }

    #[test]
    fn prop_next_then_prev_is_identity(count in 2usize..10, start in 0usize..10) {
        let start = start % count;
        let session = activate_ai_index(&session_with_ai_tabs(count), start);
        let forward = navigate_to_next_tab(&session, false).unwrap();
        let back = navigate_to_prev_tab(&forward, false).unwrap();
        prop_assert_eq!(back.active_tab_id.clone(), session.active_tab_id.clone());
    }

    #[test]
    fn prop_ensure_in_order_is_idempotent(
        order in proptest::collection::vec(tab_ref_strategy(), 0..8),
        entry in tab_ref_strategy(),
    ) {
        match ensure_in_unified_tab_order(&order, &entry) {
            Some(once) => {
                // A second application reports "already present".
                prop_assert!(ensure_in_unified_tab_order(&once, &entry).is_none());
                prop_assert_eq!(once.last().unwrap(), &entry);
            }
            None => prop_assert!(order.contains(&entry)),
        }
    }

    #[test]
    fn prop_reopen_inverts_close(count in 2usize..10, victim in 0usize..10) {
        let victim = victim % count;
        let session = session_with_ai_tabs(count);
        let id = session.ai_tabs[victim].id.clone();
        let name = session.ai_tabs[victim].name.clone();

        let closed = close_tab(&session, &id, true, false).unwrap();
        let outcome = reopen_closed_tab(&closed).unwrap();

        prop_assert!(!outcome.was_duplicate);
        prop_assert_eq!(outcome.session.ai_tabs.len(), count);
        prop_assert_eq!(outcome.session.ai_tabs[victim].name.clone(), name);
        prop_assert_eq!(
            outcome.session.closed_tab_history.len(),
            session.closed_tab_history.len()
        );
    }
}
