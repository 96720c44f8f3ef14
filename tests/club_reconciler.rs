// tests/club_reconciler.rs
//
// Optimistic toggle semantics: exact rollback, no counter drift, one
// outstanding write per card.

use pp_browse::api::types::Card;
use pp_browse::club::{DetailState, Reconciler, ToggleRejected};

fn card(slug: &str, in_club: bool) -> Card {
    Card {
        card_slug: slug.into(),
        name: "Leo Messi".into(),
        rating: 94,
        version: "Gold Rare".into(),
        image_url: None,
        card_url: format!("https://example.com/{slug}"),
        in_club,
    }
}

fn state() -> DetailState {
    DetailState {
        display_name: "Leo Messi".into(),
        in_club_count: 1,
        total_cards: 3,
        cards: vec![
            card("cards/leo-messi/base", false),
            card("cards/leo-messi/totw", true),
            card("cards/leo-messi/hero", false),
        ],
    }
}

#[test]
fn toggle_on_applies_immediately_and_commits() {
    let mut st = state();
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/base").unwrap();
    assert_eq!((txn.prev, txn.next), (false, true));
    assert!(st.card("cards/leo-messi/base").unwrap().in_club);
    assert_eq!(st.in_club_count, 2);
    assert!(rec.in_flight("cards/leo-messi/base"));

    rec.commit(&txn);
    assert!(!rec.in_flight("cards/leo-messi/base"));
    assert!(st.card("cards/leo-messi/base").unwrap().in_club);
    assert_eq!(st.in_club_count, 2);
}

#[test]
fn toggle_off_decrements_counter() {
    let mut st = state();
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/totw").unwrap();
    assert_eq!((txn.prev, txn.next), (true, false));
    assert_eq!(st.in_club_count, 0);

    rec.commit(&txn);
    assert_eq!(st.in_club_count, 0);
}

#[test]
fn rollback_restores_exact_pre_toggle_state() {
    let mut st = state();
    let before = st.clone();
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/hero").unwrap();
    assert_ne!(st, before);

    rec.rollback(&mut st, &txn);
    assert_eq!(st, before);
    assert!(!rec.any_in_flight());
}

#[test]
fn rollback_of_a_toggle_off_restores_counter() {
    let mut st = state();
    let before = st.clone();
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/totw").unwrap();
    rec.rollback(&mut st, &txn);
    assert_eq!(st, before);
}

#[test]
fn second_toggle_on_same_card_is_rejected_until_settled() {
    let mut st = state();
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/base").unwrap();
    assert_eq!(
        rec.begin(&mut st, "cards/leo-messi/base"),
        Err(ToggleRejected::InFlight)
    );
    // no double adjustment
    assert_eq!(st.in_club_count, 2);

    rec.commit(&txn);
    // settled; a new toggle goes through
    let txn2 = rec.begin(&mut st, "cards/leo-messi/base").unwrap();
    assert_eq!((txn2.prev, txn2.next), (true, false));
    assert_eq!(st.in_club_count, 1);
}

#[test]
fn different_cards_may_be_in_flight_concurrently() {
    let mut st = state();
    let mut rec = Reconciler::new();

    let a = rec.begin(&mut st, "cards/leo-messi/base").unwrap();
    let b = rec.begin(&mut st, "cards/leo-messi/hero").unwrap();
    assert_eq!(st.in_club_count, 3);

    rec.commit(&a);
    rec.rollback(&mut st, &b);
    assert_eq!(st.in_club_count, 2);
    assert!(st.card("cards/leo-messi/base").unwrap().in_club);
    assert!(!st.card("cards/leo-messi/hero").unwrap().in_club);
}

#[test]
fn inconsistent_zero_counter_saturates_instead_of_panicking() {
    // The service is the source of truth for in_club_count; if it ever sends
    // a counter out of step with the card flags, a toggle-off must not wrap.
    let mut st = DetailState {
        display_name: "Leo Messi".into(),
        in_club_count: 0,
        total_cards: 1,
        cards: vec![card("cards/leo-messi/totw", true)],
    };
    let mut rec = Reconciler::new();

    let txn = rec.begin(&mut st, "cards/leo-messi/totw").unwrap();
    assert_eq!(st.in_club_count, 0);

    // rollback restores the snapshot, not "reverse the arithmetic"
    rec.rollback(&mut st, &txn);
    assert_eq!(st.in_club_count, 0);
    assert!(st.card("cards/leo-messi/totw").unwrap().in_club);
}

#[test]
fn unknown_card_is_rejected() {
    let mut st = state();
    let mut rec = Reconciler::new();
    assert_eq!(
        rec.begin(&mut st, "cards/nobody/base"),
        Err(ToggleRejected::UnknownCard)
    );
    assert_eq!(st, state());
}
