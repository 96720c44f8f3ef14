// tests/list_controller.rs
//
// Out-of-order response handling: only the latest query's response may be
// displayed, and list errors collapse to an empty result.

use pp_browse::api::types::{PlayerCounts, PlayerSummary};
use pp_browse::api::ApiError;
use pp_browse::controller::list::ListController;

fn player(slug: &str, name: &str) -> PlayerSummary {
    PlayerSummary {
        slug: slug.into(),
        display_name: name.into(),
        base_card_image_url: None,
        base_card_rating: Some(90),
        any_in_club: false,
        in_club_count: 0,
        total_cards: 1,
    }
}

#[test]
fn stale_response_is_discarded() {
    let mut list = ListController::new();

    let first = list.begin_query();
    let second = list.begin_query();
    assert!(first < second);

    // the older query resolves after the newer one was issued
    let applied = list.apply_players(first, Ok(vec![player("a", "Stale")]));
    assert!(!applied);
    assert!(list.players.is_empty());
    assert!(list.loading, "older response must not clear the newer query's loading state");

    let applied = list.apply_players(second, Ok(vec![player("b", "Fresh")]));
    assert!(applied);
    assert_eq!(list.players.len(), 1);
    assert_eq!(list.players[0].display_name, "Fresh");
    assert!(!list.loading);
}

#[test]
fn stale_response_cannot_overwrite_fresh_state() {
    let mut list = ListController::new();

    let first = list.begin_query();
    let second = list.begin_query();

    list.apply_players(second, Ok(vec![player("b", "Fresh")]));
    list.apply_players(first, Ok(vec![player("a", "Stale")]));

    assert_eq!(list.players[0].display_name, "Fresh");
}

#[test]
fn fetch_error_collapses_to_empty_result() {
    let mut list = ListController::new();

    let t = list.begin_query();
    list.apply_players(t, Ok(vec![player("a", "A"), player("b", "B")]));
    assert_eq!(list.players.len(), 2);

    let t = list.begin_query();
    let applied = list.apply_players(t, Err(ApiError::Transport("down".into())));
    assert!(applied);
    assert!(list.players.is_empty());
    assert!(!list.loading);
}

#[test]
fn counts_error_keeps_previous_counts() {
    let mut list = ListController::new();

    list.apply_counts(Ok(PlayerCounts {
        total: 42,
        in_club: 7,
    }));
    list.apply_counts(Err(ApiError::Transport("down".into())));

    assert_eq!(list.counts, PlayerCounts { total: 42, in_club: 7 });
}
