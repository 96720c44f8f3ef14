// tests/gateway_params.rs
//
// Pure request-shaping rules: which query parameters go on the wire, and
// how card slugs are embedded in a path.

use pp_browse::api::encode_path_segment;
use pp_browse::config::options::{ClubFilter, Criteria, SortDir};

#[test]
fn default_criteria_sends_only_sort() {
    let criteria = Criteria::default();
    let pairs = criteria.query_pairs();
    assert_eq!(pairs, vec![("sort", "desc".to_string())]);
}

#[test]
fn whitespace_search_is_omitted() {
    let criteria = Criteria {
        search: "   ".into(),
        ..Criteria::default()
    };
    let pairs = criteria.query_pairs();
    assert!(pairs.iter().all(|(k, _)| *k != "search"));
}

#[test]
fn non_default_criteria_sends_all_three() {
    let criteria = Criteria {
        search: " messi ".into(),
        filter: ClubFilter::InClub,
        sort: SortDir::Asc,
    };
    let pairs = criteria.query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("search", "messi".to_string()),
            ("in_club", "in_club".to_string()),
            ("sort", "asc".to_string()),
        ]
    );
}

#[test]
fn not_in_club_filter_value() {
    let criteria = Criteria {
        filter: ClubFilter::NotInClub,
        ..Criteria::default()
    };
    let pairs = criteria.query_pairs();
    assert!(pairs.contains(&("in_club", "not_in_club".to_string())));
}

#[test]
fn slug_with_separators_becomes_one_segment() {
    assert_eq!(
        encode_path_segment("cards/leo-messi/base"),
        "cards%2Fleo-messi%2Fbase"
    );
}

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_path_segment("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn reserved_and_non_ascii_are_escaped() {
    assert_eq!(encode_path_segment("a b"), "a%20b");
    assert_eq!(encode_path_segment("é"), "%C3%A9");
    assert_eq!(encode_path_segment("a?b=c"), "a%3Fb%3Dc");
}
