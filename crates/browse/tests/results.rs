#![forbid(unsafe_code)]

use metascan_browse::{ResultsState, PAGE_SIZE};
use metascan_core::Item;

fn item(id: &str, name: Option<&str>) -> Item {
    Item {
        id: id.to_string(),
        developer_name: name.map(str::to_string),
        extra: serde_json::Map::new(),
    }
}

fn accounts(n: usize) -> Vec<Item> {
    (1..=n)
        .map(|i| item(&format!("id{i}"), Some(&format!("Acct{i}"))))
        .collect()
}

#[test]
fn empty_term_matches_everything() {
    let mut rs = ResultsState::new();
    rs.set_items(accounts(7));
    assert_eq!(rs.filtered_count(), 7);
    assert_eq!(rs.visible_page().len(), 7);
}

#[test]
fn search_is_case_insensitive_substring_on_name() {
    let mut rs = ResultsState::new();
    rs.set_items(vec![
        item("1", Some("AccountService")),
        item("2", Some("LeadConverter")),
        item("3", None),
    ]);
    rs.set_search_term("ACCOUNT");
    assert_eq!(rs.search_term(), "account");
    assert_eq!(rs.filtered_count(), 1);
    assert_eq!(rs.visible_page()[0].id, "1");
    // an item without a name never matches
    rs.set_search_term("");
    assert_eq!(rs.filtered_count(), 3);
}

#[test]
fn twenty_three_items_paginate_into_three_pages() {
    let mut rs = ResultsState::new();
    rs.set_items(accounts(23));
    assert_eq!(rs.total_pages(), 3);
    assert_eq!(rs.page(), 1);
    assert!(rs.disable_previous());
    assert!(!rs.disable_next());
    assert!(rs.show_pagination());

    let first: Vec<&str> = rs.visible_page().iter().map(|it| it.id.as_str()).collect();
    assert_eq!(first.len(), PAGE_SIZE);
    assert_eq!(first[0], "id1");
    assert_eq!(first[9], "id10");

    rs.next_page();
    rs.next_page();
    assert_eq!(rs.page(), 3);
    let last: Vec<&str> = rs.visible_page().iter().map(|it| it.id.as_str()).collect();
    assert_eq!(last, vec!["id21", "id22", "id23"]);
    assert!(rs.disable_next());
    assert!(!rs.disable_previous());
}

#[test]
fn paging_is_idempotent_at_the_boundaries() {
    let mut rs = ResultsState::new();
    rs.set_items(accounts(23));
    rs.prev_page();
    assert_eq!(rs.page(), 1);
    for _ in 0..10 {
        rs.next_page();
    }
    assert_eq!(rs.page(), 3);
    rs.next_page();
    assert_eq!(rs.page(), 3);
}

#[test]
fn search_and_replace_rewind_to_page_one() {
    let mut rs = ResultsState::new();
    rs.set_items(accounts(23));
    rs.next_page();
    assert_eq!(rs.page(), 2);
    rs.set_search_term("acct1");
    assert_eq!(rs.page(), 1);
    // Acct1, Acct10..Acct19
    assert_eq!(rs.filtered_count(), 11);

    rs.next_page();
    assert_eq!(rs.page(), 2);
    rs.set_items(accounts(5));
    assert_eq!(rs.page(), 1);
}

#[test]
fn empty_states_distinguish_no_data_from_no_results() {
    let mut rs = ResultsState::new();
    assert!(rs.show_no_data());
    assert!(!rs.show_no_results());

    rs.set_items(accounts(3));
    rs.set_search_term("xyz");
    assert!(!rs.show_no_data());
    assert!(rs.show_no_results());
    assert_eq!(rs.total_pages(), 0);
    assert!(rs.visible_page().is_empty());
    // with no matches both controls stay disabled, and that is not an error
    assert!(rs.disable_previous());
    assert!(rs.disable_next());

    // no active term: an empty filtered page is not "no results"
    rs.set_search_term("");
    assert!(!rs.show_no_results());
}
