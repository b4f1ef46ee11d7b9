//! Tier 1: Feature Visibility
//!
//! What a feature that only understands single terms sees through the
//! splitter compared to the raw query environment.

use crate::test_utils::*;
use strata_rank::{PhraseSplitter, QueryEnvironment, TermData};

#[test]
fn tier1_phrase_words_become_adjacent_terms() {
    let mut query = build_query(vec![phrase(&["new", "york"], TITLE), word("pizza", TITLE)]);
    let doc = Doc::new(1, "best new york pizza", "");

    let splitter = PhraseSplitter::new(&query.env, TITLE);
    splitter.reserve_handles(&mut query.layout);
    let mut md = query.layout.create_match_data();
    unpack(&query, &doc, &mut md);
    splitter.update_match_data(&mut md).unwrap();

    let raw = term_positions(&query.env, &md, TITLE, doc.id);
    assert_eq!(raw, vec![Some(vec![1]), Some(vec![3])]);

    let split = term_positions(&splitter, &md, TITLE, doc.id);
    assert_eq!(split, vec![Some(vec![1]), Some(vec![2]), Some(vec![3])]);

    let positions: Vec<Vec<u32>> = split.into_iter().map(Option::unwrap).collect();
    assert_eq!(min_forward_distance(&positions[0], &positions[1]), Some(1));
    assert_eq!(min_forward_distance(&positions[1], &positions[2]), Some(1));
}

#[test]
fn tier1_phrase_in_other_field_stays_whole() {
    let mut query = build_query(vec![phrase(&["new", "york"], BODY), word("pizza", TITLE)]);
    let doc = Doc::new(1, "pizza", "i love new york");

    let splitter = PhraseSplitter::new(&query.env, TITLE);
    splitter.reserve_handles(&mut query.layout);
    let mut md = query.layout.create_match_data();
    unpack(&query, &doc, &mut md);
    splitter.update_match_data(&mut md).unwrap();

    assert_eq!(splitter.term_count(), 2);
    assert_eq!(splitter.term(0).unwrap().phrase_length(), 2);
    let body = term_positions(&splitter, &md, BODY, doc.id);
    assert_eq!(body, vec![Some(vec![2]), None]);
}

#[test]
fn tier1_sub_terms_inherit_phrase_identity() {
    let query = build_query(vec![word("cheap", TITLE), phrase(&["a", "b", "c"], TITLE)]);
    let splitter = PhraseSplitter::new(&query.env, TITLE);

    let ids: Vec<u32> = (0..splitter.term_count())
        .map(|i| splitter.term(i).unwrap().unique_id())
        .collect();
    assert_eq!(ids, vec![1, 2, 2, 2]);
}

#[test]
fn tier1_environment_surfaces_unchanged() {
    let mut query = build_query(vec![phrase(&["a", "b"], TITLE)]);
    query.env.properties_mut().add("rank.profile", "default");
    query.env.set_average_field_length("title", 8.0);

    let splitter = PhraseSplitter::for_field_name(&query.env, "title").unwrap();
    assert_eq!(
        splitter.properties().lookup("rank.profile").get(),
        Some("default")
    );
    assert_eq!(splitter.average_field_length("title"), 8.0);
    assert_eq!(
        splitter.index_environment().field_by_name("body").map(|f| f.id()),
        Some(BODY)
    );
    assert!(!splitter.location().is_valid());
}
