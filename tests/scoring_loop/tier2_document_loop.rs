//! Tier 2: Document Loop
//!
//! One splitter and one match data per query, rebound for every document.

use crate::test_utils::*;
use strata_rank::{
    PhraseSplitConfig, PhraseSplitter, Properties, QueryEnvironment, FIELD_PROPERTY,
};

fn docs() -> Vec<Doc> {
    vec![
        Doc::new(10, "new york pizza", ""),
        Doc::new(11, "pizza in york", ""),
        Doc::new(12, "new york new york", ""),
    ]
}

#[test]
fn tier2_each_document_sees_its_own_positions() {
    let mut query = build_query(vec![phrase(&["new", "york"], TITLE), word("pizza", TITLE)]);
    let splitter = PhraseSplitter::new(&query.env, TITLE);
    splitter.reserve_handles(&mut query.layout);
    let mut md = query.layout.create_match_data();

    let expected = [
        vec![Some(vec![0]), Some(vec![1]), Some(vec![2])],
        vec![Some(vec![]), Some(vec![]), Some(vec![0])],
        vec![Some(vec![0, 2]), Some(vec![1, 3]), Some(vec![])],
    ];
    for (doc, want) in docs().iter().zip(expected.iter()) {
        unpack(&query, doc, &mut md);
        splitter.update_match_data(&mut md).unwrap();
        assert_eq!(
            &term_positions(&splitter, &md, TITLE, doc.id),
            want,
            "doc {}",
            doc.id
        );
    }
}

#[test]
fn tier2_repeated_update_is_stable() {
    let mut query = build_query(vec![phrase(&["new", "york"], TITLE)]);
    let splitter = PhraseSplitter::new(&query.env, TITLE);
    splitter.reserve_handles(&mut query.layout);
    let mut md = query.layout.create_match_data();

    for doc in docs() {
        unpack(&query, &doc, &mut md);
        splitter.update_match_data(&mut md).unwrap();
        let once = md.clone();
        splitter.update_match_data(&mut md).unwrap();
        assert_eq!(once, md, "doc {}", doc.id);
    }
}

#[test]
fn tier2_configured_from_rank_properties() {
    let mut query = build_query(vec![phrase(&["new", "york"], TITLE)]);
    let mut props = Properties::new();
    props.add(FIELD_PROPERTY, "title");
    let config = PhraseSplitConfig::from_properties(&props).unwrap();

    let splitter = PhraseSplitter::from_config(&query.env, &config).unwrap();
    assert_eq!(splitter.term_count(), 2);

    splitter.reserve_handles(&mut query.layout);
    let mut md = query.layout.create_match_data();
    let doc = Doc::new(1, "new york", "");
    unpack(&query, &doc, &mut md);
    splitter.update_match_data(&mut md).unwrap();
    assert_eq!(
        term_positions(&splitter, &md, TITLE, doc.id),
        vec![Some(vec![0]), Some(vec![1])]
    );
}

#[test]
fn tier2_independent_splitters_on_threads() {
    let query = build_query(vec![phrase(&["new", "york"], TITLE), word("pizza", BODY)]);
    let env = &query.env;

    let counts: Vec<u32> = std::thread::scope(|s| {
        let handles: Vec<_> = [TITLE, BODY]
            .into_iter()
            .map(|field| s.spawn(move || PhraseSplitter::new(env, field).term_count()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![3, 2]);
}
