//! Test utilities for the scoring loop suite

use strata_rank::{
    CollectionType, FieldId, FieldType, MatchData, MatchDataLayout, QueryEnvironment,
    SimpleIndexEnvironment, SimpleQueryEnvironment, SimpleTermData, TermData,
    TermFieldMatchDataPosition,
};

/// Field ids of the test schema
pub const TITLE: FieldId = 0;
pub const BODY: FieldId = 1;

/// One query term: its words and the field it is searched in
pub struct QueryTerm {
    pub words: Vec<&'static str>,
    pub field: FieldId,
}

pub fn word(w: &'static str, field: FieldId) -> QueryTerm {
    QueryTerm {
        words: vec![w],
        field,
    }
}

pub fn phrase(ws: &[&'static str], field: FieldId) -> QueryTerm {
    QueryTerm {
        words: ws.to_vec(),
        field,
    }
}

/// A document: tokenized title and body
pub struct Doc {
    pub id: u32,
    pub title: Vec<&'static str>,
    pub body: Vec<&'static str>,
}

impl Doc {
    pub fn new(id: u32, title: &'static str, body: &'static str) -> Self {
        Doc {
            id,
            title: title.split_whitespace().collect(),
            body: body.split_whitespace().collect(),
        }
    }

    fn field(&self, field: FieldId) -> &[&'static str] {
        if field == TITLE {
            &self.title
        } else {
            &self.body
        }
    }
}

/// Query environment, its layout and the words of each original term
pub struct Query {
    pub env: SimpleQueryEnvironment,
    pub layout: MatchDataLayout,
    pub terms: Vec<QueryTerm>,
}

pub fn build_query(terms: Vec<QueryTerm>) -> Query {
    let mut index_env = SimpleIndexEnvironment::new();
    index_env.add_field("title", FieldType::Index, CollectionType::Single);
    index_env.add_field("body", FieldType::Index, CollectionType::Single);

    let mut env = SimpleQueryEnvironment::new(index_env);
    let mut layout = MatchDataLayout::new();
    for (i, t) in terms.iter().enumerate() {
        let handle = layout.alloc_term_field(t.field);
        env.add_term(
            SimpleTermData::new()
                .with_unique_id(i as u32 + 1)
                .with_phrase_length(t.words.len() as u32)
                .with_field(t.field, handle),
        );
    }
    Query { env, layout, terms }
}

/// Unpack postings for `doc` into `md`, the way the search iterators do:
/// a phrase records the position of its first word
pub fn unpack(query: &Query, doc: &Doc, md: &mut MatchData) {
    for (i, t) in query.terms.iter().enumerate() {
        let term = query.env.term(i as u32).unwrap();
        let handle = term.field_handle(t.field).unwrap();
        let tokens = doc.field(t.field);
        let tfmd = md.resolve_mut(handle).unwrap();
        tfmd.reset(doc.id);
        if tokens.len() < t.words.len() {
            continue;
        }
        for start in 0..=tokens.len() - t.words.len() {
            if tokens[start..start + t.words.len()] == t.words[..] {
                tfmd.append_position(TermFieldMatchDataPosition::new(
                    0,
                    start as u32,
                    1,
                    tokens.len() as u32,
                ));
            }
        }
    }
}

/// Positions of every public term in `field`, as a single-term feature sees them
pub fn term_positions<E: QueryEnvironment>(
    env: &E,
    md: &MatchData,
    field: FieldId,
    doc_id: u32,
) -> Vec<Option<Vec<u32>>> {
    (0..env.term_count())
        .map(|i| {
            let term = env.term(i)?;
            let handle = term.field_handle(field)?;
            let tfmd = md.resolve(handle)?;
            if !tfmd.has_data_for(doc_id) {
                return Some(Vec::new());
            }
            Some(tfmd.positions().iter().map(|p| p.position()).collect())
        })
        .collect()
}

/// Smallest forward distance from term `a` to term `b`, the core of a
/// single-term proximity feature
pub fn min_forward_distance(a: &[u32], b: &[u32]) -> Option<u32> {
    a.iter()
        .flat_map(|&pa| b.iter().filter(move |&&pb| pb > pa).map(move |&pb| pb - pa))
        .min()
}
