//! Property-based tests for rendering.
//!
//! Uses proptest to check that output depends on model content only:
//! insertion order, repetition and thread never change the bytes.

use std::collections::BTreeSet;

use obo_ontology::{
    from_document, to_document, to_obo, Ident, IdentError, Ontology, PropertyValue,
    SynonymData, SynonymScope, TermData, Xref, IS_A,
};
use proptest::prelude::*;

fn prefixed_id() -> impl Strategy<Value = String> {
    ("[A-Z]{2,4}", 0u32..10_000).prop_map(|(prefix, n)| format!("{prefix}:{n:07}"))
}

fn relation() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(IS_A.to_owned()),
        Just("part_of".to_owned()),
        Just("has_part".to_owned()),
        Just("regulates".to_owned()),
    ]
}

fn scope() -> impl Strategy<Value = SynonymScope> {
    prop_oneof![
        Just(SynonymScope::Broad),
        Just(SynonymScope::Exact),
        Just(SynonymScope::Narrow),
        Just(SynonymScope::Related),
    ]
}

/// One piece of content that can be added to a term.
#[derive(Debug, Clone)]
enum Fact {
    Relationship(String, String),
    AltId(String),
    Xref(String, Option<String>),
    Synonym(String, SynonymScope),
    Annotation(String, String),
}

fn fact() -> impl Strategy<Value = Fact> {
    prop_oneof![
        (relation(), prefixed_id()).prop_map(|(r, t)| Fact::Relationship(r, t)),
        prefixed_id().prop_map(Fact::AltId),
        (prefixed_id(), proptest::option::of("[a-z ]{1,12}"))
            .prop_map(|(id, d)| Fact::Xref(id, d)),
        ("[a-z ]{1,12}", scope()).prop_map(|(d, s)| Fact::Synonym(d, s)),
        (prefixed_id(), "[a-z]{1,8}").prop_map(|(p, v)| Fact::Annotation(p, v)),
    ]
}

fn apply(term: &mut TermData, fact: &Fact) {
    match fact {
        Fact::Relationship(r, t) => {
            term.add_relationship(r.clone(), t.clone());
        }
        Fact::AltId(id) => {
            term.alternate_ids.insert(id.clone());
        }
        Fact::Xref(id, Some(d)) => {
            term.xrefs.insert(Xref::with_description(id.clone(), d.clone()));
        }
        Fact::Xref(id, None) => {
            term.xrefs.insert(Xref::new(id.clone()));
        }
        Fact::Synonym(d, s) => {
            term.synonyms.insert(SynonymData::new(d.clone(), *s));
        }
        Fact::Annotation(p, v) => {
            term.annotations
                .insert(PropertyValue::literal(p.clone(), v.clone(), "xsd:string"));
        }
    }
}

fn build(ids: &[String], facts: &[Fact]) -> Ontology {
    let mut ont = Ontology::new();
    for id in ids {
        let mut term = TermData::new(id.clone());
        for f in facts {
            apply(&mut term, f);
        }
        ont.insert_term(term);
    }
    ont
}

// =============================================================================
// Sort Stability
// =============================================================================

proptest! {
    /// Insertion order of frames and facts never changes the output.
    #[test]
    fn prop_insertion_order_irrelevant(
        ids in proptest::collection::vec(prefixed_id(), 1..6),
        facts in proptest::collection::vec(fact(), 0..20),
    ) {
        let forward = build(&ids, &facts);
        let mut rev_ids = ids.clone();
        rev_ids.reverse();
        let mut rev_facts = facts.clone();
        rev_facts.reverse();
        let backward = build(&rev_ids, &rev_facts);
        prop_assert_eq!(to_obo(&forward).ok(), to_obo(&backward).ok());
    }

    /// Term frames come out sorted by id.
    #[test]
    fn prop_terms_sorted_by_id(ids in proptest::collection::btree_set(prefixed_id(), 1..10)) {
        let ids: Vec<String> = ids.into_iter().collect();
        let ont = build(&ids, &[]);
        let doc = to_document(&ont).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let rendered: Vec<String> = doc.terms().map(|t| t.id().to_string()).collect();
        let mut sorted = rendered.clone();
        sorted.sort();
        prop_assert_eq!(rendered, sorted);
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Rendering the same model twice gives identical bytes.
    #[test]
    fn prop_render_is_deterministic(
        ids in proptest::collection::vec(prefixed_id(), 1..4),
        facts in proptest::collection::vec(fact(), 0..12),
    ) {
        let ont = build(&ids, &facts);
        prop_assert_eq!(to_obo(&ont).ok(), to_obo(&ont).ok());
    }

    /// The document reads back into the model it came from.
    #[test]
    fn prop_document_reads_back(
        ids in proptest::collection::vec(prefixed_id(), 1..4),
        facts in proptest::collection::vec(fact(), 0..12),
    ) {
        let ont = build(&ids, &facts);
        let doc = to_document(&ont).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back = from_document(&doc).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, ont);
    }

    /// `is_a` targets are emitted as `is_a` clauses, never as `relationship`.
    #[test]
    fn prop_is_a_extracted(targets in proptest::collection::btree_set(prefixed_id(), 1..5)) {
        let mut term = TermData::new("GO:0000001");
        for t in &targets {
            term.add_relationship(IS_A, t.clone());
        }
        let mut ont = Ontology::new();
        ont.insert_term(term);
        let text = to_obo(&ont).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(!text.contains("relationship: is_a"));
        let emitted: BTreeSet<String> = text
            .lines()
            .filter_map(|l| l.strip_prefix("is_a: "))
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(emitted, targets);
    }
}

// =============================================================================
// Identifier Parsing
// =============================================================================

proptest! {
    /// Valid identifiers parse to themselves.
    #[test]
    fn prop_ident_text_preserved(id in prefixed_id()) {
        let parsed = Ident::parse(&id).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed.as_str(), id.as_str());
        prop_assert!(parsed.prefix().is_some());
    }

    /// Whitespace anywhere is rejected.
    #[test]
    fn prop_whitespace_rejected(a in "[a-z]{1,5}", b in "[a-z]{1,5}") {
        let id = format!("{a} {b}");
        let is_invalid_char = matches!(
            Ident::parse(&id),
            Err(IdentError::InvalidChar { ch: ' ', .. })
        );
        prop_assert!(is_invalid_char);
    }

    /// Identifier order matches text order.
    #[test]
    fn prop_ident_order_matches_text(a in prefixed_id(), b in prefixed_id()) {
        let ia = Ident::parse(&a).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let ib = Ident::parse(&b).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
    }
}
