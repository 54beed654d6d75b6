//! Term frame builder.

use super::values::{to_definition, to_property_values, to_synonym, to_xref};
use super::{relationship_pairs, superclasses, visible_namespace, Context};
use crate::ast::{TermClause, TermFrame};
use crate::error::{Result, Scope};
use crate::model::{Intersection, TermData};

/// Builds a `[Term]` frame.
///
/// `default_namespace` is the ontology's `default-namespace`; a term in
/// that namespace gets no `namespace` clause.
///
/// # Errors
///
/// Fails on the first invalid identifier or unrepresentable value, naming
/// the term and field.
pub fn to_term_frame(t: &TermData, default_namespace: Option<&str>) -> Result<TermFrame> {
    let cx = Context::new(Scope::Term(t.id.clone()));
    let mut frame = TermFrame::new(cx.ident("id", &t.id)?);

    if t.anonymous {
        frame.push(TermClause::IsAnonymous(true));
    }
    if let Some(name) = &t.name {
        frame.push(TermClause::Name(cx.unquoted("name", name)?));
    }
    if let Some(ns) = visible_namespace(t.namespace.as_deref(), default_namespace) {
        frame.push(TermClause::Namespace(cx.ident("namespace", ns)?));
    }
    for alt in cx.sorted_idents("alternate_ids", &t.alternate_ids)? {
        frame.push(TermClause::AltId(alt));
    }
    if let Some(def) = &t.definition {
        frame.push(TermClause::Def(to_definition(&cx, "definition", def)?));
    }
    if let Some(comment) = &t.comment {
        frame.push(TermClause::Comment(cx.unquoted("comment", comment)?));
    }
    for subset in cx.sorted_idents("subsets", &t.subsets)? {
        frame.push(TermClause::Subset(subset));
    }
    for syn in &t.synonyms {
        frame.push(TermClause::Synonym(to_synonym(&cx, syn)?));
    }
    for xref in &t.xrefs {
        frame.push(TermClause::Xref(to_xref(&cx, "xrefs", xref)?));
    }
    if t.builtin {
        frame.push(TermClause::Builtin(true));
    }
    for pv in to_property_values(&cx, "annotations", &t.annotations)? {
        frame.push(TermClause::PropertyValue(pv));
    }
    for superclass in superclasses(&cx, &t.relationships)? {
        frame.push(TermClause::IsA(superclass));
    }

    let classes = t.intersection_of.iter().filter_map(|i| match i {
        Intersection::Class(class) => Some(class),
        Intersection::Relation(..) => None,
    });
    for class in cx.sorted_idents("intersection_of", classes)? {
        frame.push(TermClause::IntersectionOf(None, class));
    }
    let mut relations = Vec::new();
    for op in &t.intersection_of {
        if let Intersection::Relation(relation, class) = op {
            relations.push((
                cx.ident("intersection_of", relation)?,
                cx.ident("intersection_of", class)?,
            ));
        }
    }
    relations.sort();
    for (relation, class) in relations {
        frame.push(TermClause::IntersectionOf(Some(relation), class));
    }

    for id in cx.sorted_idents("union_of", &t.union_of)? {
        frame.push(TermClause::UnionOf(id));
    }
    for id in cx.sorted_idents("equivalent_to", &t.equivalent_to)? {
        frame.push(TermClause::EquivalentTo(id));
    }
    for id in cx.sorted_idents("disjoint_from", &t.disjoint_from)? {
        frame.push(TermClause::DisjointFrom(id));
    }
    for (relation, target) in relationship_pairs(&cx, &t.relationships)? {
        frame.push(TermClause::Relationship(relation, target));
    }
    if let Some(by) = &t.created_by {
        frame.push(TermClause::CreatedBy(cx.unquoted("created_by", by)?));
    }
    if let Some(date) = t.creation_date {
        frame.push(TermClause::CreationDate(date));
    }
    if t.obsolete {
        frame.push(TermClause::IsObsolete(true));
    }
    for id in cx.sorted_idents("replaced_by", &t.replaced_by)? {
        frame.push(TermClause::ReplacedBy(id));
    }
    for id in cx.sorted_idents("consider", &t.consider)? {
        frame.push(TermClause::Consider(id));
    }

    tracing::trace!(id = %t.id, clauses = frame.clauses().len(), "built term frame");
    Ok(frame)
}
