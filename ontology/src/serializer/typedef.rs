//! Typedef frame builder.
//!
//! Shares the term layout up to `property_value`, then interleaves the
//! typedef-only clauses: domain/range before `builtin`, `holds_over_chain`
//! and the property characteristics after it, the OWL alignment clauses
//! after `disjoint_from`, and `expand_*_to` plus the metadata-tag and
//! class-level flags at the very end.

use super::values::{to_definition, to_property_values, to_synonym, to_xref};
use super::{relationship_pairs, superclasses, visible_namespace, Context};
use crate::ast::{TypedefClause, TypedefFrame};
use crate::error::{Result, Scope};
use crate::model::RelationshipData;

/// Builds a `[Typedef]` frame.
///
/// `default_namespace` is the ontology's `default-namespace`; a typedef in
/// that namespace gets no `namespace` clause.
///
/// # Errors
///
/// Fails on the first invalid identifier or unrepresentable value, naming
/// the typedef and field.
pub fn to_typedef_frame(
    r: &RelationshipData,
    default_namespace: Option<&str>,
) -> Result<TypedefFrame> {
    let cx = Context::new(Scope::Typedef(r.id.clone()));
    let mut frame = TypedefFrame::new(cx.ident("id", &r.id)?);

    if r.anonymous {
        frame.push(TypedefClause::IsAnonymous(true));
    }
    if let Some(name) = &r.name {
        frame.push(TypedefClause::Name(cx.unquoted("name", name)?));
    }
    if let Some(ns) = visible_namespace(r.namespace.as_deref(), default_namespace) {
        frame.push(TypedefClause::Namespace(cx.ident("namespace", ns)?));
    }
    for alt in cx.sorted_idents("alternate_ids", &r.alternate_ids)? {
        frame.push(TypedefClause::AltId(alt));
    }
    if let Some(def) = &r.definition {
        frame.push(TypedefClause::Def(to_definition(&cx, "definition", def)?));
    }
    if let Some(comment) = &r.comment {
        frame.push(TypedefClause::Comment(cx.unquoted("comment", comment)?));
    }
    for subset in cx.sorted_idents("subsets", &r.subsets)? {
        frame.push(TypedefClause::Subset(subset));
    }
    for syn in &r.synonyms {
        frame.push(TypedefClause::Synonym(to_synonym(&cx, syn)?));
    }
    for xref in &r.xrefs {
        frame.push(TypedefClause::Xref(to_xref(&cx, "xrefs", xref)?));
    }
    for pv in to_property_values(&cx, "annotations", &r.annotations)? {
        frame.push(TypedefClause::PropertyValue(pv));
    }
    if let Some(domain) = &r.domain {
        frame.push(TypedefClause::Domain(cx.ident("domain", domain)?));
    }
    if let Some(range) = &r.range {
        frame.push(TypedefClause::Range(cx.ident("range", range)?));
    }
    if r.builtin {
        frame.push(TypedefClause::Builtin(true));
    }
    for (a, b) in cx.sorted_pairs("holds_over_chain", &r.holds_over_chain)? {
        frame.push(TypedefClause::HoldsOverChain(a, b));
    }

    let characteristics = [
        (r.antisymmetric, TypedefClause::IsAntiSymmetric(true)),
        (r.cyclic, TypedefClause::IsCyclic(true)),
        (r.reflexive, TypedefClause::IsReflexive(true)),
        (r.asymmetric, TypedefClause::IsAsymmetric(true)),
        (r.symmetric, TypedefClause::IsSymmetric(true)),
        (r.transitive, TypedefClause::IsTransitive(true)),
        (r.functional, TypedefClause::IsFunctional(true)),
        (r.inverse_functional, TypedefClause::IsInverseFunctional(true)),
    ];
    for (_, clause) in characteristics.into_iter().filter(|(set, _)| *set) {
        frame.push(clause);
    }

    for superproperty in superclasses(&cx, &r.relationships)? {
        frame.push(TypedefClause::IsA(superproperty));
    }
    for id in cx.sorted_idents("intersection_of", &r.intersection_of)? {
        frame.push(TypedefClause::IntersectionOf(id));
    }
    for id in cx.sorted_idents("union_of", &r.union_of)? {
        frame.push(TypedefClause::UnionOf(id));
    }
    for id in cx.sorted_idents("equivalent_to", &r.equivalent_to)? {
        frame.push(TypedefClause::EquivalentTo(id));
    }
    for id in cx.sorted_idents("disjoint_from", &r.disjoint_from)? {
        frame.push(TypedefClause::DisjointFrom(id));
    }
    if let Some(inverse) = &r.inverse_of {
        frame.push(TypedefClause::InverseOf(cx.ident("inverse_of", inverse)?));
    }
    for id in cx.sorted_idents("transitive_over", &r.transitive_over)? {
        frame.push(TypedefClause::TransitiveOver(id));
    }
    for (a, b) in cx.sorted_pairs("equivalent_to_chain", &r.equivalent_to_chain)? {
        frame.push(TypedefClause::EquivalentToChain(a, b));
    }
    for id in cx.sorted_idents("disjoint_over", &r.disjoint_over)? {
        frame.push(TypedefClause::DisjointOver(id));
    }
    for (relation, target) in relationship_pairs(&cx, &r.relationships)? {
        frame.push(TypedefClause::Relationship(relation, target));
    }
    if r.obsolete {
        frame.push(TypedefClause::IsObsolete(true));
    }
    if let Some(by) = &r.created_by {
        frame.push(TypedefClause::CreatedBy(cx.unquoted("created_by", by)?));
    }
    if let Some(date) = r.creation_date {
        frame.push(TypedefClause::CreationDate(date));
    }
    for id in cx.sorted_idents("replaced_by", &r.replaced_by)? {
        frame.push(TypedefClause::ReplacedBy(id));
    }
    for id in cx.sorted_idents("consider", &r.consider)? {
        frame.push(TypedefClause::Consider(id));
    }
    // Source order, never sorted.
    for def in &r.expand_assertion_to {
        frame.push(TypedefClause::ExpandAssertionTo(to_definition(
            &cx,
            "expand_assertion_to",
            def,
        )?));
    }
    for def in &r.expand_expression_to {
        frame.push(TypedefClause::ExpandExpressionTo(to_definition(
            &cx,
            "expand_expression_to",
            def,
        )?));
    }
    if r.metadata_tag {
        frame.push(TypedefClause::IsMetadataTag(true));
    }
    if r.class_level {
        frame.push(TypedefClause::IsClassLevel(true));
    }

    tracing::trace!(id = %r.id, clauses = frame.clauses().len(), "built typedef frame");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Definition, PropertyValue, SynonymData, SynonymScope, Xref, IS_A};

    fn tags(frame: &TypedefFrame) -> Vec<&'static str> {
        frame.clauses().iter().map(TypedefClause::tag).collect()
    }

    fn everything() -> RelationshipData {
        let mut r = RelationshipData::new("part_of");
        r.anonymous = true;
        r.name = Some("part of".to_owned());
        r.namespace = Some("external".to_owned());
        r.alternate_ids.insert("BFO:0000050".to_owned());
        r.definition = Some(Definition::new("a core relation"));
        r.comment = Some("see RO".to_owned());
        r.subsets.insert("ro-eco".to_owned());
        r.synonyms.insert(SynonymData::new("is part of", SynonymScope::Exact));
        r.xrefs.insert(Xref::new("BFO:0000050"));
        r.annotations
            .insert(PropertyValue::literal("IAO:0000116", "note", "xsd:string"));
        r.domain = Some("BFO:0000001".to_owned());
        r.range = Some("BFO:0000002".to_owned());
        r.builtin = true;
        r.holds_over_chain
            .insert(("part_of".to_owned(), "part_of".to_owned()));
        r.antisymmetric = true;
        r.cyclic = true;
        r.reflexive = true;
        r.asymmetric = true;
        r.symmetric = true;
        r.transitive = true;
        r.functional = true;
        r.inverse_functional = true;
        r.add_relationship(IS_A, "overlaps");
        r.intersection_of.insert("overlaps".to_owned());
        r.union_of.insert("u".to_owned());
        r.equivalent_to.insert("e".to_owned());
        r.disjoint_from.insert("d".to_owned());
        r.inverse_of = Some("has_part".to_owned());
        r.transitive_over.insert("t".to_owned());
        r.equivalent_to_chain
            .insert(("a".to_owned(), "b".to_owned()));
        r.disjoint_over.insert("o".to_owned());
        r.add_relationship("RO:0002211", "x");
        r.obsolete = true;
        r.created_by = Some("cjm".to_owned());
        r.creation_date = chrono::DateTime::from_timestamp(0, 0);
        r.replaced_by.insert("BFO:0000050".to_owned());
        r.consider.insert("BFO:0000051".to_owned());
        r.expand_assertion_to.push(Definition::new("?X part_of ?Y"));
        r.expand_expression_to.push(Definition::new("BFO_0000050 some ?Y"));
        r.metadata_tag = true;
        r.class_level = true;
        r
    }

    #[test]
    fn full_clause_order() -> Result<()> {
        assert_eq!(
            tags(&to_typedef_frame(&everything(), None)?),
            [
                "is_anonymous",
                "name",
                "namespace",
                "alt_id",
                "def",
                "comment",
                "subset",
                "synonym",
                "xref",
                "property_value",
                "domain",
                "range",
                "builtin",
                "holds_over_chain",
                "is_anti_symmetric",
                "is_cyclic",
                "is_reflexive",
                "is_asymmetric",
                "is_symmetric",
                "is_transitive",
                "is_functional",
                "is_inverse_functional",
                "is_a",
                "intersection_of",
                "union_of",
                "equivalent_to",
                "disjoint_from",
                "inverse_of",
                "transitive_over",
                "equivalent_to_chain",
                "disjoint_over",
                "relationship",
                "is_obsolete",
                "created_by",
                "creation_date",
                "replaced_by",
                "consider",
                "expand_assertion_to",
                "expand_expression_to",
                "is_metadata_tag",
                "is_class_level",
            ]
        );
        Ok(())
    }

    #[test]
    fn only_set_flags_are_emitted() -> Result<()> {
        let mut r = RelationshipData::new("part_of");
        r.transitive = true;
        r.class_level = true;
        assert_eq!(
            tags(&to_typedef_frame(&r, None)?),
            ["is_transitive", "is_class_level"]
        );
        Ok(())
    }

    #[test]
    fn expansions_keep_model_order() -> Result<()> {
        let mut r = RelationshipData::new("r");
        r.expand_expression_to.push(Definition::new("zzz"));
        r.expand_expression_to.push(Definition::new("aaa"));
        let lines: Vec<String> = to_typedef_frame(&r, None)?
            .clauses()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                r#"expand_expression_to: "zzz" []"#,
                r#"expand_expression_to: "aaa" []"#
            ]
        );
        Ok(())
    }

    #[test]
    fn namespace_suppressed_for_default() -> Result<()> {
        let mut r = RelationshipData::new("part_of");
        r.namespace = Some("ro".to_owned());
        assert!(tags(&to_typedef_frame(&r, Some("ro"))?).is_empty());
        assert_eq!(tags(&to_typedef_frame(&r, Some("go"))?), ["namespace"]);
        Ok(())
    }
}
