//! Converts an [`OboDoc`] back into an [`Ontology`].
//!
//! This is the inverse of [`crate::serializer::to_document`] at the
//! document level: `from_document(&to_document(&o)?)` equals `o` for any
//! model the format can carry. The format drops two things: `false`
//! flags (only `true` is ever emitted) and a namespace equal to the
//! default namespace, which reads back as `None`.

use std::collections::BTreeSet;

use crate::ast::{
    self, Frame, HeaderClause, HeaderFrame, OboDoc, TermClause, TermFrame, TypedefClause,
    TypedefFrame,
};
use crate::error::{Error, Result, Scope};
use crate::ident::Ident;
use crate::model::{
    Definition, Idspace, Intersection, Metadata, Ontology, PropertyValue, RelationshipData,
    Subset, SynonymData, SynonymType, TermData, Xref, IS_A,
};

/// Builds an ontology from a document.
///
/// # Errors
///
/// Returns [`Error::DuplicateFrame`] when the document holds two header
/// frames, or two term or typedef frames with the same id.
pub fn from_document(doc: &OboDoc) -> Result<Ontology> {
    let mut ontology = Ontology::new();
    for frame in doc.frames() {
        match frame {
            Frame::Header(header) => {
                if ontology.metadata.is_some() {
                    return Err(Error::DuplicateFrame {
                        scope: Scope::Header,
                    });
                }
                ontology.metadata = Some(read_header(header));
            }
            Frame::Term(frame) => {
                let term = read_term(frame);
                if ontology.terms.contains_key(&term.id) {
                    return Err(Error::DuplicateFrame {
                        scope: Scope::Term(term.id),
                    });
                }
                ontology.insert_term(term);
            }
            Frame::Typedef(frame) => {
                let rel = read_typedef(frame);
                if ontology.relationships.contains_key(&rel.id) {
                    return Err(Error::DuplicateFrame {
                        scope: Scope::Typedef(rel.id),
                    });
                }
                ontology.insert_relationship(rel);
            }
        }
    }
    Ok(ontology)
}

fn text(id: &Ident) -> String {
    id.as_str().to_owned()
}

fn read_xref(xref: &ast::Xref) -> Xref {
    Xref {
        id: text(&xref.id),
        description: xref.description.as_ref().map(|d| d.as_str().to_owned()),
    }
}

fn read_xrefs(list: &ast::XrefList) -> BTreeSet<Xref> {
    list.iter().map(read_xref).collect()
}

fn read_definition(def: &ast::Definition) -> Definition {
    Definition {
        text: def.text.as_str().to_owned(),
        xrefs: read_xrefs(&def.xrefs),
    }
}

fn read_synonym(syn: &ast::Synonym) -> SynonymData {
    SynonymData {
        description: syn.description.as_str().to_owned(),
        scope: syn.scope,
        type_: syn.type_.as_ref().map(text),
        xrefs: read_xrefs(&syn.xrefs),
    }
}

fn read_property_value(pv: &ast::PropertyValue) -> PropertyValue {
    match pv {
        ast::PropertyValue::Resource(property, resource) => {
            PropertyValue::resource(text(property), text(resource))
        }
        ast::PropertyValue::Literal(property, literal, datatype) => {
            PropertyValue::literal(text(property), literal.as_str(), text(datatype))
        }
    }
}

fn read_header(frame: &HeaderFrame) -> Metadata {
    let mut m = Metadata::default();
    for clause in frame.clauses() {
        match clause {
            HeaderClause::FormatVersion(v) => m.format_version = Some(v.as_str().to_owned()),
            HeaderClause::DataVersion(v) => m.data_version = Some(v.as_str().to_owned()),
            HeaderClause::Date(date) => m.date = Some(*date),
            HeaderClause::SavedBy(v) => m.saved_by = Some(v.as_str().to_owned()),
            HeaderClause::AutoGeneratedBy(v) => m.auto_generated_by = Some(v.as_str().to_owned()),
            HeaderClause::Import(id) => {
                m.imports.insert(text(id));
            }
            HeaderClause::Subsetdef(name, description) => {
                m.subsetdefs.insert(Subset {
                    name: text(name),
                    description: description.as_str().to_owned(),
                });
            }
            HeaderClause::SynonymTypedef(id, description, scope) => {
                m.synonymtypedefs.insert(SynonymType {
                    id: text(id),
                    description: description.as_str().to_owned(),
                    scope: *scope,
                });
            }
            HeaderClause::DefaultNamespace(ns) => m.default_namespace = Some(text(ns)),
            HeaderClause::NamespaceIdRule(v) => m.namespace_id_rule = Some(v.as_str().to_owned()),
            HeaderClause::Idspace(prefix, url, description) => {
                m.idspaces.insert(
                    prefix.as_str().to_owned(),
                    Idspace {
                        url: text(url),
                        description: description.as_ref().map(|d| d.as_str().to_owned()),
                    },
                );
            }
            HeaderClause::PropertyValue(pv) => {
                m.annotations.insert(read_property_value(pv));
            }
            HeaderClause::Remark(v) => {
                m.remarks.insert(v.as_str().to_owned());
            }
            HeaderClause::Ontology(v) => m.ontology = Some(v.as_str().to_owned()),
            HeaderClause::OwlAxioms(v) => m.owl_axioms.push(v.as_str().to_owned()),
            HeaderClause::Unreserved(tag, v) => {
                m.unreserved
                    .entry(tag.as_str().to_owned())
                    .or_default()
                    .insert(v.as_str().to_owned());
            }
        }
    }
    m
}

fn read_term(frame: &TermFrame) -> TermData {
    let mut t = TermData::new(text(frame.id()));
    for clause in frame.clauses() {
        match clause {
            TermClause::IsAnonymous(b) => t.anonymous = *b,
            TermClause::Name(v) => t.name = Some(v.as_str().to_owned()),
            TermClause::Namespace(ns) => t.namespace = Some(text(ns)),
            TermClause::AltId(id) => {
                t.alternate_ids.insert(text(id));
            }
            TermClause::Def(def) => t.definition = Some(read_definition(def)),
            TermClause::Comment(v) => t.comment = Some(v.as_str().to_owned()),
            TermClause::Subset(id) => {
                t.subsets.insert(text(id));
            }
            TermClause::Synonym(syn) => {
                t.synonyms.insert(read_synonym(syn));
            }
            TermClause::Xref(xref) => {
                t.xrefs.insert(read_xref(xref));
            }
            TermClause::Builtin(b) => t.builtin = *b,
            TermClause::PropertyValue(pv) => {
                t.annotations.insert(read_property_value(pv));
            }
            TermClause::IsA(id) => {
                t.add_relationship(IS_A, text(id));
            }
            TermClause::IntersectionOf(None, class) => {
                t.intersection_of.insert(Intersection::Class(text(class)));
            }
            TermClause::IntersectionOf(Some(relation), class) => {
                t.intersection_of
                    .insert(Intersection::Relation(text(relation), text(class)));
            }
            TermClause::UnionOf(id) => {
                t.union_of.insert(text(id));
            }
            TermClause::EquivalentTo(id) => {
                t.equivalent_to.insert(text(id));
            }
            TermClause::DisjointFrom(id) => {
                t.disjoint_from.insert(text(id));
            }
            TermClause::Relationship(relation, target) => {
                t.add_relationship(text(relation), text(target));
            }
            TermClause::CreatedBy(v) => t.created_by = Some(v.as_str().to_owned()),
            TermClause::CreationDate(date) => t.creation_date = Some(*date),
            TermClause::IsObsolete(b) => t.obsolete = *b,
            TermClause::ReplacedBy(id) => {
                t.replaced_by.insert(text(id));
            }
            TermClause::Consider(id) => {
                t.consider.insert(text(id));
            }
        }
    }
    t
}

fn read_typedef(frame: &TypedefFrame) -> RelationshipData {
    let mut r = RelationshipData::new(text(frame.id()));
    for clause in frame.clauses() {
        match clause {
            TypedefClause::IsAnonymous(b) => r.anonymous = *b,
            TypedefClause::Name(v) => r.name = Some(v.as_str().to_owned()),
            TypedefClause::Namespace(ns) => r.namespace = Some(text(ns)),
            TypedefClause::AltId(id) => {
                r.alternate_ids.insert(text(id));
            }
            TypedefClause::Def(def) => r.definition = Some(read_definition(def)),
            TypedefClause::Comment(v) => r.comment = Some(v.as_str().to_owned()),
            TypedefClause::Subset(id) => {
                r.subsets.insert(text(id));
            }
            TypedefClause::Synonym(syn) => {
                r.synonyms.insert(read_synonym(syn));
            }
            TypedefClause::Xref(xref) => {
                r.xrefs.insert(read_xref(xref));
            }
            TypedefClause::PropertyValue(pv) => {
                r.annotations.insert(read_property_value(pv));
            }
            TypedefClause::Domain(id) => r.domain = Some(text(id)),
            TypedefClause::Range(id) => r.range = Some(text(id)),
            TypedefClause::Builtin(b) => r.builtin = *b,
            TypedefClause::HoldsOverChain(a, b) => {
                r.holds_over_chain.insert((text(a), text(b)));
            }
            TypedefClause::IsAntiSymmetric(b) => r.antisymmetric = *b,
            TypedefClause::IsCyclic(b) => r.cyclic = *b,
            TypedefClause::IsReflexive(b) => r.reflexive = *b,
            TypedefClause::IsAsymmetric(b) => r.asymmetric = *b,
            TypedefClause::IsSymmetric(b) => r.symmetric = *b,
            TypedefClause::IsTransitive(b) => r.transitive = *b,
            TypedefClause::IsFunctional(b) => r.functional = *b,
            TypedefClause::IsInverseFunctional(b) => r.inverse_functional = *b,
            TypedefClause::IsA(id) => {
                r.add_relationship(IS_A, text(id));
            }
            TypedefClause::IntersectionOf(id) => {
                r.intersection_of.insert(text(id));
            }
            TypedefClause::UnionOf(id) => {
                r.union_of.insert(text(id));
            }
            TypedefClause::EquivalentTo(id) => {
                r.equivalent_to.insert(text(id));
            }
            TypedefClause::DisjointFrom(id) => {
                r.disjoint_from.insert(text(id));
            }
            TypedefClause::InverseOf(id) => r.inverse_of = Some(text(id)),
            TypedefClause::TransitiveOver(id) => {
                r.transitive_over.insert(text(id));
            }
            TypedefClause::EquivalentToChain(a, b) => {
                r.equivalent_to_chain.insert((text(a), text(b)));
            }
            TypedefClause::DisjointOver(id) => {
                r.disjoint_over.insert(text(id));
            }
            TypedefClause::Relationship(relation, target) => {
                r.add_relationship(text(relation), text(target));
            }
            TypedefClause::IsObsolete(b) => r.obsolete = *b,
            TypedefClause::CreatedBy(v) => r.created_by = Some(v.as_str().to_owned()),
            TypedefClause::CreationDate(date) => r.creation_date = Some(*date),
            TypedefClause::ReplacedBy(id) => {
                r.replaced_by.insert(text(id));
            }
            TypedefClause::Consider(id) => {
                r.consider.insert(text(id));
            }
            TypedefClause::ExpandAssertionTo(def) => {
                r.expand_assertion_to.push(read_definition(def));
            }
            TypedefClause::ExpandExpressionTo(def) => {
                r.expand_expression_to.push(read_definition(def));
            }
            TypedefClause::IsMetadataTag(b) => r.metadata_tag = *b,
            TypedefClause::IsClassLevel(b) => r.class_level = *b,
        }
    }
    r
}
