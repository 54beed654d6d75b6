//! Typedef frame clauses.

use chrono::{DateTime, Utc};

use super::values::{Definition, PropertyValue, Synonym, UnquotedString, Xref};
use crate::ident::Ident;

/// One `[Typedef]` clause. Variants are listed in canonical emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedefClause {
    /// `is_anonymous`.
    IsAnonymous(bool),
    /// `name`.
    Name(UnquotedString),
    /// `namespace`.
    Namespace(Ident),
    /// `alt_id`.
    AltId(Ident),
    /// `def`.
    Def(Definition),
    /// `comment`.
    Comment(UnquotedString),
    /// `subset`.
    Subset(Ident),
    /// `synonym`.
    Synonym(Synonym),
    /// `xref`.
    Xref(Xref),
    /// `property_value`.
    PropertyValue(PropertyValue),
    /// `domain`.
    Domain(Ident),
    /// `range`.
    Range(Ident),
    /// `builtin`.
    Builtin(bool),
    /// `holds_over_chain`.
    HoldsOverChain(Ident, Ident),
    /// `is_anti_symmetric`.
    IsAntiSymmetric(bool),
    /// `is_cyclic`.
    IsCyclic(bool),
    /// `is_reflexive`.
    IsReflexive(bool),
    /// `is_asymmetric`.
    IsAsymmetric(bool),
    /// `is_symmetric`.
    IsSymmetric(bool),
    /// `is_transitive`.
    IsTransitive(bool),
    /// `is_functional`.
    IsFunctional(bool),
    /// `is_inverse_functional`.
    IsInverseFunctional(bool),
    /// `is_a`.
    IsA(Ident),
    /// `intersection_of`.
    IntersectionOf(Ident),
    /// `union_of`.
    UnionOf(Ident),
    /// `equivalent_to`.
    EquivalentTo(Ident),
    /// `disjoint_from`.
    DisjointFrom(Ident),
    /// `inverse_of`.
    InverseOf(Ident),
    /// `transitive_over`.
    TransitiveOver(Ident),
    /// `equivalent_to_chain`.
    EquivalentToChain(Ident, Ident),
    /// `disjoint_over`.
    DisjointOver(Ident),
    /// `relationship`.
    Relationship(Ident, Ident),
    /// `is_obsolete`.
    IsObsolete(bool),
    /// `created_by`.
    CreatedBy(UnquotedString),
    /// `creation_date`.
    CreationDate(DateTime<Utc>),
    /// `replaced_by`.
    ReplacedBy(Ident),
    /// `consider`.
    Consider(Ident),
    /// `expand_assertion_to`.
    ExpandAssertionTo(Definition),
    /// `expand_expression_to`.
    ExpandExpressionTo(Definition),
    /// `is_metadata_tag`.
    IsMetadataTag(bool),
    /// `is_class_level`.
    IsClassLevel(bool),
}

impl TypedefClause {
    /// Returns the OBO tag of the clause.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            TypedefClause::IsAnonymous(_) => "is_anonymous",
            TypedefClause::Name(_) => "name",
            TypedefClause::Namespace(_) => "namespace",
            TypedefClause::AltId(_) => "alt_id",
            TypedefClause::Def(_) => "def",
            TypedefClause::Comment(_) => "comment",
            TypedefClause::Subset(_) => "subset",
            TypedefClause::Synonym(_) => "synonym",
            TypedefClause::Xref(_) => "xref",
            TypedefClause::PropertyValue(_) => "property_value",
            TypedefClause::Domain(_) => "domain",
            TypedefClause::Range(_) => "range",
            TypedefClause::Builtin(_) => "builtin",
            TypedefClause::HoldsOverChain(..) => "holds_over_chain",
            TypedefClause::IsAntiSymmetric(_) => "is_anti_symmetric",
            TypedefClause::IsCyclic(_) => "is_cyclic",
            TypedefClause::IsReflexive(_) => "is_reflexive",
            TypedefClause::IsAsymmetric(_) => "is_asymmetric",
            TypedefClause::IsSymmetric(_) => "is_symmetric",
            TypedefClause::IsTransitive(_) => "is_transitive",
            TypedefClause::IsFunctional(_) => "is_functional",
            TypedefClause::IsInverseFunctional(_) => "is_inverse_functional",
            TypedefClause::IsA(_) => "is_a",
            TypedefClause::IntersectionOf(_) => "intersection_of",
            TypedefClause::UnionOf(_) => "union_of",
            TypedefClause::EquivalentTo(_) => "equivalent_to",
            TypedefClause::DisjointFrom(_) => "disjoint_from",
            TypedefClause::InverseOf(_) => "inverse_of",
            TypedefClause::TransitiveOver(_) => "transitive_over",
            TypedefClause::EquivalentToChain(..) => "equivalent_to_chain",
            TypedefClause::DisjointOver(_) => "disjoint_over",
            TypedefClause::Relationship(..) => "relationship",
            TypedefClause::IsObsolete(_) => "is_obsolete",
            TypedefClause::CreatedBy(_) => "created_by",
            TypedefClause::CreationDate(_) => "creation_date",
            TypedefClause::ReplacedBy(_) => "replaced_by",
            TypedefClause::Consider(_) => "consider",
            TypedefClause::ExpandAssertionTo(_) => "expand_assertion_to",
            TypedefClause::ExpandExpressionTo(_) => "expand_expression_to",
            TypedefClause::IsMetadataTag(_) => "is_metadata_tag",
            TypedefClause::IsClassLevel(_) => "is_class_level",
        }
    }
}

/// A `[Typedef]` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedefFrame {
    id: Ident,
    clauses: Vec<TypedefClause>,
}

impl TypedefFrame {
    /// Creates a frame without clauses.
    #[must_use]
    pub fn new(id: Ident) -> Self {
        Self {
            id,
            clauses: Vec::new(),
        }
    }

    /// Returns the typedef id.
    #[must_use]
    pub fn id(&self) -> &Ident {
        &self.id
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: TypedefClause) {
        self.clauses.push(clause);
    }

    /// Returns the clauses in emission order.
    #[must_use]
    pub fn clauses(&self) -> &[TypedefClause] {
        &self.clauses
    }
}
