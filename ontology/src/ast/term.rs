//! Term frame clauses.

use chrono::{DateTime, Utc};

use super::values::{Definition, PropertyValue, Synonym, UnquotedString, Xref};
use crate::ident::Ident;

/// One `[Term]` clause. Variants are listed in canonical emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermClause {
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
    /// `builtin`.
    Builtin(bool),
    /// `property_value`.
    PropertyValue(PropertyValue),
    /// `is_a`.
    IsA(Ident),
    /// `intersection_of`, with an optional relation before the class.
    IntersectionOf(Option<Ident>, Ident),
    /// `union_of`.
    UnionOf(Ident),
    /// `equivalent_to`.
    EquivalentTo(Ident),
    /// `disjoint_from`.
    DisjointFrom(Ident),
    /// `relationship`.
    Relationship(Ident, Ident),
    /// `created_by`.
    CreatedBy(UnquotedString),
    /// `creation_date`.
    CreationDate(DateTime<Utc>),
    /// `is_obsolete`.
    IsObsolete(bool),
    /// `replaced_by`.
    ReplacedBy(Ident),
    /// `consider`.
    Consider(Ident),
}

impl TermClause {
    /// Returns the OBO tag of the clause.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            TermClause::IsAnonymous(_) => "is_anonymous",
            TermClause::Name(_) => "name",
            TermClause::Namespace(_) => "namespace",
            TermClause::AltId(_) => "alt_id",
            TermClause::Def(_) => "def",
            TermClause::Comment(_) => "comment",
            TermClause::Subset(_) => "subset",
            TermClause::Synonym(_) => "synonym",
            TermClause::Xref(_) => "xref",
            TermClause::Builtin(_) => "builtin",
            TermClause::PropertyValue(_) => "property_value",
            TermClause::IsA(_) => "is_a",
            TermClause::IntersectionOf(..) => "intersection_of",
            TermClause::UnionOf(_) => "union_of",
            TermClause::EquivalentTo(_) => "equivalent_to",
            TermClause::DisjointFrom(_) => "disjoint_from",
            TermClause::Relationship(..) => "relationship",
            TermClause::CreatedBy(_) => "created_by",
            TermClause::CreationDate(_) => "creation_date",
            TermClause::IsObsolete(_) => "is_obsolete",
            TermClause::ReplacedBy(_) => "replaced_by",
            TermClause::Consider(_) => "consider",
        }
    }
}

/// A `[Term]` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFrame {
    id: Ident,
    clauses: Vec<TermClause>,
}

impl TermFrame {
    /// Creates a frame without clauses.
    #[must_use]
    pub fn new(id: Ident) -> Self {
        Self {
            id,
            clauses: Vec::new(),
        }
    }

    /// Returns the term id.
    #[must_use]
    pub fn id(&self) -> &Ident {
        &self.id
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: TermClause) {
        self.clauses.push(clause);
    }

    /// Returns the clauses in emission order.
    #[must_use]
    pub fn clauses(&self) -> &[TermClause] {
        &self.clauses
    }
}
