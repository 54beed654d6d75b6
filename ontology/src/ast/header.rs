//! Header frame clauses.

use chrono::NaiveDateTime;

use super::values::{PropertyValue, QuotedString, UnquotedString, UnreservedTag};
use crate::ident::{IdPrefix, Ident};
use crate::model::SynonymScope;

/// One header clause. Variants are listed in canonical emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderClause {
    /// `format-version`.
    FormatVersion(UnquotedString),
    /// `data-version`.
    DataVersion(UnquotedString),
    /// `date`.
    Date(NaiveDateTime),
    /// `saved-by`.
    SavedBy(UnquotedString),
    /// `auto-generated-by`.
    AutoGeneratedBy(UnquotedString),
    /// `import`.
    Import(Ident),
    /// `subsetdef`.
    Subsetdef(Ident, QuotedString),
    /// `synonymtypedef`.
    SynonymTypedef(Ident, QuotedString, Option<SynonymScope>),
    /// `default-namespace`.
    DefaultNamespace(Ident),
    /// `namespace-id-rule`.
    NamespaceIdRule(UnquotedString),
    /// `idspace`.
    Idspace(IdPrefix, Ident, Option<QuotedString>),
    /// `property_value`.
    PropertyValue(PropertyValue),
    /// `remark`.
    Remark(UnquotedString),
    /// `ontology`.
    Ontology(UnquotedString),
    /// `owl-axioms`.
    OwlAxioms(UnquotedString),
    /// Any tag this crate does not reserve.
    Unreserved(UnreservedTag, UnquotedString),
}

impl HeaderClause {
    /// Returns the OBO tag of the clause.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            HeaderClause::FormatVersion(_) => "format-version",
            HeaderClause::DataVersion(_) => "data-version",
            HeaderClause::Date(_) => "date",
            HeaderClause::SavedBy(_) => "saved-by",
            HeaderClause::AutoGeneratedBy(_) => "auto-generated-by",
            HeaderClause::Import(_) => "import",
            HeaderClause::Subsetdef(..) => "subsetdef",
            HeaderClause::SynonymTypedef(..) => "synonymtypedef",
            HeaderClause::DefaultNamespace(_) => "default-namespace",
            HeaderClause::NamespaceIdRule(_) => "namespace-id-rule",
            HeaderClause::Idspace(..) => "idspace",
            HeaderClause::PropertyValue(_) => "property_value",
            HeaderClause::Remark(_) => "remark",
            HeaderClause::Ontology(_) => "ontology",
            HeaderClause::OwlAxioms(_) => "owl-axioms",
            HeaderClause::Unreserved(tag, _) => tag.as_str(),
        }
    }
}

/// The header frame: an ordered clause list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFrame {
    clauses: Vec<HeaderClause>,
}

impl HeaderFrame {
    /// Creates a header frame without clauses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: HeaderClause) {
        self.clauses.push(clause);
    }

    /// Returns the clauses in emission order.
    #[must_use]
    pub fn clauses(&self) -> &[HeaderClause] {
        &self.clauses
    }

    /// Returns `true` if the frame holds no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
