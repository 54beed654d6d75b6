//! Clause value types shared by all frame kinds.

use crate::ident::Ident;
use crate::model::SynonymScope;
use crate::text::{self, TextError};

/// A string emitted between double quotes (`def`, xref descriptions, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuotedString(String);

impl QuotedString {
    /// Wraps `text` after checking the text layer can represent it.
    ///
    /// # Errors
    ///
    /// Returns a [`TextError`] for control characters other than newline,
    /// carriage return and tab.
    pub fn new(text: impl Into<String>) -> Result<Self, TextError> {
        let text = text.into();
        text::check_representable(&text)?;
        Ok(Self(text))
    }

    /// Returns the unescaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the unescaped text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// A string emitted as the rest of the line (`name`, `comment`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnquotedString(String);

impl UnquotedString {
    /// Wraps `text` after checking the text layer can represent it.
    ///
    /// # Errors
    ///
    /// Returns a [`TextError`] for control characters other than newline,
    /// carriage return and tab.
    pub fn new(text: impl Into<String>) -> Result<Self, TextError> {
        let text = text.into();
        text::check_representable(&text)?;
        Ok(Self(text))
    }

    /// Returns the unescaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the unescaped text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// The tag of an `unreserved` header clause.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnreservedTag(String);

impl UnreservedTag {
    /// Validates a free-form tag name.
    ///
    /// # Errors
    ///
    /// Returns a [`TextError`] when the tag is empty or contains a colon,
    /// whitespace or a control character, starts with `!` or `[`, or reuses a
    /// reserved header tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, TextError> {
        let tag = tag.into();
        text::check_tag(&tag)?;
        Ok(Self(tag))
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A cross-reference in clause position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Xref {
    /// Referenced identifier.
    pub id: Ident,
    /// Optional description, emitted quoted.
    pub description: Option<QuotedString>,
}

/// A bracketed, comma-separated xref list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XrefList(pub Vec<Xref>);

impl XrefList {
    /// Returns `true` if the list holds no xrefs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the xrefs in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Xref> {
        self.0.iter()
    }
}

/// A synonym in clause position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Synonym {
    /// Synonym text.
    pub description: QuotedString,
    /// Synonym scope.
    pub scope: SynonymScope,
    /// Optional synonym type.
    pub type_: Option<Ident>,
    /// Supporting xrefs.
    pub xrefs: XrefList,
}

/// A property value in clause position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// `property_value: PROPERTY RESOURCE`.
    Resource(Ident, Ident),
    /// `property_value: PROPERTY "LITERAL" DATATYPE`.
    Literal(Ident, QuotedString, Ident),
}

/// Quoted text followed by an xref list (`def`, `expand_*_to`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition {
    /// Definition text.
    pub text: QuotedString,
    /// Supporting xrefs.
    pub xrefs: XrefList,
}
