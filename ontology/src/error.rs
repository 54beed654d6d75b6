//! Error types for rendering and reading OBO documents.

use std::fmt;

use crate::ident::IdentError;

/// The entity an error is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The header frame.
    Header,
    /// A term frame, by raw id.
    Term(String),
    /// A typedef frame, by raw id.
    Typedef(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Header => f.write_str("header"),
            Scope::Term(id) => write!(f, "term {id}"),
            Scope::Typedef(id) => write!(f, "typedef {id}"),
        }
    }
}

/// Errors raised while converting between the model and an OBO document.
///
/// A render either produces a whole document or one of these; there is no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An id-typed field failed identifier parsing.
    #[error("invalid identifier {value:?} in `{field}` of {scope}: {source}")]
    InvalidIdentifier {
        /// Entity holding the field.
        scope: Scope,
        /// Model field name.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
        /// Why parsing failed.
        source: IdentError,
    },

    /// Neither the resource nor the literal + datatype form could be built.
    #[error("property value for {property:?} has neither a resource nor a literal with a datatype")]
    MalformedPropertyValue {
        /// The property id of the rejected value.
        property: String,
    },

    /// The text layer cannot represent a value.
    #[error("cannot emit `{field}` of {scope}: {reason}")]
    Emission {
        /// Entity holding the field.
        scope: Scope,
        /// Model field name.
        field: &'static str,
        /// What made the value unrepresentable.
        reason: String,
    },

    /// A term or typedef map entry holds an entity with a different id.
    #[error("{scope} holds an entity with id {id:?}")]
    KeyMismatch {
        /// The map entry, named by its key.
        scope: Scope,
        /// The id stored in the entity.
        id: String,
    },

    /// Two frames of the same kind share an id.
    #[error("duplicate frame for {scope}")]
    DuplicateFrame {
        /// The repeated frame.
        scope: Scope,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
