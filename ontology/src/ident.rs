//! OBO identifiers.
//!
//! Every id-typed field of the model is an opaque string until render time,
//! where it goes through [`Ident::parse`]. Three shapes are recognised:
//!
//! - **Prefixed** — `GO:0008150`, split on the first colon
//! - **Unprefixed** — `part_of`, no colon at all
//! - **URL** — `http://purl.obolibrary.org/obo/GO_0008150`
//!
//! Parsing never rewrites the text, so the normalized form of a valid
//! identifier is the identifier itself. Ordering and equality are defined
//! on that text.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Reasons an identifier string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    /// The identifier was the empty string.
    #[error("identifier is empty")]
    Empty,
    /// The identifier contains whitespace or a control character.
    #[error("invalid character {ch:?} at byte {position}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// A prefixed identifier with nothing before the colon.
    #[error("identifier has an empty prefix")]
    EmptyPrefix,
    /// An idspace prefix contained a colon.
    #[error("prefix contains a colon")]
    ColonInPrefix,
}

/// The shape of a parsed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    /// `PREFIX:LOCAL`.
    Prefixed,
    /// A bare name without a colon.
    Unprefixed,
    /// An absolute URL.
    Url,
}

/// A validated OBO identifier.
#[derive(Debug, Clone)]
pub struct Ident {
    text: String,
    kind: IdentKind,
    /// Byte offset of the separating colon for prefixed identifiers.
    colon: usize,
}

impl Ident {
    /// Parses an identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentError`] when the text is empty, contains
    /// whitespace or control characters, or has an empty prefix.
    pub fn parse(text: &str) -> Result<Self, IdentError> {
        check_chars(text)?;
        if is_url(text) {
            return Ok(Self {
                text: text.to_owned(),
                kind: IdentKind::Url,
                colon: 0,
            });
        }
        match text.find(':') {
            Some(0) => Err(IdentError::EmptyPrefix),
            Some(colon) => Ok(Self {
                text: text.to_owned(),
                kind: IdentKind::Prefixed,
                colon,
            }),
            None => Ok(Self {
                text: text.to_owned(),
                kind: IdentKind::Unprefixed,
                colon: 0,
            }),
        }
    }

    /// Returns the normalized text of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the shape of the identifier.
    #[must_use]
    pub fn kind(&self) -> IdentKind {
        self.kind
    }

    /// Returns the idspace prefix of a prefixed identifier.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        match self.kind {
            IdentKind::Prefixed => Some(&self.text[..self.colon]),
            _ => None,
        }
    }

    /// Returns the local part of a prefixed identifier.
    #[must_use]
    pub fn local(&self) -> Option<&str> {
        match self.kind {
            IdentKind::Prefixed => Some(&self.text[self.colon + 1..]),
            _ => None,
        }
    }

    /// Consumes the identifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl FromStr for Ident {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Ident {}

impl Hash for Ident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Ident {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ident {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The prefix half of an `idspace` header clause (e.g. `GO`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdPrefix(String);

impl IdPrefix {
    /// Parses a bare idspace prefix.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentError`] when the prefix is empty, contains a colon,
    /// or contains whitespace or control characters.
    pub fn parse(text: &str) -> Result<Self, IdentError> {
        check_chars(text)?;
        if text.contains(':') {
            return Err(IdentError::ColonInPrefix);
        }
        Ok(Self(text.to_owned()))
    }

    /// Returns the prefix text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_chars(text: &str) -> Result<(), IdentError> {
    if text.is_empty() {
        return Err(IdentError::Empty);
    }
    match text
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace() || ch.is_control())
    {
        Some((position, ch)) => Err(IdentError::InvalidChar { ch, position }),
        None => Ok(()),
    }
}

/// `scheme://rest` where the scheme is `[A-Za-z][A-Za-z0-9+.-]*`.
fn is_url(text: &str) -> bool {
    let Some((scheme, rest)) = text.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        && !rest.is_empty()
}
