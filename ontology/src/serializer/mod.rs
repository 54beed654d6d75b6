//! OBO serializer.
//!
//! [`to_document`] turns an [`Ontology`] into an [`OboDoc`]: the header
//! frame (when metadata is present), then one term frame per term, then
//! one typedef frame per typedef, both sorted by id. Within a frame the
//! clause order is fixed by the OBO 1.4 format and implemented by
//! [`header`], [`term`] and [`typedef`]. [`to_obo`] additionally renders
//! the document to text.
//!
//! Identifiers are parsed as each clause is built. The first failure
//! aborts the whole render; no partial document is ever returned.

pub mod header;
pub mod term;
pub mod typedef;
pub mod values;

use std::collections::{BTreeMap, BTreeSet};

use crate::ast::{Frame, OboDoc, QuotedString, UnquotedString};
use crate::error::{Error, Result, Scope};
use crate::ident::Ident;
use crate::model::{Ontology, IS_A};
use crate::text::TextError;

/// Renders an ontology into an OBO document.
///
/// # Errors
///
/// Returns [`Error::KeyMismatch`] when a map key differs from the id of
/// its entity, [`Error::InvalidIdentifier`] for the first id-typed field
/// that fails to parse, or [`Error::Emission`] for a value the text layer
/// cannot represent.
pub fn to_document(ontology: &Ontology) -> Result<OboDoc> {
    let mut doc = OboDoc::new();
    if let Some(metadata) = &ontology.metadata {
        doc.push(Frame::Header(header::to_header_frame(metadata)?));
    }

    let default_namespace = ontology.default_namespace();

    let mut terms = ontology
        .terms
        .iter()
        .map(|(key, t)| {
            check_key(key, &t.id, Scope::Term)?;
            term::to_term_frame(t, default_namespace)
        })
        .collect::<Result<Vec<_>>>()?;
    terms.sort_by(|a, b| a.id().cmp(b.id()));

    let mut typedefs = ontology
        .relationships
        .iter()
        .map(|(key, r)| {
            check_key(key, &r.id, Scope::Typedef)?;
            typedef::to_typedef_frame(r, default_namespace)
        })
        .collect::<Result<Vec<_>>>()?;
    typedefs.sort_by(|a, b| a.id().cmp(b.id()));

    tracing::debug!(
        header = ontology.metadata.is_some(),
        terms = terms.len(),
        typedefs = typedefs.len(),
        "rendered OBO document"
    );

    terms.into_iter().for_each(|t| doc.push(Frame::Term(t)));
    typedefs.into_iter().for_each(|t| doc.push(Frame::Typedef(t)));
    Ok(doc)
}

/// Renders an ontology straight to OBO text.
///
/// # Errors
///
/// Same as [`to_document`].
pub fn to_obo(ontology: &Ontology) -> Result<String> {
    Ok(to_document(ontology)?.to_string())
}

/// The entity a frame builder is working on.
///
/// Every conversion goes through a context so that a failure names the
/// entity and field it came from.
#[derive(Debug, Clone)]
pub struct Context {
    scope: Scope,
}

impl Context {
    /// Creates a context for the given entity.
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    /// Returns the entity this context reports errors against.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Parses one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] naming `field`.
    pub fn ident(&self, field: &'static str, raw: &str) -> Result<Ident> {
        Ident::parse(raw).map_err(|source| Error::InvalidIdentifier {
            scope: self.scope.clone(),
            field,
            value: raw.to_owned(),
            source,
        })
    }

    /// Parses a set of identifiers and sorts them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] naming `field`.
    pub fn sorted_idents<'a, I>(&self, field: &'static str, raws: I) -> Result<Vec<Ident>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut ids = raws
            .into_iter()
            .map(|raw| self.ident(field, raw))
            .collect::<Result<Vec<_>>>()?;
        ids.sort();
        Ok(ids)
    }

    /// Parses a set of identifier pairs and sorts them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] naming `field`.
    pub fn sorted_pairs(
        &self,
        field: &'static str,
        raws: &BTreeSet<(String, String)>,
    ) -> Result<Vec<(Ident, Ident)>> {
        let mut pairs = raws
            .iter()
            .map(|(a, b)| -> Result<(Ident, Ident)> {
                Ok((self.ident(field, a)?, self.ident(field, b)?))
            })
            .collect::<Result<Vec<_>>>()?;
        pairs.sort();
        Ok(pairs)
    }

    /// Wraps text emitted as the rest of a line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Emission`] naming `field`.
    pub fn unquoted(&self, field: &'static str, raw: &str) -> Result<UnquotedString> {
        UnquotedString::new(raw).map_err(|e| self.emission(field, &e))
    }

    /// Wraps text emitted between quotes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Emission`] naming `field`.
    pub fn quoted(&self, field: &'static str, raw: &str) -> Result<QuotedString> {
        QuotedString::new(raw).map_err(|e| self.emission(field, &e))
    }

    /// Builds an emission error for `field`.
    #[must_use]
    pub fn emission(&self, field: &'static str, err: &TextError) -> Error {
        Error::Emission {
            scope: self.scope.clone(),
            field,
            reason: err.to_string(),
        }
    }
}

/// Map keys and entity ids must agree, or two entries could render as
/// frames with the same id.
fn check_key(key: &str, id: &str, scope: fn(String) -> Scope) -> Result<()> {
    if key == id {
        Ok(())
    } else {
        Err(Error::KeyMismatch {
            scope: scope(key.to_owned()),
            id: id.to_owned(),
        })
    }
}

/// Returns the namespace to emit: nothing when it matches the default.
fn visible_namespace<'a>(namespace: Option<&'a str>, default: Option<&str>) -> Option<&'a str> {
    namespace.filter(|ns| Some(*ns) != default)
}

/// Flattens a relationship map into sorted `(relation, target)` pairs,
/// leaving out `is_a`.
fn relationship_pairs(
    cx: &Context,
    relationships: &BTreeMap<String, BTreeSet<String>>,
) -> Result<Vec<(Ident, Ident)>> {
    let mut pairs = Vec::new();
    for (relation, targets) in relationships.iter().filter(|(r, _)| r.as_str() != IS_A) {
        let relation = cx.ident("relationships", relation)?;
        for target in cx.sorted_idents("relationships", targets)? {
            pairs.push((relation.clone(), target));
        }
    }
    pairs.sort();
    Ok(pairs)
}

/// Parses the sorted `is_a` targets of a relationship map.
fn superclasses(
    cx: &Context,
    relationships: &BTreeMap<String, BTreeSet<String>>,
) -> Result<Vec<Ident>> {
    cx.sorted_idents("relationships.is_a", relationships.get(IS_A).into_iter().flatten())
}
