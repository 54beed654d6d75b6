//! Core ontology model types.
//!
//! These types hold OBO ontology content either produced by a parser or
//! built by hand. They carry no serialization knowledge: the
//! [`serializer`](crate::serializer) walks them read-only.
//!
//! Identifiers are plain strings here; they are validated only when a
//! document is rendered. Unordered collections are `BTreeSet`/`BTreeMap`,
//! so iteration order depends on the values alone and never on insertion
//! order. The few collections whose order is meaningful (`owl_axioms`,
//! `expand_assertion_to`, `expand_expression_to`) are `Vec`s.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Relationship key holding subclass/subproperty links.
pub const IS_A: &str = "is_a";

/// A complete ontology: header metadata plus term and typedef frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Ontology {
    /// Header-level metadata, if any.
    pub metadata: Option<Metadata>,
    /// Terms keyed by their id.
    pub terms: BTreeMap<String, TermData>,
    /// Typedefs keyed by their id.
    pub relationships: BTreeMap<String, RelationshipData>,
}

impl Ontology {
    /// Creates an ontology with no metadata and no frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ontology with the given header metadata.
    #[must_use]
    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..Self::default()
        }
    }

    /// Inserts a term keyed by its own id, returning the term it replaced.
    pub fn insert_term(&mut self, term: TermData) -> Option<TermData> {
        self.terms.insert(term.id.clone(), term)
    }

    /// Inserts a typedef keyed by its own id, returning the typedef it replaced.
    pub fn insert_relationship(&mut self, rel: RelationshipData) -> Option<RelationshipData> {
        self.relationships.insert(rel.id.clone(), rel)
    }

    /// Looks up a term by id.
    #[must_use]
    pub fn term(&self, id: &str) -> Option<&TermData> {
        self.terms.get(id)
    }

    /// Looks up a typedef by id.
    #[must_use]
    pub fn relationship(&self, id: &str) -> Option<&RelationshipData> {
        self.relationships.get(id)
    }

    /// Returns the `default-namespace` declared in the header, if any.
    #[must_use]
    pub fn default_namespace(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.default_namespace.as_deref())
    }
}

/// Header frame content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Metadata {
    /// `format-version`.
    pub format_version: Option<String>,
    /// `data-version`.
    pub data_version: Option<String>,
    /// `date`. The clause has minute precision: seconds and fractions are
    /// dropped when the header is rendered.
    pub date: Option<NaiveDateTime>,
    /// `saved-by`.
    pub saved_by: Option<String>,
    /// `auto-generated-by`.
    pub auto_generated_by: Option<String>,
    /// `import` targets (URLs or ids).
    pub imports: BTreeSet<String>,
    /// `subsetdef` declarations.
    pub subsetdefs: BTreeSet<Subset>,
    /// `synonymtypedef` declarations.
    pub synonymtypedefs: BTreeSet<SynonymType>,
    /// `default-namespace`.
    pub default_namespace: Option<String>,
    /// `namespace-id-rule`.
    pub namespace_id_rule: Option<String>,
    /// `idspace` declarations keyed by prefix.
    pub idspaces: BTreeMap<String, Idspace>,
    /// Header `property_value` annotations.
    pub annotations: BTreeSet<PropertyValue>,
    /// `remark` lines.
    pub remarks: BTreeSet<String>,
    /// `ontology` name.
    pub ontology: Option<String>,
    /// `owl-axioms` lines, in source order.
    pub owl_axioms: Vec<String>,
    /// Tags this crate does not know, keyed by tag name.
    pub unreserved: BTreeMap<String, BTreeSet<String>>,
}

/// A `subsetdef` declaration. Sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subset {
    /// Subset id.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

/// A `synonymtypedef` declaration. Sorted by id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynonymType {
    /// Synonym type id.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Scope implied for synonyms of this type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: Option<SynonymScope>,
}

/// The URL and optional description of an `idspace` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Idspace {
    /// Base URL of the idspace.
    pub url: String,
    /// Human-readable description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Text with supporting cross-references (`def`, `expand_*_to`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Definition {
    /// The definition text.
    pub text: String,
    /// Supporting cross-references.
    pub xrefs: BTreeSet<Xref>,
}

impl Definition {
    /// Creates a definition without cross-references.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xrefs: BTreeSet::new(),
        }
    }

    /// Adds a cross-reference.
    #[must_use]
    pub fn with_xref(mut self, xref: Xref) -> Self {
        self.xrefs.insert(xref);
        self
    }
}

/// A cross-reference to an external identifier.
///
/// Ordered by id, then description, with an absent description first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xref {
    /// The referenced identifier.
    pub id: String,
    /// Optional human-readable text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl Xref {
    /// Creates an xref without description.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Creates an xref with a description.
    #[must_use]
    pub fn with_description(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: Some(description.into()),
        }
    }
}

/// Synonym scope. Variants are declared alphabetically, which is their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum SynonymScope {
    /// `BROAD`.
    Broad,
    /// `EXACT`.
    Exact,
    /// `NARROW`.
    Narrow,
    /// `RELATED`.
    Related,
}

impl SynonymScope {
    /// Returns the OBO keyword for the scope.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SynonymScope::Broad => "BROAD",
            SynonymScope::Exact => "EXACT",
            SynonymScope::Narrow => "NARROW",
            SynonymScope::Related => "RELATED",
        }
    }
}

/// A synonym of a term or typedef.
///
/// Ordered by description, then scope, then type (absent first), then xrefs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynonymData {
    /// Synonym text.
    pub description: String,
    /// Synonym scope.
    pub scope: SynonymScope,
    /// Synonym type id, declared by a `synonymtypedef`.
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub type_: Option<String>,
    /// Supporting cross-references.
    #[cfg_attr(feature = "serde", serde(default))]
    pub xrefs: BTreeSet<Xref>,
}

impl SynonymData {
    /// Creates an untyped synonym without xrefs.
    #[must_use]
    pub fn new(description: impl Into<String>, scope: SynonymScope) -> Self {
        Self {
            description: description.into(),
            scope,
            type_: None,
            xrefs: BTreeSet::new(),
        }
    }
}

/// A `property_value` annotation.
///
/// The variant is fixed at construction; use [`PropertyValue::from_parts`]
/// when the shape is only known from loose fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(untagged, try_from = "RawPropertyValue")
)]
pub enum PropertyValue {
    /// Property pointing at another entity.
    Resource {
        /// Property id.
        property: String,
        /// Target id.
        resource: String,
    },
    /// Property holding a typed literal.
    Literal {
        /// Property id.
        property: String,
        /// Literal text.
        literal: String,
        /// Datatype id (e.g. `xsd:string`).
        datatype: String,
    },
}

impl PropertyValue {
    /// Creates a resource-typed value.
    #[must_use]
    pub fn resource(property: impl Into<String>, resource: impl Into<String>) -> Self {
        PropertyValue::Resource {
            property: property.into(),
            resource: resource.into(),
        }
    }

    /// Creates a literal-typed value.
    #[must_use]
    pub fn literal(
        property: impl Into<String>,
        literal: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        PropertyValue::Literal {
            property: property.into(),
            literal: literal.into(),
            datatype: datatype.into(),
        }
    }

    /// Builds a value from loose fields. A resource wins when present;
    /// otherwise both the literal and its datatype are required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPropertyValue`] when neither form can be built.
    pub fn from_parts(
        property: String,
        resource: Option<String>,
        literal: Option<String>,
        datatype: Option<String>,
    ) -> Result<Self, Error> {
        match (resource, literal, datatype) {
            (Some(resource), _, _) => Ok(PropertyValue::Resource { property, resource }),
            (None, Some(literal), Some(datatype)) => Ok(PropertyValue::Literal {
                property,
                literal,
                datatype,
            }),
            _ => Err(Error::MalformedPropertyValue { property }),
        }
    }

    /// Returns the property id.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            PropertyValue::Resource { property, .. } | PropertyValue::Literal { property, .. } => {
                property
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PropertyValue::Resource { .. } => 0,
            PropertyValue::Literal { .. } => 1,
        }
    }
}

/// Ordered by property, then resource before literal, then value.
impl Ord for PropertyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.property()
            .cmp(other.property())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (
                    PropertyValue::Resource { resource: a, .. },
                    PropertyValue::Resource { resource: b, .. },
                ) => a.cmp(b),
                (
                    PropertyValue::Literal {
                        literal: a,
                        datatype: da,
                        ..
                    },
                    PropertyValue::Literal {
                        literal: b,
                        datatype: db,
                        ..
                    },
                ) => a.cmp(b).then_with(|| da.cmp(db)),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPropertyValue {
    property: String,
    #[serde(default)]
    resource: Option<String>,
    #[serde(default)]
    literal: Option<String>,
    #[serde(default)]
    datatype: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPropertyValue> for PropertyValue {
    type Error = Error;

    fn try_from(raw: RawPropertyValue) -> Result<Self, Self::Error> {
        PropertyValue::from_parts(raw.property, raw.resource, raw.literal, raw.datatype)
    }
}

/// One `intersection_of` operand of a term.
///
/// Class-only forms order before relation forms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Intersection {
    /// `intersection_of: CLASS`.
    Class(String),
    /// `intersection_of: RELATION CLASS`.
    Relation(String, String),
}

/// A term (`[Term]` frame).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TermData {
    /// Term id.
    pub id: String,
    /// `is_anonymous`.
    pub anonymous: bool,
    /// `name`.
    pub name: Option<String>,
    /// `namespace`.
    pub namespace: Option<String>,
    /// `alt_id`.
    pub alternate_ids: BTreeSet<String>,
    /// `def`.
    pub definition: Option<Definition>,
    /// `comment`.
    pub comment: Option<String>,
    /// `subset` memberships.
    pub subsets: BTreeSet<String>,
    /// `synonym`.
    pub synonyms: BTreeSet<SynonymData>,
    /// `xref`.
    pub xrefs: BTreeSet<Xref>,
    /// `property_value`.
    pub annotations: BTreeSet<PropertyValue>,
    /// Outgoing relationships by relation id; the `is_a` key holds superclasses.
    pub relationships: BTreeMap<String, BTreeSet<String>>,
    /// `intersection_of`.
    pub intersection_of: BTreeSet<Intersection>,
    /// `union_of`.
    pub union_of: BTreeSet<String>,
    /// `equivalent_to`.
    pub equivalent_to: BTreeSet<String>,
    /// `disjoint_from`.
    pub disjoint_from: BTreeSet<String>,
    /// `builtin`.
    pub builtin: bool,
    /// `created_by`.
    pub created_by: Option<String>,
    /// `creation_date`.
    pub creation_date: Option<DateTime<Utc>>,
    /// `is_obsolete`.
    pub obsolete: bool,
    /// `replaced_by`.
    pub replaced_by: BTreeSet<String>,
    /// `consider`.
    pub consider: BTreeSet<String>,
}

impl TermData {
    /// Creates a term with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the `is_a` targets of the term.
    pub fn superclasses(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .get(IS_A)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Adds `target` under `relation`; returns `false` if it was already there.
    pub fn add_relationship(
        &mut self,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> bool {
        self.relationships
            .entry(relation.into())
            .or_default()
            .insert(target.into())
    }
}

/// A relationship type (`[Typedef]` frame).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RelationshipData {
    /// Typedef id.
    pub id: String,
    /// `is_anonymous`.
    pub anonymous: bool,
    /// `name`.
    pub name: Option<String>,
    /// `namespace`.
    pub namespace: Option<String>,
    /// `alt_id`.
    pub alternate_ids: BTreeSet<String>,
    /// `def`.
    pub definition: Option<Definition>,
    /// `comment`.
    pub comment: Option<String>,
    /// `subset` memberships.
    pub subsets: BTreeSet<String>,
    /// `synonym`.
    pub synonyms: BTreeSet<SynonymData>,
    /// `xref`.
    pub xrefs: BTreeSet<Xref>,
    /// `property_value`.
    pub annotations: BTreeSet<PropertyValue>,
    /// `domain`.
    pub domain: Option<String>,
    /// `range`.
    pub range: Option<String>,
    /// `builtin`.
    pub builtin: bool,
    /// `holds_over_chain` pairs.
    pub holds_over_chain: BTreeSet<(String, String)>,
    /// `is_anti_symmetric`.
    pub antisymmetric: bool,
    /// `is_cyclic`.
    pub cyclic: bool,
    /// `is_reflexive`.
    pub reflexive: bool,
    /// `is_asymmetric`.
    pub asymmetric: bool,
    /// `is_symmetric`.
    pub symmetric: bool,
    /// `is_transitive`.
    pub transitive: bool,
    /// `is_functional`.
    pub functional: bool,
    /// `is_inverse_functional`.
    pub inverse_functional: bool,
    /// Outgoing relationships by relation id; the `is_a` key holds superproperties.
    pub relationships: BTreeMap<String, BTreeSet<String>>,
    /// `intersection_of`.
    pub intersection_of: BTreeSet<String>,
    /// `union_of`.
    pub union_of: BTreeSet<String>,
    /// `equivalent_to`.
    pub equivalent_to: BTreeSet<String>,
    /// `disjoint_from`.
    pub disjoint_from: BTreeSet<String>,
    /// `inverse_of`.
    pub inverse_of: Option<String>,
    /// `transitive_over`.
    pub transitive_over: BTreeSet<String>,
    /// `equivalent_to_chain` pairs.
    pub equivalent_to_chain: BTreeSet<(String, String)>,
    /// `disjoint_over`.
    pub disjoint_over: BTreeSet<String>,
    /// `is_obsolete`.
    pub obsolete: bool,
    /// `created_by`.
    pub created_by: Option<String>,
    /// `creation_date`.
    pub creation_date: Option<DateTime<Utc>>,
    /// `replaced_by`.
    pub replaced_by: BTreeSet<String>,
    /// `consider`.
    pub consider: BTreeSet<String>,
    /// `expand_assertion_to`, in source order.
    pub expand_assertion_to: Vec<Definition>,
    /// `expand_expression_to`, in source order.
    pub expand_expression_to: Vec<Definition>,
    /// `is_metadata_tag`.
    pub metadata_tag: bool,
    /// `is_class_level`.
    pub class_level: bool,
}

impl RelationshipData {
    /// Creates a typedef with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the `is_a` targets of the typedef.
    pub fn superproperties(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .get(IS_A)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Adds `target` under `relation`; returns `false` if it was already there.
    pub fn add_relationship(
        &mut self,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> bool {
        self.relationships
            .entry(relation.into())
            .or_default()
            .insert(target.into())
    }
}
