//! OBO 1.4 ontologies as typed Rust data.
//!
//! The `obo-ontology` crate models an ontology (header metadata, terms
//! and typedefs) and renders it into a canonically ordered OBO document.
//! Rendering is deterministic: the same model always yields byte-identical
//! text, whatever order its content was inserted in.
//!
//! # Entry Point
//!
//! ```
//! use obo_ontology::{Ontology, TermData, IS_A};
//!
//! let mut ontology = Ontology::new();
//! let mut term = TermData::new("GO:0008152");
//! term.name = Some("metabolic process".to_owned());
//! term.add_relationship(IS_A, "GO:0008150");
//! ontology.insert_term(term);
//!
//! let text = obo_ontology::to_obo(&ontology)?;
//! assert_eq!(
//!     text,
//!     "[Term]\nid: GO:0008152\nname: metabolic process\nis_a: GO:0008150\n"
//! );
//! # Ok::<(), obo_ontology::Error>(())
//! ```
//!
//! # Documents
//!
//! [`to_document`] stops one step earlier and returns the [`OboDoc`]
//! frame structure; [`reader::from_document`] turns a document back into
//! a model.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod ast;
pub mod error;
pub mod ident;
pub mod model;
pub mod reader;
pub mod serializer;
pub mod text;

pub use ast::OboDoc;
pub use error::{Error, Result, Scope};
pub use ident::{Ident, IdentError};
pub use model::{
    Definition, Idspace, Intersection, Metadata, Ontology, PropertyValue, RelationshipData,
    Subset, SynonymData, SynonymScope, SynonymType, TermData, Xref, IS_A,
};
pub use reader::from_document;
pub use serializer::{to_document, to_obo};
