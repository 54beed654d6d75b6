//! OBO 1.4 document structure.
//!
//! A document is an ordered list of [`Frame`]s: an optional header frame
//! first, then term frames, then typedef frames. Each frame holds an
//! ordered list of clauses drawn from a closed enum for its kind, so the
//! emission order of a frame is exactly the order of its clause vector.
//! Text output lives in [`crate::text`].

pub mod header;
pub mod term;
pub mod typedef;
pub mod values;

pub use header::{HeaderClause, HeaderFrame};
pub use term::{TermClause, TermFrame};
pub use typedef::{TypedefClause, TypedefFrame};
pub use values::{
    Definition, PropertyValue, QuotedString, Synonym, UnquotedString, UnreservedTag, Xref,
    XrefList,
};

/// One frame of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// The header frame.
    Header(HeaderFrame),
    /// A `[Term]` frame.
    Term(TermFrame),
    /// A `[Typedef]` frame.
    Typedef(TypedefFrame),
}

/// A complete OBO document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OboDoc {
    frames: Vec<Frame>,
}

impl OboDoc {
    /// Creates a document without frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Returns all frames in document order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the header frame, if the document has one.
    #[must_use]
    pub fn header(&self) -> Option<&HeaderFrame> {
        self.frames.iter().find_map(|f| match f {
            Frame::Header(h) => Some(h),
            _ => None,
        })
    }

    /// Iterates over the term frames.
    pub fn terms(&self) -> impl Iterator<Item = &TermFrame> {
        self.frames.iter().filter_map(|f| match f {
            Frame::Term(t) => Some(t),
            _ => None,
        })
    }

    /// Iterates over the typedef frames.
    pub fn typedefs(&self) -> impl Iterator<Item = &TypedefFrame> {
        self.frames.iter().filter_map(|f| match f {
            Frame::Typedef(t) => Some(t),
            _ => None,
        })
    }
}
