//! OBO 1.4 text emission.
//!
//! Every document type implements [`fmt::Display`]. Writing is infallible
//! once a value exists: anything the text layer cannot represent is
//! rejected when the value is constructed (see [`check_representable`]
//! and [`check_tag`]).
//!
//! Layout: one `tag: value` line per clause, `[Term]`/`[Typedef]` stanza
//! headers followed by the `id:` line, and one blank line between frames.
//! A header frame without clauses produces no text.

use std::fmt::{self, Display, Write as _};

use chrono::SecondsFormat;

use crate::ast::{
    Definition, Frame, HeaderClause, HeaderFrame, OboDoc, PropertyValue, QuotedString, Synonym,
    TermClause, TermFrame, TypedefClause, TypedefFrame, UnquotedString, UnreservedTag, Xref,
    XrefList,
};
use crate::ident::Ident;

/// Format of the header `date` clause.
pub const HEADER_DATE_FORMAT: &str = "%d:%m:%Y %H:%M";

/// Values the text layer refuses to write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// A control character with no OBO escape.
    #[error("unescapable control character {0:?}")]
    ControlChar(char),
    /// An empty tag name.
    #[error("tag is empty")]
    EmptyTag,
    /// A character that cannot appear in a tag name.
    #[error("character {0:?} is not allowed in a tag")]
    InvalidTagChar(char),
    /// A free-form tag that collides with a reserved header tag.
    #[error("tag {0:?} is reserved")]
    ReservedTag(String),
}

/// Header tags with a dedicated clause. An unreserved clause may not
/// reuse them.
pub const RESERVED_HEADER_TAGS: [&str; 15] = [
    "format-version",
    "data-version",
    "date",
    "saved-by",
    "auto-generated-by",
    "import",
    "subsetdef",
    "synonymtypedef",
    "default-namespace",
    "namespace-id-rule",
    "idspace",
    "property_value",
    "remark",
    "ontology",
    "owl-axioms",
];

/// Checks that `text` only contains characters OBO strings can carry.
///
/// # Errors
///
/// Returns [`TextError::ControlChar`] for control characters other than
/// newline, carriage return and tab.
pub fn check_representable(text: &str) -> Result<(), TextError> {
    match text
        .chars()
        .find(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        Some(c) => Err(TextError::ControlChar(c)),
        None => Ok(()),
    }
}

/// Checks that `tag` can appear before the `:` of a clause line.
///
/// # Errors
///
/// Returns a [`TextError`] when the tag is empty, starts with `!` or `[`,
/// contains a colon, whitespace or a control character, or is one of
/// [`RESERVED_HEADER_TAGS`].
pub fn check_tag(tag: &str) -> Result<(), TextError> {
    let first = tag.chars().next().ok_or(TextError::EmptyTag)?;
    if matches!(first, '!' | '[') {
        return Err(TextError::InvalidTagChar(first));
    }
    if RESERVED_HEADER_TAGS.contains(&tag) {
        return Err(TextError::ReservedTag(tag.to_owned()));
    }
    match tag
        .chars()
        .find(|c| *c == ':' || c.is_whitespace() || c.is_control())
    {
        Some(c) => Err(TextError::InvalidTagChar(c)),
        None => Ok(()),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_unquoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '!' => f.write_str("\\!")?,
            '{' => f.write_str("\\{")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// An identifier in clause position. OBO separators inside the id are
/// backslash-escaped so they cannot end the value early.
struct IdText<'a>(&'a Ident);

impl Display for IdText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.as_str().chars() {
            if matches!(c, '\\' | ',' | ']' | '!' | '{' | '"') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl Display for QuotedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.as_str())
    }
}

impl Display for UnquotedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_unquoted(f, self.as_str())
    }
}

impl Display for UnreservedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Xref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} {}", IdText(&self.id), desc),
            None => write!(f, "{}", IdText(&self.id)),
        }
    }
}

impl Display for XrefList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, xref) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{xref}")?;
        }
        f.write_char(']')
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.xrefs)
    }
}

impl Display for Synonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.scope.as_str())?;
        if let Some(ty) = &self.type_ {
            write!(f, " {}", IdText(ty))?;
        }
        write!(f, " {}", self.xrefs)
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Resource(property, resource) => {
                write!(f, "{} {}", IdText(property), IdText(resource))
            }
            PropertyValue::Literal(property, literal, datatype) => {
                write!(f, "{} {literal} {}", IdText(property), IdText(datatype))
            }
        }
    }
}

/// Writes the value part of a clause line.
fn write_value(f: &mut fmt::Formatter<'_>, value: &dyn Display) -> fmt::Result {
    write!(f, "{value}")
}

fn write_bool(f: &mut fmt::Formatter<'_>, value: bool) -> fmt::Result {
    f.write_str(if value { "true" } else { "false" })
}

fn write_creation_date(
    f: &mut fmt::Formatter<'_>,
    date: &chrono::DateTime<chrono::Utc>,
) -> fmt::Result {
    f.write_str(&date.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl Display for HeaderClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tag())?;
        match self {
            HeaderClause::FormatVersion(v)
            | HeaderClause::DataVersion(v)
            | HeaderClause::SavedBy(v)
            | HeaderClause::AutoGeneratedBy(v)
            | HeaderClause::NamespaceIdRule(v)
            | HeaderClause::Remark(v)
            | HeaderClause::Ontology(v)
            | HeaderClause::OwlAxioms(v)
            | HeaderClause::Unreserved(_, v) => write_value(f, v),
            HeaderClause::Date(date) => write!(f, "{}", date.format(HEADER_DATE_FORMAT)),
            HeaderClause::Import(id) | HeaderClause::DefaultNamespace(id) => {
                write_value(f, &IdText(id))
            }
            HeaderClause::Subsetdef(id, desc) => write!(f, "{} {desc}", IdText(id)),
            HeaderClause::SynonymTypedef(id, desc, scope) => {
                write!(f, "{} {desc}", IdText(id))?;
                match scope {
                    Some(scope) => write!(f, " {}", scope.as_str()),
                    None => Ok(()),
                }
            }
            HeaderClause::Idspace(prefix, url, desc) => {
                write!(f, "{prefix} {}", IdText(url))?;
                match desc {
                    Some(desc) => write!(f, " {desc}"),
                    None => Ok(()),
                }
            }
            HeaderClause::PropertyValue(pv) => write_value(f, pv),
        }
    }
}

impl Display for TermClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tag())?;
        match self {
            TermClause::IsAnonymous(b)
            | TermClause::Builtin(b)
            | TermClause::IsObsolete(b) => write_bool(f, *b),
            TermClause::Name(s) | TermClause::Comment(s) | TermClause::CreatedBy(s) => {
                write_value(f, s)
            }
            TermClause::Namespace(id)
            | TermClause::AltId(id)
            | TermClause::Subset(id)
            | TermClause::IsA(id)
            | TermClause::UnionOf(id)
            | TermClause::EquivalentTo(id)
            | TermClause::DisjointFrom(id)
            | TermClause::ReplacedBy(id)
            | TermClause::Consider(id) => write_value(f, &IdText(id)),
            TermClause::Def(def) => write_value(f, def),
            TermClause::Synonym(syn) => write_value(f, syn),
            TermClause::Xref(xref) => write_value(f, xref),
            TermClause::PropertyValue(pv) => write_value(f, pv),
            TermClause::IntersectionOf(Some(rel), class) => {
                write!(f, "{} {}", IdText(rel), IdText(class))
            }
            TermClause::IntersectionOf(None, class) => write_value(f, &IdText(class)),
            TermClause::Relationship(rel, target) => {
                write!(f, "{} {}", IdText(rel), IdText(target))
            }
            TermClause::CreationDate(date) => write_creation_date(f, date),
        }
    }
}

impl Display for TypedefClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tag())?;
        match self {
            TypedefClause::IsAnonymous(b)
            | TypedefClause::Builtin(b)
            | TypedefClause::IsAntiSymmetric(b)
            | TypedefClause::IsCyclic(b)
            | TypedefClause::IsReflexive(b)
            | TypedefClause::IsAsymmetric(b)
            | TypedefClause::IsSymmetric(b)
            | TypedefClause::IsTransitive(b)
            | TypedefClause::IsFunctional(b)
            | TypedefClause::IsInverseFunctional(b)
            | TypedefClause::IsObsolete(b)
            | TypedefClause::IsMetadataTag(b)
            | TypedefClause::IsClassLevel(b) => write_bool(f, *b),
            TypedefClause::Name(s) | TypedefClause::Comment(s) | TypedefClause::CreatedBy(s) => {
                write_value(f, s)
            }
            TypedefClause::Namespace(id)
            | TypedefClause::AltId(id)
            | TypedefClause::Subset(id)
            | TypedefClause::Domain(id)
            | TypedefClause::Range(id)
            | TypedefClause::IsA(id)
            | TypedefClause::IntersectionOf(id)
            | TypedefClause::UnionOf(id)
            | TypedefClause::EquivalentTo(id)
            | TypedefClause::DisjointFrom(id)
            | TypedefClause::InverseOf(id)
            | TypedefClause::TransitiveOver(id)
            | TypedefClause::DisjointOver(id)
            | TypedefClause::ReplacedBy(id)
            | TypedefClause::Consider(id) => write_value(f, &IdText(id)),
            TypedefClause::Def(def)
            | TypedefClause::ExpandAssertionTo(def)
            | TypedefClause::ExpandExpressionTo(def) => write_value(f, def),
            TypedefClause::Synonym(syn) => write_value(f, syn),
            TypedefClause::Xref(xref) => write_value(f, xref),
            TypedefClause::PropertyValue(pv) => write_value(f, pv),
            TypedefClause::HoldsOverChain(a, b)
            | TypedefClause::EquivalentToChain(a, b)
            | TypedefClause::Relationship(a, b) => write!(f, "{} {}", IdText(a), IdText(b)),
            TypedefClause::CreationDate(date) => write_creation_date(f, date),
        }
    }
}

impl Display for HeaderFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in self.clauses() {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl Display for TermFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Term]")?;
        writeln!(f, "id: {}", IdText(self.id()))?;
        for clause in self.clauses() {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl Display for TypedefFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Typedef]")?;
        writeln!(f, "id: {}", IdText(self.id()))?;
        for clause in self.clauses() {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Header(h) => write!(f, "{h}"),
            Frame::Term(t) => write!(f, "{t}"),
            Frame::Typedef(t) => write!(f, "{t}"),
        }
    }
}

impl Display for OboDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for frame in self.frames() {
            if matches!(frame, Frame::Header(h) if h.is_empty()) {
                continue;
            }
            if !first {
                f.write_char('\n')?;
            }
            write!(f, "{frame}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SynonymScope;

    fn id(s: &str) -> Ident {
        Ident::parse(s).unwrap_or_else(|e| unreachable!("bad test id {s}: {e}"))
    }

    #[test]
    fn quoted_strings_escape() -> Result<(), TextError> {
        let q = QuotedString::new("say \"hi\"\\\nnow")?;
        assert_eq!(q.to_string(), r#""say \"hi\"\\\nnow""#);
        Ok(())
    }

    #[test]
    fn unquoted_strings_escape_comment_markers() -> Result<(), TextError> {
        let u = UnquotedString::new("a ! b {c}\nd")?;
        assert_eq!(u.to_string(), "a \\! b \\{c}\\nd");
        Ok(())
    }

    #[test]
    fn rejects_unescapable_characters() {
        assert_eq!(
            UnquotedString::new("bell\u{7}"),
            Err(TextError::ControlChar('\u{7}'))
        );
        assert!(QuotedString::new("tab\tok").is_ok());
    }

    #[test]
    fn tags_are_validated() {
        assert!(UnreservedTag::new("treat-xrefs-as-equivalent").is_ok());
        assert_eq!(UnreservedTag::new(""), Err(TextError::EmptyTag));
        assert_eq!(UnreservedTag::new("a:b"), Err(TextError::InvalidTagChar(':')));
        assert_eq!(UnreservedTag::new("a b"), Err(TextError::InvalidTagChar(' ')));
        assert_eq!(UnreservedTag::new("[Term]"), Err(TextError::InvalidTagChar('[')));
    }

    #[test]
    fn reserved_tags_are_not_unreserved() {
        for tag in RESERVED_HEADER_TAGS {
            assert_eq!(
                UnreservedTag::new(tag),
                Err(TextError::ReservedTag(tag.to_owned()))
            );
        }
        assert!(UnreservedTag::new("ontology-extra").is_ok());
    }

    #[test]
    fn ident_separators_are_escaped() {
        for (raw, written) in [
            ("A:1,B:2", r"A:1\,B:2"),
            ("A:1]", r"A:1\]"),
            ("GO:2!note", r"GO:2\!note"),
            ("GO:{x}", r"GO:\{x}"),
            ("GO:\"q\"", r#"GO:\"q\""#),
            ("GO:a\\b", r"GO:a\\b"),
        ] {
            assert_eq!(TermClause::IsA(id(raw)).to_string(), format!("is_a: {written}"));
        }
    }

    #[test]
    fn xref_list_keeps_one_entry_per_xref() {
        let def = Definition {
            text: QuotedString::new("d").unwrap_or_else(|e| unreachable!("{e}")),
            xrefs: XrefList(vec![Xref {
                id: id("A:1,B:2]"),
                description: None,
            }]),
        };
        assert_eq!(TermClause::Def(def).to_string(), r#"def: "d" [A:1\,B:2\]]"#);
    }

    #[test]
    fn frame_id_line_is_escaped() {
        let frame = TermFrame::new(id("GO:1!x"));
        assert_eq!(frame.to_string(), "[Term]\nid: GO:1\\!x\n");
    }

    #[test]
    fn synonym_line() -> Result<(), TextError> {
        let syn = Synonym {
            description: QuotedString::new("cell death")?,
            scope: SynonymScope::Exact,
            type_: Some(id("systematic")),
            xrefs: XrefList(vec![Xref {
                id: id("GOC:a"),
                description: Some(QuotedString::new("curator")?),
            }]),
        };
        assert_eq!(
            TermClause::Synonym(syn).to_string(),
            r#"synonym: "cell death" EXACT systematic [GOC:a "curator"]"#
        );
        Ok(())
    }

    #[test]
    fn literal_property_value_line() -> Result<(), TextError> {
        let pv = PropertyValue::Literal(
            id("dc:creator"),
            QuotedString::new("Jane")?,
            id("xsd:string"),
        );
        assert_eq!(
            HeaderClause::PropertyValue(pv).to_string(),
            r#"property_value: dc:creator "Jane" xsd:string"#
        );
        Ok(())
    }

    #[test]
    fn header_date_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2020, 4, 3)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap_or_default();
        assert_eq!(HeaderClause::Date(date).to_string(), "date: 03:04:2020 12:30");
    }

    #[test]
    fn document_layout() -> Result<(), TextError> {
        let mut header = HeaderFrame::new();
        header.push(HeaderClause::FormatVersion(UnquotedString::new("1.4")?));
        let mut term = TermFrame::new(id("GO:1"));
        term.push(TermClause::Name(UnquotedString::new("root")?));
        let typedef = TypedefFrame::new(id("part_of"));

        let mut doc = OboDoc::new();
        doc.push(Frame::Header(header));
        doc.push(Frame::Term(term));
        doc.push(Frame::Typedef(typedef));
        assert_eq!(
            doc.to_string(),
            "format-version: 1.4\n\n[Term]\nid: GO:1\nname: root\n\n[Typedef]\nid: part_of\n"
        );
        Ok(())
    }

    #[test]
    fn empty_header_writes_nothing() {
        let mut doc = OboDoc::new();
        doc.push(Frame::Header(HeaderFrame::new()));
        doc.push(Frame::Term(TermFrame::new(id("GO:1"))));
        assert_eq!(doc.to_string(), "[Term]\nid: GO:1\n");
    }
}
