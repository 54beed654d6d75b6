//! Header frame builder.
//!
//! Clause order follows the OBO 1.4 header grammar: format-version,
//! data-version, date, saved-by, auto-generated-by, import, subsetdef,
//! synonymtypedef, default-namespace, namespace-id-rule, idspace,
//! property_value, remark, ontology, owl-axioms, then unreserved tags.

use chrono::{NaiveDateTime, Timelike};

use super::values::to_property_values;
use super::Context;
use crate::ast::{HeaderClause, HeaderFrame, UnreservedTag};
use crate::error::{Error, Result, Scope};
use crate::ident::IdPrefix;
use crate::model::Metadata;

/// Builds the header frame. Absent fields and empty collections emit
/// nothing, so empty metadata yields a frame without clauses.
///
/// # Errors
///
/// Fails on the first invalid identifier or unrepresentable value.
pub fn to_header_frame(m: &Metadata) -> Result<HeaderFrame> {
    let cx = Context::new(Scope::Header);
    let mut frame = HeaderFrame::new();

    if let Some(v) = &m.format_version {
        frame.push(HeaderClause::FormatVersion(cx.unquoted("format_version", v)?));
    }
    if let Some(v) = &m.data_version {
        frame.push(HeaderClause::DataVersion(cx.unquoted("data_version", v)?));
    }
    if let Some(date) = m.date {
        frame.push(HeaderClause::Date(to_minute(date)));
    }
    if let Some(v) = &m.saved_by {
        frame.push(HeaderClause::SavedBy(cx.unquoted("saved_by", v)?));
    }
    if let Some(v) = &m.auto_generated_by {
        frame.push(HeaderClause::AutoGeneratedBy(cx.unquoted("auto_generated_by", v)?));
    }
    for import in cx.sorted_idents("imports", &m.imports)? {
        frame.push(HeaderClause::Import(import));
    }

    let mut subsetdefs = m
        .subsetdefs
        .iter()
        .map(|s| -> Result<_> {
            Ok((
                cx.ident("subsetdefs", &s.name)?,
                cx.quoted("subsetdefs", &s.description)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    subsetdefs.sort();
    for (name, description) in subsetdefs {
        frame.push(HeaderClause::Subsetdef(name, description));
    }

    for st in &m.synonymtypedefs {
        frame.push(HeaderClause::SynonymTypedef(
            cx.ident("synonymtypedefs", &st.id)?,
            cx.quoted("synonymtypedefs", &st.description)?,
            st.scope,
        ));
    }
    if let Some(ns) = &m.default_namespace {
        frame.push(HeaderClause::DefaultNamespace(cx.ident("default_namespace", ns)?));
    }
    if let Some(rule) = &m.namespace_id_rule {
        frame.push(HeaderClause::NamespaceIdRule(cx.unquoted("namespace_id_rule", rule)?));
    }
    for (prefix, idspace) in &m.idspaces {
        let prefix = IdPrefix::parse(prefix).map_err(|source| Error::InvalidIdentifier {
            scope: Scope::Header,
            field: "idspaces",
            value: prefix.clone(),
            source,
        })?;
        frame.push(HeaderClause::Idspace(
            prefix,
            cx.ident("idspaces.url", &idspace.url)?,
            idspace
                .description
                .as_deref()
                .map(|d| cx.quoted("idspaces.description", d))
                .transpose()?,
        ));
    }
    for pv in to_property_values(&cx, "annotations", &m.annotations)? {
        frame.push(HeaderClause::PropertyValue(pv));
    }
    for remark in &m.remarks {
        frame.push(HeaderClause::Remark(cx.unquoted("remarks", remark)?));
    }
    if let Some(name) = &m.ontology {
        frame.push(HeaderClause::Ontology(cx.unquoted("ontology", name)?));
    }
    // Source order, never sorted.
    for line in &m.owl_axioms {
        frame.push(HeaderClause::OwlAxioms(cx.unquoted("owl_axioms", line)?));
    }
    for (tag, values) in &m.unreserved {
        let tag = UnreservedTag::new(tag.as_str()).map_err(|e| cx.emission("unreserved", &e))?;
        for value in values {
            frame.push(HeaderClause::Unreserved(
                tag.clone(),
                cx.unquoted("unreserved", value)?,
            ));
        }
    }

    tracing::trace!(clauses = frame.clauses().len(), "built header frame");
    Ok(frame)
}

/// The header `date` clause carries minutes, so seconds are dropped here
/// rather than silently by the text layer.
fn to_minute(date: NaiveDateTime) -> NaiveDateTime {
    date.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Idspace, PropertyValue, Subset, SynonymScope, SynonymType};

    fn tags(frame: &HeaderFrame) -> Vec<String> {
        frame.clauses().iter().map(|c| c.tag().to_owned()).collect()
    }

    #[test]
    fn empty_metadata_gives_empty_frame() -> Result<()> {
        let frame = to_header_frame(&Metadata::default())?;
        assert!(frame.is_empty());
        Ok(())
    }

    #[test]
    fn clauses_follow_fixed_order() -> Result<()> {
        let mut m = Metadata {
            format_version: Some("1.4".to_owned()),
            data_version: Some("releases/2020-01-01".to_owned()),
            date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).and_then(|d| d.and_hms_opt(9, 0, 0)),
            saved_by: Some("curator".to_owned()),
            auto_generated_by: Some("obo-ontology".to_owned()),
            default_namespace: Some("gene_ontology".to_owned()),
            namespace_id_rule: Some("* GO:$sequence(7,0,9999999)$".to_owned()),
            ontology: Some("go".to_owned()),
            owl_axioms: vec!["Prefix(:=<http://x.org/>)".to_owned()],
            ..Metadata::default()
        };
        m.imports.insert("http://purl.obolibrary.org/obo/ro.owl".to_owned());
        m.subsetdefs.insert(Subset {
            name: "goslim".to_owned(),
            description: "GO slim".to_owned(),
        });
        m.synonymtypedefs.insert(SynonymType {
            id: "systematic".to_owned(),
            description: "Systematic synonym".to_owned(),
            scope: Some(SynonymScope::Exact),
        });
        m.idspaces.insert(
            "GO".to_owned(),
            Idspace {
                url: "http://purl.obolibrary.org/obo/GO_".to_owned(),
                description: None,
            },
        );
        m.annotations
            .insert(PropertyValue::literal("dc:creator", "Jane", "xsd:string"));
        m.remarks.insert("a remark".to_owned());
        m.unreserved
            .entry("treat-xrefs-as-equivalent".to_owned())
            .or_default()
            .insert("CL".to_owned());

        let frame = to_header_frame(&m)?;
        assert_eq!(
            tags(&frame),
            [
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
                "treat-xrefs-as-equivalent",
            ]
        );
        Ok(())
    }

    #[test]
    fn owl_axioms_keep_model_order() -> Result<()> {
        let m = Metadata {
            owl_axioms: vec!["z line".to_owned(), "a line".to_owned()],
            ..Metadata::default()
        };
        let lines: Vec<String> = to_header_frame(&m)?
            .clauses()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, ["owl-axioms: z line", "owl-axioms: a line"]);
        Ok(())
    }

    #[test]
    fn unreserved_sorted_by_tag_then_value() -> Result<()> {
        let mut m = Metadata::default();
        for (tag, value) in [("b-tag", "2"), ("a-tag", "y"), ("b-tag", "1"), ("a-tag", "x")] {
            m.unreserved
                .entry(tag.to_owned())
                .or_default()
                .insert(value.to_owned());
        }
        let lines: Vec<String> = to_header_frame(&m)?
            .clauses()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, ["a-tag: x", "a-tag: y", "b-tag: 1", "b-tag: 2"]);
        Ok(())
    }

    #[test]
    fn bad_unreserved_tag_is_an_emission_error() {
        let mut m = Metadata::default();
        m.unreserved
            .entry("bad tag".to_owned())
            .or_default()
            .insert("v".to_owned());
        assert!(matches!(
            to_header_frame(&m),
            Err(Error::Emission { field: "unreserved", .. })
        ));
    }

    #[test]
    fn repeated_declarations_come_out_sorted() -> Result<()> {
        let mut m = Metadata::default();
        for import in ["http://b.org/b.owl", "http://a.org/a.owl"] {
            m.imports.insert(import.to_owned());
        }
        for (name, description) in [("goslim_b", "B"), ("goslim_a", "A")] {
            m.subsetdefs.insert(Subset {
                name: name.to_owned(),
                description: description.to_owned(),
            });
        }
        for (id, description, scope) in [
            ("systematic", "Systematic", Some(SynonymScope::Exact)),
            ("abbrev", "Abbreviation", None),
        ] {
            m.synonymtypedefs.insert(SynonymType {
                id: id.to_owned(),
                description: description.to_owned(),
                scope,
            });
        }
        m.idspaces.insert(
            "GO".to_owned(),
            Idspace {
                url: "http://purl.obolibrary.org/obo/GO_".to_owned(),
                description: Some("Gene Ontology".to_owned()),
            },
        );
        m.idspaces.insert(
            "CL".to_owned(),
            Idspace {
                url: "http://purl.obolibrary.org/obo/CL_".to_owned(),
                description: None,
            },
        );
        for remark in ["beta", "alpha"] {
            m.remarks.insert(remark.to_owned());
        }

        let lines: Vec<String> = to_header_frame(&m)?
            .clauses()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "import: http://a.org/a.owl",
                "import: http://b.org/b.owl",
                r#"subsetdef: goslim_a "A""#,
                r#"subsetdef: goslim_b "B""#,
                r#"synonymtypedef: abbrev "Abbreviation""#,
                r#"synonymtypedef: systematic "Systematic" EXACT"#,
                "idspace: CL http://purl.obolibrary.org/obo/CL_",
                r#"idspace: GO http://purl.obolibrary.org/obo/GO_ "Gene Ontology""#,
                "remark: alpha",
                "remark: beta",
            ]
        );
        Ok(())
    }

    #[test]
    fn date_is_cut_to_minutes() -> Result<()> {
        let m = Metadata {
            date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
                .and_then(|d| d.and_hms_milli_opt(9, 30, 45, 123)),
            ..Metadata::default()
        };
        let frame = to_header_frame(&m)?;
        assert_eq!(
            frame.clauses(),
            [HeaderClause::Date(
                chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
                    .and_then(|d| d.and_hms_opt(9, 30, 0))
                    .unwrap_or_default()
            )]
        );
        assert_eq!(frame.to_string(), "date: 01:01:2020 09:30\n");
        Ok(())
    }

    #[test]
    fn reserved_unreserved_tag_is_an_emission_error() {
        let mut m = Metadata::default();
        m.unreserved
            .entry("ontology".to_owned())
            .or_default()
            .insert("go".to_owned());
        assert!(matches!(
            to_header_frame(&m),
            Err(Error::Emission { field: "unreserved", .. })
        ));
    }

    #[test]
    fn bad_subset_name_names_field() {
        let mut m = Metadata::default();
        m.subsetdefs.insert(Subset {
            name: "go slim".to_owned(),
            description: "x".to_owned(),
        });
        assert!(matches!(
            to_header_frame(&m),
            Err(Error::InvalidIdentifier { field: "subsetdefs", scope: Scope::Header, .. })
        ));
    }
}
