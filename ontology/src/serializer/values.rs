//! Conversions for values shared by several clause kinds.

use std::collections::BTreeSet;

use super::Context;
use crate::ast;
use crate::error::Result;
use crate::model::{Definition, PropertyValue, SynonymData, Xref};

/// Converts an xref, parsing its id.
///
/// # Errors
///
/// Fails on an invalid id or an unrepresentable description.
pub fn to_xref(cx: &Context, field: &'static str, xref: &Xref) -> Result<ast::Xref> {
    Ok(ast::Xref {
        id: cx.ident(field, &xref.id)?,
        description: xref
            .description
            .as_deref()
            .map(|d| cx.quoted(field, d))
            .transpose()?,
    })
}

/// Converts a set of xrefs into a sorted xref list.
///
/// # Errors
///
/// Fails on the first xref [`to_xref`] rejects.
pub fn to_xref_list(
    cx: &Context,
    field: &'static str,
    xrefs: &BTreeSet<Xref>,
) -> Result<ast::XrefList> {
    let mut list = xrefs
        .iter()
        .map(|x| to_xref(cx, field, x))
        .collect::<Result<Vec<_>>>()?;
    list.sort();
    Ok(ast::XrefList(list))
}

/// Converts a definition-shaped value (`def`, `expand_*_to`).
///
/// # Errors
///
/// Fails on unrepresentable text or an invalid xref.
pub fn to_definition(
    cx: &Context,
    field: &'static str,
    def: &Definition,
) -> Result<ast::Definition> {
    Ok(ast::Definition {
        text: cx.quoted(field, &def.text)?,
        xrefs: to_xref_list(cx, field, &def.xrefs)?,
    })
}

/// Converts a synonym.
///
/// # Errors
///
/// Fails on unrepresentable text, an invalid type id or an invalid xref.
pub fn to_synonym(cx: &Context, synonym: &SynonymData) -> Result<ast::Synonym> {
    Ok(ast::Synonym {
        description: cx.quoted("synonyms", &synonym.description)?,
        scope: synonym.scope,
        type_: synonym
            .type_
            .as_deref()
            .map(|ty| cx.ident("synonyms.type", ty))
            .transpose()?,
        xrefs: to_xref_list(cx, "synonyms.xrefs", &synonym.xrefs)?,
    })
}

/// Converts a property value, keeping its resource or literal form.
///
/// # Errors
///
/// Fails on an invalid property, resource or datatype id, or an
/// unrepresentable literal.
pub fn to_property_value(
    cx: &Context,
    field: &'static str,
    pv: &PropertyValue,
) -> Result<ast::PropertyValue> {
    match pv {
        PropertyValue::Resource { property, resource } => Ok(ast::PropertyValue::Resource(
            cx.ident(field, property)?,
            cx.ident(field, resource)?,
        )),
        PropertyValue::Literal {
            property,
            literal,
            datatype,
        } => Ok(ast::PropertyValue::Literal(
            cx.ident(field, property)?,
            cx.quoted(field, literal)?,
            cx.ident(field, datatype)?,
        )),
    }
}

/// Converts a set of property values, in property-value order.
///
/// # Errors
///
/// Fails on the first value [`to_property_value`] rejects.
pub fn to_property_values(
    cx: &Context,
    field: &'static str,
    values: &BTreeSet<PropertyValue>,
) -> Result<Vec<ast::PropertyValue>> {
    values
        .iter()
        .map(|pv| to_property_value(cx, field, pv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Scope};
    use crate::ident::IdentError;

    fn cx() -> Context {
        Context::new(Scope::Term("GO:1".to_owned()))
    }

    #[test]
    fn resource_value_keeps_resource_form() -> Result<()> {
        let pv = to_property_value(
            &cx(),
            "annotations",
            &PropertyValue::resource("rdfs:seeAlso", "GO:2"),
        )?;
        assert!(matches!(pv, ast::PropertyValue::Resource(..)));
        assert_eq!(pv.to_string(), "rdfs:seeAlso GO:2");
        Ok(())
    }

    #[test]
    fn literal_value_keeps_literal_form() -> Result<()> {
        let pv = to_property_value(
            &cx(),
            "annotations",
            &PropertyValue::literal("dc:date", "2020", "xsd:gYear"),
        )?;
        assert!(matches!(pv, ast::PropertyValue::Literal(..)));
        assert_eq!(pv.to_string(), r#"dc:date "2020" xsd:gYear"#);
        Ok(())
    }

    #[test]
    fn bad_datatype_is_an_identifier_error() {
        let err = to_property_value(
            &cx(),
            "annotations",
            &PropertyValue::literal("dc:date", "2020", ""),
        );
        assert_eq!(
            err,
            Err(Error::InvalidIdentifier {
                scope: Scope::Term("GO:1".to_owned()),
                field: "annotations",
                value: String::new(),
                source: IdentError::Empty,
            })
        );
    }

    #[test]
    fn xref_list_is_sorted() -> Result<()> {
        let xrefs: BTreeSet<Xref> = [
            Xref::with_description("PMID:2", "second"),
            Xref::new("GOC:z"),
            Xref::new("PMID:2"),
        ]
        .into_iter()
        .collect();
        let list = to_xref_list(&cx(), "xrefs", &xrefs)?;
        assert_eq!(list.to_string(), r#"[GOC:z, PMID:2, PMID:2 "second"]"#);
        Ok(())
    }

    #[test]
    fn synonym_type_is_parsed() {
        let mut syn = SynonymData::new("x", crate::model::SynonymScope::Related);
        syn.type_ = Some("bad type".to_owned());
        let err = to_synonym(&cx(), &syn);
        assert!(matches!(
            err,
            Err(Error::InvalidIdentifier { field: "synonyms.type", .. })
        ));
    }
}
