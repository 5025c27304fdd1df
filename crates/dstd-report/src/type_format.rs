//! Type signatures for attributes, expanding composite attributes.
//!
//! A scalar attribute renders as its type id. A composite attribute renders
//! as a block with one line per resolvable nested link:
//!
//! ```text
//! composite{
//!   Material*: string
//!   Share: integer
//! }[]
//! ```
//!
//! `*` marks a nested link that is not explicitly optional, `[]` a
//! multi-value type. Nested blocks are embedded as is.

use tracing::trace;

use dstd_model::{Attribute, AttributeLink, DatastandardIndex};

use crate::error::{ReportError, Result};

const NESTED_INDENT: &str = "  ";
const REQUIRED_MARKER: char = '*';
const MULTI_VALUE_SUFFIX: &str = "[]";

/// Format the type signature of `attribute`.
///
/// Fails with [`ReportError::CyclicAttributeType`] when an attribute is
/// reached again through its own nested links.
pub fn format_type<'a>(
    index: &DatastandardIndex<'a>,
    attribute: &'a Attribute,
) -> Result<String> {
    let mut path = Vec::new();
    expand(index, attribute, &mut path)
}

fn expand<'a>(
    index: &DatastandardIndex<'a>,
    attribute: &'a Attribute,
    path: &mut Vec<&'a str>,
) -> Result<String> {
    if path.contains(&attribute.id.as_str()) {
        let mut cycle: Vec<String> = path.iter().map(|id| (*id).to_string()).collect();
        cycle.push(attribute.id.clone());
        return Err(ReportError::CyclicAttributeType {
            attribute_id: path.first().copied().unwrap_or(attribute.id.as_str()).to_string(),
            path: cycle,
        });
    }
    path.push(attribute.id.as_str());

    let mut signature = attribute.attribute_type.id.clone();
    if attribute.is_composite() {
        signature.push_str("{\n");
        for link in &attribute.attribute_links {
            let Some(nested) = index.attribute(&link.id) else {
                trace!(
                    attribute_id = %attribute.id,
                    link_id = %link.id,
                    "nested attribute not found"
                );
                continue;
            };
            let nested_signature = expand(index, nested, path)?;
            signature.push_str(NESTED_INDENT);
            signature.push_str(&nested_name(&nested.name, link));
            signature.push_str(": ");
            signature.push_str(&nested_signature);
            signature.push('\n');
        }
        signature.push('}');
    }
    if attribute.attribute_type.multi_value {
        signature.push_str(MULTI_VALUE_SUFFIX);
    }

    path.pop();
    Ok(signature)
}

/// Name of a nested attribute as marked by the composite's own link.
fn nested_name(name: &str, link: &AttributeLink) -> String {
    if link.is_optional() {
        name.to_string()
    } else {
        format!("{name}{REQUIRED_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use dstd_model::{AttributeType, Datastandard};

    use super::*;

    fn attribute(id: &str, type_id: &str, links: Vec<AttributeLink>) -> Attribute {
        Attribute {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            attribute_type: AttributeType::scalar(type_id),
            attribute_links: links,
            group_ids: vec![],
        }
    }

    fn standard(attributes: Vec<Attribute>) -> Datastandard {
        Datastandard {
            attributes,
            ..Datastandard::default()
        }
    }

    #[test]
    fn scalar_is_type_id() {
        let datastandard = standard(vec![attribute("a", "Text", vec![])]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Text");
    }

    #[test]
    fn multi_value_scalar_gets_suffix() {
        let mut tags = attribute("tags", "Text", vec![]);
        tags.attribute_type = AttributeType::multi_value("Text");
        let datastandard = standard(vec![tags]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Text[]");
    }

    #[test]
    fn nested_composite_is_embedded_without_reindenting() {
        let datastandard = standard(vec![
            attribute("outer", "Outer", vec![AttributeLink::optional("inner")]),
            attribute("inner", "Inner", vec![AttributeLink::required("leaf")]),
            attribute("leaf", "Text", vec![]),
        ]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Outer{\n  inner: Inner{\n  leaf*: Text\n}\n}");
    }

    #[test]
    fn multi_value_nested_attribute_keeps_suffix_on_its_line() {
        let mut inner = attribute("inner", "Text", vec![]);
        inner.attribute_type = AttributeType::multi_value("Text");
        let datastandard = standard(vec![
            attribute("outer", "Outer", vec![AttributeLink::required("inner")]),
            inner,
        ]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Outer{\n  inner*: Text[]\n}");
    }

    #[test]
    fn dangling_nested_link_is_omitted() {
        let datastandard = standard(vec![
            attribute(
                "composite",
                "Composite",
                vec![AttributeLink::required("gone"), AttributeLink::required("leaf")],
            ),
            attribute("leaf", "Text", vec![]),
        ]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Composite{\n  leaf*: Text\n}");
    }

    #[test]
    fn composite_with_only_dangling_links_keeps_empty_block() {
        let datastandard = standard(vec![attribute(
            "composite",
            "Composite",
            vec![AttributeLink::required("gone")],
        )]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Composite{\n}");
    }

    #[test]
    fn shared_nested_attribute_is_not_a_cycle() {
        let datastandard = standard(vec![
            attribute(
                "pair",
                "Pair",
                vec![AttributeLink::required("leaf"), AttributeLink::optional("leaf")],
            ),
            attribute("leaf", "Text", vec![]),
        ]);
        let index = datastandard.index();
        let signature = format_type(&index, &datastandard.attributes[0]).unwrap();
        assert_eq!(signature, "Pair{\n  leaf*: Text\n  leaf: Text\n}");
    }

    #[test]
    fn mutual_reference_is_cyclic() {
        let datastandard = standard(vec![
            attribute("a", "A", vec![AttributeLink::required("b")]),
            attribute("b", "B", vec![AttributeLink::required("a")]),
        ]);
        let index = datastandard.index();
        let error = format_type(&index, &datastandard.attributes[0]).unwrap_err();
        assert_eq!(
            error,
            ReportError::CyclicAttributeType {
                attribute_id: "a".to_string(),
                path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            }
        );
        assert_eq!(error.to_string(), "attribute type of a is cyclic: a -> b -> a");
    }
}
