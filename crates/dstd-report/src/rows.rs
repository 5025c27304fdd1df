//! Report rows for the attributes attached to one category.

use tracing::trace;

use dstd_model::{Attribute, AttributeLink, Category, DatastandardIndex};

use crate::error::Result;
use crate::type_format::format_type;

const REQUIRED_MARKER: char = '*';
const GROUP_SEPARATOR: &str = "\n";

/// One data row of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category: String,
    /// Attribute name, suffixed with `*` when required on the category.
    pub attribute: String,
    /// The category's link to the attribute is not explicitly optional.
    pub required: bool,
    pub description: String,
    pub type_signature: String,
    /// Resolved group names, newline separated.
    pub groups: String,
}

impl ReportRow {
    /// Columns in report order.
    pub fn columns(&self) -> [&str; 5] {
        [
            &self.category,
            &self.attribute,
            &self.description,
            &self.type_signature,
            &self.groups,
        ]
    }
}

/// Rows for every resolvable attribute link on `category`, in link order.
///
/// Links to unknown attributes produce no row.
pub fn category_rows<'s, 'a>(
    index: &'s DatastandardIndex<'a>,
    category: &'a Category,
) -> impl Iterator<Item = Result<ReportRow>> + 's
where
    'a: 's,
{
    category
        .attribute_links
        .iter()
        .filter_map(move |link| {
            let attribute = index.attribute(&link.id);
            if attribute.is_none() {
                trace!(
                    category_id = %category.id,
                    attribute_id = %link.id,
                    "attribute not found"
                );
            }
            attribute
        })
        .map(move |attribute| {
            let required = is_required(category, attribute);
            Ok(ReportRow {
                category: category.name.clone(),
                attribute: attribute_name(attribute, required),
                required,
                description: attribute.description.clone(),
                type_signature: format_type(index, attribute)?,
                groups: group_names(index, attribute),
            })
        })
}

/// Decided by the category's first link to the attribute.
fn is_required(category: &Category, attribute: &Attribute) -> bool {
    !category
        .attribute_links
        .iter()
        .find(|link| link.id == attribute.id)
        .is_some_and(AttributeLink::is_optional)
}

fn attribute_name(attribute: &Attribute, required: bool) -> String {
    if required {
        format!("{}{REQUIRED_MARKER}", attribute.name)
    } else {
        attribute.name.clone()
    }
}

fn group_names(index: &DatastandardIndex<'_>, attribute: &Attribute) -> String {
    attribute
        .group_ids
        .iter()
        .filter_map(|group_id| {
            let name = index.group_name(group_id);
            if name.is_none() {
                trace!(
                    attribute_id = %attribute.id,
                    group_id = %group_id,
                    "attribute group not found"
                );
            }
            name
        })
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}
