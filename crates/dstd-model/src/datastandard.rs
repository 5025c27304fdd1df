//! Snapshot types for a datastandard: categories, attributes and groups.
//!
//! Every relationship is a reference by id into the same snapshot. Nothing
//! here resolves those ids; see [`crate::lookup`] for that.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lookup::DatastandardIndex;

/// The full graph of categories, attributes and attribute groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastandard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<Attribute>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribute_groups: Vec<AttributeGroup>,
}

impl Datastandard {
    /// Build an id-indexed view over this snapshot.
    pub fn index(&self) -> DatastandardIndex<'_> {
        DatastandardIndex::new(self)
    }

    pub fn root_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|category| category.is_root())
    }
}

/// A node in the category tree. The parent is referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribute_links: Vec<AttributeLink>,
}

impl Category {
    /// Returns the parent id, treating an empty string as absent.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .filter(|parent_id| !parent_id.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }
}

/// Attaches an attribute to a category or to a composite attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLink {
    pub id: String,
    /// `None` means required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl AttributeLink {
    pub fn required(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: None,
        }
    }

    pub fn optional(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: Some(true),
        }
    }

    /// Only an explicit `true` makes a link optional.
    pub fn is_optional(&self) -> bool {
        self.optional == Some(true)
    }
}

/// A named, typed field. Non-empty `attribute_links` make it composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribute_links: Vec<AttributeLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_ids: Vec<String>,
}

impl Attribute {
    pub fn is_composite(&self) -> bool {
        !self.attribute_links.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi_value: bool,
}

impl AttributeType {
    pub fn scalar(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_value: false,
        }
    }

    pub fn multi_value(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_value: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub id: String,
    pub name: String,
}

/// Treats an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
