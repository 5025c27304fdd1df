use std::collections::HashMap;

use crate::datastandard::{Attribute, AttributeGroup, Category, Datastandard};

/// Id-keyed lookup over a borrowed [`Datastandard`].
///
/// Duplicate ids resolve to their first occurrence in the snapshot.
#[derive(Debug, Clone)]
pub struct DatastandardIndex<'a> {
    categories: HashMap<&'a str, &'a Category>,
    attributes: HashMap<&'a str, &'a Attribute>,
    groups: HashMap<&'a str, &'a AttributeGroup>,
}

impl<'a> DatastandardIndex<'a> {
    pub fn new(datastandard: &'a Datastandard) -> Self {
        Self {
            categories: index_by_id(&datastandard.categories, |category| &category.id),
            attributes: index_by_id(&datastandard.attributes, |attribute| &attribute.id),
            groups: index_by_id(&datastandard.attribute_groups, |group| &group.id),
        }
    }

    pub fn category(&self, id: &str) -> Option<&'a Category> {
        self.categories.get(id).copied()
    }

    pub fn attribute(&self, id: &str) -> Option<&'a Attribute> {
        self.attributes.get(id).copied()
    }

    pub fn group(&self, id: &str) -> Option<&'a AttributeGroup> {
        self.groups.get(id).copied()
    }

    pub fn group_name(&self, id: &str) -> Option<&'a str> {
        self.group(id).map(|group| group.name.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

fn index_by_id<'a, T>(items: &'a [T], id: impl Fn(&'a T) -> &'a String) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.entry(id(item).as_str()).or_insert(item);
    }
    map
}
