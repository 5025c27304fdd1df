use serde::Serialize;

use dstd_model::Datastandard;

/// Element counts of a loaded datastandard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatastandardSummary {
    pub category_count: usize,
    pub root_category_count: usize,
    pub attribute_count: usize,
    pub composite_attribute_count: usize,
    pub group_count: usize,
}

impl DatastandardSummary {
    pub fn from_datastandard(datastandard: &Datastandard) -> Self {
        Self {
            category_count: datastandard.categories.len(),
            root_category_count: datastandard.root_categories().count(),
            attribute_count: datastandard.attributes.len(),
            composite_attribute_count: datastandard
                .attributes
                .iter()
                .filter(|attribute| attribute.is_composite())
                .count(),
            group_count: datastandard.attribute_groups.len(),
        }
    }
}
