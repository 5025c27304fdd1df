//! Category ancestry resolution.

use std::collections::HashSet;

use tracing::trace;

use dstd_model::{Category, DatastandardIndex};

use crate::error::{ReportError, Result};

/// Resolve the chain of categories from the top-most ancestor down to
/// `category_id`, inclusive.
///
/// A parent id that matches no category ends the walk. Revisiting a category
/// fails with [`ReportError::CyclicHierarchy`].
pub fn resolve_ancestry<'a>(
    index: &DatastandardIndex<'a>,
    category_id: &str,
) -> Result<Vec<&'a Category>> {
    let category = index
        .category(category_id)
        .ok_or_else(|| ReportError::NotFound {
            category_id: category_id.to_string(),
        })?;

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(category.id.as_str());
    let mut chain = vec![category];
    let mut current = category;
    while let Some(parent_id) = current.parent_id() {
        let Some(parent) = index.category(parent_id) else {
            trace!(category_id = %current.id, parent_id, "parent category not found");
            break;
        };
        if !visited.insert(parent.id.as_str()) {
            return Err(ReportError::CyclicHierarchy {
                category_id: category_id.to_string(),
                repeated_id: parent.id.clone(),
            });
        }
        chain.push(parent);
        current = parent;
    }
    chain.reverse();
    Ok(chain)
}
