use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("category not found: {category_id}")]
    NotFound { category_id: String },

    #[error("category hierarchy of {category_id} is cyclic: {repeated_id} is its own ancestor")]
    CyclicHierarchy {
        category_id: String,
        repeated_id: String,
    },

    #[error("attribute type of {attribute_id} is cyclic: {}", .path.join(" -> "))]
    CyclicAttributeType {
        attribute_id: String,
        /// Attribute ids on the expansion path, ending with the repeated id.
        path: Vec<String>,
    },
}

impl ReportError {
    /// True when the requested category does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
