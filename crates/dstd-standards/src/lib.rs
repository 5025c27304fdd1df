#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod summary;

pub use crate::error::StandardsError;
pub use crate::loaders::{
    default_datastandard_path, load_datastandard, load_default_datastandard, parse_datastandard,
    read_datastandard,
};
pub use crate::summary::DatastandardSummary;
