pub mod datastandard;
pub mod lookup;

pub use datastandard::{
    Attribute, AttributeGroup, AttributeLink, AttributeType, Category, Datastandard,
};
pub use lookup::DatastandardIndex;
