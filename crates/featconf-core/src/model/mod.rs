pub mod constraint;
pub mod feature;
pub mod metadata;
pub mod selection;

pub use constraint::Constraint;
pub use feature::{FeatureChild, FeatureGroup, FeatureNode, GroupType};
pub use metadata::ModelMetadata;
pub use selection::SelectionState;
