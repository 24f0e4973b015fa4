//! Discrete instanced ornament animation

pub mod ornament_data;
pub mod ornament_operations;

pub use ornament_data::{
    DualPositionElement, OrnamentGroup, OrnamentKind, OrnamentSetData, TransformData,
};
pub use ornament_operations::{build_ornaments, transform_matrix, update_ornaments, STAR_GROUP_ID};
