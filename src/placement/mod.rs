//! Collision-free placement of discrete ornaments on the cone

pub mod layout_cache;
pub mod placement_data;
pub mod placement_operations;

pub use layout_cache::{LayoutCache, PlacementKey};
pub use placement_data::{ClassLayout, LayoutData, OccupancyRecord, PlacedElement};
pub use placement_operations::{ornament_cone, solve_layout};
