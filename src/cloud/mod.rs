//! Bulk point-cloud animation

pub mod cloud_data;
pub mod cloud_operations;

pub use cloud_data::{CloudData, CloudPoint, CloudUniforms};
pub use cloud_operations::{build_cloud, evaluate_point, evaluate_positions, point_size};
