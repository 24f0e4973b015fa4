//! Ornament data types
//!
//! Unlike the cloud, each ornament carries genuine mutable state: the
//! transform displayed last frame, which the per-frame update reads and
//! writes directly. The dual endpoints and idle constants are sampled once at
//! build time and never mutated afterwards.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::Color;

/// Shape family of an ornament group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrnamentKind {
    Box,
    Sphere,
    /// Apex singleton with its own assembled-idle behavior
    Star,
}

/// Static per-ornament constants: both terminal endpoints plus idle-motion
/// parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPositionElement {
    /// Rest position on the cone
    pub assembled_position: Vec3,
    /// Rest position on the dispersed shell; sampled independently, no
    /// collision constraint applies out there
    pub scattered_position: Vec3,
    /// Rest orientation (pitch, yaw, roll) in radians
    pub rotation: Vec3,
    pub scale: f32,
    /// Angular frequency of the scattered bob
    pub idle_speed: f32,
    /// Phase offset of the scattered bob
    pub idle_phase: f32,
}

/// Mutable displayed transform, persisted across frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformData {
    pub position: Vec3,
    /// Euler angles (pitch, yaw, roll) in radians
    pub rotation: Vec3,
    pub scale: f32,
}

/// One renderable group: all ornaments sharing a shape and color
#[derive(Debug, Clone)]
pub struct OrnamentGroup {
    pub id: String,
    pub kind: OrnamentKind,
    pub color: Color,
    /// Static constants, index-aligned with `transforms`
    pub elements: Vec<DualPositionElement>,
    /// Current displayed transforms, index-aligned with `elements`
    pub transforms: Vec<TransformData>,
}

/// Every ornament group in the ensemble
#[derive(Debug, Clone, Default)]
pub struct OrnamentSetData {
    pub groups: Vec<OrnamentGroup>,
}

impl OrnamentSetData {
    pub fn total_elements(&self) -> usize {
        self.groups.iter().map(|g| g.elements.len()).sum()
    }
}
