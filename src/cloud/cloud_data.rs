//! Cloud data - flat per-point attribute buffers
//!
//! The point cloud is deliberately stateless between frames: each point is
//! fully described by static attributes sampled once at build time, and its
//! displayed position is recomputed every frame from those attributes plus
//! two scalars (progress, elapsed time). That makes the layout a natural fit
//! for a flat vertex buffer handed straight to an instanced renderer.

use bytemuck::{Pod, Zeroable};
use noise::Perlin;
use static_assertions::const_assert_eq;

/// Static per-point attribute record
///
/// Layout matters: this struct is uploaded verbatim as a vertex buffer, so
/// the two endpoint positions interleave with the scalar attributes to keep
/// 16-byte alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CloudPoint {
    /// Endpoint on the cone (assembled configuration)
    pub assembled_position: [f32; 3],
    /// Per-point random constant in [0, 1)
    pub seed: f32,
    /// Endpoint on the dispersed shell (scattered configuration)
    pub scattered_position: [f32; 3],
    /// Base sprite size before perspective attenuation
    pub size: f32,
}

const_assert_eq!(std::mem::size_of::<CloudPoint>(), 32);

/// Scalar uniforms shared by every point, refreshed once per frame
///
/// `progress` is the raw transition progress; the evaluation path applies
/// cubic easing itself so a rendering stage running the same math stays in
/// lockstep with the CPU reference.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CloudUniforms {
    pub progress: f32,
    pub time: f32,
    pub _padding: [f32; 2],
    pub core_color: [f32; 4],
    pub tip_color: [f32; 4],
}

const_assert_eq!(std::mem::size_of::<CloudUniforms>(), 48);

/// The full cloud: static attributes plus the shared noise source
#[derive(Clone)]
pub struct CloudData {
    pub points: Vec<CloudPoint>,
    /// Coherent noise shared by all points
    pub noise: Perlin,
}
