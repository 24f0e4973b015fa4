//! Cloud operations - pure per-point evaluation
//!
//! A point's displayed position is a pure function of its static attributes,
//! the global progress and the global elapsed time. No per-point state
//! survives between frames, which is what lets the whole cloud be evaluated
//! in parallel with rayon (or on a rendering stage, from the same buffers).

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use rayon::prelude::*;

use crate::constants::{cloud, cloud_cone, scatter};
use crate::sampling::{sample_cone_interior, sample_shell, ConeRegion};
use crate::transition::operations::ease_in_out_cubic;

use super::cloud_data::{CloudData, CloudPoint};

/// The cone volume cloud points assemble into
pub fn cloud_cone() -> ConeRegion {
    ConeRegion::new(
        cloud_cone::MIN_HEIGHT,
        cloud_cone::MAX_HEIGHT,
        cloud_cone::BASE_RADIUS,
    )
}

/// Sample the static attribute set for a fresh cloud
pub fn build_cloud<R: Rng + ?Sized>(count: u32, rng: &mut R) -> CloudData {
    let cone = cloud_cone();
    let points = (0..count)
        .map(|_| {
            let assembled = sample_cone_interior(rng, &cone);
            let scattered = sample_shell(
                rng,
                scatter::CLOUD_INNER_RADIUS,
                scatter::CLOUD_SHELL_THICKNESS,
            );
            CloudPoint {
                assembled_position: assembled.to_array(),
                seed: rng.gen::<f32>(),
                scattered_position: scattered.to_array(),
                size: cloud::MIN_POINT_SIZE + rng.gen::<f32>() * cloud::POINT_SIZE_RANGE,
            }
        })
        .collect();

    CloudData {
        points,
        noise: Perlin::new(rng.gen()),
    }
}

/// Displayed position of one point at the given raw progress and time
///
/// Eases the progress, blends between the two endpoints, then displaces the
/// result vertically by coherent noise whose intensity fades from chaotic
/// floating (scattered) to a gentle breathing (assembled).
pub fn evaluate_point(noise: &Perlin, point: &CloudPoint, progress: f32, time: f32) -> Vec3 {
    let t = ease_in_out_cubic(progress);

    let assembled = Vec3::from(point.assembled_position);
    let scattered = Vec3::from(point.scattered_position);
    let blended = scattered.lerp(assembled, t);

    let sample_at = blended * cloud::NOISE_FREQUENCY + Vec3::splat(time * cloud::NOISE_TIME_SPEED);
    let noise_value = noise.get([
        sample_at.x as f64,
        sample_at.y as f64,
        sample_at.z as f64,
    ]) as f32;

    let intensity = cloud::FLOAT_INTENSITY_SCATTERED
        + (cloud::FLOAT_INTENSITY_ASSEMBLED - cloud::FLOAT_INTENSITY_SCATTERED) * t;

    blended + Vec3::Y * noise_value * intensity
}

/// Evaluate every point into `out`, reusing its allocation
pub fn evaluate_positions(data: &CloudData, progress: f32, time: f32, out: &mut Vec<Vec3>) {
    data.points
        .par_iter()
        .map(|point| evaluate_point(&data.noise, point, progress, time))
        .collect_into_vec(out);
}

/// Rendered sprite size after perspective attenuation
///
/// Purely a rendering concern; it shares the per-point attribute set but has
/// no effect on logical position.
pub fn point_size(base_size: f32, view_distance: f32) -> f32 {
    base_size * cloud::SIZE_ATTENUATION / view_distance.max(f32::EPSILON)
}
