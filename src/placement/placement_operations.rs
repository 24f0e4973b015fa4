//! Placement solver - pure functions
//!
//! Classes are solved strictly in the order given: earlier classes get first
//! pick of the volume and later classes must dodge everything already
//! accepted. Each instance gets a bounded number of candidate attempts; an
//! instance whose attempts all collide is dropped, so a class may come back
//! shorter than requested. Callers must read the produced lengths.

use glam::Vec3;
use rand::Rng;

use crate::config::ObjectClassSpec;
use crate::constants::{ornament_cone, placement};
use crate::sampling::{sample_cone_surface, ConeRegion};

use super::placement_data::{ClassLayout, LayoutData, OccupancyRecord, PlacedElement};

/// The cone volume discrete ornaments are placed in
pub fn ornament_cone() -> ConeRegion {
    ConeRegion {
        min_height: ornament_cone::MIN_HEIGHT,
        max_height: ornament_cone::MAX_HEIGHT,
        base_radius: ornament_cone::BASE_RADIUS,
        taper_min_height: ornament_cone::TAPER_MIN_HEIGHT,
        taper_span: ornament_cone::TAPER_SPAN,
    }
}

/// Bounding-sphere radius of an element at the given scale
pub fn bounding_radius(scale: f32) -> f32 {
    scale * placement::BOUNDING_RADIUS_FACTOR
}

fn collides(candidate: Vec3, radius: f32, occupied: &[OccupancyRecord]) -> bool {
    occupied.iter().any(|record| {
        candidate.distance(record.position) < radius + record.radius + placement::COLLISION_MARGIN
    })
}

/// Solve a collision-free layout for all classes within the given cone
///
/// Non-fatal partial failure is the expected outcome under high density:
/// the result is simply shorter, no error is signaled.
pub fn solve_layout<R: Rng + ?Sized>(
    cone: &ConeRegion,
    specs: &[ObjectClassSpec],
    rng: &mut R,
) -> LayoutData {
    let mut occupied: Vec<OccupancyRecord> = Vec::new();
    let mut layout = LayoutData::default();

    for spec in specs {
        let mut elements = Vec::with_capacity(spec.count as usize);

        for _ in 0..spec.count {
            if let Some(element) = place_one(cone, spec, &occupied, rng) {
                occupied.push(OccupancyRecord {
                    position: element.position,
                    radius: bounding_radius(element.scale),
                });
                elements.push(element);
            }
        }

        let dropped = spec.count as usize - elements.len();
        if dropped > 0 {
            log::debug!(
                "placement: class '{}' dropped {} of {} instances (volume saturated)",
                spec.id,
                dropped,
                spec.count
            );
        }

        layout.classes.push(ClassLayout {
            id: spec.id.clone(),
            elements,
        });
    }

    layout
}

/// Attempt one instance within the retry budget
fn place_one<R: Rng + ?Sized>(
    cone: &ConeRegion,
    spec: &ObjectClassSpec,
    occupied: &[OccupancyRecord],
    rng: &mut R,
) -> Option<PlacedElement> {
    for _ in 0..placement::RETRY_BUDGET {
        // Ornaments hang on the lateral surface, never buried in the volume
        let position = sample_cone_surface(rng, cone);
        let scale = rng.gen_range(spec.min_scale..=spec.max_scale);

        if collides(position, bounding_radius(scale), occupied) {
            continue;
        }

        return Some(PlacedElement {
            position,
            scale,
            rotation: Vec3::new(
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
            ),
        });
    }
    None
}
