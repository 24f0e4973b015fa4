//! Ornament operations - build and per-frame update
//!
//! The update switches its target endpoint discretely on mode flip, then
//! approaches it with a fixed per-frame lerp fraction. The fraction is
//! deliberately not scaled by delta time (see DESIGN.md), so the update takes
//! only the global mode and elapsed time.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

use crate::config::ObjectClassSpec;
use crate::constants::{ornament, scatter};
use crate::placement::LayoutData;
use crate::sampling::sample_shell;
use crate::transition::Mode;

use super::ornament_data::{
    DualPositionElement, OrnamentGroup, OrnamentKind, OrnamentSetData, TransformData,
};

/// Identifier of the implicit apex star group
pub const STAR_GROUP_ID: &str = "star";

fn sample_idle<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    (
        ornament::MIN_IDLE_SPEED + rng.gen::<f32>() * ornament::IDLE_SPEED_RANGE,
        rng.gen::<f32>() * std::f32::consts::TAU,
    )
}

fn scattered_endpoint<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    sample_shell(
        rng,
        scatter::ORNAMENT_INNER_RADIUS,
        scatter::ORNAMENT_SHELL_THICKNESS,
    )
}

/// Transform an element rests at in the given mode
fn rest_transform(element: &DualPositionElement, mode: Mode) -> TransformData {
    let position = match mode {
        Mode::Assembled => element.assembled_position,
        Mode::Scattered => element.scattered_position,
    };
    TransformData {
        position,
        rotation: element.rotation,
        scale: element.scale,
    }
}

/// Build the full ornament set from a solved layout
///
/// Each placed element is augmented with a freshly sampled scattered-side
/// endpoint and idle constants. The apex star is appended as a fixed
/// singleton; it never goes through the solver. Transforms start at rest in
/// `initial_mode`.
pub fn build_ornaments<R: Rng + ?Sized>(
    layout: &LayoutData,
    specs: &[ObjectClassSpec],
    star_color: crate::config::Color,
    initial_mode: Mode,
    rng: &mut R,
) -> OrnamentSetData {
    let mut groups = Vec::with_capacity(specs.len() + 1);

    for spec in specs {
        let elements: Vec<DualPositionElement> = layout
            .elements_for(&spec.id)
            .iter()
            .map(|placed| {
                let (idle_speed, idle_phase) = sample_idle(rng);
                DualPositionElement {
                    assembled_position: placed.position,
                    scattered_position: scattered_endpoint(rng),
                    rotation: placed.rotation,
                    scale: placed.scale,
                    idle_speed,
                    idle_phase,
                }
            })
            .collect();

        let transforms = elements
            .iter()
            .map(|e| rest_transform(e, initial_mode))
            .collect();

        groups.push(OrnamentGroup {
            id: spec.id.clone(),
            kind: spec.kind,
            color: spec.color,
            elements,
            transforms,
        });
    }

    let (idle_speed, idle_phase) = sample_idle(rng);
    let star = DualPositionElement {
        assembled_position: Vec3::from(ornament::STAR_APEX),
        scattered_position: scattered_endpoint(rng),
        rotation: Vec3::ZERO,
        scale: ornament::STAR_SCALE,
        idle_speed,
        idle_phase,
    };
    groups.push(OrnamentGroup {
        id: STAR_GROUP_ID.to_string(),
        kind: OrnamentKind::Star,
        color: star_color,
        elements: vec![star],
        transforms: vec![rest_transform(&star, initial_mode)],
    });

    OrnamentSetData { groups }
}

/// Advance every ornament one frame
///
/// No-ops gracefully on an empty set; safe to call before any layout exists.
pub fn update_ornaments(set: &mut OrnamentSetData, mode: Mode, time: f32) {
    for group in &mut set.groups {
        for (element, transform) in group.elements.iter().zip(group.transforms.iter_mut()) {
            update_one(element, transform, group.kind, mode, time);
        }
    }
}

fn update_one(
    element: &DualPositionElement,
    transform: &mut TransformData,
    kind: OrnamentKind,
    mode: Mode,
    time: f32,
) {
    let target = match mode {
        Mode::Assembled => element.assembled_position,
        Mode::Scattered => element.scattered_position,
    };
    transform.position = transform
        .position
        .lerp(target, ornament::POSITION_LERP_FRACTION);

    match mode {
        Mode::Scattered => {
            // Bob and tumble while drifting free
            transform.position.y +=
                (time * element.idle_speed + element.idle_phase).sin() * ornament::BOB_AMPLITUDE;
            transform.rotation.x += ornament::TUMBLE_PITCH_DELTA;
            transform.rotation.y += ornament::TUMBLE_YAW_DELTA;
        }
        Mode::Assembled => {
            if kind == OrnamentKind::Star {
                // Upright continuous spin, stored rotation ignored
                transform.rotation = Vec3::new(0.0, time * ornament::STAR_SPIN_RATE, 0.0);
            } else {
                transform.rotation.x = element.rotation.x;
                transform.rotation.y += ornament::IDLE_YAW_DELTA;
                transform.rotation.z = element.rotation.z;
            }
        }
    }

    transform.scale = element.scale;
}

/// Instance matrix for a displayed transform
pub fn transform_matrix(transform: &TransformData) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(transform.scale),
        Quat::from_euler(
            EulerRot::XYZ,
            transform.rotation.x,
            transform.rotation.y,
            transform.rotation.z,
        ),
        transform.position,
    )
}
