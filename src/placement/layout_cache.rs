//! Layout memoization
//!
//! The solver runs once per configuration, never per frame. The cache keys on
//! the placement-relevant subset of the ordered class list and only re-solves
//! when that key changes; the rebuilt layout is swapped in whole so readers
//! never observe a partially rebuilt layout.

use rand::Rng;

use crate::config::ObjectClassSpec;
use crate::ornaments::OrnamentKind;
use crate::sampling::ConeRegion;

use super::placement_data::LayoutData;
use super::placement_operations::solve_layout;

/// Placement-relevant subset of a class spec
///
/// Render-only fields (colors) do not participate in the key: changing them
/// must never re-run the solver, or every ornament would teleport to a
/// freshly solved layout mid-session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementKey {
    id: String,
    kind: OrnamentKind,
    count: u32,
    min_scale: f32,
    max_scale: f32,
}

impl From<&ObjectClassSpec> for PlacementKey {
    fn from(spec: &ObjectClassSpec) -> Self {
        Self {
            id: spec.id.clone(),
            kind: spec.kind,
            count: spec.count,
            min_scale: spec.min_scale,
            max_scale: spec.max_scale,
        }
    }
}

/// Memoized solver output for the lifetime of an element set
#[derive(Debug, Default)]
pub struct LayoutCache {
    key: Option<Vec<PlacementKey>>,
    layout: LayoutData,
    generation: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layout; empty before the first build
    pub fn layout(&self) -> &LayoutData {
        &self.layout
    }

    /// Bumped once per rebuild, stable otherwise
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Return the cached layout, re-solving first if the placement key
    /// changed
    ///
    /// The fresh layout is fully built before it replaces the old one.
    pub fn get_or_build<R: Rng + ?Sized>(
        &mut self,
        cone: &ConeRegion,
        specs: &[ObjectClassSpec],
        rng: &mut R,
    ) -> &LayoutData {
        let key: Vec<PlacementKey> = specs.iter().map(PlacementKey::from).collect();
        if self.key.as_ref() != Some(&key) {
            let fresh = solve_layout(cone, specs, rng);
            log::debug!(
                "layout cache: rebuilt {} classes, {} elements (generation {})",
                fresh.classes.len(),
                fresh.total_elements(),
                self.generation + 1
            );
            self.layout = fresh;
            self.key = Some(key);
            self.generation += 1;
        }
        &self.layout
    }
}
