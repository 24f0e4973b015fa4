//! Ensemble state - the frame-update surface
//!
//! Owns everything the external scheduler and renderer touch: the layout
//! cache, the transition state, the cloud buffers and the ornament set. One
//! `update(dt)` call per rendered frame; the renderer then reads the cloud
//! attribute buffer, the per-frame uniforms and the instance matrices. No
//! background threads, no locking: the frame-update pass is the only writer.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cloud::{build_cloud, evaluate_positions, CloudData, CloudPoint, CloudUniforms};
use crate::config::{validate_config, EnsembleConfig};
use crate::error::EnsembleResult;
use crate::ornaments::{
    build_ornaments, update_ornaments, OrnamentGroup, OrnamentSetData, STAR_GROUP_ID,
};
use crate::placement::{ornament_cone, LayoutCache};
use crate::transition::{operations as transition_ops, Mode, TransitionState};

/// Complete ensemble state for one animated scene
pub struct EnsembleState {
    config: EnsembleConfig,
    layout_cache: LayoutCache,
    transition: TransitionState,
    cloud: CloudData,
    ornaments: OrnamentSetData,
    elapsed: f32,
    rng: StdRng,
}

impl EnsembleState {
    /// Build a fresh ensemble, at rest in the assembled configuration
    ///
    /// Fails fast on invalid configuration; placement exhaustion is not a
    /// failure and shows up only as smaller ornament groups.
    pub fn new(config: EnsembleConfig) -> EnsembleResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`EnsembleState::new`] with a caller-supplied RNG, for
    /// reproducible layouts in tests
    pub fn with_rng(config: EnsembleConfig, mut rng: StdRng) -> EnsembleResult<Self> {
        validate_config(&config)?;

        let mode = Mode::Assembled;
        let mut layout_cache = LayoutCache::new();
        let layout = layout_cache.get_or_build(&ornament_cone(), &config.classes, &mut rng);
        let ornaments =
            build_ornaments(layout, &config.classes, config.star_color, mode, &mut rng);
        let cloud = build_cloud(config.cloud_point_count, &mut rng);

        log::info!(
            "ensemble ready: {} cloud points, {} ornaments across {} groups",
            cloud.points.len(),
            ornaments.total_elements(),
            ornaments.groups.len()
        );

        Ok(Self {
            config,
            layout_cache,
            transition: TransitionState::at_rest(mode),
            cloud,
            ornaments,
            elapsed: 0.0,
            rng,
        })
    }

    /// Swap in a new configuration
    ///
    /// Only a change to the placement-relevant class fields (id, kind, count,
    /// scale range) or to the cloud point count triggers a rebuild; colors
    /// are copied into the live groups and uniforms without disturbing the
    /// layout, so a recolor never moves anything. Rebuilt data replaces the
    /// old set whole, after it is fully built, so a renderer never sees a
    /// half-rebuilt layout. Returns whether a rebuild happened.
    pub fn apply_config(&mut self, config: EnsembleConfig) -> EnsembleResult<bool> {
        validate_config(&config)?;

        let generation_before = self.layout_cache.generation();
        self.layout_cache
            .get_or_build(&ornament_cone(), &config.classes, &mut self.rng);
        let classes_changed = self.layout_cache.generation() != generation_before;
        let cloud_changed = config.cloud_point_count != self.config.cloud_point_count;

        if classes_changed {
            self.ornaments = build_ornaments(
                self.layout_cache.layout(),
                &config.classes,
                config.star_color,
                self.transition.mode,
                &mut self.rng,
            );
        } else {
            // Render-only fields flow into the existing groups
            for group in &mut self.ornaments.groups {
                if group.id == STAR_GROUP_ID {
                    group.color = config.star_color;
                } else if let Some(spec) = config.classes.iter().find(|s| s.id == group.id) {
                    group.color = spec.color;
                }
            }
        }
        if cloud_changed {
            self.cloud = build_cloud(config.cloud_point_count, &mut self.rng);
        }

        self.config = config;
        Ok(classes_changed || cloud_changed)
    }

    /// Flip between the two terminal configurations
    pub fn toggle(&mut self) {
        self.set_mode(self.transition.mode.toggled());
    }

    /// Command a specific terminal configuration
    ///
    /// Re-targets the smoothing immediately; nothing jumps.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.transition.mode {
            log::debug!("mode -> {:?} at progress {:.3}", mode, self.transition.progress);
        }
        self.transition.mode = mode;
    }

    /// Advance one frame; `dt` is the elapsed time since the previous frame
    /// in seconds
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        transition_ops::advance_state(&mut self.transition, dt);
        update_ornaments(&mut self.ornaments, self.transition.mode, self.elapsed);
    }

    // ========================================================================
    // RENDERER-FACING OUTPUTS
    // ========================================================================

    /// Flat static attribute buffer for the cloud rendering stage
    pub fn cloud_points(&self) -> &[CloudPoint] {
        &self.cloud.points
    }

    /// Per-frame scalar uniforms for the cloud rendering stage
    pub fn cloud_uniforms(&self) -> CloudUniforms {
        let [cr, cg, cb] = self.config.cloud_core_color;
        let [tr, tg, tb] = self.config.cloud_tip_color;
        CloudUniforms {
            progress: self.transition.progress,
            time: self.elapsed,
            _padding: [0.0; 2],
            core_color: [cr, cg, cb, 1.0],
            tip_color: [tr, tg, tb, 1.0],
        }
    }

    /// CPU reference evaluation of every cloud point, for renderers that do
    /// not run the blend on their own stage
    pub fn evaluate_cloud(&self, out: &mut Vec<Vec3>) {
        evaluate_positions(&self.cloud, self.transition.progress, self.elapsed, out);
    }

    /// Ornament groups with their current displayed transforms
    pub fn ornament_groups(&self) -> &[OrnamentGroup] {
        &self.ornaments.groups
    }

    /// Instance matrices for one ornament group; empty when the index is out
    /// of range, so the frame surface stays total
    pub fn instance_matrices(&self, group: usize) -> Vec<Mat4> {
        self.ornaments
            .groups
            .get(group)
            .map(|g| {
                g.transforms
                    .iter()
                    .map(crate::ornaments::transform_matrix)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.transition.mode
    }

    /// Current blend progress in [0, 1]; 1 means fully assembled
    pub fn progress(&self) -> f32 {
        self.transition.progress
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnsembleError;

    fn seeded(config: EnsembleConfig, seed: u64) -> EnsembleState {
        EnsembleState::with_rng(config, StdRng::seed_from_u64(seed))
            .expect("config must validate")
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = EnsembleConfig::default();
        config.classes[0].count = 0;
        let err = EnsembleState::new(config)
            .err()
            .expect("must reject zero count");
        assert!(matches!(err, EnsembleError::InvalidConfig { .. }));
    }

    #[test]
    fn test_starts_assembled_at_rest() {
        let state = seeded(EnsembleConfig::default(), 1);
        assert_eq!(state.mode(), Mode::Assembled);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(
            state.cloud_points().len(),
            EnsembleConfig::default().cloud_point_count as usize
        );
    }

    #[test]
    fn test_toggle_drives_progress_down() {
        let mut state = seeded(EnsembleConfig::default(), 2);
        state.toggle();
        assert_eq!(state.mode(), Mode::Scattered);

        let mut last = state.progress();
        for _ in 0..60 {
            state.update(1.0 / 60.0);
            assert!(state.progress() < last);
            last = state.progress();
        }
        // After a second the scatter is mostly done
        assert!(state.progress() < 0.1);
    }

    #[test]
    fn test_update_moves_ornaments_toward_mode_endpoint() {
        let mut state = seeded(EnsembleConfig::default(), 3);
        state.toggle();

        let gap_before: f32 = state.ornament_groups()[0]
            .elements
            .iter()
            .zip(&state.ornament_groups()[0].transforms)
            .map(|(e, t)| t.position.distance(e.scattered_position))
            .sum();
        for _ in 0..30 {
            state.update(1.0 / 60.0);
        }
        let gap_after: f32 = state.ornament_groups()[0]
            .elements
            .iter()
            .zip(&state.ornament_groups()[0].transforms)
            .map(|(e, t)| t.position.distance(e.scattered_position))
            .sum();
        assert!(gap_after < gap_before);
    }

    #[test]
    fn test_apply_config_rebuilds_only_on_key_change() {
        let mut state = seeded(EnsembleConfig::default(), 4);

        // Color-only change: no rebuild
        let mut recolored = state.config().clone();
        recolored.star_color = [0.0, 1.0, 0.0];
        assert!(!state.apply_config(recolored).expect("valid config"));

        // Count change: rebuild with the new quota
        let mut resized = state.config().clone();
        resized.classes[0].count = 5;
        assert!(state.apply_config(resized).expect("valid config"));
        assert!(state.ornament_groups()[0].elements.len() <= 5);
    }

    #[test]
    fn test_recolor_keeps_layout_and_updates_groups() {
        let mut state = seeded(EnsembleConfig::default(), 9);
        let positions_before: Vec<Vec3> = state.ornament_groups()[0]
            .elements
            .iter()
            .map(|e| e.assembled_position)
            .collect();
        let transforms_before: Vec<Vec3> = state.ornament_groups()[0]
            .transforms
            .iter()
            .map(|t| t.position)
            .collect();

        let mut recolored = state.config().clone();
        recolored.classes[0].color = [0.0, 0.0, 1.0];
        recolored.star_color = [0.0, 1.0, 0.0];
        assert!(!state.apply_config(recolored).expect("valid config"));

        // The layout must not be re-solved: every endpoint and displayed
        // transform stays exactly where it was
        let positions_after: Vec<Vec3> = state.ornament_groups()[0]
            .elements
            .iter()
            .map(|e| e.assembled_position)
            .collect();
        let transforms_after: Vec<Vec3> = state.ornament_groups()[0]
            .transforms
            .iter()
            .map(|t| t.position)
            .collect();
        assert_eq!(positions_before, positions_after);
        assert_eq!(transforms_before, transforms_after);

        // The new colors reach the live groups, star included
        assert_eq!(state.ornament_groups()[0].color, [0.0, 0.0, 1.0]);
        let star = state.ornament_groups().last().expect("star group");
        assert_eq!(star.id, STAR_GROUP_ID);
        assert_eq!(star.color, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_instance_matrices_out_of_range_is_empty() {
        let state = seeded(EnsembleConfig::default(), 10);
        assert!(state.instance_matrices(usize::MAX).is_empty());
        assert!(!state.instance_matrices(0).is_empty());
    }

    #[test]
    fn test_apply_config_preserves_session_clock_and_mode() {
        let mut state = seeded(EnsembleConfig::default(), 5);
        state.toggle();
        state.update(0.25);
        let elapsed = state.elapsed();

        let mut resized = state.config().clone();
        resized.cloud_point_count = 100;
        state.apply_config(resized).expect("valid config");
        assert_eq!(state.mode(), Mode::Scattered);
        assert_eq!(state.elapsed(), elapsed);
        assert_eq!(state.cloud_points().len(), 100);
    }

    #[test]
    fn test_uniforms_track_progress_and_colors() {
        let mut state = seeded(EnsembleConfig::default(), 6);
        state.toggle();
        state.update(0.1);

        let uniforms = state.cloud_uniforms();
        assert_eq!(uniforms.progress, state.progress());
        assert_eq!(uniforms.time, state.elapsed());
        let core = state.config().cloud_core_color;
        assert_eq!(uniforms.core_color, [core[0], core[1], core[2], 1.0]);
    }

    #[test]
    fn test_instance_matrices_follow_transforms() {
        let state = seeded(EnsembleConfig::default(), 7);
        let matrices = state.instance_matrices(0);
        let group = &state.ornament_groups()[0];
        assert_eq!(matrices.len(), group.transforms.len());
        if let (Some(matrix), Some(transform)) = (matrices.first(), group.transforms.first()) {
            let origin = matrix.transform_point3(Vec3::ZERO);
            assert!(origin.distance(transform.position) < 1e-5);
        }
    }

    #[test]
    fn test_zero_dt_update_only_overlays_idle() {
        let mut state = seeded(EnsembleConfig::default(), 8);
        let progress = state.progress();
        state.update(0.0);
        assert_eq!(state.progress(), progress);
        assert_eq!(state.elapsed(), 0.0);
    }
}
