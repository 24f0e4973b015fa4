//! Dual-state transition control
//!
//! One scalar progress value per animated group, pulled toward the target
//! implied by the current mode with frame-rate-independent exponential
//! smoothing. Progress approaches 0 or 1 asymptotically and is never snapped,
//! so consumers must treat it as continuous rather than as a binary flag.

use serde::{Deserialize, Serialize};

use crate::constants::transition::SMOOTHING_RATE;

/// The two terminal spatial configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Cone-shaped arrangement
    Assembled,
    /// Dispersed sphere-shell arrangement
    Scattered,
}

impl Mode {
    /// The opposite configuration
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Assembled => Mode::Scattered,
            Mode::Scattered => Mode::Assembled,
        }
    }
}

/// Per-group transition state: the commanded mode plus the smoothed progress
/// chasing it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    pub mode: Mode,
    /// Blend position in [0, 1]; 1 means fully assembled
    pub progress: f32,
}

impl TransitionState {
    /// Start at rest in the given mode (progress already at its target)
    pub fn at_rest(mode: Mode) -> Self {
        Self {
            mode,
            progress: operations::target_progress(mode),
        }
    }
}

/// Pure transition operations
pub mod operations {
    use super::*;

    /// Progress value a mode converges toward
    pub fn target_progress(mode: Mode) -> f32 {
        match mode {
            Mode::Assembled => 1.0,
            Mode::Scattered => 0.0,
        }
    }

    /// Advance progress toward the mode's target over `dt` seconds
    ///
    /// Exact integral of first-order exponential decay, so stacking many
    /// small steps matches one large step of the same total duration and the
    /// result never overshoots the [0, 1] range.
    pub fn advance(progress: f32, mode: Mode, dt: f32) -> f32 {
        let target = target_progress(mode);
        target + (progress - target) * (-SMOOTHING_RATE * dt).exp()
    }

    /// Advance a state in place
    pub fn advance_state(state: &mut TransitionState, dt: f32) {
        state.progress = advance(state.progress, state.mode, dt);
    }

    /// Cubic ease-in-out over [0, 1]
    pub fn ease_in_out_cubic(x: f32) -> f32 {
        if x < 0.5 {
            4.0 * x * x * x
        } else {
            1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
        }
    }
}
