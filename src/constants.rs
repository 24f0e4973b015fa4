//! Tuning constants for the ensemble
//!
//! Every magic number in the placement and animation paths lives here so the
//! shape of the ensemble can be retuned in one place.

/// Cone geometry for the bulk point cloud
pub mod cloud_cone {
    /// Lowest point height
    pub const MIN_HEIGHT: f32 = -6.0;
    /// Highest point height
    pub const MAX_HEIGHT: f32 = 6.0;
    /// Cross-sectional radius at the bottom of the cone
    pub const BASE_RADIUS: f32 = 4.0;
}

/// Cone geometry for discrete ornament placement
///
/// The vertical extent is pulled in slightly so ornaments never sit exactly
/// on the rim, but the radius taper normalizes over the full [-6, 6] span of
/// the cloud cone. That mismatch leaves the apex cross-section non-zero and
/// is intentional: ornaments near the tip still need somewhere to sit.
pub mod ornament_cone {
    pub const MIN_HEIGHT: f32 = -5.5;
    pub const MAX_HEIGHT: f32 = 5.5;
    pub const BASE_RADIUS: f32 = 4.2;
    /// Height span used to normalize the taper (matches the cloud cone)
    pub const TAPER_MIN_HEIGHT: f32 = -6.0;
    pub const TAPER_SPAN: f32 = 12.0;
}

/// Placement solver tuning
pub mod placement {
    /// Candidate attempts per instance before the instance is dropped
    pub const RETRY_BUDGET: u32 = 50;
    /// Bounding-sphere radius as a fraction of element scale
    pub const BOUNDING_RADIUS_FACTOR: f32 = 0.9;
    /// Extra clearance required between bounding spheres
    pub const COLLISION_MARGIN: f32 = 0.1;
}

/// Scatter shells (dispersed terminal configuration)
pub mod scatter {
    /// Inner radius of the cloud point shell
    pub const CLOUD_INNER_RADIUS: f32 = 15.0;
    /// Radial thickness of the cloud point shell
    pub const CLOUD_SHELL_THICKNESS: f32 = 10.0;
    /// Inner radius of the ornament shell
    pub const ORNAMENT_INNER_RADIUS: f32 = 12.0;
    /// Radial thickness of the ornament shell
    pub const ORNAMENT_SHELL_THICKNESS: f32 = 15.0;
}

/// Transition smoothing
pub mod transition {
    /// Exponential smoothing rate for progress, per second
    pub const SMOOTHING_RATE: f32 = 3.0;
}

/// Bulk cloud animation
pub mod cloud {
    /// Default number of cloud points
    pub const DEFAULT_POINT_COUNT: u32 = 8000;
    /// Spatial frequency of the displacement noise
    pub const NOISE_FREQUENCY: f32 = 0.5;
    /// Rate at which the noise field scrolls with elapsed time
    pub const NOISE_TIME_SPEED: f32 = 0.5;
    /// Vertical displacement intensity when fully scattered
    pub const FLOAT_INTENSITY_SCATTERED: f32 = 1.5;
    /// Vertical displacement intensity when fully assembled
    pub const FLOAT_INTENSITY_ASSEMBLED: f32 = 0.1;
    /// Minimum per-point base size
    pub const MIN_POINT_SIZE: f32 = 0.2;
    /// Range added on top of the minimum size
    pub const POINT_SIZE_RANGE: f32 = 0.8;
    /// Numerator of the perspective size attenuation
    pub const SIZE_ATTENUATION: f32 = 300.0;
}

/// Discrete ornament animation
pub mod ornament {
    /// Per-frame fraction applied when lerping toward the active endpoint.
    /// Deliberately not scaled by delta time; see DESIGN.md.
    pub const POSITION_LERP_FRACTION: f32 = 0.05;
    /// Amplitude of the scattered-state vertical bob
    pub const BOB_AMPLITUDE: f32 = 0.02;
    /// Per-frame pitch increment while scattered
    pub const TUMBLE_PITCH_DELTA: f32 = 0.01;
    /// Per-frame yaw increment while scattered
    pub const TUMBLE_YAW_DELTA: f32 = 0.01;
    /// Per-frame yaw drift while assembled (non-star kinds)
    pub const IDLE_YAW_DELTA: f32 = 0.005;
    /// Star yaw spin rate while assembled, radians per second
    pub const STAR_SPIN_RATE: f32 = 0.5;
    /// Minimum idle bob speed
    pub const MIN_IDLE_SPEED: f32 = 0.2;
    /// Range added on top of the minimum idle speed
    pub const IDLE_SPEED_RANGE: f32 = 0.5;
    /// Star rest position at the cone apex
    pub const STAR_APEX: [f32; 3] = [0.0, 5.9, 0.0];
    /// Star scale (fixed, not sampled)
    pub const STAR_SCALE: f32 = 0.8;
}
