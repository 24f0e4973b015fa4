//! Tinsel Engine - dual-state decorative ensemble animation core
//!
//! Drives a particle/ornament ensemble between two terminal spatial
//! configurations: a cone-shaped assembled arrangement and a dispersed
//! scattered arrangement. The crate owns the placement solver, the layout
//! cache, the transition smoothing and both animator forms; rendering,
//! lighting, camera and UI are external collaborators that only read the
//! state produced here.
//!
//! The frame contract is explicit: an external scheduler calls
//! [`EnsembleState::update`] once per frame with the true elapsed time, then
//! reads the cloud attribute buffer, the per-frame uniforms and the ornament
//! instance matrices.

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;
pub mod sampling;

// Placement and animation systems
pub mod cloud;
pub mod ornaments;
pub mod placement;
pub mod transition;

// Frame-update surface
pub mod scene_state;

pub use cloud::{CloudData, CloudPoint, CloudUniforms};
pub use config::{Color, EnsembleConfig, ObjectClassSpec};
pub use error::{EnsembleError, EnsembleResult};
pub use ornaments::{DualPositionElement, OrnamentGroup, OrnamentKind, TransformData};
pub use placement::{LayoutCache, LayoutData, PlacedElement};
pub use scene_state::EnsembleState;
pub use transition::{Mode, TransitionState};
