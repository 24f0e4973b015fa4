//! Ensemble configuration
//!
//! An immutable description of what the ensemble contains: how many cloud
//! points, which ornament classes with which counts and scale ranges, and the
//! colors handed through to the renderer. Supplied once at construction;
//! changing the class list triggers a layout rebuild, nothing is mutated in
//! place.

use serde::{Deserialize, Serialize};

use crate::constants::cloud;
use crate::error::{invalid_config, EnsembleResult};
use crate::ornaments::OrnamentKind;

/// RGB color handed through to the renderer, components in [0, 1]
pub type Color = [f32; 3];

/// One class of solver-placed ornaments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectClassSpec {
    /// Stable identifier used to look the class up in solver results
    pub id: String,
    pub kind: OrnamentKind,
    /// Requested instance count; the solver may produce fewer
    pub count: u32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub color: Color,
}

/// Full configuration of the ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Number of points in the bulk cloud
    pub cloud_point_count: u32,
    /// Cloud color at the center of each point sprite
    pub cloud_core_color: Color,
    /// Cloud color at the sprite edge
    pub cloud_tip_color: Color,
    /// Color of the apex star
    pub star_color: Color,
    /// Solver-placed ornament classes, in placement priority order
    pub classes: Vec<ObjectClassSpec>,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            cloud_point_count: cloud::DEFAULT_POINT_COUNT,
            // Deep emerald core, metallic gold tip
            cloud_core_color: [0.0, 0.302, 0.145],
            cloud_tip_color: [0.831, 0.686, 0.216],
            star_color: [1.0, 0.843, 0.0],
            classes: vec![
                ObjectClassSpec {
                    id: "red_boxes".to_string(),
                    kind: OrnamentKind::Box,
                    count: 80,
                    min_scale: 0.25,
                    max_scale: 0.35,
                    color: [1.0, 0.0, 0.133],
                },
                ObjectClassSpec {
                    id: "gold_boxes".to_string(),
                    kind: OrnamentKind::Box,
                    count: 40,
                    min_scale: 0.25,
                    max_scale: 0.35,
                    color: [1.0, 0.8, 0.0],
                },
                ObjectClassSpec {
                    id: "gold_spheres".to_string(),
                    kind: OrnamentKind::Sphere,
                    count: 150,
                    min_scale: 0.15,
                    max_scale: 0.25,
                    color: [1.0, 0.8, 0.0],
                },
                ObjectClassSpec {
                    id: "white_spheres".to_string(),
                    kind: OrnamentKind::Sphere,
                    count: 100,
                    min_scale: 0.15,
                    max_scale: 0.25,
                    color: [1.0, 1.0, 1.0],
                },
            ],
        }
    }
}

/// Validate a configuration, rejecting anything the solver or animators
/// would silently misbehave on
pub fn validate_config(config: &EnsembleConfig) -> EnsembleResult<()> {
    if config.cloud_point_count == 0 {
        return Err(invalid_config(
            "cloud_point_count",
            config.cloud_point_count,
            "must be at least 1",
        ));
    }

    for (i, class) in config.classes.iter().enumerate() {
        let field = |name: &str| format!("classes[{}].{}", i, name);

        if class.id.is_empty() {
            return Err(invalid_config(field("id"), "\"\"", "must not be empty"));
        }
        if config.classes[..i].iter().any(|c| c.id == class.id) {
            return Err(invalid_config(field("id"), &class.id, "duplicate identifier"));
        }
        if class.kind == OrnamentKind::Star {
            return Err(invalid_config(
                field("kind"),
                "Star",
                "the star is a fixed apex singleton, not a solver class",
            ));
        }
        if class.count == 0 {
            return Err(invalid_config(field("count"), class.count, "must be at least 1"));
        }
        if class.min_scale <= 0.0 {
            return Err(invalid_config(
                field("min_scale"),
                class.min_scale,
                "must be positive",
            ));
        }
        if class.min_scale > class.max_scale {
            return Err(invalid_config(
                field("min_scale"),
                class.min_scale,
                format!("must not exceed max_scale ({})", class.max_scale),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        validate_config(&EnsembleConfig::default()).expect("default config must validate");
    }

    #[test]
    fn test_rejects_zero_count() {
        let mut config = EnsembleConfig::default();
        config.classes[0].count = 0;
        let err = validate_config(&config).expect_err("zero count must be rejected");
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_rejects_inverted_scale_range() {
        let mut config = EnsembleConfig::default();
        config.classes[1].min_scale = 0.5;
        config.classes[1].max_scale = 0.2;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let mut config = EnsembleConfig::default();
        config.classes[0].min_scale = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut config = EnsembleConfig::default();
        let id = config.classes[0].id.clone();
        config.classes[1].id = id;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_star_class() {
        let mut config = EnsembleConfig::default();
        config.classes[0].kind = OrnamentKind::Star;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_cloud_points() {
        let config = EnsembleConfig {
            cloud_point_count: 0,
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
