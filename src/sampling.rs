//! Random sampling over the ensemble's terminal geometries
//!
//! Pure helpers: every function takes the RNG it should draw from, so callers
//! decide between a thread RNG in production and a seeded RNG in tests. No
//! function here keeps state.

use glam::Vec3;
use rand::Rng;

/// A vertical cone volume, apex up, axis on +Y
///
/// The taper is normalized over its own span so the cross-section can be
/// non-zero at `max_height` when `taper_min_height`/`taper_span` describe a
/// larger cone than the sampled extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeRegion {
    pub min_height: f32,
    pub max_height: f32,
    pub base_radius: f32,
    pub taper_min_height: f32,
    pub taper_span: f32,
}

impl ConeRegion {
    /// Cone spanning the given heights with the taper normalized over the
    /// same extent (radius reaches zero exactly at `max_height`)
    pub fn new(min_height: f32, max_height: f32, base_radius: f32) -> Self {
        Self {
            min_height,
            max_height,
            base_radius,
            taper_min_height: min_height,
            taper_span: max_height - min_height,
        }
    }
}

/// Cross-sectional radius of the cone at the given height
///
/// Shrinks linearly from `base_radius` at the bottom of the taper to zero at
/// the top, clamped so heights past the taper end never go negative.
pub fn cone_radius_at(cone: &ConeRegion, height: f32) -> f32 {
    let normalized = (height - cone.taper_min_height) / cone.taper_span;
    (cone.base_radius * (1.0 - normalized)).max(0.0)
}

/// Uniform height, uniform azimuth, radius uniform within the cross-section
/// at that height
pub fn sample_cone_interior<R: Rng + ?Sized>(rng: &mut R, cone: &ConeRegion) -> Vec3 {
    let h = rng.gen_range(cone.min_height..cone.max_height);
    let max_radius = cone_radius_at(cone, h);
    let r = rng.gen::<f32>() * max_radius;
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    Vec3::new(r * theta.cos(), h, r * theta.sin())
}

/// Uniform height and azimuth on the cone's lateral surface: the radius is
/// pinned to the cross-section boundary at the sampled height
pub fn sample_cone_surface<R: Rng + ?Sized>(rng: &mut R, cone: &ConeRegion) -> Vec3 {
    let h = rng.gen_range(cone.min_height..cone.max_height);
    let r = cone_radius_at(cone, h);
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    Vec3::new(r * theta.cos(), h, r * theta.sin())
}

/// Uniform direction within a spherical shell of radius
/// `[inner, inner + thickness)`
///
/// Directions are area-uniform on the sphere (`cos phi` drawn uniformly).
pub fn sample_shell<R: Rng + ?Sized>(rng: &mut R, inner: f32, thickness: f32) -> Vec3 {
    let r = inner + rng.gen::<f32>() * thickness;
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cone_radius_taper() {
        let cone = ConeRegion::new(-6.0, 6.0, 4.0);
        assert!((cone_radius_at(&cone, -6.0) - 4.0).abs() < 1e-6);
        assert!((cone_radius_at(&cone, 0.0) - 2.0).abs() < 1e-6);
        assert!(cone_radius_at(&cone, 6.0).abs() < 1e-6);
        // Past the taper end the radius clamps to zero
        assert_eq!(cone_radius_at(&cone, 7.0), 0.0);
    }

    #[test]
    fn test_cone_interior_stays_inside() {
        let cone = ConeRegion::new(-6.0, 6.0, 4.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let p = sample_cone_interior(&mut rng, &cone);
            assert!(p.y >= cone.min_height && p.y < cone.max_height);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!(horizontal <= cone_radius_at(&cone, p.y) + 1e-4);
        }
    }

    #[test]
    fn test_cone_surface_sits_on_boundary() {
        let cone = ConeRegion::new(-6.0, 6.0, 4.0);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..2000 {
            let p = sample_cone_surface(&mut rng, &cone);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!((horizontal - cone_radius_at(&cone, p.y)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_offset_taper_leaves_apex_open() {
        // Ornament-style cone: extent pulled in, taper normalized wider
        let cone = ConeRegion {
            min_height: -5.5,
            max_height: 5.5,
            base_radius: 4.2,
            taper_min_height: -6.0,
            taper_span: 12.0,
        };
        let top = cone_radius_at(&cone, 5.5);
        assert!(top > 0.0 && top < 0.2);
    }

    #[test]
    fn test_shell_radius_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let p = sample_shell(&mut rng, 15.0, 10.0);
            let r = p.length();
            assert!(r >= 15.0 - 1e-4 && r < 25.0 + 1e-4);
        }
    }
}
