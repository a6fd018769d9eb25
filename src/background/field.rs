//! Decorative particle simulation backing the portfolio view.
//!
//! Pure state + update logic; drawing lives in `render`. The field lives in
//! viewport pixel space (origin top-left, `[0,w] x [0,h]`) and is converted
//! to world space only at draw time. The whole set is regenerated from
//! scratch on every viewport size change; nothing survives a resize.

use bevy::prelude::*;
use rand::Rng;

use crate::core::config::BackgroundConfig;

use super::palette;

/// Shape kinds a particle can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Diamond,
    Hexagon,
    Star,
}

pub const SHAPES: [ShapeKind; 6] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
    ShapeKind::Hexagon,
    ShapeKind::Star,
];

/// One drifting decorative shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in viewport pixels, always inside `[0,w] x [0,h]`.
    pub pos: Vec2,
    /// Pseudo-depth in [-150, 150]; opacity falloff only, no projection.
    pub depth: f32,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub shape: ShapeKind,
    /// Rotation in degrees, wrapped to [0, 360).
    pub angle: f32,
    /// Degrees per tick, signed.
    pub rotation_speed: f32,
    pub scale: f32,
    pub base_opacity: f32,
}

impl Particle {
    /// Rendered opacity: depth-based fade, not true perspective.
    #[inline]
    pub fn opacity(&self, depth_fade: f32) -> f32 {
        self.base_opacity * (1.0 - self.depth.abs() * depth_fade)
    }
}

/// Particle count for a viewport: one per `area_per_particle` square pixels,
/// capped at `max_particles`. Zero/negative dimensions yield an empty field.
pub fn particle_count(width: f32, height: f32, cfg: &BackgroundConfig) -> usize {
    if width <= 0.0 || height <= 0.0 || cfg.area_per_particle <= 0.0 {
        return 0;
    }
    (((width * height) / cfg.area_per_particle).floor() as usize).min(cfg.max_particles)
}

/// The full simulated set plus the bounds it was generated for.
#[derive(Resource, Debug, Default, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Sample a fresh field for the given viewport. The caller owns the RNG
    /// so tests can pass a seeded generator.
    pub fn generate(width: f32, height: f32, cfg: &BackgroundConfig, rng: &mut impl Rng) -> Self {
        let count = particle_count(width, height, cfg);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                depth: rng.gen::<f32>() * 300.0 - 150.0,
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 0.8,
                    (rng.gen::<f32>() - 0.5) * 0.8,
                ),
                size: rng.gen::<f32>() * 4.0 + 2.0,
                color: palette::color_for_index(rng.gen_range(0..palette::PARTICLE_COLORS.len())),
                shape: SHAPES[rng.gen_range(0..SHAPES.len())],
                angle: rng.gen::<f32>() * 360.0,
                rotation_speed: (rng.gen::<f32>() - 0.5) * 2.0,
                scale: rng.gen::<f32>() * 0.5 + 0.5,
                base_opacity: rng.gen::<f32>() * 0.5 + 0.5,
            });
        }
        Self {
            particles,
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// One simulation tick: pointer repulsion, integration, boundary
    /// reflection, velocity damping, rotation advance.
    pub fn step(&mut self, pointer: Option<Vec2>, cfg: &BackgroundConfig) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            if let Some(ptr) = pointer {
                let delta = ptr - p.pos;
                let dist = delta.length();
                // dist == 0 would divide by zero; skip, direction is undefined
                if dist > 0.0 && dist < cfg.pointer_radius {
                    let force = (1.0 - dist / cfg.pointer_radius) * cfg.pointer_force;
                    p.vel -= (delta / dist) * force;
                }
            }

            p.pos += p.vel;

            if p.pos.x < 0.0 {
                p.pos.x = 0.0;
                p.vel.x = -p.vel.x;
            }
            if p.pos.x > bounds.x {
                p.pos.x = bounds.x;
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 {
                p.pos.y = 0.0;
                p.vel.y = -p.vel.y;
            }
            if p.pos.y > bounds.y {
                p.pos.y = bounds.y;
                p.vel.y = -p.vel.y;
            }

            p.vel *= cfg.damping;
            p.angle = (p.angle + p.rotation_speed).rem_euclid(360.0);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cfg() -> BackgroundConfig {
        BackgroundConfig::default()
    }

    #[test]
    fn count_formula_exact() {
        let c = cfg();
        assert_eq!(particle_count(0.0, 0.0, &c), 0);
        assert_eq!(particle_count(-100.0, 600.0, &c), 0);
        assert_eq!(particle_count(100.0, 100.0, &c), 0); // 10000 / 20000 -> 0
        assert_eq!(particle_count(200.0, 100.0, &c), 1);
        assert_eq!(particle_count(800.0, 600.0, &c), 24);
        assert_eq!(particle_count(1920.0, 1080.0, &c), 100); // 103.6 capped
        assert_eq!(particle_count(10_000.0, 10_000.0, &c), 100);
    }

    #[test]
    fn generate_samples_within_ranges() {
        let c = cfg();
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(800.0, 600.0, &c, &mut rng);
        assert_eq!(field.len(), 24);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
            assert!(p.depth >= -150.0 && p.depth <= 150.0);
            assert!(p.vel.x.abs() <= 0.4 && p.vel.y.abs() <= 0.4);
            assert!(p.size >= 2.0 && p.size <= 6.0);
            assert!(p.angle >= 0.0 && p.angle < 360.0);
            assert!(p.rotation_speed.abs() <= 1.0);
            assert!(p.scale >= 0.5 && p.scale <= 1.0);
            assert!(p.base_opacity >= 0.5 && p.base_opacity <= 1.0);
        }
    }

    #[test]
    fn zero_viewport_degrades_to_empty() {
        let c = cfg();
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::generate(0.0, 0.0, &c, &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn positions_stay_in_bounds_under_stress() {
        let c = cfg();
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::generate(640.0, 480.0, &c, &mut rng);
        // Pointer parked in a corner keeps pushing particles outward.
        for _ in 0..2000 {
            field.step(Some(Vec2::new(0.0, 0.0)), &c);
            for p in field.particles() {
                assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0, "x out of bounds: {}", p.pos.x);
                assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0, "y out of bounds: {}", p.pos.y);
            }
        }
    }

    #[test]
    fn boundary_crossing_reflects_velocity() {
        let c = cfg();
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Vec2::new(639.0, 100.0),
                depth: 0.0,
                vel: Vec2::new(5.0, 0.0),
                size: 3.0,
                color: palette::color_for_index(0),
                shape: ShapeKind::Circle,
                angle: 0.0,
                rotation_speed: 0.0,
                scale: 1.0,
                base_opacity: 1.0,
            }],
            bounds: Vec2::new(640.0, 480.0),
        };
        field.step(None, &c);
        let p = &field.particles()[0];
        assert_eq!(p.pos.x, 640.0); // clamped to the edge
        assert!(p.vel.x < 0.0, "velocity must be reflected, got {}", p.vel.x);
        // damping applied after reflection
        assert!((p.vel.x + 5.0 * c.damping).abs() < 1e-5);
    }

    #[test]
    fn pointer_on_top_of_particle_is_a_no_op() {
        let c = cfg();
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Vec2::new(100.0, 100.0),
                depth: 0.0,
                vel: Vec2::ZERO,
                size: 3.0,
                color: palette::color_for_index(0),
                shape: ShapeKind::Star,
                angle: 0.0,
                rotation_speed: 0.0,
                scale: 1.0,
                base_opacity: 1.0,
            }],
            bounds: Vec2::new(640.0, 480.0),
        };
        field.step(Some(Vec2::new(100.0, 100.0)), &c);
        let p = &field.particles()[0];
        assert!(p.vel.length() == 0.0 && p.pos == Vec2::new(100.0, 100.0));
    }

    #[test]
    fn pointer_within_radius_repels() {
        let c = cfg();
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Vec2::new(200.0, 200.0),
                depth: 0.0,
                vel: Vec2::ZERO,
                size: 3.0,
                color: palette::color_for_index(1),
                shape: ShapeKind::Diamond,
                angle: 0.0,
                rotation_speed: 0.0,
                scale: 1.0,
                base_opacity: 1.0,
            }],
            bounds: Vec2::new(640.0, 480.0),
        };
        // Pointer 50px to the left: particle should be pushed right.
        field.step(Some(Vec2::new(150.0, 200.0)), &c);
        let p = &field.particles()[0];
        assert!(p.vel.x > 0.0);
        assert_eq!(p.vel.y, 0.0);
        let expected = (1.0 - 50.0 / c.pointer_radius) * c.pointer_force * c.damping;
        assert!((p.vel.x - expected).abs() < 1e-5);
    }

    #[test]
    fn velocity_decays_toward_rest() {
        let c = cfg();
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Vec2::new(320.0, 240.0),
                depth: 0.0,
                vel: Vec2::new(0.3, -0.2),
                size: 3.0,
                color: palette::color_for_index(2),
                shape: ShapeKind::Hexagon,
                angle: 0.0,
                rotation_speed: 0.0,
                scale: 1.0,
                base_opacity: 1.0,
            }],
            bounds: Vec2::new(640.0, 480.0),
        };
        for _ in 0..1000 {
            field.step(None, &c);
        }
        assert!(field.particles()[0].vel.length() < 1e-3);
    }

    #[test]
    fn rotation_wraps_modulo_360() {
        let c = cfg();
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Vec2::new(320.0, 240.0),
                depth: 0.0,
                vel: Vec2::ZERO,
                size: 3.0,
                color: palette::color_for_index(3),
                shape: ShapeKind::Triangle,
                angle: 359.5,
                rotation_speed: 1.0,
                scale: 1.0,
                base_opacity: 1.0,
            }],
            bounds: Vec2::new(640.0, 480.0),
        };
        field.step(None, &c);
        let a = field.particles()[0].angle;
        assert!((a - 0.5).abs() < 1e-4, "angle should wrap, got {a}");
    }

    #[test]
    fn opacity_is_depth_faded() {
        let p = Particle {
            pos: Vec2::ZERO,
            depth: -100.0,
            vel: Vec2::ZERO,
            size: 3.0,
            color: palette::color_for_index(0),
            shape: ShapeKind::Circle,
            angle: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            base_opacity: 0.8,
        };
        assert!((p.opacity(0.005) - 0.8 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn seeded_regeneration_is_deterministic_and_replaces() {
        let c = cfg();
        let a = ParticleField::generate(800.0, 600.0, &c, &mut StdRng::seed_from_u64(9));
        let b = ParticleField::generate(800.0, 600.0, &c, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.particles(), b.particles());

        // A regeneration at a new size fully replaces the old set.
        let small = ParticleField::generate(400.0, 300.0, &c, &mut StdRng::seed_from_u64(9));
        assert_eq!(small.len(), particle_count(400.0, 300.0, &c));
        assert_eq!(small.bounds(), Vec2::new(400.0, 300.0));
        for p in small.particles() {
            assert!(p.pos.x <= 400.0 && p.pos.y <= 300.0);
        }
    }
}
