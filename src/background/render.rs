//! Gizmo rendering for the backdrop. The simulation lives in viewport pixel
//! space (top-left origin); everything is mapped to world space here. Glow
//! styling is cosmetic; only the numeric state is contractual.

use bevy::math::{Isometry2d, Rot2};
use bevy::prelude::*;

use crate::core::config::AppConfig;

use super::field::{ParticleField, ShapeKind};
use super::grid::BackdropGrid;
use super::palette;

/// Viewport pixels (top-left origin) -> world coordinates (centered, y-up).
#[inline]
pub fn to_world(p: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(p.x - bounds.x * 0.5, bounds.y * 0.5 - p.y)
}

/// Unit outline for the polygonal shape kinds, sized to `r`. Circle and
/// square are drawn with dedicated gizmo primitives instead.
pub fn shape_outline(kind: ShapeKind, r: f32) -> Vec<Vec2> {
    match kind {
        ShapeKind::Circle | ShapeKind::Square => Vec::new(),
        ShapeKind::Triangle => vec![
            Vec2::new(0.0, r),
            Vec2::new(r * 0.866, -r * 0.5),
            Vec2::new(-r * 0.866, -r * 0.5),
        ],
        ShapeKind::Diamond => vec![
            Vec2::new(0.0, r),
            Vec2::new(r, 0.0),
            Vec2::new(0.0, -r),
            Vec2::new(-r, 0.0),
        ],
        ShapeKind::Hexagon => {
            let a = r * 0.866;
            vec![
                Vec2::new(r, 0.0),
                Vec2::new(a, r * 0.5),
                Vec2::new(-a, r * 0.5),
                Vec2::new(-r, 0.0),
                Vec2::new(-a, -r * 0.5),
                Vec2::new(a, -r * 0.5),
            ]
        }
        ShapeKind::Star => {
            let inner = r * 0.4;
            (0..10)
                .map(|i| {
                    let angle = std::f32::consts::PI / 5.0 * i as f32;
                    let radius = if i % 2 == 0 { r } else { inner };
                    Vec2::new(angle.cos() * radius, angle.sin() * radius)
                })
                .collect()
        }
    }
}

pub fn draw_grid(grid: Option<Res<BackdropGrid>>, windows: Query<&Window>, mut gizmos: Gizmos) {
    let Some(grid) = grid else { return };
    let Ok(window) = windows.single() else { return };
    let bounds = Vec2::new(window.width(), window.height());
    for line in &grid.0 {
        gizmos.line_2d(
            to_world(line.from, bounds),
            to_world(line.to, bounds),
            palette::GRID_COLOR,
        );
    }
}

pub fn draw_particles(field: Option<Res<ParticleField>>, cfg: Res<AppConfig>, mut gizmos: Gizmos) {
    let Some(field) = field else { return };
    let bounds = field.bounds();
    for p in field.particles() {
        let alpha = p.color.alpha() * p.opacity(cfg.background.depth_fade);
        let color = p.color.with_alpha(alpha.clamp(0.0, 1.0));
        let center = to_world(p.pos, bounds);
        let r = p.size * p.scale;
        match p.shape {
            ShapeKind::Circle => {
                gizmos.circle_2d(center, r, color);
            }
            ShapeKind::Square => {
                gizmos.rect_2d(
                    Isometry2d::new(center, Rot2::degrees(p.angle)),
                    Vec2::splat(r * 2.0),
                    color,
                );
            }
            kind => {
                let rot = Rot2::degrees(p.angle);
                let mut points: Vec<Vec2> = shape_outline(kind, r)
                    .into_iter()
                    .map(|v| center + rot * v)
                    .collect();
                if let Some(&first) = points.first() {
                    points.push(first); // close the outline
                }
                gizmos.linestrip_2d(points, color);
            }
        }
    }
}
