//! Background grid geometry: fixed-size cells covering the viewport.
//! Regenerated together with the particle field on every resize.

use bevy::prelude::*;

/// A single grid line in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Derived grid line set for the current viewport.
#[derive(Resource, Debug, Default, Clone)]
pub struct BackdropGrid(pub Vec<GridLine>);

/// Horizontal line every `cell` pixels for `ceil(h/cell)+1` rows, vertical
/// every `cell` pixels for `ceil(w/cell)+1` columns, each spanning the full
/// opposite dimension. Degenerate inputs yield no lines.
pub fn grid_lines(width: f32, height: f32, cell: f32) -> Vec<GridLine> {
    if width <= 0.0 || height <= 0.0 || cell <= 0.0 {
        return Vec::new();
    }
    let rows = (height / cell).ceil() as usize;
    let cols = (width / cell).ceil() as usize;
    let mut lines = Vec::with_capacity(rows + cols + 2);
    for i in 0..=rows {
        let y = i as f32 * cell;
        lines.push(GridLine {
            from: Vec2::new(0.0, y),
            to: Vec2::new(width, y),
        });
    }
    for i in 0..=cols {
        let x = i as f32 * cell;
        lines.push(GridLine {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, height),
        });
    }
    lines
}
