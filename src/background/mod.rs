//! Decorative animated backdrop: drifting neon shapes over a faint grid,
//! gently repelled by the pointer. Mounted only in the Ready state.

pub mod field;
pub mod grid;
pub mod palette;
pub mod pointer;
pub mod render;

use bevy::prelude::*;
use bevy::window::WindowResized;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::state::ViewState;
use crate::core::config::AppConfig;

use self::field::ParticleField;
use self::grid::{grid_lines, BackdropGrid};
use self::pointer::{track_pointer, PointerPosition};

/// Injectable random source: seeded from config for deterministic fields,
/// from entropy otherwise.
#[derive(Resource)]
pub struct FieldRng(pub StdRng);

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerPosition>()
            .add_systems(OnEnter(ViewState::Ready), setup_field)
            .add_systems(
                Update,
                (track_pointer, regenerate_on_resize, tick_field)
                    .chain()
                    .run_if(in_state(ViewState::Ready)),
            )
            .add_systems(
                Update,
                (render::draw_grid, render::draw_particles)
                    .run_if(in_state(ViewState::Ready)),
            );
    }
}

fn viewport_size(windows: &Query<&Window>) -> (f32, f32) {
    windows
        .single()
        .map(|w| (w.width(), w.height()))
        .unwrap_or((0.0, 0.0))
}

fn setup_field(mut commands: Commands, cfg: Res<AppConfig>, windows: Query<&Window>) {
    let (w, h) = viewport_size(&windows);
    let mut rng = match cfg.background.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let field = ParticleField::generate(w, h, &cfg.background, &mut rng);
    let grid = BackdropGrid(grid_lines(w, h, cfg.background.grid_cell));
    info!(
        target: "background",
        "field initialized: {} particles, {} grid lines for {w}x{h}",
        field.len(),
        grid.0.len()
    );
    commands.insert_resource(FieldRng(rng));
    commands.insert_resource(field);
    commands.insert_resource(grid);
}

/// Resize fully replaces the particle set and grid; nothing is resized in place.
fn regenerate_on_resize(
    mut resize_events: EventReader<WindowResized>,
    cfg: Res<AppConfig>,
    rng: Option<ResMut<FieldRng>>,
    field: Option<ResMut<ParticleField>>,
    grid: Option<ResMut<BackdropGrid>>,
) {
    let Some(last) = resize_events.read().last() else { return };
    let (Some(mut rng), Some(mut field), Some(mut grid)) = (rng, field, grid) else {
        return;
    };
    *field = ParticleField::generate(last.width, last.height, &cfg.background, &mut rng.0);
    grid.0 = grid_lines(last.width, last.height, cfg.background.grid_cell);
    info!(
        target: "background",
        "field regenerated: {} particles for {}x{}",
        field.len(),
        last.width,
        last.height
    );
}

fn tick_field(
    cfg: Res<AppConfig>,
    pointer: Res<PointerPosition>,
    field: Option<ResMut<ParticleField>>,
) {
    let Some(mut field) = field else { return };
    field.step(pointer.0, &cfg.background);
}
