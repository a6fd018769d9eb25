//! Periodic stats log + corner overlay. Compiled behind the `debug` feature.

use bevy::prelude::*;

use crate::app::state::ViewState;
use crate::background::field::ParticleField;

#[derive(Resource)]
pub struct DebugState {
    time_accum: f32,
    log_interval: f32,
    fps_smoothed: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 2.0,
            fps_smoothed: 0.0,
        }
    }
}

#[derive(Component)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (debug_logging_system, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.9, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(8.0),
            bottom: Val::Px(8.0),
            ..default()
        },
        ZIndex(200),
    ));
}

fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    view: Res<State<ViewState>>,
    field: Option<Res<ParticleField>>,
) {
    let dt = time.delta_secs();
    if dt > 0.0 {
        // Exponential smoothing keeps the readout stable.
        state.fps_smoothed = state.fps_smoothed * 0.95 + (1.0 / dt) * 0.05;
    }
    state.time_accum += dt;
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            target: "stats",
            "SIM t={:.1}s fps={:.1} view={:?} particles={}",
            time.elapsed_secs(),
            state.fps_smoothed,
            view.get(),
            field.map(|f| f.len()).unwrap_or(0)
        );
    }
}

fn update_overlay(
    state: Res<DebugState>,
    view: Res<State<ViewState>>,
    field: Option<Res<ParticleField>>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else { return };
    let s = format!(
        "{:?} | {:.0} fps | {} particles",
        view.get(),
        state.fps_smoothed,
        field.map(|f| f.len()).unwrap_or(0)
    );
    if text.as_str() != s {
        *text = Text::new(s);
    }
}
