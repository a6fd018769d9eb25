//! Greeting overlay: full-screen dark panel cycling through the configured
//! greeting list, then fading out and signalling the sequencer.

pub mod cycler;

use bevy::prelude::*;

use crate::app::sequencer::GreetingFinished;
use crate::app::state::ViewState;
use crate::core::config::AppConfig;

use self::cycler::GreetingCycler;

const OVERLAY_COLOR: Color = Color::srgb(0.180, 0.169, 0.149);
const TEXT_COLOR: Color = Color::srgb(0.396, 0.404, 0.447);

/// The running cycle. Scoped to the Greeting state; removing it on exit
/// cancels all pending phase timing, so completion can never fire late.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveCycle(pub GreetingCycler);

#[derive(Component)]
pub struct GreetingUiRoot;

#[derive(Component)]
pub struct GreetingText;

pub struct GreetingPlugin;

impl Plugin for GreetingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewState::Greeting), (start_cycle, spawn_greeting_ui))
            .add_systems(
                Update,
                (drive_cycle, refresh_greeting_ui)
                    .chain()
                    .run_if(in_state(ViewState::Greeting)),
            )
            .add_systems(OnExit(ViewState::Greeting), teardown_greeting);
    }
}

fn start_cycle(mut commands: Commands, cfg: Res<AppConfig>) {
    info!(target: "greeting", "cycle started ({} greetings)", cfg.greetings.len());
    commands.insert_resource(ActiveCycle(GreetingCycler::new(
        cfg.greetings.clone(),
        cfg.sequence.cycle_timings(),
    )));
}

fn spawn_greeting_ui(mut commands: Commands) {
    commands
        .spawn((
            GreetingUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            ZIndex(100),
        ))
        .with_children(|p| {
            p.spawn((
                GreetingText,
                Text::new(""),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

fn drive_cycle(
    time: Res<Time>,
    cycle: Option<ResMut<ActiveCycle>>,
    mut finished: EventWriter<GreetingFinished>,
) {
    let Some(mut cycle) = cycle else { return };
    if cycle.tick(time.delta()) {
        info!(target: "greeting", "cycle complete");
        finished.write(GreetingFinished);
    }
}

fn refresh_greeting_ui(
    cycle: Option<Res<ActiveCycle>>,
    mut q_text: Query<(&mut Text, &mut TextColor), With<GreetingText>>,
    mut q_root: Query<&mut BackgroundColor, With<GreetingUiRoot>>,
) {
    let Some(cycle) = cycle else { return };
    if let Ok((mut text, mut color)) = q_text.single_mut() {
        let current = cycle.current().unwrap_or("");
        if text.as_str() != current {
            *text = Text::new(current);
        }
        let alpha = if cycle.is_fading() {
            1.0 - cycle.phase_progress()
        } else {
            1.0
        };
        *color = TextColor(TEXT_COLOR.with_alpha(alpha));
    }
    if let Ok(mut bg) = q_root.single_mut() {
        // The whole overlay fades during the exit phase.
        let alpha = if cycle.is_exiting() || cycle.is_done() {
            1.0 - cycle.phase_progress()
        } else {
            1.0
        };
        *bg = BackgroundColor(OVERLAY_COLOR.with_alpha(alpha));
    }
}

fn teardown_greeting(mut commands: Commands, q_root: Query<Entity, With<GreetingUiRoot>>) {
    commands.remove_resource::<ActiveCycle>();
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
