//! Drives the forward-only view sequence.
//!
//! Loading holds for a fixed delay, then hands off to the greeting cycle;
//! the cycle's completion event moves the app to Ready. The loading timer is
//! a state-scoped resource: it is created once at startup (Loading is the
//! initial state and is never re-entered) and removed on state exit, so no
//! orphaned transition can fire.

use bevy::prelude::*;

use crate::core::config::AppConfig;

use super::state::ViewState;

/// Fired by the greeting cycle exactly once when the sequence completes.
/// Receiving it more than once is harmless: the transition is idempotent.
#[derive(Event, Debug, Default)]
pub struct GreetingFinished;

#[derive(Resource, Deref, DerefMut)]
pub struct LoadingTimer(pub Timer);

pub struct SequencerPlugin;

impl Plugin for SequencerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GreetingFinished>()
            .add_systems(Startup, start_loading_timer)
            .add_systems(
                Update,
                advance_past_loading.run_if(in_state(ViewState::Loading)),
            )
            .add_systems(OnExit(ViewState::Loading), drop_loading_timer)
            .add_systems(
                Update,
                finish_greeting.run_if(in_state(ViewState::Greeting)),
            );
    }
}

fn start_loading_timer(mut commands: Commands, cfg: Res<AppConfig>) {
    let secs = cfg.sequence.loading_delay.max(0.0);
    commands.insert_resource(LoadingTimer(Timer::from_seconds(secs, TimerMode::Once)));
}

fn advance_past_loading(
    time: Res<Time>,
    mut timer: Option<ResMut<LoadingTimer>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    let Some(t) = timer.as_mut() else { return };
    t.tick(time.delta());
    if t.finished() {
        info!(target: "sequencer", "loading delay elapsed -> Greeting");
        next_state.set(ViewState::Greeting);
    }
}

fn drop_loading_timer(mut commands: Commands) {
    commands.remove_resource::<LoadingTimer>();
}

fn finish_greeting(
    mut events: EventReader<GreetingFinished>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    // Drain everything; any number of completion signals produce exactly one
    // transition.
    if events.read().next().is_some() {
        events.clear();
        info!(target: "sequencer", "greeting cycle finished -> Ready");
        next_state.set(ViewState::Ready);
    }
}
