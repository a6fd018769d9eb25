//! Session lifetime control. A configured timeout ends the run cleanly,
//! which is what scripted and CI invocations rely on.

use bevy::prelude::*;

use crate::core::config::AppConfig;

/// Countdown to the end of the session. Only present when
/// `window.autoClose` is positive; an unbounded session has no resource.
#[derive(Resource)]
pub struct SessionTimeout {
    timer: Timer,
}

impl SessionTimeout {
    pub fn new(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    pub fn remaining_secs(&self) -> f32 {
        self.timer.remaining_secs()
    }
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_timeout).add_systems(
            Update,
            expire_session.run_if(resource_exists::<SessionTimeout>),
        );
    }
}

fn arm_timeout(mut commands: Commands, cfg: Res<AppConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "timed session: exiting after {secs:.1}s");
        commands.insert_resource(SessionTimeout::new(secs));
    }
}

fn expire_session(
    time: Res<Time>,
    mut timeout: ResMut<SessionTimeout>,
    mut exit: EventWriter<AppExit>,
) {
    // just_finished keeps this to a single exit request.
    if timeout.timer.tick(time.delta()).just_finished() {
        info!(target: "session", "session timeout reached");
        exit.write(AppExit::Success);
    }
}
