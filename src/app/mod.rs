pub mod preloader;
pub mod sequencer;
pub mod state;

use bevy::prelude::*;

use crate::background::BackgroundPlugin;
use crate::core::config::AppConfig;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::greeting::GreetingPlugin;
use crate::session::SessionPlugin;
use crate::shell::ShellPlugin;

use self::preloader::PreloaderPlugin;
use self::sequencer::SequencerPlugin;
use self::state::ViewState;

/// Top-level aggregator: state machine, intro sequence, backdrop, shell.
pub struct FolioPlugin;

impl Plugin for FolioPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewState>()
            .add_systems(Startup, (setup_camera, report_config_warnings))
            .add_plugins((
                PreloaderPlugin,
                SequencerPlugin,
                GreetingPlugin,
                BackgroundPlugin,
                ShellPlugin,
                SessionPlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn report_config_warnings(cfg: Res<AppConfig>) {
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
}
