use bevy::prelude::*;

/// Top-level view lifecycle.
/// Loading -> Greeting -> Ready, strictly forward; Ready is terminal.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ViewState {
    /// Preloader dwell before the intro starts.
    #[default]
    Loading,
    /// Multilingual greeting cycle.
    Greeting,
    /// Main portfolio view; no further transitions.
    Ready,
}
