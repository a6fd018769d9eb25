//! Latest pointer position in viewport pixels (top-left origin), the same
//! space the particle simulation runs in. Last-writer-wins; the field tick
//! only ever needs the most recent value.

use bevy::prelude::*;

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerPosition(pub Option<Vec2>);

pub fn track_pointer(windows: Query<&Window>, mut pointer: ResMut<PointerPosition>) {
    let Ok(window) = windows.single() else { return };
    // None while the cursor is outside the window; keep the last known
    // position so drifting particles do not snap.
    if let Some(pos) = window.cursor_position() {
        pointer.0 = Some(pos);
    }
}
