//! Minimal visual shown while the app sits in the Loading state.

use bevy::prelude::*;

use super::state::ViewState;

#[derive(Component)]
pub struct PreloaderUiRoot;

pub struct PreloaderPlugin;

impl Plugin for PreloaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewState::Loading), spawn_preloader)
            .add_systems(OnExit(ViewState::Loading), despawn_preloader);
    }
}

fn spawn_preloader(mut commands: Commands) {
    commands
        .spawn((
            PreloaderUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.180, 0.169, 0.149)),
            ZIndex(90),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("· · ·"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::srgb(0.396, 0.404, 0.447)),
            ));
        });
}

fn despawn_preloader(mut commands: Commands, q_root: Query<Entity, With<PreloaderUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
