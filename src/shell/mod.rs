//! The portfolio view itself: hero, numbered sections, contact, footer.
//! Pure rendering of the loaded content; built once on entering Ready and
//! revealed through a single one-shot fade.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::ui::ScrollPosition;

use crate::app::state::ViewState;
use crate::core::config::AppConfig;
use crate::core::content::Portfolio;

const PAGE_BG: Color = Color::srgb(0.066, 0.055, 0.082);
const HEADING: Color = Color::srgb(0.95, 0.95, 0.96);
const BODY: Color = Color::srgb(0.72, 0.73, 0.76);
const MUTED: Color = Color::srgb(0.55, 0.56, 0.60);
const ACCENT: Color = Color::srgb(0.396, 0.404, 0.447);
const SECTION_NUMBER: Color = Color::srgb(0.310, 0.675, 0.996);
const CARD_BG: Color = Color::srgba(0.129, 0.090, 0.125, 0.9);

/// Pixels per wheel line; winit reports most mice in lines.
const LINE_SCROLL_PX: f32 = 24.0;

#[derive(Component)]
pub struct PortfolioUiRoot;

/// Fixed header over the scrolling page: name plus section labels.
#[derive(Component)]
pub struct NavBar;

/// Full-screen cover that fades out exactly once after entering Ready.
#[derive(Component)]
pub struct RevealFade(pub Timer);

pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewState::Ready), (spawn_portfolio, spawn_reveal))
            .add_systems(
                Update,
                (scroll_portfolio, fade_reveal).run_if(in_state(ViewState::Ready)),
            );
    }
}

fn spawn_reveal(mut commands: Commands, cfg: Res<AppConfig>) {
    let secs = cfg.sequence.reveal_duration.max(0.0);
    commands.spawn((
        RevealFade(Timer::from_seconds(secs, TimerMode::Once)),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(PAGE_BG),
        ZIndex(50),
    ));
}

fn fade_reveal(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut RevealFade, &mut BackgroundColor)>,
) {
    for (e, mut fade, mut bg) in q.iter_mut() {
        fade.0.tick(time.delta());
        *bg = BackgroundColor(PAGE_BG.with_alpha(1.0 - fade.0.fraction()));
        if fade.0.finished() {
            commands.entity(e).despawn();
        }
    }
}

/// Mouse wheel -> page scroll. UI nodes do not react to the wheel on their
/// own; this feeds the root's `ScrollPosition`, which layout clamps to the
/// content height.
fn scroll_portfolio(
    mut wheel: EventReader<MouseWheel>,
    mut q_root: Query<&mut ScrollPosition, With<PortfolioUiRoot>>,
) {
    let delta: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_SCROLL_PX,
            MouseScrollUnit::Pixel => ev.y,
        })
        .sum();
    if delta == 0.0 {
        return;
    }
    for mut scroll in &mut q_root {
        // Wheel up (positive y) moves back toward the top of the page.
        scroll.offset_y = (scroll.offset_y - delta).max(0.0);
    }
}

fn body_text(value: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn section_heading(number: &str, title: &str) -> impl Bundle {
    (
        Text::new(format!("{number}  {title}")),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(HEADING),
        Node {
            margin: UiRect::top(Val::Px(32.0)).with_bottom(Val::Px(12.0)),
            ..default()
        },
    )
}

fn spawn_portfolio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    portfolio: Res<Portfolio>,
) {
    let p = portfolio.clone();
    let photo: Handle<Image> = asset_server.load(p.personal.profile_photo.clone());

    commands
        .spawn((
            PortfolioUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                // Extra top padding keeps the hero clear of the nav bar.
                padding: UiRect::all(Val::Px(48.0)).with_top(Val::Px(72.0)),
                row_gap: Val::Px(8.0),
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
            // Backdrop gizmos draw behind the UI; keep the page translucent.
            BackgroundColor(PAGE_BG.with_alpha(0.55)),
        ))
        .with_children(|root| {
            // Hero: photo + name + summary + contact links.
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(32.0),
                align_items: AlignItems::Center,
                margin: UiRect::bottom(Val::Px(24.0)),
                ..default()
            })
            .with_children(|hero| {
                // Failed image loads leave the bordered placeholder visible.
                hero.spawn((
                    Node {
                        width: Val::Px(180.0),
                        height: Val::Px(220.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor(ACCENT),
                    BackgroundColor(CARD_BG),
                ))
                .with_children(|frame| {
                    frame.spawn((
                        ImageNode::new(photo.clone()),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });

                hero.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(10.0),
                    max_width: Val::Px(760.0),
                    ..default()
                })
                .with_children(|col| {
                    col.spawn(body_text(p.personal.name.clone(), 52.0, HEADING));
                    col.spawn(body_text(p.personal.summary.clone(), 16.0, BODY));
                    col.spawn(body_text(
                        format!(
                            "{}   |   {}   |   {}",
                            p.personal.email, p.personal.github, p.personal.linkedin
                        ),
                        14.0,
                        ACCENT,
                    ));
                });
            });

            // 01. Experience
            root.spawn(section_heading("01.", "Experience"));
            for exp in &p.experiences {
                root.spawn(body_text(
                    format!("{} @ {}", exp.role, exp.company),
                    20.0,
                    HEADING,
                ));
                root.spawn(body_text(exp.duration.clone(), 14.0, ACCENT));
                for duty in &exp.duties {
                    root.spawn(body_text(format!("•  {duty}"), 15.0, BODY));
                }
            }

            // 02. Projects
            root.spawn(section_heading("02.", "Projects"));
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(16.0),
                flex_wrap: FlexWrap::Wrap,
                row_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|grid| {
                for project in &p.projects {
                    grid.spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            width: Val::Px(340.0),
                            padding: UiRect::all(Val::Px(16.0)),
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        BackgroundColor(CARD_BG),
                    ))
                    .with_children(|card| {
                        card.spawn(body_text(project.title.clone(), 18.0, HEADING));
                        card.spawn(body_text(project.description.clone(), 14.0, BODY));
                        card.spawn(body_text(project.tech.join("  ·  "), 12.0, SECTION_NUMBER));
                    });
                }
            });

            // 03. Skills
            root.spawn(section_heading("03.", "Skills"));
            for group in &p.skills {
                root.spawn(body_text(group.category.clone(), 16.0, ACCENT));
                root.spawn(body_text(group.skills.join("  ·  "), 14.0, BODY));
            }

            // 04. Education & certifications
            root.spawn(section_heading("04.", "Education"));
            root.spawn(body_text(p.education.degree.clone(), 16.0, HEADING));
            root.spawn(body_text(
                format!("{} — {}", p.education.institution, p.education.location),
                14.0,
                BODY,
            ));
            for cert in &p.certifications {
                root.spawn(body_text(
                    format!("{} — {}", cert.name, cert.issuer),
                    14.0,
                    MUTED,
                ));
            }

            // Contact: no form, the action is a mailto link rendered as text.
            root.spawn(section_heading("05.", "Get In Touch"));
            root.spawn(body_text(
                "I'm currently open to new opportunities and my inbox is always open.",
                15.0,
                BODY,
            ));
            root.spawn(body_text(format!("mailto:{}", p.personal.email), 15.0, ACCENT));

            root.spawn((
                Text::new(format!("Designed & Built by {}", p.personal.name)),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(MUTED),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });

    // Fixed nav bar over the scrolling page: name on the left, the section
    // labels on the right.
    commands
        .spawn((
            NavBar,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(48.0), Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(PAGE_BG.with_alpha(0.85)),
            ZIndex(60),
        ))
        .with_children(|nav| {
            nav.spawn(body_text(p.personal.name.clone(), 18.0, HEADING));
            nav.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|links| {
                for label in ["Experience", "Projects", "Skills", "Education", "Contact"] {
                    links.spawn(body_text(label, 14.0, ACCENT));
                }
            });
        });

    info!(
        target: "shell",
        "portfolio view built: {} experiences, {} projects, {} skill groups",
        p.experiences.len(),
        p.projects.len(),
        p.skills.len()
    );
}
