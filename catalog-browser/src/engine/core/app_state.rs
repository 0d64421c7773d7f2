use bevy::prelude::*;

use crate::engine::loading::catalog_loader::LOAD_FAILURE_MESSAGE;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// The dataset could not be loaded. Terminal.
    LoadFailed,
}

impl AppState {
    /// Name reported to the host page.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Loading => "loading",
            AppState::Running => "running",
            AppState::LoadFailed => "failed",
        }
    }
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct LoadingText;

// Final transition to running state
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_built {
        info!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn spawn_loading_text(mut commands: Commands) {
    commands.spawn((
        LoadingText,
        Text::new("Loading catalog..."),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));
}

pub fn update_loading_text(
    loading_progress: Res<LoadingProgress>,
    mut query: Query<&mut Text, With<LoadingText>>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = loading_progress.status_line();
    }
}

pub fn hide_loading_text(mut query: Query<&mut Visibility, With<LoadingText>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_load_failure(mut query: Query<(&mut Text, &mut TextColor), With<LoadingText>>) {
    for (mut text, mut colour) in &mut query {
        text.0 = LOAD_FAILURE_MESSAGE.to_string();
        colour.0 = Color::srgb(1.0, 0.3, 0.3);
    }
}
