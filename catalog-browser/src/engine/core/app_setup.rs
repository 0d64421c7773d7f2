use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::csv::CsvAssetPlugin;
use constants::render_settings::CLEAR_COLOUR;

// Crate engine modules
use crate::engine::assets::catalog::CatalogRow;
use crate::engine::camera::camera_rig::{CameraRig, CatalogCamera};
use crate::engine::core::app_state::{
    AppState, hide_loading_text, show_load_failure, spawn_loading_text, transition_to_running,
    update_loading_text,
};
use crate::engine::core::config::BrowserConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::pointer::PointerInput;
use crate::engine::loading::catalog_loader::{CatalogLoader, load_catalog_system, start_loading};
use crate::engine::loading::cover_loader::poll_cover_tasks;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::builder::build_scene_when_ready;
use crate::engine::scene::float_phase::FloatPhaseRng;
use crate::engine::scene::registry::ItemRegistry;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::render_loop::RenderLoopPlugin;
// Crate tools modules
use crate::tools::selection::SelectionPlugin;
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app(config: BrowserConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&config))
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers CatalogRow as a loadable asset type from CSV files.
        .add_plugins(CsvAssetPlugin::<CatalogRow>::new(&["csv"]))
        .add_plugins(RenderLoopPlugin)
        .add_plugins(SelectionPlugin)
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(CLEAR_COLOUR));

    // Initialise resources early
    app.insert_resource(FloatPhaseRng::new(config.float_phase_seed))
        .insert_resource(config)
        .init_resource::<LoadingProgress>()
        .init_resource::<CatalogLoader>()
        .init_resource::<ItemRegistry>()
        .init_resource::<PointerInput>()
        .init_resource::<CameraRig>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_loading_text, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_catalog_system,
                build_scene_when_ready,
                update_loading_text,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), hide_loading_text)
        .add_systems(OnEnter(AppState::LoadFailed), show_load_failure)
        // Covers keep arriving after the scene is running.
        .add_systems(Update, poll_cover_tasks)
        .add_systems(Update, fps_notification_system);

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_catalog_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        CameraRig::default().transform(),
        CatalogCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_catalog_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins(config: &BrowserConfig) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: config.log_filter.clone(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
