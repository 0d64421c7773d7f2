//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime settings
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the dataset loader, scene building, picking
/// and the per-frame render loop.
pub mod app_setup;

/// Application state machine and the loading text.
///
/// Moves from `Loading` to `Running` once the scene is built, or to
/// `LoadFailed` when the dataset is unusable.
pub mod app_state;

/// Runtime settings resource and its command-line front end.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
