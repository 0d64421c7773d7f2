use std::time::Duration;

/// Distance of the camera from the origin at startup, looking down -Z.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0;

pub const MIN_CAMERA_DISTANCE: f32 = 5.0;
pub const MAX_CAMERA_DISTANCE: f32 = 30.0;

/// Distance multiplier for one wheel step away from the scene.
pub const ZOOM_OUT_FACTOR: f32 = 1.1;
/// Distance multiplier for one wheel step toward the scene.
pub const ZOOM_IN_FACTOR: f32 = 0.9;

/// Per-frame fraction of the remaining gap closed while drifting.
pub const IDLE_SMOOTHING: f32 = 0.02;

/// Parallax offset is scaled by this before it becomes the drift target.
pub const PARALLAX_SCALE: f32 = 2.0;

pub const FOCUS_TRANSITION_DURATION: Duration = Duration::from_millis(1000);

/// How far in front of a selected item the camera settles.
pub const FOCUS_DISTANCE: f32 = 5.0;
