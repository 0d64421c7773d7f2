/// Spiral layout parameters for placing catalog items.
pub mod layout;

/// Camera rig distances, smoothing and transition timing.
pub mod camera;

/// Card sizes, opacities and highlight colours.
pub mod render_settings;

/// Asset paths relative to the asset root.
pub mod path;
