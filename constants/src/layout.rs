use std::f32::consts::PI;

/// Total sweep of the spiral across the whole catalog (two full turns).
pub const SPIRAL_SWEEP: f32 = 4.0 * PI;

/// Mean distance of the spiral from the vertical axis.
pub const SPIRAL_BASE_RADIUS: f32 = 8.0;

/// Amplitude of the radius ripple; the ripple runs at twice the angular rate.
pub const SPIRAL_RADIUS_RIPPLE: f32 = 2.0;

/// Height of the first item.
pub const SPIRAL_BOTTOM: f32 = -3.0;

/// Vertical span between the first item and the (exclusive) last position.
pub const SPIRAL_HEIGHT: f32 = 6.0;

/// Vertical bob amplitude of an idle item.
pub const BOB_AMPLITUDE: f32 = 0.2;

/// Angular rate of the bob, in radians per second.
pub const BOB_RATE: f32 = 0.5;

/// Spin about the vertical axis, in radians per second.
pub const SPIN_RATE: f32 = 0.3;
