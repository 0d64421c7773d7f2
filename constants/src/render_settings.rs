use bevy::color::{Color, LinearRgba};

pub const DEFAULT_OPACITY: f32 = 0.9;
pub const SELECTED_OPACITY: f32 = 1.0;

/// Emissive tint applied to both visuals of the selected item.
pub const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba::rgb(0.35, 0.25, 0.05);

pub const CARD_RADIUS: f32 = 1.2;
pub const CARD_COLOUR: Color = Color::srgb(0.12, 0.12, 0.14);

pub const COVER_SIZE: f32 = 1.4;
/// Offset of the cover panel in front of the card so the two never z-fight.
pub const COVER_OFFSET: f32 = 0.02;

/// Depth of the pick box around the flat visuals.
pub const PICK_THICKNESS: f32 = 0.05;

pub const CLEAR_COLOUR: Color = Color::srgb(0.02, 0.02, 0.04);
