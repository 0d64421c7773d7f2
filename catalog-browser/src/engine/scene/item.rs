use bevy::prelude::*;
use constants::render_settings::{DEFAULT_OPACITY, SELECTED_OPACITY};

/// Root of one catalog item: owns the card and cover panel as children.
#[derive(Component, Debug, Clone, Copy)]
pub struct CatalogItem {
    /// Position of the record in the dataset.
    pub index: usize,
    /// Height the item bobs around.
    pub baseline_height: f32,
    /// Random offset into the bob cycle, in [0, 2pi).
    pub float_phase: f32,
}

/// Flat disc behind the cover.
#[derive(Component)]
pub struct CardVisual;

/// Quad that receives the cover texture.
#[derive(Component)]
pub struct CoverPanel;

/// Size of the local box a child visual is picked against.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickBounds(pub Vec3);

/// Highlight state of a child visual. Only the selection manager writes this.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub highlighted: bool,
}

impl VisualState {
    pub const fn idle() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            highlighted: false,
        }
    }

    pub const fn selected() -> Self {
        Self {
            opacity: SELECTED_OPACITY,
            highlighted: true,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::idle()
    }
}
