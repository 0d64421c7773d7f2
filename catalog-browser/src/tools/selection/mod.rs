//! Picking and single selection of catalog items.
//!
//! A click becomes a `PickRequest`, which is resolved here against the
//! pick boxes of every card and cover. The resulting `SelectionChange`
//! drives all of its consumers at once, so they never disagree:
//!
//! ```text
//! PickRequest (pointer / host page)
//!   └─> handle_pick_requests()
//!       ├─> SelectionState        one entity or none
//!       ├─> VisualState           per child, synced into materials
//!       ├─> OverlayContent        info panel text
//!       └─> CameraRig             focus flight or release to idle
//! ```
//!
//! ## Raycasting
//!
//! Children carry a `PickBounds` box. The camera ray is moved into each
//! box's local space and tested with the slab method; the nearest hit wins
//! and is mapped to its parent item through `ChildOf`.

/// Slab-method ray tests and NDC ray construction.
pub mod ray;

/// Selection resource and the change it reports for each pick.
pub mod state;

/// Info panel content, UI nodes and the system that mirrors one into the other.
pub mod overlay;

/// Pick resolution and material highlighting systems.
pub mod picking;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::systems::render_loop::FrameSet;

pub use overlay::OverlayContent;
pub use state::SelectionState;

/// Something asked for the selection to be re-resolved.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PickRequest {
    /// Cast a ray through this NDC point (y up).
    Pointer(Vec2),
    /// Select the item at this dataset index.
    Item(usize),
    /// Behave like a click on empty space.
    Clear,
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<OverlayContent>()
            .add_event::<PickRequest>()
            .add_systems(Startup, overlay::spawn_info_panel)
            .add_systems(
                Update,
                (
                    picking::handle_pick_requests,
                    picking::sync_visual_materials,
                    overlay::reflect_overlay,
                )
                    .chain()
                    .in_set(FrameSet::Selection)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

