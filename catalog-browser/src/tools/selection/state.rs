use bevy::prelude::*;

use crate::engine::scene::item::VisualState;

/// The one currently selected item, if any.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<Entity>,
}

/// What a resolved pick did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Nothing hit and nothing was selected.
    Unchanged,
    /// Nothing hit; the previous selection was dropped.
    Cleared { previous: Entity },
    /// A different item became selected.
    Selected {
        previous: Option<Entity>,
        current: Entity,
    },
    /// The already selected item was hit again.
    Reselected { current: Entity },
}

impl SelectionState {
    /// Resolve a pick result against the current selection.
    pub fn apply(&mut self, hit: Option<Entity>) -> SelectionChange {
        let previous = self.selected;
        self.selected = hit;

        match (previous, hit) {
            (None, None) => SelectionChange::Unchanged,
            (Some(previous), None) => SelectionChange::Cleared { previous },
            (Some(previous), Some(current)) if previous == current => {
                SelectionChange::Reselected { current }
            }
            (previous, Some(current)) => SelectionChange::Selected { previous, current },
        }
    }

    pub fn is_selected(&self, entity: Entity) -> bool {
        self.selected == Some(entity)
    }
}

impl SelectionChange {
    /// Item-level visual writes this change requires, restores first.
    pub fn visual_updates(&self) -> Vec<(Entity, VisualState)> {
        match *self {
            SelectionChange::Unchanged | SelectionChange::Reselected { .. } => Vec::new(),
            SelectionChange::Cleared { previous } => vec![(previous, VisualState::idle())],
            SelectionChange::Selected { previous, current } => previous
                .map(|previous| (previous, VisualState::idle()))
                .into_iter()
                .chain(std::iter::once((current, VisualState::selected())))
                .collect(),
        }
    }

    /// Item the camera should fly to, if any.
    pub fn focus_target(&self) -> Option<Entity> {
        match *self {
            SelectionChange::Selected { current, .. } | SelectionChange::Reselected { current } => {
                Some(current)
            }
            _ => None,
        }
    }
}
