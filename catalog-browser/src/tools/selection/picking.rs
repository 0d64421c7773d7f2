use bevy::prelude::*;
use constants::render_settings::HIGHLIGHT_EMISSIVE;

use super::PickRequest;
use super::overlay::OverlayContent;
use super::ray::{nearest_hit, ray_from_ndc};
use super::state::{SelectionChange, SelectionState};
use crate::engine::camera::camera_rig::{CameraRig, CatalogCamera};
use crate::engine::scene::item::{CatalogItem, PickBounds, VisualState};
use crate::engine::scene::registry::ItemRegistry;

/// Resolve queued pick requests into selection changes.
///
/// Hits on a card or cover resolve to the owning item. Visual states,
/// the info panel and the camera rig are all updated from the same change.
pub fn handle_pick_requests(
    mut requests: EventReader<PickRequest>,
    time: Res<Time<Real>>,
    registry: Res<ItemRegistry>,
    cameras: Query<(&Camera, &GlobalTransform), With<CatalogCamera>>,
    pickables: Query<(&ChildOf, &GlobalTransform, &PickBounds)>,
    items: Query<(&GlobalTransform, &Children), With<CatalogItem>>,
    mut visuals: Query<&mut VisualState>,
    mut selection: ResMut<SelectionState>,
    mut overlay: ResMut<OverlayContent>,
    mut rig: ResMut<CameraRig>,
) {
    for request in requests.read() {
        let hit = match *request {
            PickRequest::Pointer(ndc) => cameras.single().ok().and_then(|(camera, transform)| {
                let ray = ray_from_ndc(camera, transform, ndc)?;
                let boxes = pickables
                    .iter()
                    .map(|(child_of, transform, bounds)| (child_of.parent(), *transform, bounds.0));
                nearest_hit(ray.origin, ray.direction.as_vec3(), boxes).map(|(owner, _)| owner)
            }),
            PickRequest::Item(index) => registry.by_index(index).map(|item| item.entity),
            PickRequest::Clear => None,
        };
        // Anything without a record is not selectable.
        let hit = hit.filter(|entity| registry.get(*entity).is_some());

        let change = selection.apply(hit);
        for (item, state) in change.visual_updates() {
            let Ok((_, children)) = items.get(item) else {
                continue;
            };
            let children: &[Entity] = children;
            for &child in children {
                if let Ok(mut visual) = visuals.get_mut(child) {
                    *visual = state;
                }
            }
        }

        match change {
            SelectionChange::Unchanged => {}
            SelectionChange::Cleared { .. } => {
                overlay.hide();
                rig.release();
                info!("Selection cleared");
            }
            SelectionChange::Selected { current, .. } => {
                if let Some(item) = registry.get(current) {
                    overlay.show(item.index, &item.record);
                    info!("Selected {}", item.record.display_name());
                }
            }
            SelectionChange::Reselected { .. } => {}
        }

        if let Some(target) = change.focus_target() {
            if let Ok((transform, _)) = items.get(target) {
                rig.focus_on(transform.translation(), time.elapsed());
            }
        }
    }
}

/// Push each visual's opacity and highlight into its material.
pub fn sync_visual_materials(
    changed: Query<(&VisualState, &MeshMaterial3d<StandardMaterial>), Changed<VisualState>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (state, material) in &changed {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        material.base_color.set_alpha(state.opacity);
        material.emissive = if state.highlighted {
            HIGHLIGHT_EMISSIVE
        } else {
            LinearRgba::BLACK
        };
    }
}
