use bevy::prelude::*;
use constants::layout::{BOB_AMPLITUDE, BOB_RATE, SPIN_RATE};

use crate::engine::camera::camera_rig::drive_camera_rig;
use crate::engine::core::app_state::AppState;
use crate::engine::input::pointer::{emit_pick_requests, init_viewport, track_pointer};
use crate::engine::scene::item::CatalogItem;

/// Per-frame ordering while the scene is running.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Selection,
    Camera,
    Animation,
}

/// Schedules input, camera and item animation in a fixed order. Bevy's
/// render schedule draws the frame afterwards.
pub struct RenderLoopPlugin;

impl Plugin for RenderLoopPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Selection,
                FrameSet::Camera,
                FrameSet::Animation,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(OnEnter(AppState::Running), init_viewport)
        .add_systems(
            Update,
            (
                (track_pointer, emit_pick_requests)
                    .chain()
                    .in_set(FrameSet::Input),
                drive_camera_rig.in_set(FrameSet::Camera),
                animate_catalog_items.in_set(FrameSet::Animation),
            ),
        );
    }
}

/// Height of an item at `elapsed_secs`.
pub fn bob_height(baseline: f32, phase: f32, elapsed_secs: f32) -> f32 {
    baseline + (elapsed_secs * BOB_RATE + phase).sin() * BOB_AMPLITUDE
}

/// Bob every item around its baseline and spin it about the vertical axis.
pub fn animate_catalog_items(
    time: Res<Time>,
    mut items: Query<(&CatalogItem, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    let spin = SPIN_RATE * time.delta_secs();

    for (item, mut transform) in &mut items {
        transform.translation.y = bob_height(item.baseline_height, item.float_phase, elapsed);
        transform.rotate_y(spin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use std::f32::consts::FRAC_PI_2;
    use std::time::Duration;

    #[test]
    fn bob_stays_within_amplitude() {
        for step in 0..200 {
            let y = bob_height(1.0, 0.7, step as f32 * 0.1);
            assert!((0.8..=1.2).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn phase_offsets_the_cycle() {
        assert_relative_eq!(bob_height(0.0, FRAC_PI_2, 0.0), 0.2);
        assert_relative_eq!(bob_height(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn items_bob_and_spin_with_time() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(1));
        world.insert_resource(time);

        let entity = world
            .spawn((
                CatalogItem {
                    index: 0,
                    baseline_height: -3.0,
                    float_phase: 0.0,
                },
                Transform::from_xyz(8.0, -3.0, 0.0),
            ))
            .id();

        world.run_system_once(animate_catalog_items).unwrap();

        let transform = world.get::<Transform>(entity).unwrap();
        assert_relative_eq!(transform.translation.y, -3.0 + 0.5f32.sin() * 0.2);
        assert_relative_eq!(transform.translation.x, 8.0);
        let (axis, angle) = transform.rotation.to_axis_angle();
        assert_relative_eq!(angle, SPIN_RATE, epsilon = 1e-5);
        assert_relative_eq!(axis.y, 1.0, epsilon = 1e-5);
    }
}
