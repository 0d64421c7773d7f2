use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::camera::{
    DEFAULT_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};

use crate::engine::camera::camera_rig::CameraRig;
use crate::tools::selection::PickRequest;

/// Latest pointer-derived values. Last write wins.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Pointer relative to the viewport centre, roughly [-1, 1], y up.
    pub parallax: Vec2,
    /// Pointer in normalised device coordinates, y up.
    pub pick_ndc: Vec2,
    /// Camera distance after the most recent wheel step.
    pub zoom_distance: f32,
    /// Logical size of the drawing surface.
    pub viewport: Vec2,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self {
            parallax: Vec2::ZERO,
            pick_ndc: Vec2::ZERO,
            zoom_distance: DEFAULT_CAMERA_DISTANCE,
            viewport: Vec2::ZERO,
        }
    }
}

impl PointerInput {
    /// Update from a pointer position in logical window pixels (y down).
    pub fn on_pointer_moved(&mut self, position: Vec2) {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return;
        }

        let half = self.viewport * 0.5;
        self.parallax = Vec2::new(
            (position.x - half.x) / half.x,
            -(position.y - half.y) / half.y,
        );
        self.pick_ndc = Vec2::new(
            position.x / self.viewport.x * 2.0 - 1.0,
            -(position.y / self.viewport.y * 2.0 - 1.0),
        );
    }

    pub fn on_resize(&mut self, size: Vec2) {
        self.viewport = size;
    }

    /// Apply one wheel step to `current_distance` and remember the result.
    pub fn zoom(&mut self, current_distance: f32, scroll_y: f32) -> f32 {
        self.zoom_distance = zoom_step(current_distance, scroll_y);
        self.zoom_distance
    }
}

/// Scrolling down moves away from the scene, scrolling up moves closer.
pub fn zoom_step(current_distance: f32, scroll_y: f32) -> f32 {
    let factor = if scroll_y < 0.0 {
        ZOOM_OUT_FACTOR
    } else if scroll_y > 0.0 {
        ZOOM_IN_FACTOR
    } else {
        1.0
    };
    (current_distance * factor).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE)
}

/// Seed the viewport size from the primary window.
pub fn init_viewport(
    mut pointer: ResMut<PointerInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if let Ok(window) = windows.single() {
        pointer.on_resize(window.size());
    }
}

/// Fold pointer, wheel and resize events into `PointerInput`; wheel steps
/// are applied to the camera rig immediately.
pub fn track_pointer(
    mut pointer: ResMut<PointerInput>,
    mut rig: ResMut<CameraRig>,
    mut resized: EventReader<WindowResized>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    for event in resized.read() {
        pointer.on_resize(Vec2::new(event.width, event.height));
    }

    for cursor in cursor_moved.read() {
        pointer.on_pointer_moved(cursor.position);
    }

    for scroll in scroll_events.read() {
        let distance = pointer.zoom(rig.distance(), scroll.y);
        rig.zoom_to(distance);
    }
}

/// Turn a primary click into a pick request at the pointer position.
pub fn emit_pick_requests(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerInput>,
    mut pick_requests: EventWriter<PickRequest>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if let Ok(window) = windows.single() {
        if let Some(cursor_pos) = window.cursor_position() {
            pointer.on_pointer_moved(cursor_pos);
        }
    }

    pick_requests.write(PickRequest::Pointer(pointer.pick_ndc));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pointer(width: f32, height: f32) -> PointerInput {
        let mut pointer = PointerInput::default();
        pointer.on_resize(Vec2::new(width, height));
        pointer
    }

    #[test]
    fn centre_of_viewport_is_origin() {
        let mut input = pointer(800.0, 600.0);
        input.on_pointer_moved(Vec2::new(400.0, 300.0));
        assert_eq!(input.parallax, Vec2::ZERO);
        assert_eq!(input.pick_ndc, Vec2::ZERO);
    }

    #[test]
    fn top_left_corner_maps_to_upper_left_ndc() {
        let mut input = pointer(800.0, 600.0);
        input.on_pointer_moved(Vec2::new(0.0, 0.0));
        assert_eq!(input.pick_ndc, Vec2::new(-1.0, 1.0));
        assert_eq!(input.parallax, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_corner_maps_to_lower_right_ndc() {
        let mut input = pointer(1024.0, 768.0);
        input.on_pointer_moved(Vec2::new(1024.0, 768.0));
        assert_eq!(input.pick_ndc, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn pointer_before_first_resize_is_ignored() {
        let mut input = PointerInput::default();
        input.on_pointer_moved(Vec2::new(10.0, 10.0));
        assert_eq!(input, PointerInput::default());
    }

    #[test]
    fn latest_position_wins() {
        let mut input = pointer(200.0, 200.0);
        input.on_pointer_moved(Vec2::new(0.0, 0.0));
        input.on_pointer_moved(Vec2::new(150.0, 50.0));
        assert_eq!(input.pick_ndc, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn five_steps_out_from_default_distance() {
        let mut input = PointerInput::default();
        let mut distance = DEFAULT_CAMERA_DISTANCE;
        for _ in 0..5 {
            distance = input.zoom(distance, -1.0);
        }
        assert_relative_eq!(distance, 15.0 * 1.1f32.powi(5), epsilon = 1e-3);
        assert_relative_eq!(distance, 24.157, epsilon = 1e-2);

        for _ in 0..5 {
            distance = input.zoom(distance, -1.0);
        }
        assert_eq!(distance, MAX_CAMERA_DISTANCE);
        assert_eq!(input.zoom_distance, MAX_CAMERA_DISTANCE);
    }

    #[test]
    fn zooming_in_stops_at_minimum() {
        let mut distance = DEFAULT_CAMERA_DISTANCE;
        for _ in 0..20 {
            distance = zoom_step(distance, 1.0);
        }
        assert_eq!(distance, MIN_CAMERA_DISTANCE);
    }

    #[test]
    fn zero_scroll_keeps_distance() {
        assert_eq!(zoom_step(12.0, 0.0), 12.0);
    }
}
