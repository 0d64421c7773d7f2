use std::time::Duration;

use bevy::prelude::*;
use constants::camera::{
    DEFAULT_CAMERA_DISTANCE, FOCUS_DISTANCE, FOCUS_TRANSITION_DURATION, IDLE_SMOOTHING,
    PARALLAX_SCALE,
};

use crate::engine::input::pointer::PointerInput;

/// Marks the camera driven by the rig.
#[derive(Component)]
pub struct CatalogCamera;

/// Timed flight toward a selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTransition {
    pub start: Vec3,
    pub end: Vec3,
    pub started_at: Duration,
    pub duration: Duration,
    pub look_at: Vec3,
}

impl FocusTransition {
    /// Linear progress in [0, 1] at wall-clock time `now`.
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: Duration) -> Vec3 {
        self.start.lerp(self.end, ease_out_cubic(self.progress(now)))
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Fast start, gentle arrival.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Drift after the pointer, looking at the origin.
    Idle,
    /// Flying to (or holding at) a selected item.
    Transitioning(FocusTransition),
}

/// Single authoritative camera state, advanced once per frame.
///
/// There is exactly one transition slot: arming a new focus replaces the
/// in-flight one and starts from wherever the camera currently is.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
    pub mode: CameraMode,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, DEFAULT_CAMERA_DISTANCE),
            look_at: Vec3::ZERO,
            mode: CameraMode::Idle,
        }
    }
}

impl CameraRig {
    /// Advance one frame.
    pub fn update(&mut self, parallax: Vec2, now: Duration) {
        match self.mode {
            CameraMode::Idle => {
                let target = parallax * PARALLAX_SCALE;
                self.position.x += (target.x - self.position.x) * IDLE_SMOOTHING;
                self.position.y += (target.y - self.position.y) * IDLE_SMOOTHING;
                self.look_at = Vec3::ZERO;
            }
            CameraMode::Transitioning(transition) => {
                self.position = transition.position_at(now);
                self.look_at = transition.look_at;
            }
        }
    }

    /// Arm a flight that frames `target`, replacing any flight in progress.
    pub fn focus_on(&mut self, target: Vec3, now: Duration) {
        self.mode = CameraMode::Transitioning(FocusTransition {
            start: self.position,
            end: focus_point(self.position, target),
            started_at: now,
            duration: FOCUS_TRANSITION_DURATION,
            look_at: target,
        });
    }

    /// Resume idle drift from the current position.
    pub fn release(&mut self) {
        self.mode = CameraMode::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, CameraMode::Idle)
    }

    pub fn transition(&self) -> Option<&FocusTransition> {
        match &self.mode {
            CameraMode::Transitioning(transition) => Some(transition),
            CameraMode::Idle => None,
        }
    }

    pub fn distance(&self) -> f32 {
        self.position.length()
    }

    /// Move along the current view ray so the camera sits `distance` from
    /// the origin. A flight in progress (or holding at its end) is rescaled
    /// the same way, so the next frame keeps the new distance.
    pub fn zoom_to(&mut self, distance: f32) {
        self.position = at_distance(self.position, distance);
        if let CameraMode::Transitioning(transition) = &mut self.mode {
            transition.start = at_distance(transition.start, distance);
            transition.end = at_distance(transition.end, distance);
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

fn at_distance(point: Vec3, distance: f32) -> Vec3 {
    point.try_normalize().unwrap_or(Vec3::Z) * distance
}

/// Point `FOCUS_DISTANCE` in front of `target`, on the side facing the camera.
pub fn focus_point(camera: Vec3, target: Vec3) -> Vec3 {
    let toward_viewer = (camera - target).try_normalize().unwrap_or(Vec3::Z);
    target + toward_viewer * FOCUS_DISTANCE
}

/// Advance the rig on wall-clock time and write it to the camera.
pub fn drive_camera_rig(
    time: Res<Time<Real>>,
    pointer: Res<PointerInput>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<CatalogCamera>>,
) {
    rig.update(pointer.parallax, time.elapsed());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn starts_idle_at_default_distance() {
        let rig = CameraRig::default();
        assert!(rig.is_idle());
        assert_eq!(rig.position, Vec3::new(0.0, 0.0, 15.0));
    }

    #[test]
    fn idle_drift_closes_two_percent_of_the_gap() {
        let mut rig = CameraRig::default();
        rig.update(Vec2::new(1.0, -0.5), ms(16));

        // target = (2, -1)
        assert_relative_eq!(rig.position.x, 0.04);
        assert_relative_eq!(rig.position.y, -0.02);
        assert_relative_eq!(rig.position.z, 15.0);
        assert_eq!(rig.look_at, Vec3::ZERO);
    }

    #[test]
    fn idle_drift_converges_on_parallax_target() {
        let mut rig = CameraRig::default();
        for frame in 0..2000 {
            rig.update(Vec2::new(0.5, 0.25), ms(frame * 16));
        }
        assert_relative_eq!(rig.position.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(rig.position.y, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn transition_reaches_end_after_one_second() {
        let mut rig = CameraRig::default();
        let target = Vec3::new(8.0, -3.0, 0.0);
        rig.focus_on(target, ms(500));
        let end = rig.transition().unwrap().end;

        rig.update(Vec2::ZERO, ms(500));
        assert_eq!(rig.position, Vec3::new(0.0, 0.0, 15.0));

        rig.update(Vec2::ZERO, ms(1000));
        assert!(rig.position.distance(end) > 0.01);
        assert!(!rig.transition().unwrap().is_complete(ms(1499)));

        rig.update(Vec2::ZERO, ms(1500));
        assert_relative_eq!(rig.position.distance(end), 0.0, epsilon = 1e-5);
        assert_eq!(rig.look_at, target);
        assert!(rig.transition().unwrap().is_complete(ms(1500)));

        // Holds the end position afterwards.
        rig.update(Vec2::new(1.0, 1.0), ms(4000));
        assert_relative_eq!(rig.position.distance(end), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn halfway_progress_is_eased() {
        let transition = FocusTransition {
            start: Vec3::ZERO,
            end: Vec3::new(8.0, 0.0, 0.0),
            started_at: ms(0),
            duration: ms(1000),
            look_at: Vec3::ZERO,
        };
        assert_relative_eq!(transition.progress(ms(500)), 0.5);
        // 1 - 0.5^3
        assert_relative_eq!(transition.position_at(ms(500)).x, 7.0);
    }

    #[test]
    fn rearming_replaces_the_flight_from_current_position() {
        let mut rig = CameraRig::default();
        rig.focus_on(Vec3::new(8.0, -3.0, 0.0), ms(0));
        rig.update(Vec2::ZERO, ms(300));
        let mid_flight = rig.position;

        let second = Vec3::new(-8.0, 0.0, 0.0);
        rig.focus_on(second, ms(300));
        let transition = *rig.transition().unwrap();
        assert_eq!(transition.start, mid_flight);
        assert_eq!(transition.started_at, ms(300));
        assert_eq!(transition.look_at, second);

        rig.update(Vec2::ZERO, ms(1300));
        assert_relative_eq!(rig.position.distance(transition.end), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn release_resumes_idle_from_where_it_stopped() {
        let mut rig = CameraRig::default();
        rig.focus_on(Vec3::new(8.0, -3.0, 0.0), ms(0));
        rig.update(Vec2::ZERO, ms(1000));
        let parked = rig.position;

        rig.release();
        assert!(rig.is_idle());
        rig.update(Vec2::ZERO, ms(1016));
        assert_relative_eq!(rig.position.z, parked.z);
        assert_relative_eq!(rig.position.x, parked.x * 0.98, epsilon = 1e-5);
        assert_eq!(rig.look_at, Vec3::ZERO);
    }

    #[test]
    fn focus_point_sits_between_item_and_viewer() {
        let target = Vec3::new(8.0, -3.0, 0.0);
        let camera = Vec3::new(8.0, -3.0, 15.0);
        assert_eq!(focus_point(camera, target), Vec3::new(8.0, -3.0, 5.0));
        assert_eq!(focus_point(target, target), target + Vec3::Z * FOCUS_DISTANCE);
    }

    #[test]
    fn zoom_keeps_direction() {
        let mut rig = CameraRig {
            position: Vec3::new(3.0, 0.0, 4.0),
            ..default()
        };
        rig.zoom_to(10.0);
        assert_relative_eq!(rig.position.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(rig.position.z, 8.0, epsilon = 1e-5);
        assert_relative_eq!(rig.distance(), 10.0, epsilon = 1e-5);
    }

    #[test]
    fn wheel_zoom_sticks_while_holding_on_a_selection() {
        use crate::engine::input::pointer::PointerInput;

        let mut rig = CameraRig::default();
        rig.focus_on(Vec3::new(8.0, -3.0, 0.0), ms(0));
        rig.update(Vec2::ZERO, ms(2000));
        let before = rig.distance();

        let mut pointer = PointerInput::default();
        for _ in 0..5 {
            let distance = pointer.zoom(rig.distance(), -1.0);
            rig.zoom_to(distance);
        }
        let zoomed = rig.distance();
        assert!(zoomed > before * 1.5);

        rig.update(Vec2::ZERO, ms(2016));
        assert_relative_eq!(rig.distance(), zoomed, epsilon = 1e-4);
        assert_relative_eq!(rig.distance(), pointer.zoom_distance, epsilon = 1e-4);
        assert_eq!(rig.look_at, Vec3::new(8.0, -3.0, 0.0));
    }

    #[test]
    fn wheel_zoom_mid_flight_lands_at_new_distance() {
        let mut rig = CameraRig::default();
        rig.focus_on(Vec3::new(8.0, -3.0, 0.0), ms(0));
        rig.update(Vec2::ZERO, ms(300));
        let end_direction = rig.transition().unwrap().end.normalize();

        rig.zoom_to(20.0);
        rig.update(Vec2::ZERO, ms(1000));

        assert_relative_eq!(rig.distance(), 20.0, epsilon = 1e-4);
        let landed = rig.position.normalize();
        assert_relative_eq!(landed.x, end_direction.x, epsilon = 1e-5);
        assert_relative_eq!(landed.y, end_direction.y, epsilon = 1e-5);
        assert_relative_eq!(landed.z, end_direction.z, epsilon = 1e-5);
    }
}
