use bevy::prelude::*;

/// World-space ray from the camera through a point given in NDC (y up).
pub fn ray_from_ndc(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    ndc: Vec2,
) -> Option<Ray3d> {
    // Bevy uses reverse-z: the near plane is at depth 1.
    let near = camera.ndc_to_world(camera_transform, ndc.extend(1.0))?;
    let far = camera.ndc_to_world(camera_transform, ndc.extend(f32::EPSILON))?;
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, direction))
}

/// Hit distance of a ray against a box of `size` centred on `transform`.
pub fn ray_hits_obb(
    origin: Vec3,
    direction: Vec3,
    transform: &GlobalTransform,
    size: Vec3,
) -> Option<f32> {
    let to_local = transform.compute_matrix().inverse();
    let local_origin = to_local.transform_point3(origin);
    let local_direction = to_local.transform_vector3(direction);
    let half_extents = size * 0.5;
    ray_aabb_hit_t(local_origin, local_direction, -half_extents, half_extents)
}

/// Slab test. Returns the entry distance, or the exit distance when the
/// origin is inside the box.
pub fn ray_aabb_hit_t(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        if d.abs() < f32::EPSILON {
            // Parallel to this slab: miss unless already between its planes.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// Closest owner hit by the ray among `(owner, transform, size)` boxes.
pub fn nearest_hit(
    origin: Vec3,
    direction: Vec3,
    boxes: impl IntoIterator<Item = (Entity, GlobalTransform, Vec3)>,
) -> Option<(Entity, f32)> {
    boxes
        .into_iter()
        .filter_map(|(owner, transform, size)| {
            ray_hits_obb(origin, direction, &transform, size).map(|t| (owner, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
