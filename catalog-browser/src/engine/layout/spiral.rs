use bevy::prelude::*;
use constants::layout::{
    SPIRAL_BASE_RADIUS, SPIRAL_BOTTOM, SPIRAL_HEIGHT, SPIRAL_RADIUS_RIPPLE, SPIRAL_SWEEP,
};

/// Position of item `index` out of `total` on the catalog spiral.
///
/// `total` must be at least 1; callers only lay out non-empty catalogs.
pub fn spiral_position(index: usize, total: usize) -> Vec3 {
    debug_assert!(total > 0, "spiral layout needs at least one item");

    let fraction = index as f32 / total as f32;
    let angle = fraction * SPIRAL_SWEEP;
    let radius = SPIRAL_BASE_RADIUS + SPIRAL_RADIUS_RIPPLE * (2.0 * angle).sin();

    Vec3::new(
        radius * angle.cos(),
        SPIRAL_BOTTOM + SPIRAL_HEIGHT * fraction,
        radius * angle.sin(),
    )
}

/// Positions for a whole catalog of `total` items, in dataset order.
pub fn spiral_layout(total: usize) -> impl Iterator<Item = Vec3> {
    (0..total).map(move |index| spiral_position(index, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn single_item_sits_at_spiral_start() {
        let position = spiral_position(0, 1);
        assert_relative_eq!(position.x, 8.0);
        assert_relative_eq!(position.y, -3.0);
        assert_relative_eq!(position.z, 0.0);
    }

    #[test]
    fn quarter_way_is_half_a_turn_round() {
        // angle = pi, sin(2 * pi) == 0 so the radius is the base radius.
        let position = spiral_position(1, 4);
        assert_relative_eq!(position.x, -8.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, -1.5, epsilon = 1e-6);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn layout_follows_dataset_order() {
        let heights: Vec<f32> = spiral_layout(10).map(|p| p.y).collect();
        assert_eq!(heights.len(), 10);
        assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_catalog_yields_no_positions() {
        assert_eq!(spiral_layout(0).count(), 0);
    }

    proptest! {
        #[test]
        fn radius_and_height_stay_in_band(total in 1usize..2000, seed in 0usize..2000) {
            let index = seed % total;
            let position = spiral_position(index, total);
            let radius = Vec2::new(position.x, position.z).length();

            prop_assert!(radius >= 6.0 - 1e-4 && radius <= 10.0 + 1e-4);
            let expected_y = -3.0 + 6.0 * (index as f32 / total as f32);
            prop_assert_eq!(position.y, expected_y);
        }

        #[test]
        fn layout_is_pure(total in 1usize..500, seed in 0usize..500) {
            let index = seed % total;
            prop_assert_eq!(spiral_position(index, total), spiral_position(index, total));
        }
    }
}
