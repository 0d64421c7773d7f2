use bevy::prelude::*;
use constants::render_settings::{
    CARD_COLOUR, CARD_RADIUS, COVER_OFFSET, COVER_SIZE, DEFAULT_OPACITY, PICK_THICKNESS,
};

use crate::engine::assets::catalog::{Catalog, Record};
use crate::engine::layout::spiral::spiral_layout;
use crate::engine::loading::cover_loader::request_cover;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::float_phase::FloatPhaseRng;
use crate::engine::scene::item::{CardVisual, CatalogItem, CoverPanel, PickBounds, VisualState};
use crate::engine::scene::registry::ItemRegistry;

/// Spawn one item per valid record once the catalog is available.
///
/// Records are laid out strictly in dataset order. Each item is visible as
/// soon as it is spawned; its cover arrives later through `poll_cover_tasks`.
pub fn build_scene_when_ready(
    mut commands: Commands,
    catalog: Option<Res<Catalog>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut registry: ResMut<ItemRegistry>,
    mut phases: ResMut<FloatPhaseRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.scene_built {
        return;
    }
    let Some(catalog) = catalog else {
        return;
    };

    let item_meshes = ItemMeshes {
        card: meshes.add(Circle::new(CARD_RADIUS)),
        cover: meshes.add(Rectangle::new(COVER_SIZE, COVER_SIZE)),
    };

    let positions = spiral_layout(catalog.len());
    for (index, (record, position)) in catalog.records.iter().zip(positions).enumerate() {
        let item = CatalogItem {
            index,
            baseline_height: position.y,
            float_phase: phases.next_phase(),
        };
        let entity = spawn_catalog_item(
            &mut commands,
            &item_meshes,
            &mut materials,
            item,
            position,
            record,
        );
        registry.register(entity, index, record.clone());
    }

    loading_progress.items_spawned = registry.len();
    loading_progress.covers_requested = registry.len();
    loading_progress.scene_built = true;
    info!("Spawned {} catalog items", registry.len());
}

struct ItemMeshes {
    card: Handle<Mesh>,
    cover: Handle<Mesh>,
}

fn spawn_catalog_item(
    commands: &mut Commands,
    item_meshes: &ItemMeshes,
    materials: &mut Assets<StandardMaterial>,
    item: CatalogItem,
    position: Vec3,
    record: &Record,
) -> Entity {
    let root = commands
        .spawn((
            Name::new(format!("CatalogItem {}", item.index)),
            item,
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .id();

    commands.spawn((
        CardVisual,
        Mesh3d(item_meshes.card.clone()),
        MeshMaterial3d(materials.add(card_material())),
        VisualState::idle(),
        PickBounds(Vec3::new(CARD_RADIUS * 2.0, CARD_RADIUS * 2.0, PICK_THICKNESS)),
        Transform::default(),
        ChildOf(root),
    ));

    let cover = commands
        .spawn((
            CoverPanel,
            Mesh3d(item_meshes.cover.clone()),
            MeshMaterial3d(materials.add(cover_material())),
            VisualState::idle(),
            PickBounds(Vec3::new(COVER_SIZE, COVER_SIZE, PICK_THICKNESS)),
            Transform::from_xyz(0.0, 0.0, COVER_OFFSET),
            ChildOf(root),
        ))
        .id();

    request_cover(commands, cover, record);
    root
}

fn card_material() -> StandardMaterial {
    StandardMaterial {
        base_color: CARD_COLOUR.with_alpha(DEFAULT_OPACITY),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

fn cover_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE.with_alpha(DEFAULT_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::catalog::{CatalogRow, records_from_rows};
    use crate::engine::loading::cover_loader::CoverTask;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::tasks::{IoTaskPool, TaskPool};

    fn row(title: Option<&str>, artist: Option<&str>) -> CatalogRow {
        CatalogRow {
            title: title.map(str::to_owned),
            artist: artist.map(str::to_owned),
            ..default()
        }
    }

    fn build(rows: &[CatalogRow]) -> World {
        IoTaskPool::get_or_init(TaskPool::new);

        let mut world = World::new();
        world.insert_resource(Catalog {
            records: records_from_rows(rows),
        });
        world.init_resource::<LoadingProgress>();
        world.init_resource::<ItemRegistry>();
        world.insert_resource(FloatPhaseRng::new(Some(3)));
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());
        world.run_system_once(build_scene_when_ready).unwrap();
        world
    }

    #[test]
    fn single_row_becomes_one_item_at_spiral_start() {
        let mut world = build(&[row(Some("X"), Some("Y"))]);

        let items: Vec<(CatalogItem, Transform)> = world
            .query::<(&CatalogItem, &Transform)>()
            .iter(&world)
            .map(|(item, transform)| (*item, *transform))
            .collect();
        assert_eq!(items.len(), 1);

        let (item, transform) = items[0];
        assert_eq!(item.index, 0);
        assert_relative_eq!(transform.translation.x, 8.0);
        assert_relative_eq!(transform.translation.y, -3.0);
        assert_relative_eq!(transform.translation.z, 0.0);
        assert_relative_eq!(item.baseline_height, -3.0);

        let registry = world.resource::<ItemRegistry>();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.by_index(0).unwrap().record.title, "X");
    }

    #[test]
    fn row_without_title_spawns_nothing() {
        let mut world = build(&[row(None, Some("Y"))]);

        assert_eq!(world.query::<&CatalogItem>().iter(&world).count(), 0);
        assert!(world.resource::<ItemRegistry>().is_empty());
        assert!(world.resource::<LoadingProgress>().scene_built);
    }

    #[test]
    fn every_item_has_card_and_cover_in_default_state() {
        let mut world = build(&[
            row(Some("A"), Some("1")),
            row(Some("B"), Some("2")),
            row(Some("C"), Some("3")),
        ]);

        let states: Vec<VisualState> = world
            .query_filtered::<&VisualState, Or<(With<CardVisual>, With<CoverPanel>)>>()
            .iter(&world)
            .copied()
            .collect();
        assert_eq!(states.len(), 6);
        assert!(states.iter().all(|state| *state == VisualState::idle()));

        let covers_requested = world
            .query_filtered::<(), (With<CoverPanel>, With<CoverTask>)>()
            .iter(&world)
            .count();
        assert_eq!(covers_requested, 3);

        for item in world.resource::<ItemRegistry>().iter() {
            let children = world.get::<Children>(item.entity).unwrap();
            assert_eq!(children.len(), 2);
        }
    }

    #[test]
    fn items_are_registered_in_dataset_order() {
        let mut world = build(&[
            row(Some("First"), Some("A")),
            row(Some("Second"), Some("B")),
        ]);

        let titles: Vec<String> = world
            .resource::<ItemRegistry>()
            .iter()
            .map(|item| item.record.title.clone())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);

        let mut heights: Vec<(usize, f32)> = world
            .query::<(&CatalogItem, &Transform)>()
            .iter(&world)
            .map(|(item, transform)| (item.index, transform.translation.y))
            .collect();
        heights.sort_by_key(|(index, _)| *index);
        assert!(heights[0].1 < heights[1].1);
    }
}
