use std::collections::HashMap;

use bevy::prelude::*;

use crate::engine::assets::catalog::Record;

/// A spawned catalog item and the record it presents.
#[derive(Debug, Clone)]
pub struct RegisteredItem {
    pub entity: Entity,
    pub index: usize,
    pub record: Record,
}

/// Typed association between item entities and their records.
///
/// Items are registered once while the scene is built and never removed,
/// so lookups by entity and by dataset index stay valid for the session.
#[derive(Resource, Debug, Default)]
pub struct ItemRegistry {
    items: Vec<RegisteredItem>,
    by_entity: HashMap<Entity, usize>,
}

impl ItemRegistry {
    pub fn register(&mut self, entity: Entity, index: usize, record: Record) {
        self.by_entity.insert(entity, self.items.len());
        self.items.push(RegisteredItem {
            entity,
            index,
            record,
        });
    }

    pub fn get(&self, entity: Entity) -> Option<&RegisteredItem> {
        self.by_entity.get(&entity).map(|&slot| &self.items[slot])
    }

    pub fn by_index(&self, index: usize) -> Option<&RegisteredItem> {
        self.items.iter().find(|item| item.index == index)
    }

    pub fn record(&self, entity: Entity) -> Option<&Record> {
        self.get(entity).map(|item| &item.record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> Record {
        Record {
            title: title.into(),
            artist: "Artist".into(),
            year: String::new(),
            genre: String::new(),
            label: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn lookups_by_entity_and_index_agree() {
        let mut registry = ItemRegistry::default();
        let first = Entity::from_raw(10);
        let second = Entity::from_raw(11);
        registry.register(first, 0, record("A"));
        registry.register(second, 1, record("B"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.record(second).map(|r| r.title.as_str()), Some("B"));
        assert_eq!(registry.by_index(0).map(|item| item.entity), Some(first));
        assert!(registry.get(Entity::from_raw(99)).is_none());
    }

    #[test]
    fn iteration_keeps_registration_order() {
        let mut registry = ItemRegistry::default();
        for index in 0..5 {
            registry.register(Entity::from_raw(index as u32), index, record("X"));
        }
        let order: Vec<usize> = registry.iter().map(|item| item.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
