//! Registry of live collectables.

use engine_core::{Chest, Inventory, Transform};
use hecs::{Entity, World};

use crate::settings::DifficultyWeights;

/// Handle of a registered chest.
pub type ChestId = Entity;

/// A chest ready to be registered.
#[derive(Debug, Clone, Copy)]
pub struct ChestBundle {
    pub transform: Transform,
    pub inventory: Inventory,
}

/// Tracks collectables currently alive in the level.
///
/// Read before each wave is planned and written while chests spawn. Wave
/// events are serialized, so the check-cap-then-spawn sequence is not guarded.
pub trait CollectableRegistry {
    fn live_chest_count(&self) -> usize;

    fn register(&mut self, chest: ChestBundle) -> ChestId;

    /// Difficulty of everything still lying around.
    fn aggregate_difficulty(&self) -> f32;

    /// Inventories of `ids`, in the same order. Unknown ids are skipped.
    fn inventories_mut(&mut self, ids: &[ChestId]) -> Vec<&mut Inventory>;
}

/// hecs-backed registry; every chest is an entity with `(Chest, Transform, Inventory)`.
pub struct ChestRegistry {
    world: World,
    weights: DifficultyWeights,
}

impl ChestRegistry {
    pub fn new(weights: DifficultyWeights) -> Self {
        Self {
            world: World::new(),
            weights,
        }
    }

    /// Difficulty a single chest is worth with its current contents.
    pub fn chest_value(&self, inventory: &Inventory) -> f32 {
        self.weights.chest
            + inventory.torpedoes as f32 * self.weights.torpedo
            + inventory.health as f32 * self.weights.health
    }

    pub fn get(&self, id: ChestId) -> Option<(Transform, Inventory)> {
        let transform = *self.world.get::<&Transform>(id).ok()?;
        let inventory = *self.world.get::<&Inventory>(id).ok()?;
        Some((transform, inventory))
    }

    /// All live chests, sorted by id for stable output.
    pub fn chests(&self) -> Vec<(ChestId, Transform, Inventory)> {
        let mut chests: Vec<_> = self
            .world
            .query::<(&Chest, &Transform, &Inventory)>()
            .iter()
            .map(|(id, (_, transform, inventory))| (id, *transform, *inventory))
            .collect();
        chests.sort_by_key(|(id, _, _)| id.to_bits());
        chests
    }

    /// The player picked the chest up: remove it and hand back its contents.
    pub fn collect(&mut self, id: ChestId) -> Option<Inventory> {
        let inventory = *self.world.get::<&Inventory>(id).ok()?;
        self.world.despawn(id).ok()?;
        log::debug!(
            "Chest {:?} collected: {} torpedoes, {} health",
            id,
            inventory.torpedoes,
            inventory.health
        );
        Some(inventory)
    }
}

impl CollectableRegistry for ChestRegistry {
    fn live_chest_count(&self) -> usize {
        self.world.query::<&Chest>().iter().count()
    }

    fn register(&mut self, chest: ChestBundle) -> ChestId {
        self.world.spawn((Chest, chest.transform, chest.inventory))
    }

    fn aggregate_difficulty(&self) -> f32 {
        self.world
            .query::<(&Chest, &Inventory)>()
            .iter()
            .map(|(_, (_, inventory))| self.chest_value(inventory))
            .sum()
    }

    fn inventories_mut(&mut self, ids: &[ChestId]) -> Vec<&mut Inventory> {
        let mut found: Vec<(usize, &mut Inventory)> = self
            .world
            .query_mut::<&mut Inventory>()
            .into_iter()
            .filter_map(|(entity, inventory)| {
                ids.iter()
                    .position(|id| *id == entity)
                    .map(|slot| (slot, inventory))
            })
            .collect();
        found.sort_by_key(|(slot, _)| *slot);
        found.into_iter().map(|(_, inventory)| inventory).collect()
    }
}
