//! Chest creation.

use engine_core::{Inventory, RandomSource, Transform};
use room::RoomQuery;

use crate::registry::{ChestBundle, ChestId, CollectableRegistry};
use crate::sampler::SpatialSampler;
use crate::settings::{ChestSettings, ChestTemplate};

/// Collaborators a spawn needs for the duration of one call.
pub struct SpawnContext<'a> {
    pub room: Option<&'a dyn RoomQuery>,
    pub registry: &'a mut dyn CollectableRegistry,
    pub rng: &'a mut dyn RandomSource,
}

/// Places chests and registers them.
#[derive(Debug, Clone)]
pub struct ChestFactory {
    template: ChestTemplate,
    sampler: SpatialSampler,
    max_torpedoes: u32,
    max_health: u32,
    chest_max: u32,
}

impl ChestFactory {
    pub fn new(template: ChestTemplate, settings: &ChestSettings) -> Self {
        Self {
            sampler: SpatialSampler::new(template.footprint),
            template,
            max_torpedoes: settings.chest_max_torpedoes,
            max_health: settings.chest_max_health,
            chest_max: settings.chest_max,
        }
    }

    pub fn template(&self) -> &ChestTemplate {
        &self.template
    }

    pub fn sampler(&self) -> &SpatialSampler {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut SpatialSampler {
        &mut self.sampler
    }

    /// Spawn one chest at a sampled point with a random heading.
    pub fn spawn_chest(&self, ctx: &mut SpawnContext<'_>, torpedoes: u32, health: u32) -> ChestId {
        let position = self.sampler.spawn_location(ctx.room, &mut *ctx.rng);
        let yaw = 360.0 * ctx.rng.unit();
        let transform =
            Transform::from_position_yaw(position, yaw).with_scale(self.template.scale);
        let inventory = Inventory::new(torpedoes, health, self.max_torpedoes, self.max_health);

        let id = ctx.registry.register(ChestBundle {
            transform,
            inventory,
        });
        log::debug!(
            "Spawned {} {:?} at {:?}, yaw {:.0}",
            self.template.name,
            id,
            position,
            yaw
        );
        id
    }

    /// Spawn up to `count` empty chests, stopping at the live-chest cap.
    ///
    /// The totals are not placed here; rewards are handed out afterwards by
    /// [`crate::distributor::distribute`].
    pub fn spawn_chests(
        &self,
        ctx: &mut SpawnContext<'_>,
        count: u32,
        _total_torpedoes: u32,
        _total_health: u32,
    ) -> Vec<ChestId> {
        let live = ctx.registry.live_chest_count();
        let room_left = (self.chest_max as usize).saturating_sub(live);
        let n = (count as usize).min(room_left);

        let mut spawned = Vec::with_capacity(n);
        for _ in 0..n {
            spawned.push(self.spawn_chest(ctx, 0, 0));
        }
        spawned
    }
}
