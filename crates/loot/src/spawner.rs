//! Wave-driven chest spawning.
//!
//! Each wave: plan chest count and reward totals from the wave's difficulty,
//! spawn the (capped) chests, then hand the rewards out across them.

use engine_core::RandomSource;
use room::{RoomQuery, RoomService};

use crate::allocator::{plan_wave, WavePlan};
use crate::distributor::distribute;
use crate::error::ConfigError;
use crate::events::GameEvent;
use crate::factory::{ChestFactory, SpawnContext};
use crate::registry::{ChestId, CollectableRegistry};
use crate::settings::ChestSettings;

/// Outcome of one wave.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveReport {
    pub wave: u32,
    pub plan: WavePlan,
    /// Chests actually spawned; fewer than planned when the live cap was hit.
    pub chests: Vec<ChestId>,
}

/// Spawns reward chests in response to game events.
pub struct ChestSpawner {
    settings: ChestSettings,
    /// `None` when no chest template was configured; the spawner is then inert.
    factory: Option<ChestFactory>,
}

impl ChestSpawner {
    /// Validate settings and build the spawner. A missing chest template is
    /// not an error: the spawner logs and stays disabled.
    pub fn new(settings: ChestSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let factory = match &settings.chest_template {
            Some(template) => Some(ChestFactory::new(template.clone(), &settings)),
            None => {
                log::error!(
                    "Chest template is not set in chest settings. Disabling chest spawner."
                );
                None
            }
        };
        Ok(Self { settings, factory })
    }

    pub fn is_enabled(&self) -> bool {
        self.factory.is_some()
    }

    pub fn settings(&self) -> &ChestSettings {
        &self.settings
    }

    pub fn factory(&self) -> Option<&ChestFactory> {
        self.factory.as_ref()
    }

    /// Dispatch one event. Returns a report for waves that were processed.
    pub fn handle(
        &mut self,
        event: &GameEvent,
        rooms: &dyn RoomService,
        registry: &mut dyn CollectableRegistry,
        rng: &mut dyn RandomSource,
    ) -> Option<WaveReport> {
        if !self.is_enabled() {
            return None;
        }
        match *event {
            GameEvent::RoomReady => {
                match rooms.current_room() {
                    Some(room) => self.on_room_ready(room),
                    None => {
                        log::warn!("Room ready without a loaded room; dropping cached floor");
                        self.on_room_removed();
                    }
                }
                None
            }
            GameEvent::RoomRemoved => {
                self.on_room_removed();
                None
            }
            GameEvent::WaveStarted {
                wave,
                difficulty_delta,
            } => Some(self.on_wave(wave, difficulty_delta, rooms.current_room(), registry, rng)),
        }
    }

    pub fn on_room_ready(&mut self, room: &dyn RoomQuery) {
        if let Some(factory) = &mut self.factory {
            factory.sampler_mut().bind_room(room);
        }
    }

    pub fn on_room_removed(&mut self) {
        if let Some(factory) = &mut self.factory {
            factory.sampler_mut().unbind();
        }
    }

    /// Plan, spawn and stock the chests for one wave.
    pub fn on_wave(
        &self,
        wave: u32,
        difficulty_delta: f32,
        room: Option<&dyn RoomQuery>,
        registry: &mut dyn CollectableRegistry,
        rng: &mut dyn RandomSource,
    ) -> WaveReport {
        let Some(factory) = &self.factory else {
            return WaveReport {
                wave,
                plan: WavePlan::default(),
                chests: Vec::new(),
            };
        };

        let plan = plan_wave(&self.settings, registry.live_chest_count(), difficulty_delta, rng);
        if plan.is_empty() {
            return WaveReport {
                wave,
                plan,
                chests: Vec::new(),
            };
        }

        let chests = {
            let mut ctx = SpawnContext {
                room,
                registry: &mut *registry,
                rng: &mut *rng,
            };
            factory.spawn_chests(
                &mut ctx,
                plan.chest_count,
                plan.total_torpedoes,
                plan.total_health,
            )
        };

        {
            let mut inventories = registry.inventories_mut(&chests);
            distribute(plan.total_health, plan.total_torpedoes, &mut inventories, rng);
        }

        if !chests.is_empty() {
            log::info!(
                "Wave {} spawned {} chests with {} torpedoes and {} health. \
                 Total collectables difficulty: {:.2}",
                wave,
                chests.len(),
                plan.total_torpedoes,
                plan.total_health,
                registry.aggregate_difficulty()
            );
        }

        WaveReport { wave, plan, chests }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ChestRegistry;
    use crate::settings::ChestTemplate;
    use engine_core::ScriptedRandom;
    use room::{RoomDescription, RoomTracker};

    fn registry(settings: &ChestSettings) -> ChestRegistry {
        ChestRegistry::new(settings.difficulty_weights())
    }

    #[test]
    fn missing_template_disables_spawner() {
        let settings = ChestSettings {
            chest_template: None,
            ..Default::default()
        };
        let mut spawner = ChestSpawner::new(settings.clone()).unwrap();
        assert!(!spawner.is_enabled());

        let rooms = RoomTracker::new();
        let mut reg = registry(&settings);
        let mut rng = ScriptedRandom::new(vec![0.99]);
        let event = GameEvent::WaveStarted {
            wave: 1,
            difficulty_delta: 100.0,
        };
        assert!(spawner.handle(&event, &rooms, &mut reg, &mut rng).is_none());
        assert_eq!(reg.live_chest_count(), 0);
    }

    #[test]
    fn room_ready_without_room_drops_cached_floor() {
        let settings = ChestSettings::default();
        let mut spawner = ChestSpawner::new(settings.clone()).unwrap();
        let mut tracker = RoomTracker::new();
        tracker.replace(
            RoomDescription::from_ron_str(
                "(planes: [(label: Floor, center: (0.0, 0.0, 0.0), facing: Up, \
                 boundary: [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)])])",
            )
            .unwrap()
            .build()
            .unwrap(),
        );
        let mut reg = registry(&settings);
        let mut rng = ScriptedRandom::new(vec![0.5]);

        spawner.handle(&GameEvent::RoomReady, &tracker, &mut reg, &mut rng);
        assert!(spawner.factory().unwrap().sampler().floor().is_some());

        tracker.clear();
        spawner.handle(&GameEvent::RoomReady, &tracker, &mut reg, &mut rng);
        assert!(spawner.factory().unwrap().sampler().floor().is_none());
    }

    #[test]
    fn invalid_settings_fail_construction() {
        let settings = ChestSettings {
            chest_torpedo_difficulty_value: -1.0,
            ..Default::default()
        };
        assert!(ChestSpawner::new(settings).is_err());
    }

    #[test]
    fn zero_difficulty_spawns_nothing() {
        let settings = ChestSettings::default();
        let spawner = ChestSpawner::new(settings.clone()).unwrap();
        let mut reg = registry(&settings);
        let mut rng = ScriptedRandom::new(vec![0.99]);
        let report = spawner.on_wave(1, 0.0, None, &mut reg, &mut rng);
        assert_eq!(report.plan, WavePlan::default());
        assert!(report.chests.is_empty());
    }

    #[test]
    fn wave_without_room_still_spawns_at_origin() {
        let settings = ChestSettings {
            chest_template: Some(ChestTemplate::default()),
            ..Default::default()
        };
        let spawner = ChestSpawner::new(settings.clone()).unwrap();
        let mut reg = registry(&settings);
        let mut rng = ScriptedRandom::new(vec![0.99, 0.5]);
        let report = spawner.on_wave(3, 12.0, None, &mut reg, &mut rng);
        assert_eq!(report.chests.len(), 3);
        for (_, transform, inventory) in reg.chests() {
            assert_eq!(transform.position, engine_core::Vec3::ZERO);
            assert!(!inventory.is_empty());
        }
    }
}
