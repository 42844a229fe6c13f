//! reefdrop - headless wave simulation of supply chest drops in a scanned room

mod config;
mod layout;

use anyhow::{Context, Result};
use loot::{
    ChestRegistry, ChestSettings, ChestSpawner, CollectableRegistry, EventHub, GameEvent,
    Subscription, WaveReport,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use room::RoomTracker;

use config::SimConfig;

/// Feed every queued event to the spawner, collecting wave reports.
fn pump(
    subscription: &Subscription,
    spawner: &mut ChestSpawner,
    rooms: &RoomTracker,
    registry: &mut ChestRegistry,
    rng: &mut StdRng,
) -> Vec<WaveReport> {
    subscription
        .drain()
        .iter()
        .filter_map(|event| spawner.handle(event, rooms, registry, rng))
        .collect()
}

/// What the player has picked up so far.
#[derive(Debug, Default)]
struct Haul {
    chests: u32,
    torpedoes: u32,
    health: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::load();
    let settings = ChestSettings::load();
    let weights = settings.difficulty_weights();
    let mut spawner = ChestSpawner::new(settings).context("chest settings rejected")?;
    let room = layout::load_room(config.room_path.as_deref())
        .context("could not load room layout")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!(
        "Starting reefdrop: {} waves, seed {:?}, chest cap {}",
        config.waves,
        config.seed,
        spawner.settings().chest_max
    );

    let hub = EventHub::new();
    let subscription = hub.subscribe();
    let mut rooms = RoomTracker::new();
    let mut registry = ChestRegistry::new(weights);
    let mut haul = Haul::default();

    rooms.replace(room);
    hub.publish(GameEvent::RoomReady);
    pump(&subscription, &mut spawner, &rooms, &mut registry, &mut rng);

    println!(
        "{:>4} {:>7} {:>7} {:>7} {:>9} {:>6} {:>5} {:>10}",
        "wave", "delta", "planned", "spawned", "torpedoes", "health", "live", "difficulty"
    );
    for wave in 1..=config.waves {
        let difficulty_delta = config.difficulty_for(wave);
        hub.publish(GameEvent::WaveStarted {
            wave,
            difficulty_delta,
        });
        for report in pump(&subscription, &mut spawner, &rooms, &mut registry, &mut rng) {
            println!(
                "{:>4} {:>7.2} {:>7} {:>7} {:>9} {:>6} {:>5} {:>10.2}",
                report.wave,
                difficulty_delta,
                report.plan.chest_count,
                report.chests.len(),
                report.plan.total_torpedoes,
                report.plan.total_health,
                registry.live_chest_count(),
                registry.aggregate_difficulty()
            );
        }

        for (id, _, _) in registry.chests() {
            if rng.gen::<f32>() >= config.pickup_chance {
                continue;
            }
            if let Some(contents) = registry.collect(id) {
                haul.chests += 1;
                haul.torpedoes += contents.torpedoes;
                haul.health += contents.health;
            }
        }
    }

    rooms.clear();
    hub.publish(GameEvent::RoomRemoved);
    pump(&subscription, &mut spawner, &rooms, &mut registry, &mut rng);

    println!(
        "Picked up {} chests: {} torpedoes, {} health. {} chests left behind.",
        haul.chests,
        haul.torpedoes,
        haul.health,
        registry.live_chest_count()
    );
    Ok(())
}
