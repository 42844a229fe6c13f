//! Converts a wave's difficulty delta into chests and rewards.
//!
//! Part of each wave's difficulty is handed back to the player as supply
//! chests. The number of chests is capped both by the budget and by the
//! per-wave limit, then drawn at random under that cap so chest counts vary
//! even at fixed difficulty. Whatever budget the chests themselves do not
//! consume is split between health and torpedoes with a random ratio.

use engine_core::RandomSource;

use crate::settings::ChestSettings;

/// Targets for one wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WavePlan {
    pub chest_count: u32,
    pub total_health: u32,
    pub total_torpedoes: u32,
}

impl WavePlan {
    pub fn is_empty(&self) -> bool {
        self.chest_count == 0
    }
}

/// Plan the chests for one wave.
///
/// `live_chests` is the registry's current count; once it reaches
/// `chest_max` nothing is planned and no randomness is consumed.
pub fn plan_wave(
    settings: &ChestSettings,
    live_chests: usize,
    difficulty_delta: f32,
    rng: &mut dyn RandomSource,
) -> WavePlan {
    if live_chests >= settings.chest_max as usize {
        return WavePlan::default();
    }

    let mut quota = settings.chest_max_wave_contribution * difficulty_delta;
    let max_single_item_value = settings.max_single_item_chest_value();

    // Halves round to the even neighbour.
    let by_budget = (quota / max_single_item_value).round_ties_even();
    let max_chests = clamp_count(by_budget, settings.chest_max_spawn_per_wave);
    let chest_count = rng.int_inclusive(0, max_chests);

    quota -= settings.chest_difficulty_value * chest_count as f32;
    let health_ratio = rng.unit();
    let torpedo_ratio = 1.0 - health_ratio;
    let count = chest_count as f32;

    // The ceil term keeps at least one reward per chest in expectation even
    // when the leftover quota is negative; the floor term spends any surplus.
    let total_health = units(
        (health_ratio * count).ceil(),
        (quota * health_ratio / settings.chest_health_difficulty_value).floor(),
    );
    let total_torpedoes = units(
        (torpedo_ratio * count).ceil(),
        (quota * torpedo_ratio / settings.chest_torpedo_difficulty_value).floor(),
    );

    WavePlan {
        chest_count,
        total_health,
        total_torpedoes,
    }
}

fn clamp_count(value: f32, max: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        (value.min(max as f32)) as u32
    }
}

fn units(by_count: f32, by_budget: f32) -> u32 {
    let best = by_count.max(by_budget);
    if best.is_nan() || best <= 0.0 {
        0
    } else {
        best.min(u32::MAX as f32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_delta_plans_nothing() {
        let settings = ChestSettings::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(plan_wave(&settings, 0, 0.0, &mut rng), WavePlan::default());
        }
    }

    #[test]
    fn full_registry_short_circuits() {
        let settings = ChestSettings::default();
        let mut rng = ScriptedRandom::new(vec![0.99]);
        for delta in [0.0, 1.0, 50.0, 1e6] {
            let plan = plan_wave(&settings, settings.chest_max as usize, delta, &mut rng);
            assert_eq!(plan, WavePlan::default());
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn chest_count_respects_per_wave_cap() {
        let settings = ChestSettings::default();
        let mut rng = StdRng::seed_from_u64(77);
        for step in 0..400 {
            let delta = step as f32 * 0.25;
            let plan = plan_wave(&settings, 0, delta, &mut rng);
            assert!(plan.chest_count <= settings.chest_max_spawn_per_wave);
        }
    }

    #[test]
    fn negative_delta_plans_nothing() {
        let settings = ChestSettings::default();
        let mut rng = ScriptedRandom::new(vec![0.99, 0.5]);
        let plan = plan_wave(&settings, 0, -10.0, &mut rng);
        assert_eq!(plan, WavePlan::default());
    }

    #[test]
    fn worked_example_with_surplus() {
        // quota = 0.5 * 12 = 6; divisor = 2 - 0.5 = 1.5; 6 / 1.5 = 4 -> capped to 3.
        // count draw 0.99 -> 3; quota = 6 - 6 = 0; ratio 0.5.
        // health = max(ceil(1.5), floor(0)) = 2, torpedoes = 2.
        let settings = ChestSettings::default();
        let mut rng = ScriptedRandom::new(vec![0.99, 0.5]);
        let plan = plan_wave(&settings, 0, 12.0, &mut rng);
        assert_eq!(
            plan,
            WavePlan {
                chest_count: 3,
                total_health: 2,
                total_torpedoes: 2,
            }
        );
    }

    #[test]
    fn leftover_budget_buys_extra_units() {
        // quota = 0.5 * 20 = 10; 10 / 1.5 = 6.67 -> 7 -> capped to 3.
        // count draw 0.0 -> 0 chests; quota stays 10; ratio 0.75.
        // health = max(ceil(0), floor(10 * 0.75 / 0.5)) = 15
        // torpedoes = max(ceil(0), floor(10 * 0.25 / 1.0)) = 2
        let settings = ChestSettings::default();
        let mut rng = ScriptedRandom::new(vec![0.0, 0.75]);
        let plan = plan_wave(&settings, 0, 20.0, &mut rng);
        assert_eq!(plan.chest_count, 0);
        assert_eq!(plan.total_health, 15);
        assert_eq!(plan.total_torpedoes, 2);
    }

    #[test]
    fn rewards_cover_every_chest() {
        let settings = ChestSettings::default();
        let mut rng = StdRng::seed_from_u64(2024);
        for step in 0..300 {
            let plan = plan_wave(&settings, 0, step as f32 * 0.1, &mut rng);
            assert!(plan.total_health + plan.total_torpedoes >= plan.chest_count);
        }
    }

    #[test]
    fn rounding_ties_go_to_even() {
        // quota / divisor = 2.5 exactly; banker's rounding gives 2, so a top
        // draw cannot produce 3 chests.
        let settings = ChestSettings {
            chest_max_spawn_per_wave: 10,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::new(vec![0.99, 0.5]);
        let plan = plan_wave(&settings, 0, 7.5, &mut rng);
        assert_eq!(plan.chest_count, 2);
    }
}
