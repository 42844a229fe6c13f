//! Hands a wave's rewards out across its freshly spawned chests.

use engine_core::{Inventory, RandomSource};

/// Which reward a single grant produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grant {
    Torpedo,
    Health,
}

/// Rewards not yet placed.
struct Remaining {
    health: u32,
    torpedoes: u32,
}

impl Remaining {
    fn any(&self) -> bool {
        self.health > 0 || self.torpedoes > 0
    }

    /// Give one unit to `chest`. With both kinds left a fair coin picks;
    /// otherwise whichever kind is left is used.
    fn grant_one(&mut self, chest: &mut Inventory, rng: &mut dyn RandomSource) -> Option<Grant> {
        let grant = match (self.health > 0, self.torpedoes > 0) {
            (true, true) => {
                if rng.coin_flip() {
                    Grant::Torpedo
                } else {
                    Grant::Health
                }
            }
            (true, false) => Grant::Health,
            (false, true) => Grant::Torpedo,
            (false, false) => return None,
        };
        match grant {
            Grant::Torpedo => {
                chest.add_torpedoes(1);
                self.torpedoes -= 1;
            }
            Grant::Health => {
                chest.add_health(1);
                self.health -= 1;
            }
        }
        Some(grant)
    }
}

/// Spread `total_health` and `total_torpedoes` over `chests`.
///
/// Every chest first gets one unit, so none is empty while anything is left
/// to give. The remainder goes one unit at a time to chests picked uniformly
/// with replacement, which lets rewards stack. Every unit is placed; chest
/// capacities are not consulted. Does nothing for an empty slice.
pub fn distribute(
    total_health: u32,
    total_torpedoes: u32,
    chests: &mut [&mut Inventory],
    rng: &mut dyn RandomSource,
) {
    if chests.is_empty() {
        return;
    }

    let mut remaining = Remaining {
        health: total_health,
        torpedoes: total_torpedoes,
    };

    for chest in chests.iter_mut() {
        remaining.grant_one(chest, rng);
    }

    while remaining.any() {
        let index = rng.index(chests.len());
        remaining.grant_one(chests[index], rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_chests(n: usize) -> Vec<Inventory> {
        vec![Inventory::new(0, 0, 4, 4); n]
    }

    fn run(health: u32, torpedoes: u32, chests: &mut [Inventory], rng: &mut dyn RandomSource) {
        let mut refs: Vec<&mut Inventory> = chests.iter_mut().collect();
        distribute(health, torpedoes, &mut refs, rng);
    }

    #[test]
    fn empty_chest_list_is_noop() {
        let mut rng = ScriptedRandom::new(vec![0.3]);
        distribute(5, 5, &mut [], &mut rng);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn three_chests_five_health() {
        let mut chests = empty_chests(3);
        let mut rng = StdRng::seed_from_u64(9);
        run(5, 0, &mut chests, &mut rng);
        assert!(chests.iter().all(|c| c.health >= 1));
        assert_eq!(chests.iter().map(|c| c.health).sum::<u32>(), 5);
        assert_eq!(chests.iter().map(|c| c.torpedoes).sum::<u32>(), 0);
    }

    #[test]
    fn conserves_totals_and_fills_every_chest() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for n in 1..8usize {
            for health in 0..10u32 {
                for torpedoes in 0..10u32 {
                    let mut chests = empty_chests(n);
                    run(health, torpedoes, &mut chests, &mut rng);
                    assert_eq!(chests.iter().map(|c| c.health).sum::<u32>(), health);
                    assert_eq!(chests.iter().map(|c| c.torpedoes).sum::<u32>(), torpedoes);
                    if (health + torpedoes) as usize >= n {
                        assert!(chests.iter().all(|c| !c.is_empty()));
                    }
                }
            }
        }
    }

    #[test]
    fn scarce_rewards_leave_later_chests_empty() {
        let mut chests = empty_chests(4);
        let mut rng = ScriptedRandom::new(vec![0.9]);
        run(1, 1, &mut chests, &mut rng);
        // 0.9 is tails, so the first chest gets health and the second the torpedo.
        assert_eq!((chests[0].torpedoes, chests[0].health), (0, 1));
        assert_eq!((chests[1].torpedoes, chests[1].health), (1, 0));
        assert!(chests[2].is_empty() && chests[3].is_empty());
    }

    #[test]
    fn coin_flip_decides_when_both_remain() {
        let mut chests = empty_chests(2);
        // Heads for the first chest, then only health remains for the second.
        let mut rng = ScriptedRandom::new(vec![0.1]);
        run(1, 1, &mut chests, &mut rng);
        assert_eq!(chests[0].torpedoes, 1);
        assert_eq!(chests[1].health, 1);
    }

    #[test]
    fn remainder_can_stack_past_capacity() {
        let mut chests = vec![Inventory::new(0, 0, 1, 1)];
        let mut rng = StdRng::seed_from_u64(4);
        run(3, 0, &mut chests, &mut rng);
        assert_eq!(chests[0].health, 3);
        assert!(chests[0].is_over_capacity());
    }
}
