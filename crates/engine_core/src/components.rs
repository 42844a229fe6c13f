//! Common ECS components used by collectables.

/// Tag component for reward chests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chest;

/// Reward contents of a chest: torpedoes and health packs with their capacities.
///
/// Counts are set to at most the capacity when the chest is created. Later
/// grants through [`Inventory::add_torpedoes`] / [`Inventory::add_health`]
/// are not clamped, so a chest can stack past its ceiling; use
/// [`Inventory::is_over_capacity`] to detect that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub torpedoes: u32,
    pub health: u32,
    pub max_torpedoes: u32,
    pub max_health: u32,
}

impl Inventory {
    /// Create an inventory holding the starting amounts, each capped to its capacity.
    pub fn new(torpedoes: u32, health: u32, max_torpedoes: u32, max_health: u32) -> Self {
        Self {
            torpedoes: torpedoes.min(max_torpedoes),
            health: health.min(max_health),
            max_torpedoes,
            max_health,
        }
    }

    pub fn add_torpedoes(&mut self, amount: u32) {
        self.torpedoes = self.torpedoes.saturating_add(amount);
    }

    pub fn add_health(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Remove up to `amount` torpedoes, returning how many were taken.
    pub fn take_torpedoes(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.torpedoes);
        self.torpedoes -= taken;
        taken
    }

    /// Remove up to `amount` health, returning how many were taken.
    pub fn take_health(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Total reward units held.
    pub fn total(&self) -> u32 {
        self.torpedoes + self.health
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn is_over_capacity(&self) -> bool {
        self.torpedoes > self.max_torpedoes || self.health > self.max_health
    }
}
