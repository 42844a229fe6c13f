//! Supply chests for wave-based survival in a scanned room.
//!
//! Every wave hands part of its difficulty back to the player as chests of
//! torpedoes and health placed on the real floor:
//! - [`allocator`] turns the wave's difficulty delta into a chest count and reward totals
//! - [`factory`] places the chests, using [`sampler`] to find clear floor spots
//! - [`distributor`] spreads the rewards so no chest is left empty
//! - [`spawner`] ties these together behind the game's [`events`]

pub mod allocator;
pub mod distributor;
pub mod error;
pub mod events;
pub mod factory;
pub mod registry;
pub mod sampler;
pub mod settings;
pub mod spawner;

pub use allocator::*;
pub use distributor::*;
pub use error::*;
pub use events::*;
pub use factory::*;
pub use registry::*;
pub use sampler::*;
pub use settings::*;
pub use spawner::*;
