//! Core engine types and utilities for Reefdrop.
//!
//! This crate provides the foundational types used across all game systems:
//! - Transform and spatial components
//! - Chest inventory components
//! - The injectable random source used by every randomized system

pub mod components;
pub mod rng;
pub mod transform;

pub use components::*;
pub use rng::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
