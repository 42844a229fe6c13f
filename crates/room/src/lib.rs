//! Scanned-room model for mixed-reality play spaces.
//!
//! Rooms arrive from the headset scanner as planar anchors (floor, ceiling,
//! walls, table tops) plus furniture volumes. This crate stores them and
//! answers the placement queries gameplay needs: random points on surfaces,
//! room containment and obstacle overlap.

pub mod anchor;
pub mod description;
pub mod error;
pub mod labels;
pub mod room;
pub mod tracker;

pub use anchor::*;
pub use description::*;
pub use error::*;
pub use labels::*;
pub use room::*;
pub use tracker::*;
