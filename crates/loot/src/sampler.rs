//! Spawn point sampling on the scanned floor.
//!
//! Candidates are drawn on any up-facing surface except the ceiling, nudged
//! off the surface along its normal, and kept only if they are inside the
//! room and clear of furniture. After a fixed number of misses the floor
//! centre is used instead, so sampling always terminates with a point.

use engine_core::RandomSource;
use glam::Vec3;
use room::{FloorAnchor, LabelFilter, RoomQuery, SceneLabel, SurfaceType};

use crate::error::SpawnError;

/// Candidate draws before falling back to the floor centre.
pub const MAX_SPAWN_ATTEMPTS: usize = 20;

/// Distance a candidate is pushed off its surface along the normal.
pub const SURFACE_CLEARANCE: f32 = 0.2;

/// Finds placement points for objects of a given footprint.
#[derive(Debug, Clone)]
pub struct SpatialSampler {
    footprint: f32,
    floor: Option<FloorAnchor>,
}

impl SpatialSampler {
    pub fn new(footprint: f32) -> Self {
        Self {
            footprint,
            floor: None,
        }
    }

    /// Capture the floor of a freshly scanned room. A room without a floor
    /// leaves the sampler without one.
    pub fn bind_room(&mut self, room: &dyn RoomQuery) {
        self.floor = if room.has_label(SceneLabel::Floor) {
            room.floor_anchor()
        } else {
            None
        };
        match &self.floor {
            Some(floor) => log::debug!(
                "Spawn sampler bound to floor {:?} ({:.2} x {:.2})",
                floor.id,
                floor.size.x,
                floor.size.y
            ),
            None => log::warn!("Scanned room has no floor; chest spawn points unavailable"),
        }
    }

    /// The room was torn down.
    pub fn unbind(&mut self) {
        self.floor = None;
    }

    pub fn floor(&self) -> Option<&FloorAnchor> {
        self.floor.as_ref()
    }

    /// Sample a spawn point, reporting why none could be produced.
    pub fn try_spawn_location(
        &self,
        room: Option<&dyn RoomQuery>,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec3, SpawnError> {
        let floor = self.floor.as_ref().ok_or(SpawnError::NoFloorAnchor)?;
        let room = room.ok_or(SpawnError::NoRoom)?;
        let filter = LabelFilter::excluded(&[SceneLabel::Ceiling]);

        for attempt in 0..MAX_SPAWN_ATTEMPTS {
            let Some(sample) =
                room.sample_point_on_surface(rng, SurfaceType::FacingUp, self.footprint, filter)
            else {
                continue;
            };
            let candidate = sample.point + sample.normal * SURFACE_CLEARANCE;
            if room.is_point_in_room(candidate) && !room.is_point_in_scene_volume(candidate) {
                return Ok(candidate);
            }
            log::debug!("Spawn candidate {} rejected at {:?}", attempt, candidate);
        }

        Ok(floor.center)
    }

    /// Sample a spawn point. Never fails: without a floor the error is
    /// logged and the origin is returned.
    pub fn spawn_location(&self, room: Option<&dyn RoomQuery>, rng: &mut dyn RandomSource) -> Vec3 {
        match self.try_spawn_location(room, rng) {
            Ok(point) => point,
            Err(e) => {
                log::error!("Chest spawn point unavailable: {}", e);
                Vec3::ZERO
            }
        }
    }
}
