//! The scanned room and the queries the rest of the game may run against it.

use engine_core::RandomSource;
use glam::{Vec2, Vec3};

use crate::anchor::{AnchorId, PlaneAnchor, SurfaceType, VolumeAnchor};
use crate::error::RoomError;
use crate::labels::{LabelFilter, SceneLabel};

/// Point draws inside one chosen plane before giving up on that sample.
const MAX_SURFACE_TRIES: usize = 16;

/// Tolerance when comparing heights against the floor and ceiling.
const HEIGHT_EPSILON: f32 = 1e-3;

/// A point sampled on a surface, with that surface's normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Snapshot of the floor plane taken when a room becomes ready.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorAnchor {
    pub id: AnchorId,
    pub center: Vec3,
    pub size: Vec2,
    pub boundary: Vec<Vec2>,
}

/// Geometry queries used for placing objects in a room.
pub trait RoomQuery {
    fn has_label(&self, label: SceneLabel) -> bool;

    /// The floor plane, if the scan found one.
    fn floor_anchor(&self) -> Option<FloorAnchor>;

    /// Draw a random point on a surface of the given orientation whose label
    /// passes `filter`, keeping at least `min_clearance` from that surface's
    /// edges. `None` when no surface qualifies or no draw landed.
    fn sample_point_on_surface(
        &self,
        rng: &mut dyn RandomSource,
        surface: SurfaceType,
        min_clearance: f32,
        filter: LabelFilter,
    ) -> Option<SurfaceSample>;

    /// Inside the floor outline and between floor and ceiling.
    fn is_point_in_room(&self, point: Vec3) -> bool;

    /// Inside any furniture/obstacle volume.
    fn is_point_in_scene_volume(&self, point: Vec3) -> bool;
}

/// A room as delivered by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRoom {
    planes: Vec<PlaneAnchor>,
    volumes: Vec<VolumeAnchor>,
}

impl ScannedRoom {
    pub fn new(planes: Vec<PlaneAnchor>, volumes: Vec<VolumeAnchor>) -> Result<Self, RoomError> {
        for plane in &planes {
            if plane.boundary.len() < 3 {
                return Err(RoomError::DegenerateBoundary {
                    anchor: plane.id.0,
                    vertices: plane.boundary.len(),
                });
            }
            let finite = plane.center.is_finite()
                && plane.rotation.is_finite()
                && plane.boundary.iter().all(|p| p.is_finite());
            if !finite {
                return Err(RoomError::NonFinite { anchor: plane.id.0 });
            }
        }
        for volume in &volumes {
            if !(volume.bounds.min.is_finite() && volume.bounds.max.is_finite()) {
                return Err(RoomError::NonFinite { anchor: volume.id.0 });
            }
            if volume.bounds.min.cmpgt(volume.bounds.max).any() {
                return Err(RoomError::InvertedBounds { anchor: volume.id.0 });
            }
        }
        Ok(Self { planes, volumes })
    }

    pub fn planes(&self) -> &[PlaneAnchor] {
        &self.planes
    }

    pub fn volumes(&self) -> &[VolumeAnchor] {
        &self.volumes
    }

    fn plane_labelled(&self, label: SceneLabel) -> Option<&PlaneAnchor> {
        self.planes.iter().find(|p| p.label == label)
    }

    /// Pick one of `candidates` with probability proportional to its area.
    fn pick_by_area<'a>(
        candidates: &[&'a PlaneAnchor],
        rng: &mut dyn RandomSource,
    ) -> Option<&'a PlaneAnchor> {
        let total: f32 = candidates.iter().map(|p| p.area()).sum();
        if total <= 0.0 {
            return None;
        }
        let mut remaining = rng.unit() * total;
        for plane in candidates {
            remaining -= plane.area();
            if remaining <= 0.0 {
                return Some(*plane);
            }
        }
        candidates.last().copied()
    }
}

impl RoomQuery for ScannedRoom {
    fn has_label(&self, label: SceneLabel) -> bool {
        self.planes.iter().any(|p| p.label == label)
            || self.volumes.iter().any(|v| v.label == label)
    }

    fn floor_anchor(&self) -> Option<FloorAnchor> {
        self.plane_labelled(SceneLabel::Floor).map(|floor| FloorAnchor {
            id: floor.id,
            center: floor.center,
            size: floor.size(),
            boundary: floor.boundary.clone(),
        })
    }

    fn sample_point_on_surface(
        &self,
        rng: &mut dyn RandomSource,
        surface: SurfaceType,
        min_clearance: f32,
        filter: LabelFilter,
    ) -> Option<SurfaceSample> {
        let candidates: Vec<&PlaneAnchor> = self
            .planes
            .iter()
            .filter(|p| p.surface_type() == surface && filter.allows(p.label))
            .collect();
        let plane = Self::pick_by_area(&candidates, rng)?;

        let (min, max) = plane.rect();
        let size = max - min;
        for _ in 0..MAX_SURFACE_TRIES {
            let local = min + Vec2::new(rng.unit() * size.x, rng.unit() * size.y);
            if plane.contains_local(local) && plane.edge_distance(local) >= min_clearance {
                return Some(SurfaceSample {
                    point: plane.local_to_world(local),
                    normal: plane.normal(),
                });
            }
        }
        None
    }

    fn is_point_in_room(&self, point: Vec3) -> bool {
        let Some(floor) = self.plane_labelled(SceneLabel::Floor) else {
            return false;
        };
        if point.y < floor.center.y - HEIGHT_EPSILON {
            return false;
        }
        if let Some(ceiling) = self.plane_labelled(SceneLabel::Ceiling) {
            if point.y > ceiling.center.y + HEIGHT_EPSILON {
                return false;
            }
        }
        floor.contains_local(floor.world_to_local(point))
    }

    fn is_point_in_scene_volume(&self, point: Vec3) -> bool {
        self.volumes.iter().any(|v| v.bounds.contains(point))
    }
}
