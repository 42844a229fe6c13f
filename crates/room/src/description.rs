//! Room layouts on disk (RON), used for replaying scans and for headless runs.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::anchor::{AnchorId, Bounds, PlaneAnchor, VolumeAnchor};
use crate::error::RoomError;
use crate::labels::SceneLabel;
use crate::room::ScannedRoom;

/// Which way a described plane faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Wall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneDescription {
    pub label: SceneLabel,
    pub center: Vec3,
    pub facing: Facing,
    /// Heading about +Y applied before tilting the plane.
    #[serde(default)]
    pub yaw_degrees: f32,
    /// Outline in the plane's local coordinates.
    pub boundary: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDescription {
    pub label: SceneLabel,
    pub center: Vec3,
    pub size: Vec3,
}

/// Serializable room layout. Anchor ids are assigned in file order, planes first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomDescription {
    pub planes: Vec<PlaneDescription>,
    #[serde(default)]
    pub volumes: Vec<VolumeDescription>,
}

impl RoomDescription {
    pub fn from_ron_str(data: &str) -> Result<Self, RoomError> {
        ron::from_str(data).map_err(|e| RoomError::Ron(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RoomError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&data)
    }

    /// Build and validate the room.
    pub fn build(&self) -> Result<ScannedRoom, RoomError> {
        let mut next_id = 1u32;
        let mut take_id = || {
            let id = AnchorId(next_id);
            next_id += 1;
            id
        };

        let planes = self
            .planes
            .iter()
            .map(|p| PlaneAnchor {
                id: take_id(),
                label: p.label,
                center: p.center,
                rotation: plane_rotation(p.facing, p.yaw_degrees),
                boundary: p.boundary.clone(),
            })
            .collect();
        let volumes = self
            .volumes
            .iter()
            .map(|v| VolumeAnchor {
                id: take_id(),
                label: v.label,
                bounds: Bounds::from_center_size(v.center, v.size),
            })
            .collect();

        ScannedRoom::new(planes, volumes)
    }
}

fn plane_rotation(facing: Facing, yaw_degrees: f32) -> Quat {
    let yaw = Quat::from_rotation_y(yaw_degrees.to_radians());
    match facing {
        Facing::Up => yaw * Quat::from_rotation_x(-FRAC_PI_2),
        Facing::Down => yaw * Quat::from_rotation_x(FRAC_PI_2),
        Facing::Wall => yaw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::SurfaceType;
    use crate::room::RoomQuery;

    const LAYOUT: &str = r#"
        (
            planes: [
                (
                    label: Floor,
                    center: (0.0, 0.0, 0.0),
                    facing: Up,
                    boundary: [(-2.0, -1.5), (2.0, -1.5), (2.0, 1.5), (-2.0, 1.5)],
                ),
                (
                    label: Ceiling,
                    center: (0.0, 2.4, 0.0),
                    facing: Down,
                    boundary: [(-2.0, -1.5), (2.0, -1.5), (2.0, 1.5), (-2.0, 1.5)],
                ),
                (
                    label: WallFace,
                    center: (0.0, 1.2, -1.5),
                    facing: Wall,
                    yaw_degrees: 0.0,
                    boundary: [(-2.0, -1.2), (2.0, -1.2), (2.0, 1.2), (-2.0, 1.2)],
                ),
            ],
            volumes: [
                (label: Couch, center: (1.2, 0.4, 1.0), size: (1.6, 0.8, 0.8)),
            ],
        )
    "#;

    #[test]
    fn parses_and_builds_layout() {
        let room = RoomDescription::from_ron_str(LAYOUT).unwrap().build().unwrap();
        assert_eq!(room.planes().len(), 3);
        assert_eq!(room.volumes().len(), 1);
        assert_eq!(room.volumes()[0].id, AnchorId(4));
        assert_eq!(room.planes()[0].surface_type(), SurfaceType::FacingUp);
        assert_eq!(room.planes()[1].surface_type(), SurfaceType::FacingDown);
        assert_eq!(room.planes()[2].surface_type(), SurfaceType::Vertical);
        assert!(room.has_label(SceneLabel::Couch));
        assert_eq!(room.floor_anchor().unwrap().size, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let err = RoomDescription::from_ron_str("( planes: [ (label: Floor ) ] )").unwrap_err();
        assert!(matches!(err, RoomError::Ron(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RoomDescription::load("definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, RoomError::Io(_)));
    }

    #[test]
    fn degenerate_outline_fails_build() {
        let mut desc = RoomDescription::from_ron_str(LAYOUT).unwrap();
        desc.planes[0].boundary.truncate(2);
        assert!(matches!(
            desc.build(),
            Err(RoomError::DegenerateBoundary { anchor: 1, .. })
        ));
    }
}
