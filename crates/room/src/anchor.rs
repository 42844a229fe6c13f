//! Scanned anchors: planar surfaces and furniture volumes.

use glam::{Quat, Vec2, Vec3};

use crate::labels::SceneLabel;

/// Minimum |normal.y| for a plane to count as horizontal.
const HORIZONTAL_COS: f32 = 0.7;

/// Stable identity of an anchor inside one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u32);

/// Orientation class of a planar anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    FacingUp,
    FacingDown,
    Vertical,
}

/// A flat scanned surface (floor, ceiling, wall, table top…).
///
/// The boundary polygon lives in the plane's local XY; local +Z is the
/// surface normal.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub id: AnchorId,
    pub label: SceneLabel,
    pub center: Vec3,
    pub rotation: Quat,
    pub boundary: Vec<Vec2>,
}

impl PlaneAnchor {
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn surface_type(&self) -> SurfaceType {
        let y = self.normal().y;
        if y >= HORIZONTAL_COS {
            SurfaceType::FacingUp
        } else if y <= -HORIZONTAL_COS {
            SurfaceType::FacingDown
        } else {
            SurfaceType::Vertical
        }
    }

    pub fn local_to_world(&self, local: Vec2) -> Vec3 {
        self.center + self.rotation * local.extend(0.0)
    }

    pub fn world_to_local(&self, world: Vec3) -> Vec2 {
        (self.rotation.inverse() * (world - self.center)).truncate()
    }

    /// Axis-aligned rectangle enclosing the boundary, in local coordinates.
    pub fn rect(&self) -> (Vec2, Vec2) {
        self.boundary.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Planar size of the boundary rectangle.
    pub fn size(&self) -> Vec2 {
        if self.boundary.is_empty() {
            return Vec2::ZERO;
        }
        let (min, max) = self.rect();
        max - min
    }

    pub fn area(&self) -> f32 {
        polygon_area(&self.boundary)
    }

    pub fn contains_local(&self, p: Vec2) -> bool {
        polygon_contains(&self.boundary, p)
    }

    /// Distance from `p` to the nearest boundary edge.
    pub fn edge_distance(&self, p: Vec2) -> f32 {
        polygon_edge_distance(&self.boundary, p)
    }
}

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// A furniture or obstacle volume.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeAnchor {
    pub id: AnchorId,
    pub label: SceneLabel,
    pub bounds: Bounds,
}

// ── Polygon helpers ─────────────────────────────────────────────────────

fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    (twice * 0.5).abs()
}

/// Even-odd rule.
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn polygon_edge_distance(points: &[Vec2], p: Vec2) -> f32 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| segment_distance(*a, *b, p))
        .fold(f32::INFINITY, f32::min)
}

fn segment_distance(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
