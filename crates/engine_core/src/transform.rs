//! Transform component and utilities for spatial positioning.

use glam::{Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform standing upright at `position`, turned `degrees` about +Y.
    pub fn from_position_yaw(position: Vec3, degrees: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(degrees.to_radians()),
            ..Default::default()
        }
    }

    /// Builder-style uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Heading about +Y in degrees, normalised to [0, 360).
    pub fn yaw_degrees(&self) -> f32 {
        let fwd = self.forward();
        // Forward of an unrotated transform is -Z, so heading 0 maps to atan2(0, 1).
        let yaw = (-fwd.x).atan2(-fwd.z).to_degrees();
        yaw.rem_euclid(360.0)
    }
}
