//! Transform target seam
//!
//! Transform tweens write position, rotation (Euler angles) or scale onto a
//! host-owned scene-graph node through [`TransformTarget`]. Hosts with a real
//! scene graph implement the trait for their own node type; [`Transform`] is
//! a minimal reference implementation.

use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_name, Error, Result};
use crate::geometry::Vec3;

/// Coordinate space a transform write is expressed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Space {
    /// Relative to the parent frame
    Local,
    /// Absolute (world) coordinates
    #[default]
    World,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Space::Local => "local",
            Space::World => "world",
        })
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "local" => Ok(Space::Local),
            "world" | "absolute" => Ok(Space::World),
            _ => Err(Error::UnknownSpace(s.to_string())),
        }
    }
}

/// Which attribute of a transform an animation drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TransformProperty {
    Position,
    /// Euler angles in degrees
    Rotation,
    /// Always written in local space
    Scale,
}

impl TransformProperty {
    /// Write `value` to this property of `target`
    pub fn write<T: TransformTarget + ?Sized>(self, target: &mut T, value: Vec3, space: Space) {
        match self {
            TransformProperty::Position => target.set_position(value, space),
            TransformProperty::Rotation => target.set_euler_angles(value, space),
            TransformProperty::Scale => target.set_local_scale(value),
        }
    }
}

impl fmt::Display for TransformProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransformProperty::Position => "position",
            TransformProperty::Rotation => "rotation",
            TransformProperty::Scale => "scale",
        })
    }
}

impl FromStr for TransformProperty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "position" => Ok(TransformProperty::Position),
            "rotation" => Ok(TransformProperty::Rotation),
            "scale" => Ok(TransformProperty::Scale),
            _ => Err(Error::UnknownProperty(s.to_string())),
        }
    }
}

/// A scene-graph node whose position, rotation and scale can be animated
pub trait TransformTarget {
    fn set_position(&mut self, position: Vec3, space: Space);

    /// Set rotation as Euler angles in degrees
    fn set_euler_angles(&mut self, angles: Vec3, space: Space);

    fn set_local_scale(&mut self, scale: Vec3);
}

/// Reference transform node.
///
/// The parent frame is a translation plus an Euler offset: world position is
/// `parent_position + local_position` and world rotation is
/// `parent_rotation + local_rotation`. Parent rotation does not rotate the
/// child's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    local_position: Vec3,
    local_rotation: Vec3,
    local_scale: Vec3,
    parent_position: Vec3,
    parent_rotation: Vec3,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_rotation: Vec3::ZERO,
            local_scale: Vec3::ONE,
            parent_position: Vec3::ZERO,
            parent_rotation: Vec3::ZERO,
        }
    }

    /// Attach to a parent frame at the given world position and rotation
    pub fn with_parent(mut self, position: Vec3, rotation: Vec3) -> Self {
        self.parent_position = position;
        self.parent_rotation = rotation;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.parent_position + self.local_position
    }

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn euler_angles(&self) -> Vec3 {
        self.parent_rotation + self.local_rotation
    }

    pub fn local_euler_angles(&self) -> Vec3 {
        self.local_rotation
    }

    pub fn local_scale(&self) -> Vec3 {
        self.local_scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformTarget for Transform {
    fn set_position(&mut self, position: Vec3, space: Space) {
        self.local_position = match space {
            Space::Local => position,
            Space::World => position - self.parent_position,
        };
    }

    fn set_euler_angles(&mut self, angles: Vec3, space: Space) {
        self.local_rotation = match space {
            Space::Local => angles,
            Space::World => angles - self.parent_rotation,
        };
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.local_scale = scale;
    }
}
