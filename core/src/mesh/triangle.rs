//! Triangles resolved from an indexed mesh.

use crate::math::Vec3;

use super::aabb::Aabb;

/// A triangle with concrete vertex positions.
///
/// Winding is counter-clockwise when viewed from the front, so the face
/// normal follows the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub positions: [Vec3; 3],
}

impl Triangle {
    #[inline]
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            positions: [p0, p1, p2],
        }
    }

    /// Unnormalized face normal (cross product of the two leading edges).
    #[inline]
    pub fn normal_unnormalized(&self) -> Vec3 {
        let [p0, p1, p2] = &self.positions;
        (p1 - p0).cross(&(p2 - p0))
    }

    /// Unit face normal, or `None` for a zero-area triangle.
    pub fn normal(&self) -> Option<Vec3> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f32::EPSILON * f32::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.normal_unnormalized().norm() * 0.5
    }

    #[inline]
    pub fn centroid(&self) -> Vec3 {
        let [p0, p1, p2] = &self.positions;
        (p0 + p1 + p2) / 3.0
    }

    /// Tight bounds of the three positions.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// Whether the area falls below `epsilon`.
    #[inline]
    pub fn is_degenerate(&self, epsilon: f32) -> bool {
        self.area() < epsilon
    }
}
