//! Axis-aligned bounding boxes.

use crate::math::{Vec3, vec3_max, vec3_min};

/// Axis-aligned bounding box defined by its minimum and maximum corners.
///
/// A box whose `max` is smaller than its `min` on any axis is *invalid*.
/// Invalid boxes are the sentinel for "no bounds supplied" when building a
/// triangle mesh; [`Aabb::EMPTY`] is the canonical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Inverted box that contains nothing. Extending it by a point yields
    /// a box containing exactly that point.
    pub const EMPTY: Self = Self {
        min: Vec3::new(f32::MAX, f32::MAX, f32::MAX),
        max: Vec3::new(f32::MIN, f32::MIN, f32::MIN),
    };

    /// Creates a box from its corners. No reordering is performed.
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the tightest box around `points` by brute force.
    ///
    /// Returns [`Aabb::EMPTY`] for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |aabb, p| aabb.extended(p))
    }

    /// Whether `max >= min` on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.max.x >= self.min.x && self.max.y >= self.min.y && self.max.z >= self.min.z
    }

    /// Returns this box grown to include `point`.
    #[inline]
    #[must_use]
    pub fn extended(&self, point: &Vec3) -> Self {
        Self {
            min: vec3_min(&self.min, point),
            max: vec3_max(&self.max, point),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: vec3_min(&self.min, &other.min),
            max: vec3_max(&self.max, &other.max),
        }
    }

    /// Whether `point` lies inside the box (boundary included).
    #[inline]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Whether the two boxes overlap. Touching faces count as overlap.
    /// An invalid box overlaps nothing.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_invalid() {
        assert!(!Aabb::EMPTY.is_valid());
        assert!(!Aabb::default().is_valid());
    }

    #[test]
    fn degenerate_sentinel_is_invalid() {
        let aabb = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::zeros());
        assert!(!aabb.is_valid());

        // A single inverted axis is enough.
        let aabb = Aabb::new(Vec3::zeros(), Vec3::new(1.0, -0.5, 1.0));
        assert!(!aabb.is_valid());
    }

    #[test]
    fn point_box_is_valid() {
        let p = Vec3::new(2.0, 3.0, 4.0);
        assert!(Aabb::new(p, p).is_valid());
    }

    #[test]
    fn from_points_brute_force() {
        let aabb = Aabb::from_points(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.0, 5.0),
        ]);
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn from_no_points_is_empty() {
        assert_eq!(Aabb::from_points(&[]), Aabb::EMPTY);
    }

    #[test]
    fn intersection_and_containment() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(1.0, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0));
        let c = Aabb::new(Vec3::new(1.5, 1.5, 1.5), Vec3::new(2.0, 2.0, 2.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&Aabb::EMPTY));

        assert!(a.contains_point(&Vec3::new(0.5, 0.5, 0.5)));
        assert!(a.contains_point(&Vec3::new(1.0, 1.0, 1.0)));
        assert!(!a.contains_point(&Vec3::new(1.0, 1.1, 1.0)));
    }

    #[test]
    fn inverted_box_overlaps_nothing() {
        // Inverted on x only; the valid box spans the gap between max.x and min.x.
        let inverted = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        let unit = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert!(!inverted.intersects(&unit));
        assert!(!unit.intersects(&inverted));
    }

    #[test]
    fn union_center_size() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 1.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(u.max, Vec3::new(1.0, 3.0, 1.0));
        assert_eq!(u.center(), Vec3::new(0.0, 1.5, 0.5));
        assert_eq!(u.size(), Vec3::new(2.0, 3.0, 1.0));
    }
}
