/// Frustum — six oriented planes for visibility culling.
///
/// Each plane is stored as a unit normal and a point on the plane.
/// Normals point inward (toward the frustum centroid), so a point P is
/// inside the frustum iff `normal · (P - point) >= 0` for all six planes.
/// A point lying exactly on a plane counts as inside.
///
/// Frustums are values: `FrustumBuilder` returns one per frame and the
/// caller passes it to the classifier. Nothing is cached globally.

use std::fmt;
use glam::{Vec3, Vec4};
use crate::error::{Error, Result};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// One of the six faces of a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumFace {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl FrustumFace {
    /// All faces, in plane index order.
    pub const ALL: [FrustumFace; 6] = [
        FrustumFace::Left,
        FrustumFace::Right,
        FrustumFace::Bottom,
        FrustumFace::Top,
        FrustumFace::Near,
        FrustumFace::Far,
    ];

    /// Index of this face in `Frustum::planes()`.
    pub fn index(self) -> usize {
        match self {
            FrustumFace::Left => PLANE_LEFT,
            FrustumFace::Right => PLANE_RIGHT,
            FrustumFace::Bottom => PLANE_BOTTOM,
            FrustumFace::Top => PLANE_TOP,
            FrustumFace::Near => PLANE_NEAR,
            FrustumFace::Far => PLANE_FAR,
        }
    }
}

impl fmt::Display for FrustumFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrustumFace::Left => "left",
            FrustumFace::Right => "right",
            FrustumFace::Bottom => "bottom",
            FrustumFace::Top => "top",
            FrustumFace::Near => "near",
            FrustumFace::Far => "far",
        };
        f.write_str(name)
    }
}

// ===== PLANE =====

/// Half-space boundary: unit normal plus a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
}

impl Plane {
    /// Build a plane through three points.
    ///
    /// The normal is `(b - a) × (c - a)`, normalized. Its orientation
    /// depends on the winding; use `oriented_towards` to fix it.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateNormal` if the sine of the angle between the two
    /// edges `b - a` and `c - a` is not above `epsilon` (collinear or
    /// coincident points, or NaN input). The test does not depend on the
    /// size of the triangle.
    pub fn from_points(face: FrustumFace, a: Vec3, b: Vec3, c: Vec3, epsilon: f32) -> Result<Self> {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.cross(ac);
        let magnitude = cross.length();

        // |ab × ac| = |ab| |ac| sin(angle); negated comparison also rejects NaN
        if !(magnitude > epsilon * ab.length() * ac.length()) {
            return Err(Error::DegenerateNormal { face, magnitude });
        }

        Ok(Self {
            normal: cross / magnitude,
            point: a,
        })
    }

    /// Build a plane from a unit normal and a point on it.
    pub fn from_normal_point(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Reference point on the plane.
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Plane constant `d = -normal · point`, so that `normal · x + d = 0` on the plane.
    pub fn d(&self) -> f32 {
        -self.normal.dot(self.point)
    }

    /// Plane as (A, B, C, D) with `Ax + By + Cz + D = 0`.
    pub fn as_vec4(&self) -> Vec4 {
        self.normal.extend(self.d())
    }

    /// Signed distance of `point` from the plane (positive on the normal side).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.point)
    }

    /// Inclusive half-space test: points on the plane are inside.
    pub fn contains(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Same plane with the normal reversed.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            point: self.point,
        }
    }

    /// Same plane, with the normal flipped if `target` is not strictly on
    /// the positive side.
    pub fn oriented_towards(&self, target: Vec3) -> Self {
        if self.signed_distance(target) > 0.0 {
            *self
        } else {
            self.flipped()
        }
    }
}

// ===== CORNERS =====

/// The eight corners of a frustum.
///
/// Each quad is ordered top-left, top-right, bottom-right, bottom-left
/// as seen from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub near: [Vec3; 4],
    pub far: [Vec3; 4],
}

impl FrustumCorners {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_RIGHT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const BOTTOM_LEFT: usize = 3;

    /// Near corners followed by far corners.
    pub fn all(&self) -> [Vec3; 8] {
        let [n0, n1, n2, n3] = self.near;
        let [f0, f1, f2, f3] = self.far;
        [n0, n1, n2, n3, f0, f1, f2, f3]
    }
}

// ===== FRUSTUM =====

/// Six inward-facing planes plus the corners they were built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
    corners: FrustumCorners,
    centroid: Vec3,
}

impl Frustum {
    /// Assemble a frustum (crate-internal: only FrustumBuilder creates these).
    pub(crate) fn from_parts(planes: [Plane; 6], corners: FrustumCorners, centroid: Vec3) -> Self {
        Self { planes, corners, centroid }
    }

    /// Planes: left, right, bottom, top, near, far
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Plane for one face.
    pub fn plane(&self, face: FrustumFace) -> &Plane {
        &self.planes[face.index()]
    }

    /// Corner points the planes were built from.
    pub fn corners(&self) -> &FrustumCorners {
        &self.corners
    }

    /// Midpoint between the near and far centers, on the view axis.
    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    /// Planes as (A, B, C, D), e.g. for upload to a GPU culling pass.
    pub fn plane_equations(&self) -> [Vec4; 6] {
        self.planes.map(|plane| plane.as_vec4())
    }

    /// Signed distance of `point` to each plane, in plane index order.
    pub fn signed_distances(&self, point: Vec3) -> [f32; 6] {
        self.planes.map(|plane| plane.signed_distance(point))
    }

    /// Point-in-frustum test: inside (or on) all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.contains(point))
    }

    /// True as soon as one of `points` is inside the frustum.
    pub fn contains_any<I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = Vec3>,
    {
        points.into_iter().any(|point| self.contains_point(point))
    }

    /// The twelve edges of the frustum as line segments, for debug drawing.
    ///
    /// Order: four near-to-far edges, four far-quad edges, four near-quad edges.
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let n = self.corners.near;
        let f = self.corners.far;
        [
            (n[0], f[0]), (n[1], f[1]), (n[2], f[2]), (n[3], f[3]),
            (f[0], f[1]), (f[1], f[2]), (f[2], f[3]), (f[3], f[0]),
            (n[0], n[1]), (n[1], n[2]), (n[2], n[3]), (n[3], n[0]),
        ]
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
