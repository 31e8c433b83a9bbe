//! Infinite planes in normal/offset form, derived from ring vertices and
//! used to keep a polyhedron's two faces geometrically consistent.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// A plane in Hessian normal form: all points `p` with `n·p = w`.
///
/// Construction can fail when the input geometry is degenerate, so the
/// constructors return `Option`; an existing `Plane` value is always valid
/// (unit normal, finite offset).
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3<Real>,
    w: Real,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and offset.
    /// Returns `None` when the normal is near zero.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Option<Self> {
        let len = normal.norm();
        if len < EPSILON {
            return None;
        }
        Some(Plane {
            normal: normal / len,
            w: w / len,
        })
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: `(p2-p1) × (p3-p1)`.
    /// Returns `None` for a degenerate (collinear or coincident) triple.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Option<Self> {
        let v1 = p2 - p1;
        let v2 = p3 - p1;
        let normal = v1.cross(&v2);

        if normal.norm_squared() < EPSILON * EPSILON {
            return None;
        }

        let normal = normal.normalize();
        let w = normal.dot(&p1.coords);
        Some(Plane { normal, w })
    }

    /// Best-fit plane of a closed ring of points using Newell's method,
    /// anchored at the ring centroid. Returns `None` when fewer than 3
    /// points are given or all points are (near-)collinear.
    pub fn from_ring(points: &[Point3<Real>]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let mut normal = Vector3::zeros();
        let mut centroid = Vector3::zeros();
        for i in 0..points.len() {
            let curr = points[i];
            let next = points[(i + 1) % points.len()];
            normal += (curr - Point3::origin()).cross(&(next - Point3::origin()));
            centroid += curr.coords;
        }

        if normal.norm_squared() < EPSILON * EPSILON {
            return None;
        }

        let normal = normal.normalize();
        let centroid = centroid / points.len() as Real;
        Some(Plane {
            normal,
            w: normal.dot(&centroid),
        })
    }

    /// Unit normal vector of the plane.
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Distance from origin along the normal.
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Signed distance of `point` from the plane (positive on the normal side).
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Point3<Real>) -> Point3<Real> {
        point - self.normal * self.signed_distance(point)
    }
}

/// Normal of the triangle `(a, b, c)` by the right-hand rule, or `None`
/// when the triple is degenerate.
pub fn triangle_normal(
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
) -> Option<Vector3<Real>> {
    let n = (b - a).cross(&(c - a));
    if n.norm_squared() < EPSILON * EPSILON {
        None
    } else {
        Some(n.normalize())
    }
}
