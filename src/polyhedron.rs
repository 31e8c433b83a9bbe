//! Polyhedron specialization: a paired shape whose two halves are the end
//! caps of a sample volume, plus the operations that keep them in sync.

use crate::coordinate::Coordinate;
use crate::errors::ModificationError;
use crate::float_types::Real;
use crate::plane::Plane;
use crate::shape::PairedCoordinateShape;
use crate::space::CoordinateSpace;
use nalgebra::Point3;

/// What a paired shape's halves mean.
///
/// The polyhedron variant replaces the downcast a class hierarchy would
/// use: polyhedron-only state lives in the variant, and the capability
/// queries below answer "is this shape a polyhedron" without ambiguity.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// A plain paired sequence with no face semantics.
    Generic,
    /// Two equal ring halves forming a polyhedron's end caps.
    Polyhedron(PolyhedronEnds),
}

impl ShapeKind {
    /// A polyhedron kind with both anchors at the origin.
    pub fn polyhedron() -> Self {
        ShapeKind::Polyhedron(PolyhedronEnds::default())
    }
}

/// Polyhedron-only state: the two named end-cap anchor points, stored in
/// stereotaxic space separately from the ring coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyhedronEnds {
    pub plane_one_anchor: Point3<Real>,
    pub plane_two_anchor: Point3<Real>,
}

impl Default for PolyhedronEnds {
    fn default() -> Self {
        PolyhedronEnds {
            plane_one_anchor: Point3::origin(),
            plane_two_anchor: Point3::origin(),
        }
    }
}

impl PairedCoordinateShape {
    /// True when this shape is a polyhedron.
    pub fn is_polyhedron(&self) -> bool {
        matches!(self.kind(), ShapeKind::Polyhedron(_))
    }

    /// Polyhedron-only state, when this shape is one.
    pub fn as_polyhedron(&self) -> Option<&PolyhedronEnds> {
        match self.kind() {
            ShapeKind::Polyhedron(ends) => Some(ends),
            ShapeKind::Generic => None,
        }
    }

    /// Mutable polyhedron-only state, when this shape is one.
    pub fn as_polyhedron_mut(&mut self) -> Option<&mut PolyhedronEnds> {
        match self.kind_mut() {
            ShapeKind::Polyhedron(ends) => Some(ends),
            ShapeKind::Generic => None,
        }
    }

    /// Number of coordinates in each ring half.
    pub fn ring_half(&self) -> usize {
        self.len() / 2
    }

    /// Polygon one: the first ring half, indices `[0, half)`.
    pub fn polygon_one(&self) -> &[Coordinate] {
        &self.coordinates()[..self.ring_half()]
    }

    /// Polygon two: the second ring half, indices `[half, len)`.
    pub fn polygon_two(&self) -> &[Coordinate] {
        &self.coordinates()[self.ring_half()..]
    }

    /// Plane of polygon one, freshly derived from its current ring vertices.
    /// `None` when the ring is degenerate.
    pub fn plane_one(&self) -> Option<Plane> {
        let points: Vec<Point3<Real>> =
            self.polygon_one().iter().map(|c| c.xyz()).collect();
        Plane::from_ring(&points)
    }

    /// Plane of polygon two, freshly derived from its current ring vertices.
    /// `None` when the ring is degenerate.
    pub fn plane_two(&self) -> Option<Plane> {
        let points: Vec<Point3<Real>> =
            self.polygon_two().iter().map(|c| c.xyz()).collect();
        Plane::from_ring(&points)
    }

    /// Re-sync the mirror of the coordinate at `index` after a drag.
    ///
    /// The mirror lives at the same ring-relative position in the opposite
    /// ring; its position is overwritten with the dragged coordinate's
    /// current position projected onto the opposite ring's plane, so the
    /// two faces stay parallel-consistent while one vertex moves. A
    /// degenerate opposite plane is a recoverable failure: nothing moves.
    ///
    /// Calling this on a non-polyhedron shape is a programming error.
    pub fn move_paired_coordinate(&mut self, index: usize) -> Result<(), ModificationError> {
        assert!(
            self.is_polyhedron(),
            "paired coordinate move requires a polyhedron shape"
        );
        let count = self.len();
        assert!(index < count, "index {} out of range {}", index, count);

        let half = count / 2;
        let (mirror, opposite_plane, ring) = if index < half {
            (index + half, self.plane_two(), "polygon two")
        } else {
            (index - half, self.plane_one(), "polygon one")
        };
        let plane = opposite_plane.ok_or(ModificationError::DegeneratePlane { ring })?;

        let projected = plane.project_point(&self.coordinate(index).xyz());
        self.coordinate_mut(mirror).set_xyz(projected);
        self.set_modified();
        Ok(())
    }

    /// Insert a new ring vertex after ring-relative position `after_index`
    /// in both rings, at fractional distance `t` along the edge it splits.
    ///
    /// `after_index == -1` wraps: the vertex is inserted between the last
    /// ring vertex and the first. The two insertions are geometrically
    /// independent (each ring interpolates its own edge) but land at the
    /// same ring-relative position. Polygon two is inserted first; its
    /// indices sit above polygon one's, so inserting into polygon one first
    /// would shift them before the second insertion is computed.
    ///
    /// Only valid for polyhedra in stereotaxic space with at least 2
    /// vertices per ring; other states are recoverable failures with no
    /// mutation.
    pub fn insert_ring_coordinate(
        &mut self,
        after_index: i64,
        t: Real,
    ) -> Result<(), ModificationError> {
        assert!(
            self.is_polyhedron(),
            "ring insertion requires a polyhedron shape"
        );
        if self.space() != CoordinateSpace::Stereotaxic {
            return Err(ModificationError::SpaceNotSupported {
                operation: "ring vertex insertion",
                space: self.space(),
            });
        }
        let half = self.ring_half();
        if half < 2 {
            return Err(ModificationError::TooFewRingVertices { have: half, need: 2 });
        }

        let from = if after_index < 0 {
            half - 1
        } else {
            let from = after_index as usize;
            assert!(from < half, "ring index {} out of range {}", from, half);
            from
        };
        let to = (from + 1) % half;

        // Polygon two first: its indices are the higher ones.
        self.insert_single_coordinate(half + from, half + to, t);
        self.insert_single_coordinate(from, to, t);
        Ok(())
    }
}
