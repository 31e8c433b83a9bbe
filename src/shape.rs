//! `PairedCoordinateShape` struct and its structural edit operations.
//!
//! The shape owns an ordered sequence of [`Coordinate`]s. For polyhedron
//! shapes the sequence is logically two equal halves, "polygon one"
//! (indices `[0, half)`) and "polygon two" (indices `[half, len)`), each a
//! closed ring; the coordinate at ring-relative position `i` in one ring is
//! mirrored by the coordinate at the same position in the other. Structural
//! edits keep the two halves growing and shrinking in lock-step.
//!
//! Index arguments are trusted: an out-of-range index is a programming
//! error in the calling layer and panics, it is not a reported error.

use crate::coordinate::{Coordinate, SurfaceVertex};
use crate::float_types::{EPSILON, Real};
use crate::plane::triangle_normal;
use crate::polyhedron::ShapeKind;
use crate::space::CoordinateSpace;

/// An annotation shape made of paired, ordered coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedCoordinateShape {
    coordinates: Vec<Coordinate>,
    space: CoordinateSpace,
    tab_index: i32,
    window_index: i32,
    /// Attribute defaults applied to coordinates this shape synthesizes
    /// itself (midpoint insertion).
    default_surface: Option<SurfaceVertex>,
    kind: ShapeKind,
    modified: bool,
}

impl PairedCoordinateShape {
    /// New empty generic shape in `space`.
    pub fn new(space: CoordinateSpace) -> Self {
        PairedCoordinateShape {
            coordinates: Vec::new(),
            space,
            tab_index: -1,
            window_index: -1,
            default_surface: None,
            kind: ShapeKind::Generic,
            modified: false,
        }
    }

    /// New empty polyhedron shape in `space`, anchors at the origin.
    pub fn new_polyhedron(space: CoordinateSpace) -> Self {
        PairedCoordinateShape {
            kind: ShapeKind::polyhedron(),
            ..PairedCoordinateShape::new(space)
        }
    }

    /// Coordinate space the positions are expressed in.
    pub const fn space(&self) -> CoordinateSpace {
        self.space
    }

    pub fn set_space(&mut self, space: CoordinateSpace) {
        self.space = space;
        self.modified = true;
    }

    pub const fn tab_index(&self) -> i32 {
        self.tab_index
    }

    pub fn set_tab_index(&mut self, tab_index: i32) {
        self.tab_index = tab_index;
        self.modified = true;
    }

    pub const fn window_index(&self) -> i32 {
        self.window_index
    }

    pub fn set_window_index(&mut self, window_index: i32) {
        self.window_index = window_index;
        self.modified = true;
    }

    /// Defaults applied to synthesized coordinates.
    pub const fn default_surface(&self) -> Option<SurfaceVertex> {
        self.default_surface
    }

    pub fn set_default_surface(&mut self, surface: Option<SurfaceVertex>) {
        self.default_surface = surface;
    }

    pub(crate) const fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate at `index`. Out of range panics.
    pub fn coordinate(&self, index: usize) -> &Coordinate {
        &self.coordinates[index]
    }

    /// Mutable coordinate at `index`. Out of range panics.
    pub fn coordinate_mut(&mut self, index: usize) -> &mut Coordinate {
        &mut self.coordinates[index]
    }

    /// All coordinates in order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub(crate) fn coordinates_mut(&mut self) -> &mut [Coordinate] {
        &mut self.coordinates
    }

    /// Append a single coordinate, taking ownership.
    ///
    /// Places no constraint on the resulting parity; this is the primitive
    /// used while the first face of a polyhedron is still being drawn.
    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
        self.modified = true;
    }

    /// Insert a coordinate pair, one per half.
    ///
    /// On an empty shape simply appends `first` then `second`. Otherwise the
    /// current count must be even (violating this is a programming error);
    /// `first` is inserted at the midpoint so it becomes the new last entry
    /// of polygon one, and `second` is appended as the new last entry of
    /// polygon two. The count is even afterwards.
    pub fn add_coordinate_pair(&mut self, first: Coordinate, second: Coordinate) {
        if self.coordinates.is_empty() {
            self.coordinates.push(first);
            self.coordinates.push(second);
        } else {
            assert!(
                self.coordinates.len() % 2 == 0,
                "add_coordinate_pair requires an even coordinate count, have {}",
                self.coordinates.len()
            );
            let half_offset = self.coordinates.len() / 2;
            self.coordinates.insert(half_offset, first);
            self.coordinates.push(second);
        }
        self.modified = true;
    }

    /// Clear and deep-copy every coordinate from `source`.
    pub fn replace_all_coordinates(&mut self, source: &[Coordinate]) {
        self.coordinates.clear();
        for coordinate in source {
            self.add_coordinate(coordinate.clone());
        }
        self.modified = true;
    }

    /// Insert a synthesized coordinate immediately after `index_one`, at
    /// fractional distance `t` (0..=1) from the coordinate at `index_one`
    /// toward the coordinate at `index_two` along the straight line between
    /// them. The new coordinate carries this shape's default attributes.
    pub fn insert_single_coordinate(&mut self, index_one: usize, index_two: usize, t: Real) {
        let p1 = self.coordinates[index_one].xyz();
        let p2 = self.coordinates[index_two].xyz();
        let v = p2 - p1;
        let length = v.norm();
        let pos = if length < EPSILON {
            p1
        } else {
            p1 + (v / length) * (length * t)
        };

        let mut coordinate = Coordinate::new(pos);
        if let Some(surface) = self.default_surface {
            coordinate.set_surface_vertex(surface);
        }

        let insert_index = index_one + 1;
        assert!(
            insert_index <= self.coordinates.len(),
            "insert index {} exceeds coordinate count {}",
            insert_index,
            self.coordinates.len()
        );
        // Vec::insert appends when insert_index == len
        self.coordinates.insert(insert_index, coordinate);
        self.modified = true;
    }

    /// Remove the coordinate at `index` and its mirror in the other half.
    ///
    /// The mirror is `index + half` when `index` is in polygon one, else
    /// `index - half`, with `half` evaluated before either removal. The
    /// higher index is removed first so the second removal is not shifted.
    pub fn remove_coordinate_at_index(&mut self, index: usize) {
        let count = self.coordinates.len();
        assert!(index < count, "remove index {} out of range {}", index, count);
        let half = count / 2;
        let mirror = if index < half { index + half } else { index - half };

        let (higher, lower) = if mirror > index {
            (mirror, index)
        } else {
            (index, mirror)
        };
        self.coordinates.remove(higher);
        if lower != higher {
            self.coordinates.remove(lower);
        }
        self.modified = true;
    }

    /// Removal entry point for interactive annotation editing.
    ///
    /// `remove_pair == false` removes only the coordinate at `index`; that
    /// mode exists solely for the drawing-in-progress state where just one
    /// face of a polyhedron exists, and must not be used once both faces
    /// are complete.
    pub fn remove_coordinate_single_or_pair(&mut self, index: usize, remove_pair: bool) {
        if remove_pair {
            self.remove_coordinate_at_index(index);
        } else {
            let count = self.coordinates.len();
            assert!(index < count, "remove index {} out of range {}", index, count);
            self.coordinates.remove(index);
            self.modified = true;
        }
    }

    /// Copy coordinate values, size, and rotation state from `other`.
    ///
    /// When the counts match every coordinate value is copied in place,
    /// preserving identity and index mapping; otherwise all coordinates are
    /// discarded and deep-copied from `other`. Space, tab index, and window
    /// index always follow, as do the polyhedron anchors when both shapes
    /// are polyhedra. Always marks modified.
    pub fn apply_coordinates_size_and_rotation_from(&mut self, other: &PairedCoordinateShape) {
        if self.coordinates.len() == other.coordinates.len() {
            for (dst, src) in self.coordinates.iter_mut().zip(&other.coordinates) {
                dst.copy_values_from(src);
            }
        } else {
            self.coordinates = other.coordinates.clone();
        }

        self.space = other.space;
        self.tab_index = other.tab_index;
        self.window_index = other.window_index;

        if let (ShapeKind::Polyhedron(mine), ShapeKind::Polyhedron(theirs)) =
            (&mut self.kind, &other.kind)
        {
            *mine = *theirs;
        }

        self.modified = true;
    }

    /// True when the shape or any owned coordinate has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified || self.coordinates.iter().any(Coordinate::is_modified)
    }

    pub fn set_modified(&mut self) {
        self.modified = true;
    }

    /// Clear the shape flag and every owned coordinate's flag.
    pub fn clear_modified(&mut self) {
        self.modified = false;
        for coordinate in &mut self.coordinates {
            coordinate.clear_modified();
        }
    }

    /// Indices of the clockwise and counter-clockwise neighbors of the
    /// coordinate at `index`, judged from a 3-vertex window around it.
    ///
    /// The window is clamped so it never starts before index 0 or ends past
    /// the last index. When the window normal's z component is negative the
    /// window ends are swapped, so the reported winding is consistent
    /// regardless of which side the normal points. Returns `None` in
    /// surface space, with fewer than 3 coordinates, or when the window is
    /// geometrically degenerate.
    pub fn clockwise_and_counter_clockwise_coordinates(
        &self,
        index: usize,
    ) -> Option<(usize, usize)> {
        if self.space == CoordinateSpace::Surface {
            log::debug!("winding lookup not available in Surface space");
            return None;
        }
        let count = self.coordinates.len();
        if count < 3 {
            log::debug!("winding lookup needs at least 3 coordinates, have {}", count);
            return None;
        }
        assert!(index < count, "index {} out of range {}", index, count);

        let (mut first, mut last) = if index == 0 {
            (0, 2)
        } else if index == count - 1 {
            (count - 3, count - 1)
        } else {
            (index - 1, index + 1)
        };
        let middle = first + 1;

        let normal = triangle_normal(
            &self.coordinates[first].xyz(),
            &self.coordinates[middle].xyz(),
            &self.coordinates[last].xyz(),
        )?;
        if normal.z < 0.0 {
            std::mem::swap(&mut first, &mut last);
        }

        // With the window wound counter-clockwise (normal z positive),
        // `first` precedes `index` and is its clockwise neighbor.
        Some((first, last))
    }
}
