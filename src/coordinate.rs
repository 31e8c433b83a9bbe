//! Struct and functions for working with `Coordinate`s, the owned points a
//! [`PairedCoordinateShape`](crate::shape::PairedCoordinateShape) is composed of.

use crate::float_types::Real;
use nalgebra::Point3;

/// Anatomical structure a surface-space coordinate is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Structure {
    CortexLeft,
    CortexRight,
    Cerebellum,
    Brainstem,
    All,
    #[default]
    Invalid,
}

impl Structure {
    /// Display name of the structure.
    pub const fn name(&self) -> &'static str {
        match self {
            Structure::CortexLeft => "CortexLeft",
            Structure::CortexRight => "CortexRight",
            Structure::Cerebellum => "Cerebellum",
            Structure::Brainstem => "Brainstem",
            Structure::All => "All",
            Structure::Invalid => "Invalid",
        }
    }
}

/// Surface-space attachment: a vertex of a particular surface tessellation.
///
/// `surface_vertex_count` identifies the tessellation; a coordinate attached
/// to vertex `k` of a 32k-vertex left hemisphere is not interchangeable with
/// vertex `k` of a 164k-vertex one, or of the right hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceVertex {
    pub structure: Structure,
    pub surface_vertex_count: usize,
    pub vertex_index: usize,
}

impl SurfaceVertex {
    pub const fn new(structure: Structure, surface_vertex_count: usize, vertex_index: usize) -> Self {
        SurfaceVertex {
            structure,
            surface_vertex_count,
            vertex_index,
        }
    }

    /// True when `other` refers to the same structure and tessellation.
    pub fn same_surface(&self, other: &SurfaceVertex) -> bool {
        self.structure == other.structure
            && self.surface_vertex_count == other.surface_vertex_count
    }
}

/// A single owned coordinate of an annotation shape.
///
/// Positions are interpreted according to the owning shape's coordinate
/// space: percentages in Tab/Window space, raw model units in Stereotaxic
/// and Chart space, pixel units in Media/Histology space. Surface-space
/// coordinates additionally carry a [`SurfaceVertex`] attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pos: Point3<Real>,
    surface: Option<SurfaceVertex>,
    modified: bool,
}

impl Coordinate {
    /// Create a new [`Coordinate`] at `pos` with no surface attachment.
    pub const fn new(pos: Point3<Real>) -> Self {
        Coordinate {
            pos,
            surface: None,
            modified: false,
        }
    }

    /// Convenience constructor from components.
    pub fn from_xyz(x: Real, y: Real, z: Real) -> Self {
        Coordinate::new(Point3::new(x, y, z))
    }

    /// Position of this coordinate.
    pub const fn xyz(&self) -> Point3<Real> {
        self.pos
    }

    /// Replace the position and mark modified.
    pub fn set_xyz(&mut self, pos: Point3<Real>) {
        self.pos = pos;
        self.modified = true;
    }

    /// Translate the position by a delta and mark modified.
    pub fn add_xyz(&mut self, dx: Real, dy: Real, dz: Real) {
        self.pos.x += dx;
        self.pos.y += dy;
        self.pos.z += dz;
        self.modified = true;
    }

    /// Surface attachment, if this coordinate lives in surface space.
    pub const fn surface_vertex(&self) -> Option<SurfaceVertex> {
        self.surface
    }

    /// Attach this coordinate to a surface vertex and mark modified.
    pub fn set_surface_vertex(&mut self, surface: SurfaceVertex) {
        self.surface = Some(surface);
        self.modified = true;
    }

    /// Copy position and attachment from `other`, preserving identity.
    pub fn copy_values_from(&mut self, other: &Coordinate) {
        self.pos = other.pos;
        self.surface = other.surface;
        self.modified = true;
    }

    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self) {
        self.modified = true;
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }
}
