//! A **paired-coordinate annotation shape engine**: the geometric core of a
//! brain-viewer annotation layer, maintaining two parallel, ordered polygon
//! rings (the end caps of a 3D sample volume) through structural edits and
//! interactive drags across the viewer's coordinate spaces.
//!
//! The engine is deliberately GUI-free. The viewer builds a
//! [`SpatialModification`] from each mouse event and hands it to
//! [`PairedCoordinateShape::apply_spatial_modification`]; the returned
//! boolean says whether anything moved and a redraw is due. Structural edits
//! (pair insertion, paired removal, midpoint subdivision) keep the two ring
//! halves index-synchronized, and polyhedron shapes re-project a dragged
//! vertex's mirror onto the opposite face's plane so the caps stay
//! geometrically consistent.
//!
//! # Features
//! - **f64** (default): use f64 as `Real`
//! - **f32**: use f32 as `Real`, mutually exclusive with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod coordinate;
pub mod engine;
pub mod errors;
pub mod float_types;
pub mod modification;
pub mod plane;
pub mod polyhedron;
pub mod shape;
pub mod space;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use coordinate::{Coordinate, Structure, SurfaceVertex};
pub use errors::ModificationError;
pub use modification::{DeltaAux, SpatialModification, SurfaceAux};
pub use plane::Plane;
pub use polyhedron::{PolyhedronEnds, ShapeKind};
pub use shape::PairedCoordinateShape;
pub use space::{CoordinateSpace, SizingHandle};
