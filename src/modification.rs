//! The per-frame spatial modification request built from mouse input.

use crate::coordinate::SurfaceVertex;
use crate::float_types::Real;
use crate::space::SizingHandle;
use nalgebra::Point3;

/// Current and previous positions of the pointer projected into one space.
///
/// The engine applies `current - previous` as the frame's movement delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaAux {
    pub current: Point3<Real>,
    pub previous: Point3<Real>,
}

impl DeltaAux {
    pub const fn new(current: Point3<Real>, previous: Point3<Real>) -> Self {
        DeltaAux { current, previous }
    }

    /// Movement since the previous frame.
    pub fn delta(&self) -> (Real, Real, Real) {
        (
            self.current.x - self.previous.x,
            self.current.y - self.previous.y,
            self.current.z - self.previous.z,
        )
    }
}

/// Surface-space drag payload: the vertex the pointer currently projects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceAux {
    pub vertex: SurfaceVertex,
}

/// A single interactive edit request, built once per mouse-move event.
///
/// Only the auxiliary payload of the space whose projection succeeded is
/// populated; the rest stay `None`. The request is consumed by
/// [`PairedCoordinateShape::apply_spatial_modification`](crate::shape::PairedCoordinateShape::apply_spatial_modification)
/// and never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialModification {
    /// Which part of the shape is being dragged.
    pub handle: SizingHandle,
    /// Viewport width in pixels.
    pub viewport_width: Real,
    /// Viewport height in pixels.
    pub viewport_height: Real,
    /// Pointer position at mouse press, viewport pixels.
    pub mouse_press_x: Real,
    pub mouse_press_y: Real,
    /// Current pointer position, viewport pixels.
    pub mouse_x: Real,
    pub mouse_y: Real,
    /// Pointer movement since the previous event, viewport pixels.
    pub mouse_dx: Real,
    pub mouse_dy: Real,
    /// Index of the coordinate being dragged when `handle` is
    /// [`SizingHandle::Coordinate`].
    pub coordinate_index: usize,
    /// True on the first event of a drag.
    pub start_of_drag: bool,
    /// True when a single-vertex drag should also move the mirror vertex in
    /// the opposite ring of a polyhedron.
    pub multi_paired_move: bool,

    // Per-space payloads, populated lazily by whichever viewport projection
    // succeeded for this event.
    pub surface: Option<SurfaceAux>,
    pub stereotaxic: Option<Point3<Real>>,
    pub chart: Option<DeltaAux>,
    pub histology: Option<DeltaAux>,
    pub media: Option<DeltaAux>,
}

impl SpatialModification {
    /// New request with no auxiliary payloads and zero mouse state.
    pub fn new(handle: SizingHandle, viewport_width: Real, viewport_height: Real) -> Self {
        SpatialModification {
            handle,
            viewport_width,
            viewport_height,
            mouse_press_x: 0.0,
            mouse_press_y: 0.0,
            mouse_x: 0.0,
            mouse_y: 0.0,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            coordinate_index: 0,
            start_of_drag: false,
            multi_paired_move: false,
            surface: None,
            stereotaxic: None,
            chart: None,
            histology: None,
            media: None,
        }
    }

    /// Record the pointer state for this event.
    pub fn set_mouse(&mut self, press: (Real, Real), current: (Real, Real), delta: (Real, Real)) {
        self.mouse_press_x = press.0;
        self.mouse_press_y = press.1;
        self.mouse_x = current.0;
        self.mouse_y = current.1;
        self.mouse_dx = delta.0;
        self.mouse_dy = delta.1;
    }

    pub fn set_dragged_coordinate(&mut self, index: usize) {
        self.coordinate_index = index;
    }

    pub fn set_surface(&mut self, vertex: SurfaceVertex) {
        self.surface = Some(SurfaceAux { vertex });
    }

    pub fn set_stereotaxic(&mut self, xyz: Point3<Real>) {
        self.stereotaxic = Some(xyz);
    }

    pub fn set_chart(&mut self, current: Point3<Real>, previous: Point3<Real>) {
        self.chart = Some(DeltaAux::new(current, previous));
    }

    pub fn set_histology(&mut self, current: Point3<Real>, previous: Point3<Real>) {
        self.histology = Some(DeltaAux::new(current, previous));
    }

    pub fn set_media(&mut self, current: Point3<Real>, previous: Point3<Real>) {
        self.media = Some(DeltaAux::new(current, previous));
    }
}
