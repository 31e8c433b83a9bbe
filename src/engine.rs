//! Interactive spatial editing: mapping a [`SpatialModification`] request
//! onto coordinate updates, per coordinate space.

use crate::errors::ModificationError;
use crate::float_types::{EPSILON, Real};
use crate::modification::{DeltaAux, SpatialModification};
use crate::shape::PairedCoordinateShape;
use crate::space::{CoordinateSpace, SizingHandle};
use nalgebra::Point3;

impl PairedCoordinateShape {
    /// Apply one interactive edit request.
    ///
    /// The request's handle is first validated against the permission
    /// matrix for this shape's space; a disallowed handle is a silent
    /// no-op. Recoverable failures inside a handler (missing payload,
    /// out-of-range percentage, degenerate plane, surface mismatch) are
    /// logged and leave every coordinate untouched.
    ///
    /// Returns true iff at least one coordinate or anchor value changed;
    /// the caller uses this to decide whether a redraw is needed.
    pub fn apply_spatial_modification(&mut self, modification: &SpatialModification) -> bool {
        if !self.space().permits_handle(modification.handle) {
            return false;
        }

        let outcome = match self.space() {
            CoordinateSpace::Chart => {
                self.apply_delta_space(modification, modification.chart, CoordinateSpace::Chart)
            },
            CoordinateSpace::Histology => self.apply_delta_space(
                modification,
                modification.histology,
                CoordinateSpace::Histology,
            ),
            CoordinateSpace::Media => {
                self.apply_delta_space(modification, modification.media, CoordinateSpace::Media)
            },
            CoordinateSpace::Tab | CoordinateSpace::Window | CoordinateSpace::Spacer => {
                self.apply_percentage_space(modification)
            },
            CoordinateSpace::Stereotaxic => self.apply_stereotaxic_space(modification),
            CoordinateSpace::Surface => self.apply_surface_space(modification),
            // The permission gate rejects every Viewport handle.
            CoordinateSpace::Viewport => Ok(false),
        };

        match outcome {
            Ok(true) => {
                self.set_modified();
                true
            },
            Ok(false) => false,
            Err(error) => {
                log::warn!(
                    "spatial modification rejected in {} space: {}",
                    self.space().name(),
                    error
                );
                false
            },
        }
    }

    /// Chart, Histology, and Media space: the auxiliary payload carries the
    /// pointer's current and previous positions in the space's own units,
    /// and their difference is this frame's movement.
    fn apply_delta_space(
        &mut self,
        modification: &SpatialModification,
        aux: Option<DeltaAux>,
        space: CoordinateSpace,
    ) -> Result<bool, ModificationError> {
        let aux = aux.ok_or(ModificationError::AuxiliaryMissing { space })?;
        let (dx, dy, dz) = aux.delta();

        match modification.handle {
            SizingHandle::None => {
                if self.is_empty() {
                    return Ok(false);
                }
                for coordinate in self.coordinates_mut() {
                    coordinate.add_xyz(dx, dy, dz);
                }
                Ok(true)
            },
            SizingHandle::Coordinate => {
                let index = modification.coordinate_index;
                self.coordinate_mut(index).add_xyz(dx, dy, dz);
                self.sync_mirror_after_drag(modification, index);
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    /// Tab, Window, and Spacer space: positions are percentages of the
    /// viewport. The edit is transactional over the full coordinate set:
    /// every position is converted to viewport pixels, the pixel delta is
    /// applied to the affected range, everything is converted back, and if
    /// any resulting x or y leaves `[0, 100]` the whole edit is rejected
    /// with no coordinate committed.
    fn apply_percentage_space(
        &mut self,
        modification: &SpatialModification,
    ) -> Result<bool, ModificationError> {
        let (range_start, range_end) = match modification.handle {
            SizingHandle::None => (0, self.len()),
            SizingHandle::Coordinate => {
                let index = modification.coordinate_index;
                (index, index + 1)
            },
            _ => return Ok(false),
        };
        if self.is_empty() {
            return Ok(false);
        }

        let viewport_width = modification.viewport_width;
        let viewport_height = modification.viewport_height;
        if viewport_width < EPSILON || viewport_height < EPSILON {
            return Err(ModificationError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }

        let mut pixels: Vec<Point3<Real>> = self
            .coordinates()
            .iter()
            .map(|coordinate| {
                let p = coordinate.xyz();
                Point3::new(
                    p.x / 100.0 * viewport_width,
                    p.y / 100.0 * viewport_height,
                    p.z,
                )
            })
            .collect();

        for pixel in &mut pixels[range_start..range_end] {
            pixel.x += modification.mouse_dx;
            pixel.y += modification.mouse_dy;
        }

        let mut percentages = Vec::with_capacity(pixels.len());
        for (index, pixel) in pixels.iter().enumerate() {
            let x = pixel.x / viewport_width * 100.0;
            let y = pixel.y / viewport_height * 100.0;
            if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
                return Err(ModificationError::PercentageOutOfRange { index, x, y });
            }
            percentages.push(Point3::new(x, y, pixel.z));
        }

        for (coordinate, percentage) in self.coordinates_mut().iter_mut().zip(percentages) {
            coordinate.set_xyz(percentage);
        }
        Ok(true)
    }

    /// Stereotaxic space: single-vertex drags replace the position from the
    /// payload outright; the two anchor handles set the polyhedron's end
    /// anchors. Whole-shape moves are not permitted here.
    fn apply_stereotaxic_space(
        &mut self,
        modification: &SpatialModification,
    ) -> Result<bool, ModificationError> {
        let xyz = modification
            .stereotaxic
            .ok_or(ModificationError::AuxiliaryMissing {
                space: CoordinateSpace::Stereotaxic,
            })?;

        match modification.handle {
            SizingHandle::Coordinate => {
                let index = modification.coordinate_index;
                self.coordinate_mut(index).set_xyz(xyz);
                self.sync_mirror_after_drag(modification, index);
                Ok(true)
            },
            SizingHandle::PolyhedronAnchorOne => {
                let Some(ends) = self.as_polyhedron_mut() else {
                    return Ok(false);
                };
                ends.plane_one_anchor = xyz;
                Ok(true)
            },
            SizingHandle::PolyhedronAnchorTwo => {
                let Some(ends) = self.as_polyhedron_mut() else {
                    return Ok(false);
                };
                ends.plane_two_anchor = xyz;
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    /// Surface space: a drag re-attaches the vertex to wherever the pointer
    /// projects on the surface, but only within the same structure and
    /// tessellation; anything else would let a drag jump hemispheres.
    fn apply_surface_space(
        &mut self,
        modification: &SpatialModification,
    ) -> Result<bool, ModificationError> {
        match modification.handle {
            SizingHandle::Coordinate => {
                let aux = modification
                    .surface
                    .ok_or(ModificationError::AuxiliaryMissing {
                        space: CoordinateSpace::Surface,
                    })?;
                let index = modification.coordinate_index;
                match self.coordinate(index).surface_vertex() {
                    Some(existing) if existing.same_surface(&aux.vertex) => {
                        self.coordinate_mut(index).set_surface_vertex(aux.vertex);
                        Ok(true)
                    },
                    _ => Err(ModificationError::SurfaceVertexMismatch { index }),
                }
            },
            _ => Ok(false),
        }
    }

    /// After a single-vertex drag, move the mirror vertex in the opposite
    /// ring when the request asks for it. A failed projection is logged and
    /// leaves the mirror where it was; the dragged vertex keeps its new
    /// position either way. Whole-shape moves never come through here.
    fn sync_mirror_after_drag(&mut self, modification: &SpatialModification, index: usize) {
        if !modification.multi_paired_move {
            return;
        }
        if let Err(error) = self.move_paired_coordinate(index) {
            log::warn!("mirror coordinate not moved: {}", error);
        }
    }
}
