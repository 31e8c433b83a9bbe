//! Test support library
//! Provides shared fixtures for paired-coordinate shape tests.
#![allow(dead_code)]

use annoshape::float_types::Real;
use annoshape::{Coordinate, CoordinateSpace, PairedCoordinateShape};

/// Route rejected-edit log output through the test harness.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Polyhedron whose two faces are 10x10 squares at `z_one` and `z_two`,
/// built pair-by-pair so the halves are index-synchronized.
pub fn square_polyhedron(z_one: Real, z_two: Real) -> PairedCoordinateShape {
    let corners = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let mut shape = PairedCoordinateShape::new_polyhedron(CoordinateSpace::Stereotaxic);
    for (x, y) in corners {
        shape.add_coordinate_pair(
            Coordinate::from_xyz(x, y, z_one),
            Coordinate::from_xyz(x, y, z_two),
        );
    }
    shape.clear_modified();
    shape
}

/// Polyhedron whose two faces are triangles at `z_one` and `z_two`.
pub fn triangle_polyhedron(z_one: Real, z_two: Real) -> PairedCoordinateShape {
    let corners = [(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)];
    let mut shape = PairedCoordinateShape::new_polyhedron(CoordinateSpace::Stereotaxic);
    for (x, y) in corners {
        shape.add_coordinate_pair(
            Coordinate::from_xyz(x, y, z_one),
            Coordinate::from_xyz(x, y, z_two),
        );
    }
    shape.clear_modified();
    shape
}

/// Generic shape in `space` with one coordinate per xyz triple.
pub fn shape_from_points(
    space: CoordinateSpace,
    points: &[(Real, Real, Real)],
) -> PairedCoordinateShape {
    let mut shape = PairedCoordinateShape::new(space);
    for &(x, y, z) in points {
        shape.add_coordinate(Coordinate::from_xyz(x, y, z));
    }
    shape.clear_modified();
    shape
}

/// All positions of a shape, in index order.
pub fn positions(shape: &PairedCoordinateShape) -> Vec<(Real, Real, Real)> {
    shape
        .coordinates()
        .iter()
        .map(|c| {
            let p = c.xyz();
            (p.x, p.y, p.z)
        })
        .collect()
}
