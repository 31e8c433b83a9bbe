mod support;

use annoshape::float_types::EPSILON;
use annoshape::{
    Coordinate, CoordinateSpace, PairedCoordinateShape, SizingHandle, SpatialModification,
    Structure, SurfaceVertex,
};
use nalgebra::Point3;
use support::{init_test_logging, positions, shape_from_points, square_polyhedron};

fn request(handle: SizingHandle) -> SpatialModification {
    SpatialModification::new(handle, 100.0, 100.0)
}

#[test]
fn handle_not_permitted_for_space_is_a_silent_no_op() {
    // Whole-shape moves are disabled in stereotaxic space by design.
    let mut shape = square_polyhedron(0.0, 10.0);
    let mut m = request(SizingHandle::None);
    m.set_stereotaxic(Point3::new(1.0, 1.0, 1.0));

    let before = positions(&shape);
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(positions(&shape), before);
    assert!(!shape.is_modified());
}

#[test]
fn viewport_space_permits_nothing() {
    let mut shape = shape_from_points(
        CoordinateSpace::Viewport,
        &[(10.0, 10.0, 0.0), (20.0, 20.0, 0.0)],
    );
    for handle in [SizingHandle::None, SizingHandle::Coordinate, SizingHandle::Rotation] {
        let m = request(handle);
        assert!(!shape.apply_spatial_modification(&m));
    }
    assert!(!shape.is_modified());
}

#[test]
fn missing_auxiliary_payload_changes_nothing() {
    let mut shape = shape_from_points(CoordinateSpace::Chart, &[(1.0, 2.0, 3.0)]);
    let m = request(SizingHandle::None);
    let before = positions(&shape);
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(positions(&shape), before);
}

#[test]
fn chart_whole_shape_move_translates_every_coordinate() {
    let mut shape = shape_from_points(
        CoordinateSpace::Chart,
        &[(0.0, 0.0, 0.0), (5.0, 5.0, 0.0), (10.0, 0.0, 0.0)],
    );
    let mut m = request(SizingHandle::None);
    m.set_chart(Point3::new(3.0, 4.0, 0.0), Point3::new(1.0, 1.0, 0.0));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(
        positions(&shape),
        vec![(2.0, 3.0, 0.0), (7.0, 8.0, 0.0), (12.0, 3.0, 0.0)]
    );
    assert!(shape.is_modified());
}

#[test]
fn chart_single_drag_moves_only_the_dragged_coordinate() {
    let mut shape = shape_from_points(
        CoordinateSpace::Chart,
        &[(0.0, 0.0, 0.0), (5.0, 5.0, 0.0)],
    );
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(1);
    m.set_chart(Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(positions(&shape), vec![(0.0, 0.0, 0.0), (7.0, 5.0, 0.0)]);
}

#[test]
fn media_single_drag_uses_current_minus_previous() {
    let mut shape = shape_from_points(CoordinateSpace::Media, &[(100.0, 200.0, 0.0)]);
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_media(Point3::new(110.0, 195.0, 0.0), Point3::new(100.0, 200.0, 0.0));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(positions(&shape), vec![(110.0, 195.0, 0.0)]);
}

#[test]
fn tab_whole_shape_move_shifts_by_viewport_percentage() {
    let mut shape = shape_from_points(
        CoordinateSpace::Tab,
        &[(10.0, 10.0, 0.0), (50.0, 50.0, 0.0)],
    );
    // 200x100 viewport: 20 pixels of x is 10 percent, 10 pixels of y is 10 percent.
    let mut m = SpatialModification::new(SizingHandle::None, 200.0, 100.0);
    m.set_mouse((0.0, 0.0), (20.0, 10.0), (20.0, 10.0));

    assert!(shape.apply_spatial_modification(&m));
    let p = positions(&shape);
    assert!((p[0].0 - 20.0).abs() < EPSILON && (p[0].1 - 20.0).abs() < EPSILON);
    assert!((p[1].0 - 60.0).abs() < EPSILON && (p[1].1 - 60.0).abs() < EPSILON);
}

#[test]
fn tab_move_rejects_atomically_when_any_coordinate_leaves_range() {
    init_test_logging();
    let mut shape = shape_from_points(
        CoordinateSpace::Tab,
        &[(10.0, 10.0, 0.0), (50.0, 50.0, 0.0), (95.0, 95.0, 0.0)],
    );
    let mut m = request(SizingHandle::None);
    // +10 percent pushes only the last coordinate past 100, but nothing
    // may move.
    m.set_mouse((0.0, 0.0), (10.0, 10.0), (10.0, 10.0));

    let before = shape.clone();
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(shape, before);
    assert!(!shape.is_modified());
}

#[test]
fn tab_single_drag_validates_only_after_full_round_trip() {
    let mut shape = shape_from_points(
        CoordinateSpace::Tab,
        &[(10.0, 10.0, 0.0), (50.0, 50.0, 0.0)],
    );
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_mouse((0.0, 0.0), (30.0, 0.0), (30.0, 0.0));

    assert!(shape.apply_spatial_modification(&m));
    let p = positions(&shape);
    assert!((p[0].0 - 40.0).abs() < EPSILON);
    // The undragged coordinate round-trips to its original position.
    assert!((p[1].0 - 50.0).abs() < EPSILON && (p[1].1 - 50.0).abs() < EPSILON);
}

#[test]
fn tab_single_drag_out_of_range_is_rejected() {
    let mut shape = shape_from_points(CoordinateSpace::Tab, &[(95.0, 50.0, 0.0)]);
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_mouse((0.0, 0.0), (10.0, 0.0), (10.0, 0.0));

    let before = shape.clone();
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(shape, before);
}

#[test]
fn spacer_space_delegates_to_percentage_handling() {
    let mut shape = shape_from_points(CoordinateSpace::Spacer, &[(40.0, 40.0, 0.0)]);
    let mut m = request(SizingHandle::None);
    m.set_mouse((0.0, 0.0), (5.0, 5.0), (5.0, 5.0));

    assert!(shape.apply_spatial_modification(&m));
    let p = positions(&shape);
    assert!((p[0].0 - 45.0).abs() < EPSILON && (p[0].1 - 45.0).abs() < EPSILON);
}

#[test]
fn stereotaxic_drag_sets_vertex_and_projects_mirror() {
    let mut shape = square_polyhedron(0.0, 10.0);
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.multi_paired_move = true;
    m.set_stereotaxic(Point3::new(5.0, 5.0, 5.0));

    assert!(shape.apply_spatial_modification(&m));
    // The dragged vertex takes the payload position exactly; its mirror is
    // the projection onto polygon two's plane, not the payload position.
    assert_eq!(shape.coordinate(0).xyz(), Point3::new(5.0, 5.0, 5.0));
    let mirror = shape.coordinate(4).xyz();
    assert!((mirror - Point3::new(5.0, 5.0, 10.0)).norm() < EPSILON);
    assert_ne!(mirror, Point3::new(5.0, 5.0, 5.0));
}

#[test]
fn stereotaxic_drag_without_pairing_flag_leaves_mirror_alone() {
    let mut shape = square_polyhedron(0.0, 10.0);
    let mirror_before = shape.coordinate(4).xyz();
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_stereotaxic(Point3::new(5.0, 5.0, 5.0));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(shape.coordinate(4).xyz(), mirror_before);
}

#[test]
fn anchor_handles_set_the_polyhedron_ends() {
    let mut shape = square_polyhedron(0.0, 10.0);
    let ring_before = positions(&shape);

    let mut m = request(SizingHandle::PolyhedronAnchorOne);
    m.set_stereotaxic(Point3::new(5.0, 5.0, -2.0));
    assert!(shape.apply_spatial_modification(&m));

    let mut m = request(SizingHandle::PolyhedronAnchorTwo);
    m.set_stereotaxic(Point3::new(5.0, 5.0, 12.0));
    assert!(shape.apply_spatial_modification(&m));

    let ends = shape.as_polyhedron().unwrap();
    assert_eq!(ends.plane_one_anchor, Point3::new(5.0, 5.0, -2.0));
    assert_eq!(ends.plane_two_anchor, Point3::new(5.0, 5.0, 12.0));
    // Anchors are separate from the ring coordinates.
    assert_eq!(positions(&shape), ring_before);
}

#[test]
fn anchor_handle_on_generic_shape_changes_nothing() {
    let mut shape = shape_from_points(CoordinateSpace::Stereotaxic, &[(0.0, 0.0, 0.0)]);
    let mut m = request(SizingHandle::PolyhedronAnchorOne);
    m.set_stereotaxic(Point3::new(1.0, 2.0, 3.0));
    assert!(!shape.apply_spatial_modification(&m));
    assert!(!shape.is_modified());
}

#[test]
fn surface_drag_reattaches_within_same_surface() {
    let mut shape = PairedCoordinateShape::new(CoordinateSpace::Surface);
    let mut c = Coordinate::from_xyz(0.0, 0.0, 0.0);
    c.set_surface_vertex(SurfaceVertex::new(Structure::CortexLeft, 32492, 100));
    shape.add_coordinate(c);
    shape.clear_modified();

    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_surface(SurfaceVertex::new(Structure::CortexLeft, 32492, 250));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(shape.coordinate(0).surface_vertex().unwrap().vertex_index, 250);
}

#[test]
fn surface_drag_rejects_cross_hemisphere_payload() {
    init_test_logging();
    let mut shape = PairedCoordinateShape::new(CoordinateSpace::Surface);
    let original = SurfaceVertex::new(Structure::CortexLeft, 32492, 100);
    let mut c = Coordinate::from_xyz(0.0, 0.0, 0.0);
    c.set_surface_vertex(original);
    shape.add_coordinate(c);
    shape.clear_modified();

    // Wrong hemisphere.
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_surface(SurfaceVertex::new(Structure::CortexRight, 32492, 250));
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(shape.coordinate(0).surface_vertex(), Some(original));

    // Same hemisphere, wrong tessellation density.
    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.set_surface(SurfaceVertex::new(Structure::CortexLeft, 164000, 250));
    assert!(!shape.apply_spatial_modification(&m));
    assert_eq!(shape.coordinate(0).surface_vertex(), Some(original));
    assert!(!shape.is_modified());
}

#[test]
fn degenerate_mirror_plane_keeps_the_drag_but_not_the_sync() {
    // Two vertices per ring: the opposite face has no derivable plane, so
    // the drag itself lands and the mirror stays put.
    let mut shape = PairedCoordinateShape::new_polyhedron(CoordinateSpace::Stereotaxic);
    shape.add_coordinate_pair(
        Coordinate::from_xyz(0.0, 0.0, 0.0),
        Coordinate::from_xyz(0.0, 0.0, 10.0),
    );
    shape.add_coordinate_pair(
        Coordinate::from_xyz(5.0, 0.0, 0.0),
        Coordinate::from_xyz(5.0, 0.0, 10.0),
    );
    shape.clear_modified();
    let mirror_before = shape.coordinate(2).xyz();

    let mut m = request(SizingHandle::Coordinate);
    m.set_dragged_coordinate(0);
    m.multi_paired_move = true;
    m.set_stereotaxic(Point3::new(1.0, 1.0, 1.0));

    assert!(shape.apply_spatial_modification(&m));
    assert_eq!(shape.coordinate(0).xyz(), Point3::new(1.0, 1.0, 1.0));
    assert_eq!(shape.coordinate(2).xyz(), mirror_before);
}
