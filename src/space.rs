//! Coordinate spaces, sizing handles, and the space→handle permission matrix.

/// Coordinate space an annotation shape's positions are expressed in.
///
/// Each space has its own units and its own set of permitted interactive
/// edits; see [`CoordinateSpace::permitted_handles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSpace {
    /// Chart axes units.
    Chart,
    /// Histology slice pixel units.
    Histology,
    /// Media (image file) pixel units.
    Media,
    /// Spacer cells between tabs; percentage units like Tab.
    Spacer,
    /// Model/anatomical millimetre units.
    Stereotaxic,
    /// Attached to a surface tessellation vertex.
    Surface,
    /// Percentage of the tab viewport, `[0, 100]` on x and y.
    Tab,
    /// Raw viewport pixels; shapes are not editable here.
    #[default]
    Viewport,
    /// Percentage of the window viewport, `[0, 100]` on x and y.
    Window,
}

/// The part of an annotation the user is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingHandle {
    /// No handle: drag moves the whole shape.
    #[default]
    None,
    /// A single editable polygon vertex.
    Coordinate,
    /// Rotation handle.
    Rotation,
    /// First end-cap anchor of a polyhedron.
    PolyhedronAnchorOne,
    /// Second end-cap anchor of a polyhedron.
    PolyhedronAnchorTwo,
    BoxLeft,
    BoxRight,
    BoxTop,
    BoxBottom,
    BoxTopLeft,
    BoxTopRight,
    BoxBottomLeft,
    BoxBottomRight,
    LineStart,
    LineEnd,
}

impl CoordinateSpace {
    /// Display name of the space.
    pub const fn name(&self) -> &'static str {
        match self {
            CoordinateSpace::Chart => "Chart",
            CoordinateSpace::Histology => "Histology",
            CoordinateSpace::Media => "Media",
            CoordinateSpace::Spacer => "Spacer",
            CoordinateSpace::Stereotaxic => "Stereotaxic",
            CoordinateSpace::Surface => "Surface",
            CoordinateSpace::Tab => "Tab",
            CoordinateSpace::Viewport => "Viewport",
            CoordinateSpace::Window => "Window",
        }
    }

    /// All coordinate spaces.
    pub const fn all() -> &'static [CoordinateSpace] {
        &[
            CoordinateSpace::Chart,
            CoordinateSpace::Histology,
            CoordinateSpace::Media,
            CoordinateSpace::Spacer,
            CoordinateSpace::Stereotaxic,
            CoordinateSpace::Surface,
            CoordinateSpace::Tab,
            CoordinateSpace::Viewport,
            CoordinateSpace::Window,
        ]
    }

    /// Sizing handles that may edit a paired-coordinate shape in this space.
    ///
    /// Kept as an explicit table so the permission matrix is testable on its
    /// own rather than buried in per-space dispatch:
    /// - Chart/Histology/Media/Tab/Window/Spacer permit whole-shape moves
    ///   and single-vertex drags.
    /// - Stereotaxic permits single-vertex drags and the two polyhedron
    ///   anchor handles; whole-shape drags are disabled there.
    /// - Surface permits only vertex re-projection drags.
    /// - Viewport permits nothing.
    pub const fn permitted_handles(&self) -> &'static [SizingHandle] {
        const GENERIC: &[SizingHandle] = &[SizingHandle::None, SizingHandle::Coordinate];
        const STEREOTAXIC: &[SizingHandle] = &[
            SizingHandle::Coordinate,
            SizingHandle::PolyhedronAnchorOne,
            SizingHandle::PolyhedronAnchorTwo,
        ];
        const SURFACE: &[SizingHandle] = &[SizingHandle::Coordinate];
        const VIEWPORT: &[SizingHandle] = &[];

        match self {
            CoordinateSpace::Chart
            | CoordinateSpace::Histology
            | CoordinateSpace::Media
            | CoordinateSpace::Spacer
            | CoordinateSpace::Tab
            | CoordinateSpace::Window => GENERIC,
            CoordinateSpace::Stereotaxic => STEREOTAXIC,
            CoordinateSpace::Surface => SURFACE,
            CoordinateSpace::Viewport => VIEWPORT,
        }
    }

    /// True when `handle` is permitted to edit shapes in this space.
    pub fn permits_handle(&self, handle: SizingHandle) -> bool {
        self.permitted_handles().contains(&handle)
    }

    /// True for the spaces whose positions are viewport percentages.
    pub const fn is_percentage_space(&self) -> bool {
        matches!(
            self,
            CoordinateSpace::Tab | CoordinateSpace::Window | CoordinateSpace::Spacer
        )
    }
}
