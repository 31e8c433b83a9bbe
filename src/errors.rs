//! Recoverable editing errors.
//!
//! These cover the reported-but-swallowed failure tier: an operation that
//! hits one of these logs the error and becomes a no-op, leaving every
//! coordinate untouched. Programming errors in the calling layer (invalid
//! indices, paired operations on non-paired shapes) are asserted instead.

use crate::float_types::Real;
use crate::space::CoordinateSpace;
use std::fmt::Display;

/// All the ways a spatial modification or ring edit can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModificationError {
    /// (SpaceNotSupported) The operation is not available in this space
    SpaceNotSupported {
        operation: &'static str,
        space: CoordinateSpace,
    },
    /// (AuxiliaryMissing) The request lacks the payload for this space
    AuxiliaryMissing { space: CoordinateSpace },
    /// (DegeneratePlane) A face's ring vertices do not define a plane
    DegeneratePlane { ring: &'static str },
    /// (PercentageOutOfRange) A candidate position left the [0, 100] viewport range
    PercentageOutOfRange { index: usize, x: Real, y: Real },
    /// (InvalidViewport) The request's viewport has a zero or negative extent
    InvalidViewport { width: Real, height: Real },
    /// (SurfaceVertexMismatch) Drag payload targets a different surface than the coordinate
    SurfaceVertexMismatch { index: usize },
    /// (TooFewRingVertices) A ring edit needs more existing vertices
    TooFewRingVertices { have: usize, need: usize },
}

impl Display for ModificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModificationError::SpaceNotSupported { operation, space } => write!(
                f,
                "(SpaceNotSupported) {} is not supported in {} space",
                operation,
                space.name()
            ),
            ModificationError::AuxiliaryMissing { space } => write!(
                f,
                "(AuxiliaryMissing) request carries no auxiliary payload for {} space",
                space.name()
            ),
            ModificationError::DegeneratePlane { ring } => write!(
                f,
                "(DegeneratePlane) {} vertices do not define a valid plane",
                ring
            ),
            ModificationError::PercentageOutOfRange { index, x, y } => write!(
                f,
                "(PercentageOutOfRange) coordinate {} would move to ({}, {}) outside [0, 100]",
                index, x, y
            ),
            ModificationError::InvalidViewport { width, height } => write!(
                f,
                "(InvalidViewport) viewport {}x{} cannot host a percentage-space edit",
                width, height
            ),
            ModificationError::SurfaceVertexMismatch { index } => write!(
                f,
                "(SurfaceVertexMismatch) drag payload surface does not match coordinate {}",
                index
            ),
            ModificationError::TooFewRingVertices { have, need } => write!(
                f,
                "(TooFewRingVertices) ring has {} vertices, operation needs at least {}",
                have, need
            ),
        }
    }
}
