//! Geometric input records: spline segments and junctions.
//!
//! Both are produced upstream by the road-network generator. A
//! [`SplineSegment`] is read-only for this core; a [`Junction`] only ever
//! grows its [`lane_entities`](Junction::lane_entities) list, and only
//! after the batch holding its lanes has been committed.

use glam::Vec3;
use smallvec::SmallVec;

use crate::error::SegmentError;
use crate::id::LaneId;

/// A geometric road piece with start/end points and a measured length.
///
/// The length is whatever the spline evaluator measured along the curve;
/// it is not recomputed from the endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineSegment {
    /// Start of the segment in world space.
    pub start_point: Vec3,
    /// End of the segment in world space.
    pub end_point: Vec3,
    /// Arc length of the segment.
    pub measured_length: f32,
}

impl SplineSegment {
    /// Create a segment from its endpoints and measured length.
    pub fn new(start_point: Vec3, end_point: Vec3, measured_length: f32) -> Self {
        Self {
            start_point,
            end_point,
            measured_length,
        }
    }

    /// Create a straight segment whose measured length is the endpoint
    /// distance.
    pub fn straight(start_point: Vec3, end_point: Vec3) -> Self {
        Self::new(start_point, end_point, start_point.distance(end_point))
    }

    /// Check that the segment can become a lane.
    ///
    /// The measured length must be finite and non-negative, and both
    /// endpoints must be finite.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if !self.measured_length.is_finite() || self.measured_length < 0.0 {
            return Err(SegmentError::InvalidLength {
                length: self.measured_length,
            });
        }
        if !self.start_point.is_finite() {
            return Err(SegmentError::NonFiniteStart {
                point: self.start_point,
            });
        }
        if !self.end_point.is_finite() {
            return Err(SegmentError::NonFiniteEnd {
                point: self.end_point,
            });
        }
        Ok(())
    }
}

/// Connectivity class of a junction, derived from its neighbour count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JunctionArity {
    /// One attached road: traffic turns around.
    DeadEnd,
    /// Two attached roads: traffic passes straight through.
    Merge,
    /// Three attached roads.
    Triple,
}

impl JunctionArity {
    /// Map a neighbour-spline count to an arity.
    ///
    /// Returns `None` for any count outside `1..=3`.
    pub fn from_neighbor_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::DeadEnd),
            2 => Some(Self::Merge),
            3 => Some(Self::Triple),
            _ => None,
        }
    }

    /// Number of neighbour segments a junction of this arity has.
    pub fn segment_count(self) -> usize {
        match self {
            Self::DeadEnd => 1,
            Self::Merge => 2,
            Self::Triple => 3,
        }
    }

    /// Number of lanes a junction of this arity yields (two per segment).
    pub fn lane_count(self) -> usize {
        self.segment_count() * 2
    }
}

/// A graph node where one or more roads meet.
///
/// The order of `neighbor_splines` is significant: segment `i` produces
/// lanes `2i` (lane-A, segment direction) and `2i + 1` (lane-B, reverse)
/// in [`lane_entities`](Self::lane_entities).
#[derive(Clone, Debug, PartialEq)]
pub struct Junction {
    /// World position of the junction. Connectors are placed here.
    pub position: Vec3,
    /// Incident road segments, in lane-assignment order.
    pub neighbor_splines: SmallVec<[SplineSegment; 3]>,
    /// Lanes created for this junction, in creation order (A0, B0, A1, ...).
    pub lane_entities: Vec<LaneId>,
}

impl Junction {
    /// Create a junction with no lanes yet.
    pub fn new(position: Vec3, neighbor_splines: impl IntoIterator<Item = SplineSegment>) -> Self {
        Self {
            position,
            neighbor_splines: neighbor_splines.into_iter().collect(),
            lane_entities: Vec::new(),
        }
    }

    /// Arity of this junction, or `None` if its neighbour count is unsupported.
    pub fn arity(&self) -> Option<JunctionArity> {
        JunctionArity::from_neighbor_count(self.neighbor_splines.len())
    }
}
