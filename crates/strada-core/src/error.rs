//! Error types shared across the Strada workspace.
//!
//! Organised by subsystem: lane-graph building and spawn-request ingress.
//! Arena commit errors live in `strada-arena`; driver errors wrapping
//! these live in `strada-engine`.

use glam::Vec3;
use thiserror::Error;

use crate::id::JunctionId;

/// Why a spline segment cannot become a lane.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SegmentError {
    /// The measured length is NaN, infinite or negative.
    #[error("measured_length must be finite and >= 0, got {length}")]
    InvalidLength {
        /// The offending length.
        length: f32,
    },
    /// The start point has a non-finite component.
    #[error("start_point is not finite: {point}")]
    NonFiniteStart {
        /// The offending point.
        point: Vec3,
    },
    /// The end point has a non-finite component.
    #[error("end_point is not finite: {point}")]
    NonFiniteEnd {
        /// The offending point.
        point: Vec3,
    },
}

/// Errors from the lane-graph builder.
///
/// Every variant aborts the whole build; nothing from the batch is
/// committed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
    /// The junction has a neighbour count outside `1..=3`.
    #[error("junction {junction}: unsupported junction arity {count}")]
    UnsupportedArity {
        /// The offending junction.
        junction: JunctionId,
        /// Its neighbour-spline count.
        count: usize,
    },
    /// A neighbour segment cannot produce a lane with a finite,
    /// non-negative length.
    #[error("junction {junction}: malformed segment {segment}: {reason}")]
    MalformedSegment {
        /// The junction owning the segment.
        junction: JunctionId,
        /// Index of the segment within the junction's neighbour list.
        segment: usize,
        /// What is wrong with it.
        #[source]
        reason: SegmentError,
    },
    /// The lane length given for agent placement is NaN, infinite or
    /// negative.
    #[error("placement lane length must be finite and >= 0, got {length}")]
    InvalidLaneLength {
        /// The offending length.
        length: f32,
    },
    /// An explicit placement offset is NaN or infinite.
    #[error("placement offset {index} is not finite: {offset}")]
    NonFiniteOffset {
        /// Position of the offset in the supplied list.
        index: usize,
        /// The offending offset.
        offset: f32,
    },
    /// Explicit placement offsets were supplied, but not one per agent.
    #[error("placement expected {expected} offsets, got {offsets}")]
    OffsetCountMismatch {
        /// Number of agents requested.
        expected: usize,
        /// Number of offsets supplied.
        offsets: usize,
    },
}

/// Errors from spawn-request submission.
///
/// Used in [`SpawnReceipt::reason_code`](crate::command::SpawnReceipt) to
/// explain why a request was not queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IngressError {
    /// The spawn queue is at capacity.
    #[error("spawn queue full")]
    QueueFull,
    /// Another request is already pending and the driver is configured to
    /// reject rather than queue extra requests.
    #[error("a spawn request is already pending")]
    RequestPending,
}
