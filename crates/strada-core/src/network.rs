//! Committed network records: lanes, junction connectors and agents.
//!
//! These are the records the arena stores and snapshots expose. They are
//! plain data; the only behaviour here is read-side convenience such as
//! enumerating a connector's inbound/outbound lane pairs.

use glam::{Vec3, Vec4};
use smallvec::SmallVec;

use crate::geometry::JunctionArity;
use crate::id::{AgentId, LaneId, TemplateId};

/// Direction flag value for a triple-junction lane whose right-of-way has
/// not been resolved yet.
pub const DIRECTION_UNDETERMINED: i32 = -1;

/// One directed, traversable path derived from a spline segment.
///
/// Traversal always proceeds from `start_pos` to `end_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    /// Length of the lane, in the same units as agent offsets.
    pub length: f32,
    /// Where traversal starts.
    pub start_pos: Vec3,
    /// Where traversal ends.
    pub end_pos: Vec3,
    /// Agents on this lane, in spawn order.
    pub agents: Vec<AgentId>,
}

impl Lane {
    /// Create an empty lane.
    pub fn new(start_pos: Vec3, end_pos: Vec3, length: f32) -> Self {
        Self {
            length,
            start_pos,
            end_pos,
            agents: Vec::new(),
        }
    }

    /// The same geometry traversed the other way, with no agents.
    pub fn reversed(&self) -> Self {
        Self::new(self.end_pos, self.start_pos, self.length)
    }

    /// Whether `other` runs over the same geometry in the opposite direction.
    pub fn is_reverse_of(&self, other: &Lane) -> bool {
        self.start_pos == other.end_pos
            && self.end_pos == other.start_pos
            && self.length == other.length
    }
}

/// Dead-end connector: traffic arriving on `lane_in0` turns around onto
/// `lane_out0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadEnd {
    /// Lane arriving at the junction.
    pub lane_in0: LaneId,
    /// Lane leaving the junction.
    pub lane_out0: LaneId,
}

/// Merge connector joining two roads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Merge {
    /// Lane arriving from road 0.
    pub lane_in0: LaneId,
    /// Lane leaving onto road 0.
    pub lane_out0: LaneId,
    /// Lane arriving from road 1.
    pub lane_in1: LaneId,
    /// Lane leaving onto road 1.
    pub lane_out1: LaneId,
}

/// Triple connector joining three roads.
///
/// The direction flags are read by right-of-way logic outside this core;
/// they start at [`DIRECTION_UNDETERMINED`] and are never resolved here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triple {
    /// Lane arriving from road 0.
    pub lane_in0: LaneId,
    /// Lane leaving onto road 0.
    pub lane_out0: LaneId,
    /// Lane arriving from road 1.
    pub lane_in1: LaneId,
    /// Lane leaving onto road 1.
    pub lane_out1: LaneId,
    /// Lane arriving from road 2.
    pub lane_in2: LaneId,
    /// Lane leaving onto road 2.
    pub lane_out2: LaneId,
    /// Priority/direction flag for road 0.
    pub lane0_direction: i32,
    /// Priority/direction flag for road 1.
    pub lane1_direction: i32,
    /// Priority/direction flag for road 2.
    pub lane2_direction: i32,
}

impl Triple {
    /// Direction flags in road order.
    pub fn directions(&self) -> [i32; 3] {
        [
            self.lane0_direction,
            self.lane1_direction,
            self.lane2_direction,
        ]
    }
}

/// The three connector variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
    /// One road.
    DeadEnd(DeadEnd),
    /// Two roads.
    Merge(Merge),
    /// Three roads.
    Triple(Triple),
}

impl ConnectorKind {
    /// Arity matching this variant.
    pub fn arity(&self) -> JunctionArity {
        match self {
            Self::DeadEnd(_) => JunctionArity::DeadEnd,
            Self::Merge(_) => JunctionArity::Merge,
            Self::Triple(_) => JunctionArity::Triple,
        }
    }

    /// `(lane_in, lane_out)` pairs in road order.
    pub fn links(&self) -> SmallVec<[(LaneId, LaneId); 3]> {
        let mut out = SmallVec::new();
        match *self {
            Self::DeadEnd(d) => out.push((d.lane_in0, d.lane_out0)),
            Self::Merge(m) => {
                out.push((m.lane_in0, m.lane_out0));
                out.push((m.lane_in1, m.lane_out1));
            }
            Self::Triple(t) => {
                out.push((t.lane_in0, t.lane_out0));
                out.push((t.lane_in1, t.lane_out1));
                out.push((t.lane_in2, t.lane_out2));
            }
        }
        out
    }
}

/// Junction-level record wiring inbound and outbound lanes together.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// Variant-specific wiring.
    pub kind: ConnectorKind,
    /// World position of the junction this connector sits on.
    pub position: Vec3,
    /// Template the connector was instantiated from.
    pub template: TemplateId,
    /// Optional RGBA tint for the presentation layer.
    pub tint: Option<Vec4>,
}

impl Connector {
    /// Create an untinted connector.
    pub fn new(kind: ConnectorKind, position: Vec3, template: TemplateId) -> Self {
        Self {
            kind,
            position,
            template,
            tint: None,
        }
    }

    /// Attach a presentation tint.
    pub fn with_tint(mut self, tint: Vec4) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Arity of the junction this connector serves.
    pub fn arity(&self) -> JunctionArity {
        self.kind.arity()
    }

    /// Every lane this connector references.
    pub fn lanes(&self) -> SmallVec<[LaneId; 6]> {
        self.kind
            .links()
            .into_iter()
            .flat_map(|(lane_in, lane_out)| [lane_in, lane_out])
            .collect()
    }
}

/// A simulated vehicle sitting on a lane.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Lane that owns this agent.
    pub lane: LaneId,
    /// Distance from the lane start.
    pub position_along_lane: f32,
    /// Speed as a fraction of the lane's limit. Zero at creation.
    pub normalized_speed: f32,
    /// RGBA attribute for the presentation layer. Opaque to this core.
    pub color: Vec4,
    /// Template the agent was instantiated from.
    pub template: TemplateId,
}

impl Agent {
    /// Create a stationary agent at `position_along_lane`.
    pub fn new(lane: LaneId, position_along_lane: f32, color: Vec4, template: TemplateId) -> Self {
        Self {
            lane,
            position_along_lane,
            normalized_speed: 0.0,
            color,
            template,
        }
    }
}
