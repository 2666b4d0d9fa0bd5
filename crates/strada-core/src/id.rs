//! Strongly-typed identifiers for network entities, templates and ticks.
//!
//! Entity identifiers ([`LaneId`], [`ConnectorId`], [`AgentId`]) are
//! indices into the corresponding arena. An ID handed out while a batch is
//! staged is already final: staged entities are appended behind the
//! committed ones, so commit never renumbers anything.

use std::fmt;

/// Identifies a lane within the network arena.
///
/// `LaneId(n)` is the n-th lane ever committed to the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(pub u32);

impl LaneId {
    /// Position of this lane in the lane arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LaneId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a junction connector within the network arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorId(pub u32);

impl ConnectorId {
    /// Position of this connector in the connector arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ConnectorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies an agent (car) within the network arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Position of this agent in the agent arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Position of a junction in the generator-supplied junction sequence.
///
/// Used only for diagnostics: errors name the offending junction by the
/// index it had in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JunctionId(pub u32);

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for JunctionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque reference to an externally owned template (connector prefab or
/// agent prefab). This core never dereferences it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(pub u32);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TemplateId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a spawn request.
///
/// Assigned from a monotonic counter by the ingress queue at submission
/// time, so two requests never share an ID within one driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpawnRequestId(pub u64);

impl fmt::Display for SpawnRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SpawnRequestId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented every time the driver runs a tick, including idle ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Tracks network generation for snapshot identity.
///
/// Incremented each time a batch is committed. Generation 0 is the empty
/// network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkGenerationId(pub u64);

impl fmt::Display for NetworkGenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NetworkGenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
