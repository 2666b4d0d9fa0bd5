//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the network arenas.
///
/// Caps the number of entities each arena may hold. A commit that would
/// push any arena past its cap is rejected whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of lanes. Default: 1_048_576.
    pub max_lanes: u32,
    /// Maximum number of connectors. Default: 524_288.
    pub max_connectors: u32,
    /// Maximum number of agents. Default: 1_048_576.
    pub max_agents: u32,
}

impl ArenaConfig {
    /// Default lane capacity.
    pub const DEFAULT_MAX_LANES: u32 = 1 << 20;

    /// Default connector capacity.
    pub const DEFAULT_MAX_CONNECTORS: u32 = 1 << 19;

    /// Default agent capacity.
    pub const DEFAULT_MAX_AGENTS: u32 = 1 << 20;

    /// Check that every cap is non-zero.
    pub fn validate(&self) -> Result<(), ArenaError> {
        let caps = [
            ("max_lanes", self.max_lanes),
            ("max_connectors", self.max_connectors),
            ("max_agents", self.max_agents),
        ];
        for (name, cap) in caps {
            if cap == 0 {
                return Err(ArenaError::InvalidConfig {
                    reason: format!("{name} must be at least 1"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_lanes: Self::DEFAULT_MAX_LANES,
            max_connectors: Self::DEFAULT_MAX_CONNECTORS,
            max_agents: Self::DEFAULT_MAX_AGENTS,
        }
    }
}
