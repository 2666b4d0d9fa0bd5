//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is the builder-input for constructing a
//! [`NetworkDriver`](crate::NetworkDriver). [`validate()`](DriverConfig::validate)
//! checks structural invariants at startup.

use strada_arena::{ArenaConfig, ArenaError};
use thiserror::Error;

// ── BuildMode ──────────────────────────────────────────────────────

/// Which network a spawn request builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Build every junction handed to the driver, seeding one agent per
    /// dead-end.
    Generator,
    /// Build the fixed five-junction demonstration network. The driver's
    /// junctions are ignored.
    #[default]
    FixedDemo,
}

// ── DuplicatePolicy ────────────────────────────────────────────────

/// What to do with a spawn request submitted while another is pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Queue it; it builds on a later tick.
    #[default]
    Queue,
    /// Reject it with [`IngressError::RequestPending`](strada_core::IngressError::RequestPending).
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Arena configuration is invalid.
    #[error("arena: {0}")]
    Arena(#[from] ArenaError),
    /// Spawn queue capacity is zero.
    #[error("max_pending_requests must be at least 1")]
    SpawnQueueZero,
    /// More junctions than `JunctionId` can address.
    #[error("junction count {value} exceeds u32::MAX")]
    JunctionCountOverflow {
        /// The junction count supplied.
        value: usize,
    },
}

// ── DriverConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a network driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Network to build on each request. Default: [`BuildMode::FixedDemo`].
    pub mode: BuildMode,
    /// Seed for the agent colour stream. A fresh RNG is seeded from this
    /// for every build. Default: 0.
    pub seed: u64,
    /// Maximum spawn requests buffered in the ingress queue. Default: 16.
    pub max_pending_requests: usize,
    /// Handling of requests submitted while one is pending.
    /// Default: [`DuplicatePolicy::Queue`].
    pub duplicate_policy: DuplicatePolicy,
    /// Arena capacity limits.
    pub arena: ArenaConfig,
}

impl DriverConfig {
    /// Default spawn queue capacity.
    pub const DEFAULT_MAX_PENDING_REQUESTS: usize = 16;

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pending_requests == 0 {
            return Err(ConfigError::SpawnQueueZero);
        }
        self.arena.validate()?;
        Ok(())
    }

    /// Shorthand for a generator-mode config with the given seed.
    pub fn generator(seed: u64) -> Self {
        Self {
            mode: BuildMode::Generator,
            seed,
            ..Self::default()
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            seed: 0,
            max_pending_requests: Self::DEFAULT_MAX_PENDING_REQUESTS,
            duplicate_policy: DuplicatePolicy::default(),
            arena: ArenaConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, BuildMode::FixedDemo);
        assert_eq!(config.seed, 0);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Queue);
    }

    #[test]
    fn zero_queue_rejected() {
        let config = DriverConfig {
            max_pending_requests: 0,
            ..DriverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SpawnQueueZero));
    }

    #[test]
    fn invalid_arena_surfaces_as_arena_error() {
        let config = DriverConfig {
            arena: ArenaConfig {
                max_lanes: 0,
                ..ArenaConfig::default()
            },
            ..DriverConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Arena(ArenaError::InvalidConfig { reason })) => {
                assert!(reason.contains("max_lanes"));
            }
            other => panic!("expected arena error, got {other:?}"),
        }
    }

    #[test]
    fn generator_shorthand() {
        let config = DriverConfig::generator(42);
        assert_eq!(config.mode, BuildMode::Generator);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::SpawnQueueZero.to_string(),
            "max_pending_requests must be at least 1"
        );
        assert_eq!(
            ConfigError::JunctionCountOverflow { value: 5 }.to_string(),
            "junction count 5 exceeds u32::MAX"
        );
    }
}
