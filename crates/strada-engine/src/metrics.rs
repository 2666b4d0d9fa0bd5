//! Per-build metrics for the network driver.
//!
//! [`BuildMetrics`] captures counts and timing for one committed build.

/// Counts and timing collected during a single build.
///
/// Durations are in microseconds. The driver populates these after each
/// committed build; [`NetworkDriver::last_metrics()`](crate::NetworkDriver::last_metrics)
/// returns the most recent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildMetrics {
    /// Dead-end connectors created.
    pub dead_ends: u32,
    /// Merge connectors created.
    pub merges: u32,
    /// Triple connectors created.
    pub triples: u32,
    /// Lanes created.
    pub lanes_created: u32,
    /// Connectors created.
    pub connectors_created: u32,
    /// Agents created.
    pub agents_created: u32,
    /// Time spent staging the batch, in microseconds.
    pub build_us: u64,
    /// Time spent committing the batch, in microseconds.
    pub commit_us: u64,
    /// Approximate arena heap usage after the commit, in bytes.
    pub memory_bytes: usize,
    /// Cumulative number of spawn requests rejected because the queue
    /// was full.
    pub queue_full_rejections: u64,
    /// Cumulative number of builds aborted by an error.
    pub aborted_builds: u64,
}
