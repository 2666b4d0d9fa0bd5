//! Traffic-agent placement.
//!
//! Seeds agents onto a staged or committed lane at offsets chosen by a
//! [`PlacementPolicy`], each with a random colour drawn from the caller's
//! RNG. The RNG is passed in rather than owned so that one seeded stream
//! can colour every agent of a build in a reproducible order.

use glam::Vec4;
use rand::Rng;
use strada_arena::StagedBatch;
use strada_core::{Agent, AgentId, BuildError, LaneId, TemplateId};

/// Where along a lane new agents are placed.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PlacementPolicy {
    /// The first agent sits at the lane end; the rest queue backward at
    /// equal spacing: `offset(i) = length - i * (length / count)`.
    #[default]
    QueueFromEnd,
    /// Every agent at offset 0.
    LaneStart,
    /// Explicit offsets, one per agent, clamped into `[0, length]`.
    Offsets(Vec<f32>),
}

impl PlacementPolicy {
    /// Offsets for `count` agents on a lane of `length`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidLaneLength`] if `length` is NaN, infinite or
    ///   negative.
    /// - [`BuildError::OffsetCountMismatch`] if the policy carries explicit
    ///   offsets and there are not exactly `count` of them.
    /// - [`BuildError::NonFiniteOffset`] if an explicit offset is NaN or
    ///   infinite.
    pub fn offsets(&self, length: f32, count: usize) -> Result<Vec<f32>, BuildError> {
        if !length.is_finite() || length < 0.0 {
            return Err(BuildError::InvalidLaneLength { length });
        }
        match self {
            Self::QueueFromEnd => Ok(queue_offsets(length, count)),
            Self::LaneStart => Ok(vec![0.0; count]),
            Self::Offsets(offsets) => {
                if offsets.len() != count {
                    return Err(BuildError::OffsetCountMismatch {
                        expected: count,
                        offsets: offsets.len(),
                    });
                }
                offsets
                    .iter()
                    .enumerate()
                    .map(|(index, &offset)| {
                        if offset.is_finite() {
                            Ok(offset.clamp(0.0, length))
                        } else {
                            Err(BuildError::NonFiniteOffset { index, offset })
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Equal-spacing queue offsets, starting at the lane end.
///
/// `length` must already be finite and non-negative.
fn queue_offsets(length: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = length / count as f32;
    (0..count).map(|i| length - i as f32 * spacing).collect()
}

/// Random opaque colour: uniform RGB in `[0, 1)`, alpha 1.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Vec4 {
    let r = rng.gen::<f32>();
    let g = rng.gen::<f32>();
    let b = rng.gen::<f32>();
    Vec4::new(r, g, b, 1.0)
}

/// Stage `count` agents on `lane`.
///
/// Agents are staged in offset order and will be appended to the lane's
/// agent list in that order on commit. Each draws three values from `rng`.
/// Offsets are checked before anything is staged, so on error the batch
/// and the RNG are untouched.
pub fn seed_agents<R: Rng + ?Sized>(
    batch: &mut StagedBatch,
    lane: LaneId,
    lane_length: f32,
    count: usize,
    policy: &PlacementPolicy,
    template: TemplateId,
    rng: &mut R,
) -> Result<Vec<AgentId>, BuildError> {
    let offsets = policy.offsets(lane_length, count)?;
    let ids = offsets
        .into_iter()
        .map(|offset| {
            let color = random_color(rng);
            batch.stage_agent(Agent::new(lane, offset, color, template))
        })
        .collect();
    Ok(ids)
}
