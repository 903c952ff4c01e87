//! Projection work counters.

/// How much work a [`Projector`][crate::Projector] has done since it was
/// charged.
///
/// The initial charge on construction is not counted as a full rebuild.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ProjectionStats {
    /// Goal edge weights patched in place.
    pub weight_patches: u64,
    /// Live behaviors created or updated from a behavior-level event.
    pub behavior_syncs: u64,
    /// Live goals discarded and built again.
    pub goal_rebuilds:  u64,
    /// Whole-graph rebuilds, on deletion or desynchronization.
    pub full_rebuilds:  u64,
    /// Events that named this agent but needed no work.
    pub ignored:        u64,
}
