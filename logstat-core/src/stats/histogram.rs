use crate::stats::types::TrackedStatus;

/// Per-status counters over the fixed tracked set.
///
/// The table is sized once from [`TrackedStatus::ALL`], so a status outside
/// the set has no slot to land in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusHistogram {
    counts: [u64; TrackedStatus::ALL.len()],
}

impl StatusHistogram {
    pub(crate) fn record(&mut self, status: TrackedStatus) {
        let slot = &mut self.counts[status.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, status: TrackedStatus) -> u64 {
        self.counts[status.index()]
    }

    /// Non-zero counters in ascending token order.
    pub fn non_zero(&self) -> impl Iterator<Item = (TrackedStatus, u64)> + '_ {
        TrackedStatus::ALL
            .into_iter()
            .map(|status| (status, self.count(status)))
            .filter(|(_, count)| *count > 0)
    }
}
