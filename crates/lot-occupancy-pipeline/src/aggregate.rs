use lot_occupancy_classify::SpotDecision;
use serde::{Deserialize, Serialize};

/// Aggregate occupancy tally for one frame.
///
/// `occupied + vacant` equals the number of spots that classified
/// successfully; failed spots are excluded upstream. Recording is
/// commutative, so partial tallies produced in any order merge to the same
/// result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OccupancyCounts {
    pub occupied: u32,
    pub vacant: u32,
}

impl OccupancyCounts {
    #[inline]
    pub fn record(&mut self, decision: SpotDecision) {
        match decision {
            SpotDecision::Occupied => self.occupied += 1,
            SpotDecision::Vacant => self.vacant += 1,
        }
    }

    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            occupied: self.occupied + other.occupied,
            vacant: self.vacant + other.vacant,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.occupied + self.vacant
    }
}

/// Count a batch of decisions. An empty batch yields `{0, 0}`.
pub fn aggregate(decisions: impl IntoIterator<Item = SpotDecision>) -> OccupancyCounts {
    let mut counts = OccupancyCounts::default();
    for d in decisions {
        counts.record(d);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use SpotDecision::{Occupied, Vacant};

    #[test]
    fn empty_batch_is_all_zero() {
        assert_eq!(aggregate([]), OccupancyCounts::default());
    }

    #[test]
    fn counts_each_class() {
        let c = aggregate([Occupied, Vacant, Occupied, Occupied]);
        assert_eq!(c, OccupancyCounts { occupied: 3, vacant: 1 });
        assert_eq!(c.total(), 4);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let base = [Occupied, Vacant, Vacant, Occupied, Vacant];
        let expected = aggregate(base);

        // A few permutations of the same multiset.
        let perms = [
            [Vacant, Vacant, Vacant, Occupied, Occupied],
            [Occupied, Occupied, Vacant, Vacant, Vacant],
            [Vacant, Occupied, Vacant, Occupied, Vacant],
        ];
        for perm in perms {
            assert_eq!(aggregate(perm), expected);
        }
    }

    #[test]
    fn merge_matches_single_pass() {
        let left = aggregate([Occupied, Vacant]);
        let right = aggregate([Occupied, Occupied]);
        assert_eq!(
            left.merge(right),
            aggregate([Occupied, Vacant, Occupied, Occupied])
        );
    }
}
