//! Grouped running statistics keyed by (committee, bucket).

use crate::rules::GroupKey;
use rustc_hash::FxHashMap;

/// Running statistics for one group.
///
/// `amounts` preserves arrival order and is append-only, so the invariants
/// `count == amounts.len()` and `total == sum(amounts)` hold at every
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct GroupStats {
    pub count: u64,
    pub total: i64,
    amounts: Vec<i64>,
}

impl GroupStats {
    fn update(&mut self, amount: i64) {
        self.count += 1;
        self.total += amount;
        self.amounts.push(amount);
    }

    /// Amounts seen for this group, in arrival order.
    pub fn amounts(&self) -> &[i64] {
        &self.amounts
    }

    /// Exact median of all amounts seen so far, recomputed on every call.
    ///
    /// Sorts a copy of the sample and picks the middle element; for even
    /// counts the mean of the two middle elements is rounded half away
    /// from zero. Integer arithmetic throughout.
    pub fn median(&self) -> i64 {
        if self.amounts.is_empty() {
            return 0;
        }
        let mut sorted = self.amounts.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            mean_half_away_from_zero(sorted[mid - 1], sorted[mid])
        }
    }
}

/// Mean of two integers rounded half away from zero: (100 + 101)/2 -> 101,
/// (-100 + -101)/2 -> -101.
#[inline]
fn mean_half_away_from_zero(lo: i64, hi: i64) -> i64 {
    let sum = lo + hi;
    if sum % 2 == 0 {
        sum / 2
    } else if sum > 0 {
        (sum + 1) / 2
    } else {
        (sum - 1) / 2
    }
}

/// Map from group key to running statistics.
///
/// Entries are created on first update and never deleted. Each report
/// engine owns exactly one accumulator for the duration of its pass.
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    groups: FxHashMap<GroupKey, GroupStats>,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one amount into the group for `key`, creating the entry if this
    /// is the first amount for that key. Returns the updated stats so the
    /// caller can snapshot (median, count, total) immediately.
    pub fn update(&mut self, key: GroupKey, amount: i64) -> &GroupStats {
        let entry = self.groups.entry(key).or_default();
        entry.update(amount);
        entry
    }

    pub fn get(&self, key: &GroupKey) -> Option<&GroupStats> {
        self.groups.get(key)
    }

    /// Number of distinct groups seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All (key, stats) pairs ascending by key. Used by the batched report
    /// to emit one final line per group.
    pub fn sorted_entries(&self) -> Vec<(&GroupKey, &GroupStats)> {
        let mut entries: Vec<_> = self.groups.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(committee: &str, bucket: &str) -> GroupKey {
        GroupKey::new(committee, bucket)
    }

    #[test]
    fn test_update_creates_then_mutates() {
        let mut acc = GroupAccumulator::new();
        let snap = acc.update(key("C1", "10001"), 300);
        assert_eq!(snap.count, 1);
        assert_eq!(snap.total, 300);
        assert_eq!(snap.median(), 300);

        let snap = acc.update(key("C1", "10001"), 700);
        assert_eq!(snap.count, 2);
        assert_eq!(snap.total, 1000);
        assert_eq!(snap.median(), 500);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_invariants_at_every_snapshot() {
        let mut acc = GroupAccumulator::new();
        let amounts = [40, -10, 25, 25, 300];
        for (i, &a) in amounts.iter().enumerate() {
            let snap = acc.update(key("C1", "10001"), a);
            assert_eq!(snap.count as usize, i + 1);
            assert_eq!(snap.count as usize, snap.amounts().len());
            assert_eq!(snap.total, amounts[..=i].iter().sum::<i64>());
        }
    }

    #[test]
    fn test_amounts_preserve_arrival_order() {
        let mut acc = GroupAccumulator::new();
        for a in [300, 100, 200] {
            acc.update(key("C1", "10001"), a);
        }
        let stats = acc.get(&key("C1", "10001")).unwrap();
        assert_eq!(stats.amounts(), &[300, 100, 200]);
    }

    #[test]
    fn test_median_odd_and_even() {
        let mut acc = GroupAccumulator::new();
        let k = key("C1", "10001");

        acc.update(k.clone(), 100);
        assert_eq!(acc.get(&k).unwrap().median(), 100);

        acc.update(k.clone(), 300);
        assert_eq!(acc.get(&k).unwrap().median(), 200);

        acc.update(k.clone(), 600);
        // sorted [100, 300, 600]
        assert_eq!(acc.get(&k).unwrap().median(), 300);
    }

    #[test]
    fn test_median_unsorted_sample() {
        let mut acc = GroupAccumulator::new();
        let k = key("C1", "10001");
        for a in [600, 100, 200] {
            acc.update(k.clone(), a);
        }
        assert_eq!(acc.get(&k).unwrap().median(), 200);
    }

    #[test]
    fn test_median_even_exact_mean() {
        let mut acc = GroupAccumulator::new();
        let k = key("C1", "10001");
        for a in [10, 20, 30, 40] {
            acc.update(k.clone(), a);
        }
        assert_eq!(acc.get(&k).unwrap().median(), 25);
    }

    #[test]
    fn test_median_rounds_half_away_from_zero() {
        assert_eq!(mean_half_away_from_zero(100, 101), 101);
        assert_eq!(mean_half_away_from_zero(-101, -100), -101);
        assert_eq!(mean_half_away_from_zero(0, 1), 1);
        assert_eq!(mean_half_away_from_zero(-1, 0), -1);
        assert_eq!(mean_half_away_from_zero(100, 300), 200);
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut acc = GroupAccumulator::new();
        acc.update(key("C1", "10001"), 100);
        acc.update(key("C1", "94105"), 999);
        acc.update(key("C2", "10001"), 7);
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.get(&key("C1", "10001")).unwrap().total, 100);
        assert_eq!(acc.get(&key("C2", "10001")).unwrap().total, 7);
    }

    #[test]
    fn test_sorted_entries_order() {
        let mut acc = GroupAccumulator::new();
        acc.update(key("C2", "01012018"), 1);
        acc.update(key("C1", "02012019"), 2);
        acc.update(key("C1", "01022020"), 3);
        let keys: Vec<_> = acc
            .sorted_entries()
            .into_iter()
            .map(|(k, _)| (k.committee_id.as_str(), k.bucket.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("C1", "01022020"), ("C1", "02012019"), ("C2", "01012018")]
        );
    }
}
