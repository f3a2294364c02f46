use rustc_hash::{FxHashMap, FxHashSet};

use crate::search_string::{PartId, Slot};

/// Per-slot set of distinct matched part ids.
///
/// Sets rather than running sums so that merging the document-wide baseline
/// with a per-sentence scan stays idempotent: a part satisfied both globally
/// and locally is still counted once.
pub(crate) type PartSets = FxHashMap<Slot, FxHashSet<PartId>>;

/// Fold matched pairs into per-slot part sets. `keep` filters pairs before
/// accumulation (used to restrict the document-wide pass to global parts).
pub(crate) fn collect_parts<F>(pairs: &FxHashSet<(Slot, PartId)>, mut keep: F) -> PartSets
where
    F: FnMut(Slot, PartId) -> bool,
{
    let mut sets = PartSets::default();
    for &(slot, part) in pairs {
        if keep(slot, part) {
            sets.entry(slot).or_default().insert(part);
        }
    }
    sets
}

/// A slot is satisfied iff the sum of its distinct matched part ids equals
/// exactly the declared match target. Part ids are bit-disjoint by external
/// contract, so summation acts as an AND-completeness test; overshooting or
/// undershooting the target both fail.
#[inline]
pub(crate) fn is_satisfied(parts: &FxHashSet<PartId>, target: u64) -> bool {
    parts.iter().sum::<u64>() == target
}
