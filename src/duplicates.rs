use std::collections::BTreeSet;
use tracing::debug;

use crate::record::RouterRecord;

/// Indices of every record whose key matches the key of another record.
///
/// Walks each record from the end towards the start and compares it with
/// every record before it. Operates on a snapshot: nothing is removed here.
pub fn conflicting_indices<F>(records: &[RouterRecord], key: F) -> BTreeSet<usize>
where
    F: Fn(&RouterRecord) -> String,
{
    let keys: Vec<String> = records.iter().map(&key).collect();
    let mut conflicts = BTreeSet::new();

    for z in (1..keys.len()).rev() {
        let mut matched = false;
        for j in (0..z).rev() {
            if keys[z] == keys[j] {
                conflicts.insert(j);
                matched = true;
            }
        }
        if matched {
            conflicts.insert(z);
        }
    }

    conflicts
}

/// Union of the hostname and IP address conflicts, both computed over the
/// same unmodified records.
pub fn find_conflicts(records: &[RouterRecord]) -> BTreeSet<usize> {
    let by_hostname = conflicting_indices(records, RouterRecord::hostname_key);
    let by_ip = conflicting_indices(records, RouterRecord::ip_key);

    debug!(
        "Duplicate scan: {} hostname conflicts, {} IP address conflicts",
        by_hostname.len(),
        by_ip.len()
    );

    by_hostname.union(&by_ip).copied().collect()
}

/// Removes every conflicting record and returns how many were removed.
pub fn remove_conflicts(records: &mut Vec<RouterRecord>) -> usize {
    let conflicts = find_conflicts(records);

    // Highest index first so lower indices stay valid
    for &index in conflicts.iter().rev() {
        let removed = records.remove(index);
        debug!(
            "Removing duplicate router {} ({}) from line {}",
            removed.hostname, removed.ip_address, removed.line
        );
    }

    conflicts.len()
}
