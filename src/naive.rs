use crate::{Error, Result};

/// Re-scan the visited prefix on every query, instead of keeping a heap.
///
/// Uses the same cursor rule as [`crate::IndexScheduler`]: positions `1..=idx`
/// (clamped to the permutation) are visited, and position 0 never is.
/// O(n) per query.
pub fn naive_associate_indices<K: Ord + Copy>(
    permutation: &[K],
    query_positions: &[usize],
) -> Result<Vec<K>> {
    let mut used = vec![false; permutation.len()];
    let mut cursor = 0;
    let mut result = Vec::with_capacity(query_positions.len());
    for &idx in query_positions {
        cursor = cursor.max(idx);
        let end = cursor.min(permutation.len().saturating_sub(1));
        let best = (1..=end)
            .filter(|&i| !used[i])
            .min_by_key(|&i| permutation[i])
            .ok_or(Error::IllegalState {
                query_position: idx,
            })?;
        used[best] = true;
        result.push(permutation[best]);
    }
    Ok(result)
}
