use std::collections::BTreeMap;

/// Most frequent value. Ties go to the smallest value in `Ord` order; `None`
/// for empty input.
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrences per distinct value, ordered by count descending then value ascending.
pub fn value_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut out: Vec<_> = counts.into_iter().collect();
    // stable sort keeps the BTreeMap's ascending order among equal counts
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
