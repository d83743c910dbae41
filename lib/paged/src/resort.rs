use std::cmp::Ordering;

use super::query::OrderDir;

/// Case-insensitive text comparison for client-side re-sorting. Differing
/// only in case falls back to a bytewise tiebreak so the ordering stays
/// total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Re-sorts an already-loaded page without touching the source slice.
///
/// Descending order flips the comparator rather than reversing the sorted
/// list, so rows that compare equal keep their incoming relative order in
/// both directions.
pub fn resorted<T: Clone>(
    items: &[T],
    dir: OrderDir,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ord = cmp(a, b);
        match dir {
            OrderDir::Asc => ord,
            OrderDir::Desc => ord.reverse(),
        }
    });
    sorted
}
