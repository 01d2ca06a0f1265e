//! The uniqueness service behind `unique`.
//!
//! Stable, first-occurrence-preserving de-duplication by `PartialEq` alone.
//! No `Hash` or `Ord` bound, so it works for any comparable element type;
//! the scan is quadratic, which is fine for the in-memory sequences this
//! library targets.

/// Returns a keep-mask: `true` at each index whose element is the first
/// occurrence of its value.
pub fn dedupe_mask<T: PartialEq>(values: &[T]) -> Vec<bool> {
    let mut mask = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        mask.push(!values[..i].contains(value));
    }
    mask
}

/// Returns the values with duplicates removed, keeping the first occurrence
/// of each and preserving order.
pub fn dedupe<T: Clone + PartialEq>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .zip(dedupe_mask(values))
        .filter(|(_, keep)| *keep)
        .map(|(value, _)| value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_in_order() {
        assert_eq!(dedupe(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn empty_and_unique_inputs_pass_through() {
        assert_eq!(dedupe::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(dedupe(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn mask_marks_first_occurrences() {
        assert_eq!(
            dedupe_mask(&["a", "b", "a", "a", "c"]),
            vec![true, true, false, false, true]
        );
    }

    #[test]
    fn works_without_hash_or_ord() {
        // f64 is PartialEq but not Eq/Hash/Ord.
        assert_eq!(dedupe(&[1.5, 1.5, 2.5]), vec![1.5, 2.5]);
    }
}
