//! Target vs. player sequence comparison.

use crate::types::Symbol;

/// Result of comparing a player sequence with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Comparison {
    /// Every symbol matches.
    Match,
    /// First position where the sequences differ.
    Mismatch { index: usize },
}

impl Comparison {
    /// Returns true for [`Comparison::Match`].
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Compares two sequences element by element.
///
/// The first differing index decides the outcome; nothing after it is looked
/// at. Sequences of different length mismatch at the end of the shorter one.
pub fn compare(target: &[Symbol], player: &[Symbol]) -> Comparison {
    let first_difference = target
        .iter()
        .zip(player.iter())
        .position(|(expected, actual)| expected != actual);

    match first_difference {
        Some(index) => Comparison::Mismatch { index },
        None if target.len() != player.len() => Comparison::Mismatch {
            index: target.len().min(player.len()),
        },
        None => Comparison::Match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq<const N: usize>(values: [u8; N]) -> [Symbol; N] {
        values.map(|v| Symbol::new(v).unwrap())
    }

    #[test]
    fn identical_sequences_match() {
        for target in [&seq([1, 2])[..], &seq([4, 4, 4])[..], &seq([1, 2, 3, 4])[..]] {
            assert_eq!(compare(target, target), Comparison::Match);
        }
        assert!(compare(&[], &[]).is_match());
    }

    #[test]
    fn first_difference_is_reported() {
        assert_eq!(
            compare(&seq([1, 3]), &seq([1, 4])),
            Comparison::Mismatch { index: 1 }
        );
        assert_eq!(
            compare(&seq([2, 2, 2, 2]), &seq([3, 2, 2, 2])),
            Comparison::Mismatch { index: 0 }
        );
    }

    #[test]
    fn elements_after_first_mismatch_are_ignored() {
        let target = seq([1, 2, 3, 4]);
        let a = compare(&target, &seq([1, 4, 3, 4]));
        let b = compare(&target, &seq([1, 4, 1, 1]));
        assert_eq!(a, b);
        assert_eq!(a, Comparison::Mismatch { index: 1 });
    }

    #[test]
    fn length_difference_is_a_mismatch() {
        assert_eq!(
            compare(&seq([1, 2, 3]), &seq([1, 2])),
            Comparison::Mismatch { index: 2 }
        );
    }
}
