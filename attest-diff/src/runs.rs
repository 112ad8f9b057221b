//! Longest-common-run search.
//!
//! A run is a contiguous block of elementwise-equal items shared between
//! two sequences. [`find_best_run`] is the anchor-finding step the string
//! and sequence differs recurse around.

use tracing::trace;

/// A contiguous common span between two sequences.
///
/// `left[left..left + len]` equals `right[right..right + len]`
/// elementwise. Runs live only for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Start index in the left sequence.
    pub left: usize,
    /// Start index in the right sequence.
    pub right: usize,
    /// Number of elements in the run.
    pub len: usize,
}

impl Run {
    /// Sentinel meaning "no qualifying run".
    pub const NONE: Self = Self {
        left: 0,
        right: 0,
        len: 0,
    };

    /// True for the no-qualifying-run sentinel.
    pub const fn is_none(&self) -> bool {
        self.len == 0
    }
}

/// Find the longest common run of at least `min_run` elements.
///
/// Among runs of equal maximal length the smallest left start wins, and
/// among those the smallest right start. A `min_run` of zero is treated
/// as one; a zero-length run is not a run.
///
/// Swapping the two sequences mirrors the result: whenever the maximal
/// run is unique, `find_best_run(b, a, m)` returns the same run with the
/// left and right indices exchanged.
///
/// Classic O(n·m) dynamic programming: a table of common-run lengths
/// *starting* at each index pair, filled back to front, then scanned in
/// ascending (left, right) order so that the first strictly-longest hit
/// is also the tie-break winner.
pub fn find_best_run<T, F>(left: &[T], right: &[T], min_run: usize, eq: F) -> Run
where
    F: Fn(&T, &T) -> bool,
{
    let min_run = min_run.max(1);
    if left.is_empty() || right.is_empty() {
        return Run::NONE;
    }

    let n = left.len();
    let m = right.len();

    // starting[i][j] = length of the common run starting at (i, j).
    // One extra row/column of zeros keeps the recurrence branchless.
    let mut starting = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            if eq(&left[i], &right[j]) {
                starting[i][j] = starting[i + 1][j + 1] + 1;
            }
        }
    }

    let mut best = Run::NONE;
    for (i, row) in starting.iter().take(n).enumerate() {
        for (j, &len) in row.iter().take(m).enumerate() {
            if len >= min_run && len > best.len {
                best = Run { left: i, right: j, len };
            }
        }
    }

    if !best.is_none() {
        trace!(
            left = best.left,
            right = best.right,
            len = best.len,
            "anchor run"
        );
    }

    best
}

/// [`find_best_run`] over the code points of two strings.
pub fn find_best_run_str(left: &str, right: &str, min_run: usize) -> Run {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    find_best_run(&left, &right, min_run, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_suffix_prefix() {
        assert_eq!(
            find_best_run_str("MNO", "NOP", 1),
            Run {
                left: 1,
                right: 0,
                len: 2
            }
        );
        assert_eq!(find_best_run_str("MNO", "NOP", 3), Run::NONE);
    }

    #[test]
    fn run_later_in_right() {
        assert_eq!(
            find_best_run_str("HIJ", "IJKHIJ", 1),
            Run {
                left: 0,
                right: 3,
                len: 3
            }
        );
        assert_eq!(find_best_run_str("HIJ", "IJKHIJ", 4), Run::NONE);
    }

    #[test]
    fn no_overlap_at_all() {
        assert_eq!(find_best_run_str("abc", "xyz", 1), Run::NONE);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(find_best_run_str("", "abc", 1), Run::NONE);
        assert_eq!(find_best_run_str("abc", "", 1), Run::NONE);
        assert_eq!(find_best_run_str("", "", 1), Run::NONE);
    }

    #[test]
    fn min_run_zero_is_clamped() {
        assert_eq!(find_best_run_str("a", "a", 0), find_best_run_str("a", "a", 1));
    }

    #[test]
    fn ties_prefer_smallest_left_start() {
        // "ab" occurs at left 0 and left 3; both match right 0.
        let run = find_best_run_str("ab-ab", "ab", 2);
        assert_eq!(
            run,
            Run {
                left: 0,
                right: 0,
                len: 2
            }
        );
    }

    #[test]
    fn ties_prefer_smallest_right_start() {
        // Left "ab" matches right 0 and right 3 with equal length.
        let run = find_best_run_str("ab", "ab-ab", 2);
        assert_eq!(
            run,
            Run {
                left: 0,
                right: 0,
                len: 2
            }
        );
    }

    #[test]
    fn symmetry_on_unique_maximal_runs() {
        let cases = [
            ("MNO", "NOP"),
            ("HIJ", "IJKHIJ"),
            ("ABC", "BCD"),
            ("abcXdef", "zzabcZZ"),
        ];
        for (a, b) in cases {
            let fwd = find_best_run_str(a, b, 1);
            let rev = find_best_run_str(b, a, 1);
            assert_eq!(fwd.left, rev.right, "{a} / {b}");
            assert_eq!(fwd.right, rev.left, "{a} / {b}");
            assert_eq!(fwd.len, rev.len, "{a} / {b}");
        }
    }

    #[test]
    fn threshold_is_monotonic() {
        // Raising min_run only ever discards runs, never finds new ones.
        let pairs = [("MNO", "NOP"), ("HIJ", "IJKHIJ"), ("ab-ab", "ab")];
        for (a, b) in pairs {
            let mut prev_len = usize::MAX;
            for m in 1..=4 {
                let run = find_best_run_str(a, b, m);
                assert!(run.len <= prev_len, "{a} / {b} at min_run {m}");
                if !run.is_none() {
                    assert!(run.len >= m);
                }
                prev_len = if run.is_none() { 0 } else { run.len };
            }
        }
    }

    #[test]
    fn generic_elements_with_injected_equality() {
        let left = [10, 20, 30, 40];
        let right = [20, 30, 99];
        let run = find_best_run(&left, &right, 2, |a, b| a == b);
        assert_eq!(
            run,
            Run {
                left: 1,
                right: 0,
                len: 2
            }
        );
    }
}
