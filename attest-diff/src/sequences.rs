//! Generic ordered-sequence diffing.
//!
//! [`diff_sequence`] is the slice generalization of the string differ:
//! same run-anchored recursion, but over arbitrary element types with an
//! injected equality predicate, and the output is one [`AlignedRecord`]
//! per aligned position instead of tagged text. Rendering is left to the
//! report layer.

use tracing::debug;

use crate::runs::find_best_run;

/// Classification of one aligned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The element is present on both sides.
    Same,
    /// One left element paired with one right element, unequal.
    Changed,
    /// Present only on the left side (a deletion).
    LeftOnly,
    /// Present only on the right side (an insertion).
    RightOnly,
}

/// One unit of sequence-diff output.
///
/// Indices are absolute 0-based positions in the original inputs,
/// regardless of how deep the recursion that produced the record was.
/// A `None` side means "no corresponding position".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedRecord {
    /// Position in the left sequence, if any.
    pub left: Option<usize>,
    /// Position in the right sequence, if any.
    pub right: Option<usize>,
    /// How this position is classified.
    pub kind: ChangeKind,
}

/// Diff two sequences into aligned records.
///
/// Records come out in left-to-right scan order with monotonically
/// non-decreasing indices per side. Every left position appears in
/// exactly one record, and likewise every right position.
///
/// On identical inputs every record is `Same`; check with
/// [`any_changes`] — requesting a diff of equal sequences is a logic
/// error in the caller, not here.
pub fn diff_sequence<T, F>(left: &[T], right: &[T], min_run: usize, eq: F) -> Vec<AlignedRecord>
where
    F: Fn(&T, &T) -> bool,
{
    debug!(
        left_len = left.len(),
        right_len = right.len(),
        min_run,
        "sequence diff"
    );
    let mut records = Vec::with_capacity(left.len().max(right.len()));
    align(left, right, 0, 0, min_run.max(1), &eq, &mut records);
    records
}

/// True when any record is not `Same`.
///
/// Callers that requested a diff because they already believed the
/// sequences differed should treat `false` as an invalid invocation.
pub fn any_changes(records: &[AlignedRecord]) -> bool {
    records.iter().any(|r| r.kind != ChangeKind::Same)
}

fn align<T, F>(
    left: &[T],
    right: &[T],
    left_base: usize,
    right_base: usize,
    min_run: usize,
    eq: &F,
    out: &mut Vec<AlignedRecord>,
) where
    F: Fn(&T, &T) -> bool,
{
    let run = find_best_run(left, right, min_run, eq);
    if run.is_none() {
        emit_region(left.len(), right.len(), left_base, right_base, out);
        return;
    }

    align(
        &left[..run.left],
        &right[..run.right],
        left_base,
        right_base,
        min_run,
        eq,
        out,
    );

    for k in 0..run.len {
        out.push(AlignedRecord {
            left: Some(left_base + run.left + k),
            right: Some(right_base + run.right + k),
            kind: ChangeKind::Same,
        });
    }

    align(
        &left[run.left + run.len..],
        &right[run.right + run.len..],
        left_base + run.left + run.len,
        right_base + run.right + run.len,
        min_run,
        eq,
        out,
    );
}

/// A region with no qualifying run: pair elements one-to-one, then emit
/// the overhang as one-sided records.
fn emit_region(
    left_len: usize,
    right_len: usize,
    left_base: usize,
    right_base: usize,
    out: &mut Vec<AlignedRecord>,
) {
    let paired = left_len.min(right_len);
    for k in 0..paired {
        out.push(AlignedRecord {
            left: Some(left_base + k),
            right: Some(right_base + k),
            kind: ChangeKind::Changed,
        });
    }
    for k in paired..left_len {
        out.push(AlignedRecord {
            left: Some(left_base + k),
            right: None,
            kind: ChangeKind::LeftOnly,
        });
    }
    for k in paired..right_len {
        out.push(AlignedRecord {
            left: None,
            right: Some(right_base + k),
            kind: ChangeKind::RightOnly,
        });
    }
}
