//! Character-level string diffing.
//!
//! [`diff_str`] recursively splits two strings around their best common
//! run and tags whatever the runs leave uncovered. It produces three
//! tagged views of the same decomposition: one per side plus a merged
//! rendering that interleaves both.

use tracing::debug;

use crate::markup::{Tag, changed_into, tag_into};
use crate::runs::find_best_run;

/// Three tagged views of one string diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringDiff {
    /// The got side: shared text plus `Delete`-tagged got-only spans.
    pub got: String,
    /// The want side: shared text plus `Insert`-tagged want-only spans.
    pub want: String,
    /// Both sides interleaved; paired spans render as changed units.
    pub merged: String,
    /// False when the inputs were character-for-character identical.
    pub changed: bool,
}

/// Diff two strings at character granularity.
///
/// `min_run` is the noise knob: only common runs of at least that many
/// code points count as shared text. Identical inputs come back
/// unmarked with `changed == false`; a diff on identical inputs is a
/// caller-side logic error, not a failure here.
pub fn diff_str(got: &str, want: &str, min_run: usize) -> StringDiff {
    let mut out = StringDiff::default();

    if got == want {
        out.got.push_str(got);
        out.want.push_str(want);
        out.merged.push_str(got);
        return out;
    }

    debug!(got_len = got.len(), want_len = want.len(), min_run, "string diff");

    let got: Vec<char> = got.chars().collect();
    let want: Vec<char> = want.chars().collect();
    split(&got, &want, min_run.max(1), &mut out);
    out
}

/// Recursive decomposition: anchor on the best run, then handle the
/// prefixes and suffixes independently.
fn split(got: &[char], want: &[char], min_run: usize, out: &mut StringDiff) {
    let run = find_best_run(got, want, min_run, |a, b| a == b);
    if run.is_none() {
        emit_unmatched(got, want, out);
        return;
    }

    split(&got[..run.left], &want[..run.right], min_run, out);

    let same: String = got[run.left..run.left + run.len].iter().collect();
    out.got.push_str(&same);
    out.want.push_str(&same);
    out.merged.push_str(&same);

    split(
        &got[run.left + run.len..],
        &want[run.right + run.len..],
        min_run,
        out,
    );
}

/// Tag a region with no qualifying run left in it.
fn emit_unmatched(got: &[char], want: &[char], out: &mut StringDiff) {
    if got.is_empty() && want.is_empty() {
        return;
    }
    out.changed = true;

    let got_text: String = got.iter().collect();
    let want_text: String = want.iter().collect();

    if !got.is_empty() {
        tag_into(&mut out.got, Tag::Delete, &got_text);
    }
    if !want.is_empty() {
        tag_into(&mut out.want, Tag::Insert, &want_text);
    }

    if got.is_empty() {
        // Insert-only span.
        tag_into(&mut out.merged, Tag::Insert, &want_text);
    } else if want.is_empty() {
        // Delete-only span.
        tag_into(&mut out.merged, Tag::Delete, &got_text);
    } else {
        changed_into(&mut out.merged, &got_text, &want_text);
    }
}
