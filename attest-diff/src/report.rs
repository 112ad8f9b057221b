//! Titled, line-oriented comparison reports.
//!
//! This is where the pieces meet: the sequence differ produces aligned
//! records, the number context formats their prefixes, the markup layer
//! tags them, and the resolver is applied exactly once before the report
//! leaves this module.

use crate::markup::{Tag, tag_into};
use crate::numbering::NumberContext;
use crate::resolve::{DisplayStyle, resolve_for_display, try_resolve_with};
use crate::sequences::{AlignedRecord, ChangeKind, any_changes, diff_sequence};

/// Build a comparison report, resolved with the process-wide style.
///
/// Returns the empty string when the sequences are identical; callers
/// use that emptiness as the "no mismatch" signal. Otherwise the report
/// opens with `"<title>: got (<N> lines) - want (<M> lines)"` followed by
/// one numbered line per aligned record.
pub fn build_report<T, F, S>(
    title: &str,
    left: &[T],
    right: &[T],
    min_run: usize,
    eq: F,
    stringify: S,
) -> String
where
    F: Fn(&T, &T) -> bool,
    S: Fn(&T) -> String,
{
    match tagged_report(title, left, right, min_run, eq, stringify) {
        Some(tagged) => resolve_for_display(&tagged),
        None => String::new(),
    }
}

/// [`build_report`] with an explicit style instead of the global one.
pub fn build_report_with_style<T, F, S>(
    style: &DisplayStyle,
    title: &str,
    left: &[T],
    right: &[T],
    min_run: usize,
    eq: F,
    stringify: S,
) -> String
where
    F: Fn(&T, &T) -> bool,
    S: Fn(&T) -> String,
{
    match tagged_report(title, left, right, min_run, eq, stringify) {
        Some(tagged) => match try_resolve_with(style, &tagged) {
            Ok(resolved) => resolved,
            Err(err) => panic!("malformed markup stream: {err}"),
        },
        None => String::new(),
    }
}

/// The tagged report body, or `None` when there is nothing to report.
fn tagged_report<T, F, S>(
    title: &str,
    left: &[T],
    right: &[T],
    min_run: usize,
    eq: F,
    stringify: S,
) -> Option<String>
where
    F: Fn(&T, &T) -> bool,
    S: Fn(&T) -> String,
{
    let records = diff_sequence(left, right, min_run, eq);
    if !any_changes(&records) {
        return None;
    }

    // Display numbering is 1-based; the offsets exist for recursion
    // anyway, so the report reuses them for the shift.
    let ctx = NumberContext::new(left.len(), right.len()).with_offset(1, 1);

    let mut out = String::new();
    tag_into(&mut out, Tag::Message, title);
    out.push_str(": ");
    tag_into(&mut out, Tag::Got, &format!("got ({} lines)", left.len()));
    out.push_str(" - ");
    tag_into(&mut out, Tag::Want, &format!("want ({} lines)", right.len()));
    out.push('\n');

    for record in &records {
        push_record_line(&mut out, &ctx, record, left, right, &stringify);
    }

    Some(out)
}

fn push_record_line<T, S>(
    out: &mut String,
    ctx: &NumberContext,
    record: &AlignedRecord,
    left: &[T],
    right: &[T],
    stringify: &S,
) where
    S: Fn(&T) -> String,
{
    let line = match (record.kind, record.left, record.right) {
        (ChangeKind::Same, Some(l), Some(r)) => ctx.same_line(l, r, &stringify(&left[l])),
        (ChangeKind::Changed, Some(l), Some(r)) => {
            ctx.changed_line(l, r, &stringify(&left[l]), &stringify(&right[r]))
        }
        (ChangeKind::LeftOnly, Some(l), _) => ctx.left_only_line(l, &stringify(&left[l])),
        (ChangeKind::RightOnly, _, Some(r)) => ctx.right_only_line(r, &stringify(&right[r])),
        // diff_sequence always populates the index a classification needs.
        _ => return,
    };
    out.push_str(&line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn identical_sequences_yield_an_empty_report() {
        let xs = lines(&["alpha", "beta"]);
        let report = build_report("Title", &xs, &xs, 1, |a, b| a == b, Clone::clone);
        assert_eq!(report, "");
    }

    #[test]
    fn empty_sequences_yield_an_empty_report() {
        let report =
            build_report::<String, _, _>("Title", &[], &[], 1, |a, b| a == b, Clone::clone);
        assert_eq!(report, "");
    }

    #[test]
    fn changed_line_report() {
        let got = lines(&["alpha", "beta", "gamma"]);
        let want = lines(&["alpha", "delta", "gamma"]);
        let report = build_report_with_style(
            &DisplayStyle::plain(),
            "Lines",
            &got,
            &want,
            1,
            |a, b| a == b,
            Clone::clone,
        );
        assert_eq!(
            report,
            "Lines: got (3 lines) - want (3 lines)\n\
             1:1 alpha\n\
             {+2+}:[-2-] [-delta-]/{+beta+}\n\
             3:3 gamma\n"
        );
    }

    #[test]
    fn one_sided_lines_report() {
        let got = lines(&["alpha", "beta"]);
        let want = lines(&["alpha"]);
        let report = build_report_with_style(
            &DisplayStyle::plain(),
            "Extra",
            &got,
            &want,
            1,
            |a, b| a == b,
            Clone::clone,
        );
        assert_eq!(
            report,
            "Extra: got (2 lines) - want (1 lines)\n\
             1:1 alpha\n\
             [-2:- beta-]\n"
        );
    }

    #[test]
    fn summary_labels_are_tagged() {
        let got = lines(&["a"]);
        let want = lines(&["b"]);
        let report = build_report_with_style(
            &DisplayStyle::sentinels(),
            "T",
            &got,
            &want,
            1,
            |a, b| a == b,
            Clone::clone,
        );
        assert!(report.starts_with("<M<T>M>: <G<got (1 lines)>G> - <W<want (1 lines)>W>\n"));
    }
}
