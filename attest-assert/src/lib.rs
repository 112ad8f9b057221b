#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use attest_diff::{Tag, build_report, diff_str, resolve_for_display, tag_into};

/// Default minimum run length for the assertion macros.
///
/// Three code points is enough to keep one-character coincidences from
/// fragmenting the diff while still anchoring on short real matches.
pub const DEFAULT_MIN_RUN: usize = 3;

/// Result of comparing two values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sameness {
    /// The values are equal.
    Same,
    /// The values differ - contains the rendered diff.
    Different(String),
}

impl Sameness {
    /// True for [`Sameness::Same`].
    pub const fn is_same(&self) -> bool {
        matches!(self, Sameness::Same)
    }
}

/// Compare two strings at character granularity.
///
/// On mismatch the rendered message shows the got, want, and merged
/// views of the diff, resolved with the process-wide display style.
pub fn check_text(got: impl AsRef<str>, want: impl AsRef<str>, min_run: usize) -> Sameness {
    let diff = diff_str(got.as_ref(), want.as_ref(), min_run);
    if !diff.changed {
        return Sameness::Same;
    }

    let mut tagged = String::new();
    tag_into(&mut tagged, Tag::Got, "got:    ");
    tagged.push_str(&diff.got);
    tagged.push('\n');
    tag_into(&mut tagged, Tag::Want, "want:   ");
    tagged.push_str(&diff.want);
    tagged.push('\n');
    tag_into(&mut tagged, Tag::Message, "merged: ");
    tagged.push_str(&diff.merged);

    Sameness::Different(resolve_for_display(&tagged))
}

/// Compare two sequences line by line.
///
/// On mismatch the rendered message is the titled report from
/// [`attest_diff::build_report`].
pub fn check_lines<T>(title: &str, got: &[T], want: &[T], min_run: usize) -> Sameness
where
    T: PartialEq + ToString,
{
    let report = build_report(title, got, want, min_run, |a, b| a == b, T::to_string);
    if report.is_empty() {
        Sameness::Same
    } else {
        Sameness::Different(report)
    }
}

/// Asserts that two strings are equal, with a character-level diff on
/// failure.
///
/// Accepts an optional trailing format message.
///
/// # Panics
///
/// Panics if the strings differ.
///
/// # Example
///
/// ```
/// use attest_assert::assert_text_same;
///
/// assert_text_same!("hello", "hello");
/// ```
#[macro_export]
macro_rules! assert_text_same {
    ($got:expr, $want:expr $(,)?) => {
        match $crate::check_text(&$got, &$want, $crate::DEFAULT_MIN_RUN) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(diff) => {
                panic!("assertion `assert_text_same!(got, want)` failed\n\n{diff}\n");
            }
        }
    };
    ($got:expr, $want:expr, $($arg:tt)+) => {
        match $crate::check_text(&$got, &$want, $crate::DEFAULT_MIN_RUN) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(diff) => {
                panic!(
                    "assertion `assert_text_same!(got, want)` failed: {}\n\n{diff}\n",
                    format_args!($($arg)+)
                );
            }
        }
    };
}

/// Asserts that two sequences are equal line by line, with a numbered
/// report on failure.
///
/// Accepts an optional trailing format message.
///
/// # Panics
///
/// Panics if the sequences differ.
///
/// # Example
///
/// ```
/// use attest_assert::assert_lines_same;
///
/// let got = ["a", "b"];
/// let want = ["a", "b"];
/// assert_lines_same!(&got, &want);
/// ```
#[macro_export]
macro_rules! assert_lines_same {
    ($got:expr, $want:expr $(,)?) => {
        match $crate::check_lines("lines", $got, $want, 1) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(report) => {
                panic!("assertion `assert_lines_same!(got, want)` failed\n\n{report}\n");
            }
        }
    };
    ($got:expr, $want:expr, $($arg:tt)+) => {
        match $crate::check_lines("lines", $got, $want, 1) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(report) => {
                panic!(
                    "assertion `assert_lines_same!(got, want)` failed: {}\n\n{report}\n",
                    format_args!($($arg)+)
                );
            }
        }
    };
}
