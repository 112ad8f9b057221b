//! Offset-aware dual line numbering.
//!
//! Every printed line of an aligned report carries a `left:right` index
//! prefix. [`NumberContext`] is a small value threaded through recursive
//! calls: a child diffing a sub-range advances the offsets with
//! [`with_offset`](NumberContext::with_offset) and keeps printing indices
//! that are absolute with respect to the original inputs. Nothing here is
//! ever mutated in place.

use crate::markup::{Tag, changed_into, tag, tag_into};

/// Formatting context for dual line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberContext {
    left_offset: usize,
    right_offset: usize,
    width: usize,
}

impl NumberContext {
    /// Context for two sequences of the given lengths, zero offsets.
    ///
    /// The width is fixed once from the longer sequence so every index
    /// in the report lines up, minimum one digit.
    pub fn new(left_len: usize, right_len: usize) -> Self {
        Self {
            left_offset: 0,
            right_offset: 0,
            width: digits(left_len.max(right_len)),
        }
    }

    /// A copy with both offsets advanced.
    pub const fn with_offset(self, delta_left: usize, delta_right: usize) -> Self {
        Self {
            left_offset: self.left_offset + delta_left,
            right_offset: self.right_offset + delta_right,
            width: self.width,
        }
    }

    /// The fixed index width in digits.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Format a left-side index; `None` renders as filler dashes.
    pub fn format_left(&self, n: Option<usize>) -> String {
        self.format(n, self.left_offset)
    }

    /// Format a right-side index; `None` renders as filler dashes.
    pub fn format_right(&self, n: Option<usize>) -> String {
        self.format(n, self.right_offset)
    }

    fn format(&self, n: Option<usize>, offset: usize) -> String {
        match n {
            Some(n) => format!("{:0width$}", n + offset, width = self.width),
            None => "-".repeat(self.width),
        }
    }

    /// A line shared by both sides: plain prefix, plain payload.
    pub fn same_line(&self, left: usize, right: usize, text: &str) -> String {
        format!(
            "{}:{} {}",
            self.format_left(Some(left)),
            self.format_right(Some(right)),
            text
        )
    }

    /// A paired changed line.
    ///
    /// Index tags follow the changed-unit orientation: the left (got)
    /// index carries the insert tag and the right (want) index the
    /// delete tag, like the payload halves they point at.
    pub fn changed_line(&self, left: usize, right: usize, got: &str, want: &str) -> String {
        let mut out = String::new();
        tag_into(&mut out, Tag::Insert, &self.format_left(Some(left)));
        out.push(':');
        tag_into(&mut out, Tag::Delete, &self.format_right(Some(right)));
        out.push(' ');
        changed_into(&mut out, got, want);
        out
    }

    /// A line present only on the left side, delete-tagged throughout.
    pub fn left_only_line(&self, left: usize, text: &str) -> String {
        tag(
            Tag::Delete,
            &format!(
                "{}:{} {}",
                self.format_left(Some(left)),
                self.format_right(None),
                text
            ),
        )
    }

    /// A line present only on the right side, insert-tagged throughout.
    pub fn right_only_line(&self, right: usize, text: &str) -> String {
        tag(
            Tag::Insert,
            &format!(
                "{}:{} {}",
                self.format_left(None),
                self.format_right(Some(right)),
                text
            ),
        )
    }
}

const fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
