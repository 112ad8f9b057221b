//! Semantic markup for diff output.
//!
//! Diff results are built as tagged text: ordinary text interleaved with
//! marker characters from the Unicode private use area. Markers carry the
//! *meaning* of a span (inserted, deleted, a label), never its appearance.
//! The final appearance is substituted in one pass by
//! [`resolve_for_display`](crate::resolve_for_display).

/// A semantic tag for a span of diff output.
///
/// Tags are embedded in strings as one open marker and one close marker.
/// A "changed" span has no marker pair of its own: it is the composition
/// `Delete(want) + SEPARATOR + Insert(got)` produced by [`changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Content present only on the got side.
    Delete,
    /// Content present only on the want side.
    Insert,
    /// The "got" label in a report summary.
    Got,
    /// The "want" label in a report summary.
    Want,
    /// A report title or free-form message.
    Message,
}

/// Standalone marker separating the two halves of a changed span.
pub(crate) const SEPARATOR: char = '\u{E00A}';

impl Tag {
    pub(crate) const ALL: [Tag; 5] = [Tag::Delete, Tag::Insert, Tag::Got, Tag::Want, Tag::Message];

    /// The open marker character for this tag.
    pub(crate) const fn open(self) -> char {
        match self {
            Tag::Delete => '\u{E000}',
            Tag::Insert => '\u{E002}',
            Tag::Got => '\u{E004}',
            Tag::Want => '\u{E006}',
            Tag::Message => '\u{E008}',
        }
    }

    /// The close marker character for this tag.
    pub(crate) const fn close(self) -> char {
        match self {
            Tag::Delete => '\u{E001}',
            Tag::Insert => '\u{E003}',
            Tag::Got => '\u{E005}',
            Tag::Want => '\u{E007}',
            Tag::Message => '\u{E009}',
        }
    }

    pub(crate) fn from_open(c: char) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.open() == c)
    }

    pub(crate) fn from_close(c: char) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.close() == c)
    }
}

/// Wrap `text` in the marker pair for `tag`.
pub fn tag(tag: Tag, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    tag_into(&mut out, tag, text);
    out
}

/// Append `text` wrapped in the marker pair for `tag` onto `out`.
pub fn tag_into(out: &mut String, tag: Tag, text: &str) {
    out.push(tag.open());
    out.push_str(text);
    out.push(tag.close());
}

/// Render a paired changed span: want-portion, separator, got-portion.
///
/// The want text carries the [`Tag::Delete`] pair and the got text the
/// [`Tag::Insert`] pair, matching the orientation used everywhere else
/// in the merged view.
pub fn changed(got: &str, want: &str) -> String {
    let mut out = String::with_capacity(got.len() + want.len() + 16);
    changed_into(&mut out, got, want);
    out
}

/// Append a paired changed span onto `out`.
pub fn changed_into(out: &mut String, got: &str, want: &str) {
    tag_into(out, Tag::Delete, want);
    out.push(SEPARATOR);
    tag_into(out, Tag::Insert, got);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_distinct() {
        let mut seen = Vec::new();
        for tag in Tag::ALL {
            seen.push(tag.open());
            seen.push(tag.close());
        }
        seen.push(SEPARATOR);
        let before = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), before);
    }

    #[test]
    fn open_close_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_open(tag.open()), Some(tag));
            assert_eq!(Tag::from_close(tag.close()), Some(tag));
            assert_eq!(Tag::from_open(tag.close()), None);
        }
    }

    #[test]
    fn changed_orders_want_before_got() {
        let span = changed("got", "want");
        let want_at = span.find("want").unwrap();
        let got_at = span.find("got").unwrap();
        assert!(want_at < got_at);
        assert!(span.contains(SEPARATOR));
    }
}
