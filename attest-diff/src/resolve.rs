//! Display resolution: substituting semantic markers with a concrete style.
//!
//! Tagged text stays free of any visual decision until the very end.
//! [`try_resolve_with`] walks the text once, replaces every marker with the
//! open/close strings a [`DisplayStyle`] configures for its tag, and
//! validates balance along the way. An unbalanced stream is a defect in the
//! diff algorithm, so the public [`resolve_for_display`] turns it into a
//! panic rather than a value.

use std::borrow::Cow;
use std::sync::{LazyLock, RwLock};

use owo_colors::Rgb;
use thiserror::Error;

use crate::markup::{SEPARATOR, Tag};
use crate::theme::DiffTheme;

/// The open/close strings substituted for one tag's marker pair.
#[derive(Debug, Clone, Default)]
pub struct Decor {
    /// Replaces the open marker.
    pub open: Cow<'static, str>,
    /// Replaces the close marker.
    pub close: Cow<'static, str>,
}

impl Decor {
    /// A decoration pair from two static strings.
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// No decoration at all.
    pub const fn none() -> Self {
        Self::new("", "")
    }

    /// A truecolor foreground escape, closed by a foreground reset.
    pub fn fg(color: Rgb) -> Self {
        Self {
            open: Cow::Owned(format!("\x1b[38;2;{};{};{}m", color.0, color.1, color.2)),
            close: Cow::Borrowed("\x1b[39m"),
        }
    }
}

/// Maps every semantic tag to its visual representation.
///
/// Three built-ins cover the usual cases: [`plain`](DisplayStyle::plain)
/// wdiff-style brackets, [`ansi`](DisplayStyle::ansi) terminal colors, and
/// [`sentinels`](DisplayStyle::sentinels) unambiguous symbols for tests.
#[derive(Debug, Clone)]
pub struct DisplayStyle {
    /// Decoration for [`Tag::Delete`] spans.
    pub delete: Decor,
    /// Decoration for [`Tag::Insert`] spans.
    pub insert: Decor,
    /// Decoration for [`Tag::Got`] spans.
    pub got: Decor,
    /// Decoration for [`Tag::Want`] spans.
    pub want: Decor,
    /// Decoration for [`Tag::Message`] spans.
    pub message: Decor,
    /// Replacement for the changed-span separator marker.
    pub separator: Cow<'static, str>,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::plain()
    }
}

impl DisplayStyle {
    /// Plain text: `[-deleted-]`, `{+inserted+}`, undecorated labels.
    pub const fn plain() -> Self {
        Self {
            delete: Decor::new("[-", "-]"),
            insert: Decor::new("{+", "+}"),
            got: Decor::none(),
            want: Decor::none(),
            message: Decor::none(),
            separator: Cow::Borrowed("/"),
        }
    }

    /// Distinct symbols per tag, for asserting exact tag placement in tests.
    pub const fn sentinels() -> Self {
        Self {
            delete: Decor::new("<D<", ">D>"),
            insert: Decor::new("<I<", ">I>"),
            got: Decor::new("<G<", ">G>"),
            want: Decor::new("<W<", ">W>"),
            message: Decor::new("<M<", ">M>"),
            separator: Cow::Borrowed("|"),
        }
    }

    /// Terminal colors from the default [`DiffTheme`].
    pub fn ansi() -> Self {
        Self::ansi_with(&DiffTheme::default())
    }

    /// Terminal colors from a custom theme.
    ///
    /// The got label shares the insertion color and the want label the
    /// deletion color, matching the orientation of merged changed spans.
    pub fn ansi_with(theme: &DiffTheme) -> Self {
        Self {
            delete: Decor::fg(theme.deleted),
            insert: Decor::fg(theme.inserted),
            got: Decor::fg(theme.inserted),
            want: Decor::fg(theme.deleted),
            message: Decor::new("\x1b[1m", "\x1b[22m"),
            separator: Cow::Borrowed("/"),
        }
    }

    const fn decor(&self, tag: Tag) -> &Decor {
        match tag {
            Tag::Delete => &self.delete,
            Tag::Insert => &self.insert,
            Tag::Got => &self.got,
            Tag::Want => &self.want,
            Tag::Message => &self.message,
        }
    }
}

/// A malformed tag stream reached the resolver.
///
/// This is a programming-error class failure: the diff algorithm emitted
/// markers that do not pair up. It is never a property of the data being
/// compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A close marker appeared with no tag open.
    #[error("close marker for {found:?} without a matching open at byte {at}")]
    UnexpectedClose {
        /// The tag of the stray close marker.
        found: Tag,
        /// Byte offset of the marker in the tagged text.
        at: usize,
    },

    /// A close marker did not match the innermost open tag.
    #[error("close marker for {found:?} while {expected:?} was open at byte {at}")]
    MismatchedClose {
        /// The tag that was open.
        expected: Tag,
        /// The tag of the close marker encountered.
        found: Tag,
        /// Byte offset of the marker in the tagged text.
        at: usize,
    },

    /// An open marker was never closed.
    #[error("open marker for {tag:?} was never closed")]
    Unclosed {
        /// The tag left open at end of input.
        tag: Tag,
    },
}

/// Resolve `tagged` with an explicit style.
///
/// Performs the single substitution pass and validates marker balance.
/// Resolution is idempotent: the output contains no markers, so resolving
/// it again returns it unchanged.
pub fn try_resolve_with(style: &DisplayStyle, tagged: &str) -> Result<String, MarkupError> {
    let mut out = String::with_capacity(tagged.len());
    let mut open: Vec<Tag> = Vec::new();

    for (at, c) in tagged.char_indices() {
        if let Some(tag) = Tag::from_open(c) {
            open.push(tag);
            out.push_str(&style.decor(tag).open);
        } else if let Some(tag) = Tag::from_close(c) {
            match open.pop() {
                Some(expected) if expected != tag => {
                    return Err(MarkupError::MismatchedClose {
                        expected,
                        found: tag,
                        at,
                    });
                }
                Some(_) => out.push_str(&style.decor(tag).close),
                None => return Err(MarkupError::UnexpectedClose { found: tag, at }),
            }
        } else if c == SEPARATOR {
            out.push_str(&style.separator);
        } else {
            out.push(c);
        }
    }

    if let Some(tag) = open.pop() {
        return Err(MarkupError::Unclosed { tag });
    }

    Ok(out)
}

static DISPLAY_STYLE: LazyLock<RwLock<DisplayStyle>> =
    LazyLock::new(|| RwLock::new(DisplayStyle::plain()));

/// Replace the process-wide display style.
///
/// This is configuration, not data: set it at process start or test setup.
/// Tests that swap styles concurrently must serialize around this global.
pub fn set_display_style(style: DisplayStyle) {
    *DISPLAY_STYLE
        .write()
        .expect("display style lock poisoned") = style;
}

/// Resolve `tagged` with the process-wide style.
pub fn try_resolve(tagged: &str) -> Result<String, MarkupError> {
    let style = DISPLAY_STYLE.read().expect("display style lock poisoned");
    try_resolve_with(&style, tagged)
}

/// Resolve `tagged` with the process-wide style.
///
/// # Panics
///
/// Panics on a malformed tag stream. Markers only ever come from this
/// crate's own taggers, so imbalance means the diff algorithm itself is
/// broken and must not be silently tolerated.
pub fn resolve_for_display(tagged: &str) -> String {
    match try_resolve(tagged) {
        Ok(resolved) => resolved,
        Err(err) => panic!("malformed markup stream: {err}"),
    }
}
