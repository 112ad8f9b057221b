#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! # How the pieces fit
//!
//! ```text
//! diff_str / diff_sequence        callers hand in two values
//!         │
//!     find_best_run               recursive run-anchored decomposition
//!         │
//!     markup (Tag)                semantic, resolver-independent tags
//!         │
//!     build_report                numbered aligned lines (sequences)
//!         │
//!     resolve_for_display         one pass, tags → configured style
//! ```
//!
//! Everything is synchronous and allocation-local: each call builds its
//! own state and returns plain strings or records. The only process-wide
//! piece is the display style, which is configuration, not data.

mod markup;
mod numbering;
mod report;
mod resolve;
mod runs;
mod sequences;
mod text;
mod theme;

pub use markup::{Tag, changed, changed_into, tag, tag_into};
pub use numbering::NumberContext;
pub use report::{build_report, build_report_with_style};
pub use resolve::{
    Decor, DisplayStyle, MarkupError, resolve_for_display, set_display_style, try_resolve,
    try_resolve_with,
};
pub use runs::{Run, find_best_run, find_best_run_str};
pub use sequences::{AlignedRecord, ChangeKind, any_changes, diff_sequence};
pub use text::{StringDiff, diff_str};
pub use theme::DiffTheme;
