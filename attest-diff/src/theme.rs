//! Color theme for ANSI diff rendering.

use owo_colors::Rgb;

/// Color theme for diff rendering.
///
/// Defines colors for each semantic tag. The default uses Tokyo Night
/// colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for deleted content (default: red)
    pub deleted: Rgb,

    /// Color for inserted content (default: green)
    pub inserted: Rgb,

    /// Color for labels and titles (default: white)
    pub label: Rgb,

    /// Color for structural output such as separators (default: gray)
    pub muted: Rgb,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}

impl DiffTheme {
    /// Tokyo Night color theme (default).
    pub const TOKYO_NIGHT: Self = Self {
        deleted: Rgb(247, 118, 142),  // red
        inserted: Rgb(158, 206, 106), // green
        label: Rgb(192, 202, 245),    // white
        muted: Rgb(86, 95, 137),      // gray
    };
}
