//! `[build.slug]` section: how file names become URL segments.
//!
//! ```toml
//! [build.slug]
//! path = "no"          # no | safe | ascii | full
//! separator = "dash"   # dash | underscore
//! case = "preserve"    # lower | upper | capitalize | preserve
//! ```

use serde::{Deserialize, Serialize};

/// URL slug generation mode for path segments.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Full slugify: Unicode → ASCII, case transform, separator.
    Full,
    /// Safe mode: remove dangerous chars, preserve Unicode, use separator.
    Safe,
    /// ASCII mode: transliterate Unicode → ASCII, use separator.
    Ascii,
    /// No modification; file names are used verbatim (default).
    #[default]
    No,
}

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    /// Convert to lowercase.
    Lower,
    /// Convert to UPPERCASE.
    Upper,
    /// Capitalize each word (Title Case).
    Capitalize,
    /// Preserve original case (default).
    #[default]
    Preserve,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Slugify URL path segments.
    pub path: SlugMode,
    /// Separator character for spaces.
    pub separator: SlugSeparator,
    /// Case transformation.
    pub case: SlugCase,
}
