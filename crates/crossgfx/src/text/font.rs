use std::fmt;
use std::hash::{Hash, Hasher};

use crate::tag::Tag;

/// Style flags for a [`Font`] request.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontOptions {
    pub bold: bool,
}

impl FontOptions {
    pub const NONE: FontOptions = FontOptions { bold: false };
    pub const BOLD: FontOptions = FontOptions { bold: true };
}

impl fmt::Display for FontOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.bold { "Bold" } else { "None" })
    }
}

/// Logical font request.
///
/// A back end resolves it to a platform font; the request itself carries no
/// font data. Equality ignores the tag.
#[derive(Debug, Clone)]
pub struct Font {
    family: String,
    options: FontOptions,
    size: u32,
    tag: Option<Tag>,
}

impl Font {
    pub fn new(family: impl Into<String>, options: FontOptions, size: u32) -> Self {
        Self { family: family.into(), options, size, tag: None }
    }

    pub fn regular(family: impl Into<String>, size: u32) -> Self {
        Self::new(family, FontOptions::NONE, size)
    }

    pub fn bold(family: impl Into<String>, size: u32) -> Self {
        Self::new(family, FontOptions::BOLD, size)
    }

    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[inline]
    pub fn options(&self) -> FontOptions {
        self.options
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.options.bold
    }

    /// Point size.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[inline]
    pub fn set_tag(&mut self, tag: Option<Tag>) {
        self.tag = tag;
    }

    #[inline]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.options == other.options && self.size == other.size
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.options.hash(state);
        self.size.hash(state);
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Font: FontFamily={}, Options={}, Size={}]",
            self.family, self.options, self.size
        )
    }
}
