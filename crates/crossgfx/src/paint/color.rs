use std::fmt;
use std::hash::{Hash, Hasher};

use crate::tag::Tag;

/// Straight-alpha 8-bit RGBA color.
///
/// Channels are fixed at construction; derived colors ([`inverted`](Self::inverted),
/// [`with_alpha`](Self::with_alpha)) are new values and never inherit the tag.
///
/// Equality and hashing look at the four channels only. The tag is renderer
/// bookkeeping and does not take part in comparisons.
#[derive(Debug, Clone)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
    tag: Option<Tag>,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(212, 212, 212);
    pub const GRAY: Color = Color::rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);

    /// Opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha, tag: None }
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub const fn channels(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    #[inline]
    pub fn red_value(&self) -> f32 {
        self.red as f32 / 255.0
    }

    #[inline]
    pub fn green_value(&self) -> f32 {
        self.green as f32 / 255.0
    }

    #[inline]
    pub fn blue_value(&self) -> f32 {
        self.blue as f32 / 255.0
    }

    #[inline]
    pub fn alpha_value(&self) -> f32 {
        self.alpha as f32 / 255.0
    }

    #[inline]
    pub const fn is_white(&self) -> bool {
        self.red == 255 && self.green == 255 && self.blue == 255
    }

    #[inline]
    pub const fn is_black(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// RGB complement with the same alpha.
    #[inline]
    pub const fn inverted(&self) -> Color {
        Color::rgba(255 - self.red, 255 - self.green, 255 - self.blue, self.alpha)
    }

    #[inline]
    pub const fn with_alpha(&self, alpha: u8) -> Color {
        Color::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Straight-alpha components in `[0, 1]`.
    #[inline]
    pub fn to_straight(&self) -> [f32; 4] {
        [self.red_value(), self.green_value(), self.blue_value(), self.alpha_value()]
    }

    /// Premultiplied components in `[0, 1]`, for back ends that blend with
    /// `One, OneMinusSrcAlpha`.
    #[inline]
    pub fn to_premul(&self) -> [f32; 4] {
        let a = self.alpha_value();
        [self.red_value() * a, self.green_value() * a, self.blue_value() * a, a]
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

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl PartialEq for Color {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Color: RedValue={}, GreenValue={}, BlueValue={}, AlphaValue={}]",
            self.red_value(),
            self.green_value(),
            self.blue_value(),
            self.alpha_value()
        )
    }
}
