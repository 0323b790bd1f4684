use serde::{Deserialize, Serialize};

/// Opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional, hex digits are case-insensitive).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Like [`Rgb8::parse_hex`], but malformed input (including `#rgb` and `#rrggbbaa`
    /// shorthands) becomes black instead of failing.
    pub fn from_hex_lossy(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or(Self::BLACK)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `[r, g, b, 255]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).ok_or_else(|| {
            serde::de::Error::custom("hex color must be #RRGGBB (case-insensitive)")
        })
    }
}

/// Alpha-composite `foreground` at `opacity` over an opaque `background`.
///
/// Each channel is `fg * opacity + bg * (1 - opacity)`, rounded and clamped to `0..=255`.
/// The interpolation is done directly on sRGB values.
pub fn blend_colors(foreground: Rgb8, background: Rgb8, opacity: f64) -> Rgb8 {
    fn mix(fg: u8, bg: u8, opacity: f64) -> u8 {
        let v = f64::from(fg) * opacity + f64::from(bg) * (1.0 - opacity);
        v.round().clamp(0.0, 255.0) as u8
    }

    Rgb8::new(
        mix(foreground.r, background.r, opacity),
        mix(foreground.g, background.g, opacity),
        mix(foreground.b, background.b, opacity),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
