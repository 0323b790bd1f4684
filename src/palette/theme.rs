use serde::{Deserialize, Serialize};

use crate::palette::color::Rgb8;

/// Semantic colors used by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub lived: Rgb8,
    pub remaining: Rgb8,
    pub current: Rgb8,
    pub background: Rgb8,
    pub text_primary: Rgb8,
    pub text_secondary: Rgb8,
    pub text_muted: Rgb8,
    pub border: Rgb8,
    pub hovered_lived: Rgb8,
    pub hovered_remaining: Rgb8,
}

impl ColorPalette {
    /// Warm paper tones.
    pub const LIGHT: Self = Self {
        lived: Rgb8::new(0x1a, 0x1a, 0x1a),
        remaining: Rgb8::new(0xe8, 0xe4, 0xdf),
        current: Rgb8::new(0xc4, 0x5d, 0x3a),
        background: Rgb8::new(0xfa, 0xf8, 0xf5),
        text_primary: Rgb8::new(0x1a, 0x1a, 0x1a),
        text_secondary: Rgb8::new(0x6b, 0x65, 0x60),
        text_muted: Rgb8::new(0xa8, 0xa2, 0x9e),
        border: Rgb8::new(0xd4, 0xcf, 0xc8),
        hovered_lived: Rgb8::new(0xc4, 0x5d, 0x3a),
        hovered_remaining: Rgb8::new(0xd4, 0xcf, 0xc8),
    };

    pub const DARK: Self = Self {
        lived: Rgb8::new(0xe8, 0xe4, 0xdf),
        remaining: Rgb8::new(0x2a, 0x27, 0x25),
        current: Rgb8::new(0xe0, 0x7a, 0x54),
        background: Rgb8::new(0x14, 0x12, 0x11),
        text_primary: Rgb8::new(0xf5, 0xf5, 0xf4),
        text_secondary: Rgb8::new(0xa8, 0xa2, 0x9e),
        text_muted: Rgb8::new(0x6b, 0x65, 0x60),
        border: Rgb8::new(0x3d, 0x38, 0x35),
        hovered_lived: Rgb8::new(0xe0, 0x7a, 0x54),
        hovered_remaining: Rgb8::new(0x3d, 0x38, 0x35),
    };

    pub fn for_dark(dark: bool) -> &'static Self {
        if dark { &Self::DARK } else { &Self::LIGHT }
    }

    /// Replace the grid colors from optional `#RRGGBB` strings. Malformed values become black.
    pub fn with_overrides(
        mut self,
        lived: Option<&str>,
        remaining: Option<&str>,
        background: Option<&str>,
    ) -> Self {
        if let Some(s) = lived {
            self.lived = Rgb8::from_hex_lossy(s);
        }
        if let Some(s) = remaining {
            self.remaining = Rgb8::from_hex_lossy(s);
        }
        if let Some(s) = background {
            self.background = Rgb8::from_hex_lossy(s);
        }
        self
    }
}

/// User theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the viewer's color-scheme preference.
    #[default]
    System,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "" => Ok(Self::System),
            other => Err(format!(
                "unknown theme \"{other}\" (expected light, dark or system)"
            )),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        })
    }
}

/// Theme state handed to renderers explicitly.
///
/// `system_prefers_dark` is whatever the caller knows about the viewer's preference (a client
/// hint on the server, a flag on the CLI); it only matters for [`Theme::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
    pub system_prefers_dark: bool,
}

impl ThemeContext {
    pub fn new(theme: Theme, system_prefers_dark: bool) -> Self {
        Self {
            theme,
            system_prefers_dark,
        }
    }

    pub fn is_dark(self) -> bool {
        match self.theme {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => self.system_prefers_dark,
        }
    }

    pub fn palette(self) -> ColorPalette {
        *ColorPalette::for_dark(self.is_dark())
    }

    /// The other explicit theme, as a toggle button would pick.
    pub fn toggled(self) -> Self {
        let theme = if self.is_dark() {
            Theme::Light
        } else {
            Theme::Dark
        };
        Self { theme, ..self }
    }
}
