use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_typing: ColorSpec,
    pub footer_busy: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::medina()
    }
}

impl Theme {
    /// Medina theme: whitewash, Sidi Bou Said blue and tile accents.
    ///
    pub fn medina() -> Self {
        Theme {
            name: "medina".to_string(),
            primary: ColorSpec::rgb(0, 114, 187),       // Door blue
            secondary: ColorSpec::rgb(46, 160, 140),    // Tile green
            accent: ColorSpec::rgb(227, 120, 40),       // Clay
            banner: ColorSpec::rgb(0, 114, 187),        // Door blue
            text: ColorSpec::rgb(220, 226, 232),        // Whitewash
            text_secondary: ColorSpec::rgb(160, 174, 190),
            text_muted: ColorSpec::rgb(110, 122, 138),
            success: ColorSpec::rgb(46, 160, 67),       // Green
            warning: ColorSpec::rgb(230, 180, 40),      // Saffron
            error: ColorSpec::rgb(214, 60, 60),         // Red
            info: ColorSpec::rgb(80, 160, 220),         // Sky
            border_active: ColorSpec::rgb(0, 114, 187), // Door blue
            border_normal: ColorSpec::rgb(90, 100, 115),
            highlight_bg: ColorSpec::rgb(0, 114, 187),
            highlight_fg: ColorSpec::rgb(255, 255, 255),
            footer_typing: ColorSpec::rgb(230, 180, 40),
            footer_busy: ColorSpec::rgb(227, 120, 40),
            footer_normal: ColorSpec::rgb(0, 114, 187),
        }
    }

    /// Sahara theme: sand, dune and oasis tones.
    ///
    pub fn sahara() -> Self {
        Theme {
            name: "sahara".to_string(),
            primary: ColorSpec::rgb(201, 130, 60),    // Dune
            secondary: ColorSpec::rgb(58, 140, 110),  // Oasis
            accent: ColorSpec::rgb(170, 70, 50),      // Rust red
            banner: ColorSpec::rgb(201, 130, 60),     // Dune
            text: ColorSpec::rgb(240, 226, 200),      // Sand
            text_secondary: ColorSpec::rgb(200, 180, 150),
            text_muted: ColorSpec::rgb(150, 132, 110),
            success: ColorSpec::rgb(58, 140, 110),    // Oasis
            warning: ColorSpec::rgb(235, 190, 80),    // Sun
            error: ColorSpec::rgb(190, 60, 45),       // Rust red
            info: ColorSpec::rgb(110, 160, 200),      // Sky
            border_active: ColorSpec::rgb(201, 130, 60),
            border_normal: ColorSpec::rgb(120, 100, 80),
            highlight_bg: ColorSpec::rgb(201, 130, 60),
            highlight_fg: ColorSpec::rgb(30, 20, 10),
            footer_typing: ColorSpec::rgb(235, 190, 80),
            footer_busy: ColorSpec::rgb(170, 70, 50),
            footer_normal: ColorSpec::rgb(201, 130, 60),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "medina" => Some(Self::medina()),
            "sahara" => Some(Self::sahara()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["medina".to_string(), "sahara".to_string()]
    }
}
