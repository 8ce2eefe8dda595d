//! Color palette shared by every template.

use std::fmt;
use std::str::FromStr;

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Upper-case `RRGGBB`, the form the container expects.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Semantic color names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    Primary,
    Dark,
    LightGray,
    White,
    Green,
    Yellow,
    Orange,
    Red,
    Indigo,
    Emerald,
    Amber,
    Sky,
}

impl Swatch {
    pub const ALL: [Swatch; 12] = [
        Swatch::Primary,
        Swatch::Dark,
        Swatch::LightGray,
        Swatch::White,
        Swatch::Green,
        Swatch::Yellow,
        Swatch::Orange,
        Swatch::Red,
        Swatch::Indigo,
        Swatch::Emerald,
        Swatch::Amber,
        Swatch::Sky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Primary => "primary",
            Swatch::Dark => "dark",
            Swatch::LightGray => "light-gray",
            Swatch::White => "white",
            Swatch::Green => "green",
            Swatch::Yellow => "yellow",
            Swatch::Orange => "orange",
            Swatch::Red => "red",
            Swatch::Indigo => "indigo",
            Swatch::Emerald => "emerald",
            Swatch::Amber => "amber",
            Swatch::Sky => "sky",
        }
    }
}

impl FromStr for Swatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase().replace('_', "-");
        Swatch::ALL
            .into_iter()
            .find(|sw| sw.name() == lower)
            .ok_or_else(|| format!("unknown color name: {s}"))
    }
}

/// Immutable mapping from semantic name to RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: Rgb,
    pub dark: Rgb,
    pub light_gray: Rgb,
    pub white: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub orange: Rgb,
    pub red: Rgb,
    pub indigo: Rgb,
    pub emerald: Rgb,
    pub amber: Rgb,
    pub sky: Rgb,
}

impl Theme {
    pub fn get(&self, swatch: Swatch) -> Rgb {
        match swatch {
            Swatch::Primary => self.primary,
            Swatch::Dark => self.dark,
            Swatch::LightGray => self.light_gray,
            Swatch::White => self.white,
            Swatch::Green => self.green,
            Swatch::Yellow => self.yellow,
            Swatch::Orange => self.orange,
            Swatch::Red => self.red,
            Swatch::Indigo => self.indigo,
            Swatch::Emerald => self.emerald,
            Swatch::Amber => self.amber,
            Swatch::Sky => self.sky,
        }
    }

    /// Look a color up by its semantic name (`"primary"`, `"light-gray"`, ...).
    pub fn named(&self, name: &str) -> Option<Rgb> {
        name.parse::<Swatch>().ok().map(|sw| self.get(sw))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgb(66, 153, 225),
            dark: Rgb(45, 55, 72),
            light_gray: Rgb(247, 250, 252),
            white: Rgb::WHITE,
            green: Rgb(72, 187, 120),
            yellow: Rgb(236, 201, 75),
            orange: Rgb(237, 137, 54),
            red: Rgb(245, 101, 101),
            indigo: Rgb(129, 140, 248),
            emerald: Rgb(52, 211, 153),
            amber: Rgb(251, 191, 36),
            sky: Rgb(99, 179, 237),
        }
    }
}
