use std::{fmt::Display, str::FromStr};

use crate::error::{QRError, QRResult};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    #[default]
    H = 3,
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::Encoder(format!("Unknown error correction level: {s}"))),
        }
    }
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => Self::L,
            ECLevel::M => Self::M,
            ECLevel::Q => Self::Q,
            ECLevel::H => Self::H,
        }
    }
}

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const CHARCOAL: Rgb = Rgb(0x1a, 0x1a, 0x1a);

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.0, self.1, self.2, 0xff])
    }
}

impl FromStr for Rgb {
    type Err = QRError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    fn from_str(s: &str) -> QRResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || QRError::InvalidColor(s.to_string());
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 0x11);
                Ok(Rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// Render config
//------------------------------------------------------------------------------

/// Raster settings handed to an [`Encoder`](super::Encoder).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    foreground: Rgb,
    background: Rgb,
    ec_level: ECLevel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            ec_level: ECLevel::H,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light modules on a near-black background.
    pub fn dark() -> Self {
        Self { foreground: Rgb::WHITE, background: Rgb::CHARCOAL, ..Self::default() }
    }

    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn height(&mut self, height: u32) -> &mut Self {
        self.height = height;
        self
    }

    pub fn size(&mut self, size: u32) -> &mut Self {
        self.width = size;
        self.height = size;
        self
    }

    pub fn foreground(&mut self, color: Rgb) -> &mut Self {
        self.foreground = color;
        self
    }

    pub fn background(&mut self, color: Rgb) -> &mut Self {
        self.background = color;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn foreground_color(&self) -> Rgb {
        self.foreground
    }

    pub fn background_color(&self) -> Rgb {
        self.background
    }

    pub fn error_correction(&self) -> ECLevel {
        self.ec_level
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}x{}, Ec level: {:?}, Colors: {} on {} }}",
            self.width, self.height, self.ec_level, self.foreground, self.background
        )
    }
}

#[cfg(test)]
mod config_tests {
    use test_case::test_case;

    use super::{ECLevel, RenderConfig, Rgb};
    use crate::error::QRError;

    #[test_case("#000000", Rgb(0, 0, 0); "black")]
    #[test_case("ffffff", Rgb(255, 255, 255); "no_hash")]
    #[test_case("#1A1a1a", Rgb(0x1a, 0x1a, 0x1a); "mixed_case")]
    #[test_case("#f80", Rgb(0xff, 0x88, 0x00); "short")]
    fn test_parse_color(s: &str, exp: Rgb) {
        assert_eq!(s.parse::<Rgb>().unwrap(), exp);
    }

    #[test_case("#12345"; "five_digits")]
    #[test_case("#gggggg"; "not_hex")]
    #[test_case(""; "empty")]
    #[test_case("#ééé"; "non_ascii")]
    fn test_parse_invalid_color(s: &str) {
        assert!(matches!(s.parse::<Rgb>(), Err(QRError::InvalidColor(_))));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Rgb(0x1a, 0xff, 0x00).to_string(), "#1aff00");
    }

    #[test]
    fn test_parse_ec_level() {
        assert_eq!("q".parse::<ECLevel>().unwrap(), ECLevel::Q);
        assert!("X".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_metadata() {
        let mut config = RenderConfig::new();
        assert_eq!(
            config.metadata(),
            "{ Size: 300x300, Ec level: H, Colors: #000000 on #ffffff }"
        );
        config.size(128).ec_level(ECLevel::L).foreground(Rgb(0xff, 0, 0));
        assert_eq!(
            config.metadata(),
            "{ Size: 128x128, Ec level: L, Colors: #ff0000 on #ffffff }"
        );
    }

    #[test]
    fn test_dark_preset() {
        let config = RenderConfig::dark();
        assert_eq!(config.foreground_color(), Rgb::WHITE);
        assert_eq!(config.background_color(), Rgb(0x1a, 0x1a, 0x1a));
        assert_eq!(config.dimensions(), (300, 300));
    }
}
