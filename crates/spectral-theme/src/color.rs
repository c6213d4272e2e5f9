use derive_more::Display;
use regex::Regex;
use serde::Serialize;
use std::{str::FromStr, sync::LazyLock};
use thiserror::Error as ThisError;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d*\.?\d+%?)\s*,\s*(\d*\.?\d+%?)\s*,\s*(\d*\.?\d+%?)\s*(?:,\s*\d*\.?\d+%?\s*)?\)$",
    )
    .expect("rgb() pattern is a valid regex")
});

///
/// ColorError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ColorError {
    #[error("{channel} channel {value} is out of range (0-255 or 0%-100%)")]
    ChannelOutOfRange { channel: char, value: String },

    #[error("color is empty")]
    Empty,

    #[error("'{0}' is not a valid hex color; expected #rgb or #rrggbb")]
    InvalidHex(String),

    #[error("unrecognized color format '{0}'")]
    UnrecognizedFormat(String),
}

///
/// Rgb
///
/// An opaque sRGB color. Alpha in `rgba()` input is accepted and dropped;
/// contrast is always computed as if the color were fully opaque.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
#[display("#{r:02x}{g:02x}{b:02x}")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Function channels may be integers, decimals or percentages and are
    /// rounded to the nearest byte. Space-separated CSS Color 4 syntax and
    /// other color functions (`hsl()`, named colors) are rejected.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        let caps = RGB_FUNCTION
            .captures(&lower)
            .ok_or_else(|| ColorError::UnrecognizedFormat(s.to_string()))?;

        let mut channels = [0u8; 3];
        for (i, channel) in ['r', 'g', 'b'].into_iter().enumerate() {
            channels[i] = parse_channel(&caps[i + 1], channel)?;
        }
        let [r, g, b] = channels;

        Ok(Self::new(r, g, b))
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn normalized(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_channel(raw: &str, channel: char) -> Result<u8, ColorError> {
    let (number, max) = match raw.strip_suffix('%') {
        Some(percent) => (percent, 100.0),
        None => (raw, 255.0),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| ColorError::UnrecognizedFormat(raw.to_string()))?;

    let scaled = (value * 255.0 / max).round();
    if !(0.0..=255.0).contains(&scaled) {
        return Err(ColorError::ChannelOutOfRange {
            channel,
            value: raw.to_string(),
        });
    }

    // range checked above
    Ok(scaled as u8)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| {
                let pair: String = [c, c].into_iter().collect();
                channel(&pair)
            });

            Some(Rgb::new(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

///
/// TESTS
///
