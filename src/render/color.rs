use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string so chart configs stay readable in JSON.
/// The string carries 8-bit channels, so a JSON round trip preserves
/// `to_rgba8()` but not arbitrary `f64` channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
    /// and the keywords `transparent`, `white` and `black`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let color = if let Some(hex) = lowered.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = lowered
            .strip_prefix("rgba(")
            .or_else(|| lowered.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_functional(body)
        } else {
            None
        };

        let color =
            color.ok_or_else(|| ChartError::InvalidData(format!("unsupported color `{trimmed}`")))?;
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Channels quantized to 8 bits, clamped into range.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |index: usize| u8::from_str_radix(hex.get(index..=index)?, 16).ok();
    let byte = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
    match hex.len() {
        3 | 4 => {
            let expand = |value: u8| value * 17;
            let alpha = if hex.len() == 4 {
                f64::from(expand(nibble(3)?)) / 255.0
            } else {
                1.0
            };
            Some(Color::rgba8(
                expand(nibble(0)?),
                expand(nibble(1)?),
                expand(nibble(2)?),
                alpha,
            ))
        }
        6 | 8 => {
            let alpha = if hex.len() == 8 {
                f64::from(byte(6)?) / 255.0
            } else {
                1.0
            };
            Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
        }
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |part: &str| {
        let value = part.parse::<f64>().ok()?;
        (0.0..=255.0).contains(&value).then_some(value / 255.0)
    };
    match parts.as_slice() {
        [red, green, blue] => Some(Color::rgb(
            channel(*red)?,
            channel(*green)?,
            channel(*blue)?,
        )),
        [red, green, blue, alpha] => Some(Color::rgba(
            channel(*red)?,
            channel(*green)?,
            channel(*blue)?,
            alpha.parse::<f64>().ok()?,
        )),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_css(input)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue, alpha] = self.to_rgba8();
        if alpha == u8::MAX {
            write!(f, "#{red:02x}{green:02x}{blue:02x}")
        } else {
            write!(f, "#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }
}
