use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A color in the OKLCH color space.
///
/// OKLCH is perceptually uniform, so palettes keep consistent apparent
/// contrast when only lightness changes between theme variants. The
/// textual form is the CSS `oklch(L C H [/ A])` function; lightness and
/// alpha accept either unit values (`0.985`) or percentages (`98.5%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, `0.0..=1.0`.
    pub l: f32,
    /// Chroma. Unbounded in CSS, in practice `0.0..=0.4`.
    pub c: f32,
    /// Hue angle in degrees.
    pub h: f32,
    /// Alpha, `0.0..=1.0`.
    pub alpha: f32,
}

impl Oklch {
    /// Creates an opaque color.
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Returns the same color with a different alpha value.
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

/// Errors produced when parsing an `oklch(…)` string.
#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("expected `oklch(L C H [/ A])` syntax, got \"{0}\"")]
    NotOklch(String),
    #[error("expected 3 color components, got {0}")]
    ComponentCount(usize),
    #[error("invalid color component \"{0}\"")]
    Component(String),
}

/// Parses one numeric component, returning the value and whether it
/// carried a `%` suffix.
fn component(raw: &str) -> Result<(f32, bool), ColorParseError> {
    let (digits, percent) = match raw.strip_suffix('%') {
        Some(digits) => (digits, true),
        None => (raw, false),
    };
    digits
        .trim()
        .parse::<f32>()
        .map(|value| (value, percent))
        .map_err(|_| ColorParseError::Component(raw.to_owned()))
}

impl FromStr for Oklch {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::NotOklch(trimmed.to_owned()))?;

        let (channels, alpha_raw) = match inner.split_once('/') {
            Some((channels, alpha_raw)) => (channels, Some(alpha_raw)),
            None => (inner, None),
        };

        let parts: Vec<&str> = channels.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ComponentCount(parts.len()));
        }

        let (l, l_percent) = component(parts[0])?;
        let l = if l_percent { l / 100.0 } else { l };
        let (c, _) = component(parts[1])?;
        let (h, _) = component(parts[2])?;

        let alpha = match alpha_raw {
            Some(raw) => {
                let (alpha, percent) = component(raw.trim())?;
                if percent { alpha / 100.0 } else { alpha }
            }
            None => 1.0,
        };

        Ok(Self { l, c, h, alpha })
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "oklch({} {} {})", self.l, self.c, self.h)
        } else {
            write!(f, "oklch({} {} {} / {})", self.l, self.c, self.h, self.alpha)
        }
    }
}

impl Serialize for Oklch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oklch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
