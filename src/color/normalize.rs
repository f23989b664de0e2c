//! Conversion between the three encodings of a single channel value.
//!
//! A channel can be written as a byte (`0..=255`), a unit float (`0.0..=1.0`)
//! or a percentage string (`"0%"..="100%"`). Every input is validated and
//! brought to the canonical byte first, then re-expressed in the requested
//! [`Target`].

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::parse::parse_percentage;
use crate::error::{ColorError, Result};

/// A channel value as handed in by a caller, not yet validated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum ChannelValue {
    /// Never valid. Kept so loosely typed input (e.g. deserialized config)
    /// reports a type error instead of being coerced to 0 or 1.
    Bool(bool),
    /// Byte value, `0..=255`.
    Int(i64),
    /// Unit value, `0.0..=1.0`.
    Float(f64),
    /// Percentage string, `"0%"..="100%"`.
    Text(String),
}

macro_rules! channel_value_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for ChannelValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ChannelValue::$variant(value.into())
                }
            }
        )+
    };
}

channel_value_from!(Bool: bool);
channel_value_from!(Int: u8, i32, u32, i64);
channel_value_from!(Float: f32, f64);
channel_value_from!(Text: &str, String);

/// Representation a channel value should be converted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Target {
    Int,
    Float,
    Percentage,
}

impl FromStr for Target {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(Target::Int),
            "float" => Ok(Target::Float),
            "percentage" => Ok(Target::Percentage),
            other => Err(ColorError::InvalidTarget(other.to_owned())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Int => "int",
            Target::Float => "float",
            Target::Percentage => "percentage",
        })
    }
}

/// Output of [`normalize`], tagged with the form it was converted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Normalized {
    Int(u8),
    Float(f64),
    Percentage(f64),
}

impl Normalized {
    #[must_use]
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Normalized::Int(byte) => byte as f64,
            Normalized::Float(x) | Normalized::Percentage(x) => x,
        }
    }
}

/// Round to the nearest integer, with exact halves going up (2.5 -> 3).
///
/// Only meaningful for non-negative input, which is all the normalizer
/// ever feeds it.
#[must_use]
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn unit_to_byte(unit: f64) -> u8 {
    round_half_up(unit * 255.0) as u8
}

fn to_byte(value: &ChannelValue) -> Result<u8> {
    use ColorError::*;

    let byte = match value {
        ChannelValue::Bool(_) => Err(InvalidType("bool")),
        ChannelValue::Int(int) => {
            u8::try_from(*int).map_err(|_| InvalidValue(format!("{int} is outside 0..=255")))
        }
        ChannelValue::Float(unit) if (0.0..=1.0).contains(unit) => Ok(unit_to_byte(*unit)),
        ChannelValue::Float(unit) => Err(InvalidValue(format!("{unit} is outside 0.0..=1.0"))),
        ChannelValue::Text(text) => {
            parse_percentage(text).map(|percent| unit_to_byte(percent / 100.0))
        }
    };

    byte.inspect_err(|err| trace!(input = ?value, %err, "rejected channel value"))
}

/// Validate `value` and convert it into `target`.
///
/// # Errors
///
/// * [`ColorError::InvalidType`] for booleans.
/// * [`ColorError::InvalidValue`] for numbers outside the range of their form.
/// * [`ColorError::InvalidFormat`] for strings that are not percentages.
pub fn normalize(value: impl Into<ChannelValue>, target: Target) -> Result<Normalized> {
    let byte = to_byte(&value.into())?;

    Ok(match target {
        Target::Int => Normalized::Int(byte),
        Target::Float => Normalized::Float(byte as f64 / 255.0),
        Target::Percentage => Normalized::Percentage((byte as f64 / 255.0) * 100.0),
    })
}

/// Canonical byte for a channel value.
pub fn to_int(value: impl Into<ChannelValue>) -> Result<u8> {
    to_byte(&value.into())
}

/// Channel value as a unit float; always a multiple of `1 / 255`.
pub fn to_float(value: impl Into<ChannelValue>) -> Result<f64> {
    normalize(value, Target::Float).map(Normalized::as_f64)
}

/// Channel value as an unrounded percentage.
pub fn to_percentage(value: impl Into<ChannelValue>) -> Result<f64> {
    normalize(value, Target::Percentage).map(Normalized::as_f64)
}
