use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::names;
use crate::color::normalize::{ChannelValue, to_int};
use crate::error::{ColorError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    const fn shift(self) -> u32 {
        match self {
            Channel::Alpha => 24,
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    #[inline]
    const fn mask(self) -> u32 {
        0xff << self.shift()
    }
}

/// An ARGB color packed into one `u32`, alpha in the most significant byte.
///
/// ```text
/// bits 31-24: alpha   bits 23-16: red   bits 15-8: green   bits 7-0: blue
/// ```
///
/// Alpha is stored as a byte but read as a unit float; a zero alpha byte is
/// the default, so colors built without one are fully transparent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Color {
    value: u32,
}

/// Channels to change in [`Color::replace`]; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelUpdate {
    pub red: Option<ChannelValue>,
    pub green: Option<ChannelValue>,
    pub blue: Option<ChannelValue>,
    pub alpha: Option<ChannelValue>,
}

impl ChannelUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn red(mut self, value: impl Into<ChannelValue>) -> Self {
        self.red = Some(value.into());
        self
    }

    #[must_use]
    pub fn green(mut self, value: impl Into<ChannelValue>) -> Self {
        self.green = Some(value.into());
        self
    }

    #[must_use]
    pub fn blue(mut self, value: impl Into<ChannelValue>) -> Self {
        self.blue = Some(value.into());
        self
    }

    #[must_use]
    pub fn alpha(mut self, value: impl Into<ChannelValue>) -> Self {
        self.alpha = Some(value.into());
        self
    }
}

#[inline]
const fn pack(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

impl Color {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    #[must_use]
    #[inline]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Look up a CSS3 extended color keyword, ignoring case.
    ///
    /// The result has a zero alpha byte.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        names::lookup(&lower).ok_or_else(|| {
            debug!(name, "no such color keyword");
            ColorError::UnknownName(name.to_owned())
        })
    }

    /// Build a color from four channel values in any accepted form.
    ///
    /// All four are validated before anything is packed.
    pub fn from_rgba(
        red: impl Into<ChannelValue>,
        green: impl Into<ChannelValue>,
        blue: impl Into<ChannelValue>,
        alpha: impl Into<ChannelValue>,
    ) -> Result<Self> {
        let red = to_int(red)?;
        let green = to_int(green)?;
        let blue = to_int(blue)?;
        let alpha = to_int(alpha)?;

        Ok(Self::new(pack(red, green, blue, alpha)))
    }

    /// Same as [`Color::from_rgba`] with a zero (fully transparent) alpha.
    pub fn from_rgb(
        red: impl Into<ChannelValue>,
        green: impl Into<ChannelValue>,
        blue: impl Into<ChannelValue>,
    ) -> Result<Self> {
        Self::from_rgba(red, green, blue, 0u8)
    }

    #[inline]
    const fn byte(self, channel: Channel) -> u8 {
        ((self.value & channel.mask()) >> channel.shift()) as u8
    }

    #[must_use]
    #[inline]
    pub const fn red(self) -> u8 {
        self.byte(Channel::Red)
    }

    #[must_use]
    #[inline]
    pub const fn green(self) -> u8 {
        self.byte(Channel::Green)
    }

    #[must_use]
    #[inline]
    pub const fn blue(self) -> u8 {
        self.byte(Channel::Blue)
    }

    /// Alpha in `0.0..=1.0`.
    #[must_use]
    #[inline]
    pub fn alpha(self) -> f64 {
        self.alpha_byte() as f64 / 255.0
    }

    #[must_use]
    #[inline]
    pub const fn alpha_byte(self) -> u8 {
        self.byte(Channel::Alpha)
    }

    /// `(red, green, blue, alpha)` with alpha as a unit float.
    #[must_use]
    #[inline]
    pub fn rgba(self) -> (u8, u8, u8, f64) {
        (self.red(), self.green(), self.blue(), self.alpha())
    }

    // untouched on error: validation happens before the write
    fn set_channel(&mut self, channel: Channel, value: impl Into<ChannelValue>) -> Result<()> {
        let byte = to_int(value)? as u32;
        self.value = (self.value & !channel.mask()) | byte << channel.shift();
        Ok(())
    }

    pub fn set_red(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set_channel(Channel::Red, value)
    }

    pub fn set_green(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set_channel(Channel::Green, value)
    }

    pub fn set_blue(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set_channel(Channel::Blue, value)
    }

    pub fn set_alpha(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set_channel(Channel::Alpha, value)
    }

    pub fn with_red(mut self, value: impl Into<ChannelValue>) -> Result<Self> {
        self.set_red(value)?;
        Ok(self)
    }

    pub fn with_green(mut self, value: impl Into<ChannelValue>) -> Result<Self> {
        self.set_green(value)?;
        Ok(self)
    }

    pub fn with_blue(mut self, value: impl Into<ChannelValue>) -> Result<Self> {
        self.set_blue(value)?;
        Ok(self)
    }

    pub fn with_alpha(mut self, value: impl Into<ChannelValue>) -> Result<Self> {
        self.set_alpha(value)?;
        Ok(self)
    }

    /// Copy of this color with the channels named in `update` replaced.
    ///
    /// Channels left as `None` are read back through their getters, so the
    /// kept alpha travels as a float and is normalized again. That round trip
    /// is exact for every byte.
    pub fn replace(self, update: ChannelUpdate) -> Result<Self> {
        let ChannelUpdate {
            red,
            green,
            blue,
            alpha,
        } = update;

        Self::from_rgba(
            red.unwrap_or_else(|| self.red().into()),
            green.unwrap_or_else(|| self.green().into()),
            blue.unwrap_or_else(|| self.blue().into()),
            alpha.unwrap_or_else(|| self.alpha().into()),
        )
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> Self {
        color.value
    }
}

impl TryFrom<i64> for Color {
    type Error = ColorError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self::new)
            .map_err(|_| ColorError::Range(value.into()))
    }
}

impl TryFrom<u64> for Color {
    type Error = ColorError;

    fn try_from(value: u64) -> Result<Self> {
        u32::try_from(value)
            .map(Self::new)
            .map_err(|_| ColorError::Range(value.into()))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#010x})", self.value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // bare lowercase hex, no padding: 0x00dcdcdc -> "dcdcdc"
        write!(f, "{:x}", self.value)
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}
