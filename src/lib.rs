//! Colors packed into a single `u32`, one byte per channel (`0xAARRGGBB`).
//!
//! Channel values can be given as a byte (`0..=255`), a unit float
//! (`0.0..=1.0`) or a percentage string (`"0%"..="100%"`); all three are
//! validated and normalized to the same byte.
//!
//! ```
//! use verna::{ChannelUpdate, Color};
//!
//! let color = Color::from_rgba(0xef, 0xa1, 0xde, 0.5)?;
//! assert_eq!(color.value(), 0x80efa1de);
//!
//! let faded = Color::new(0xeeff22aa).replace(ChannelUpdate::new().alpha("50%"))?;
//! assert_eq!(faded.to_string(), "80ff22aa");
//! # Ok::<(), verna::ColorError>(())
//! ```

pub mod color;
mod error;

pub use color::normalize::{to_float, to_int, to_percentage};
pub use color::{ChannelUpdate, ChannelValue, Color, Normalized, Target, normalize};
pub use error::{ColorError, Result};
