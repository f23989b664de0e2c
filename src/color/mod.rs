pub mod model;
pub mod names;
pub mod normalize;
pub mod parse;

pub use model::{ChannelUpdate, Color};
pub use normalize::{ChannelValue, Normalized, Target, normalize};
