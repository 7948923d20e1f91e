//! Palette selection by max-min diversification.

mod greedy;

pub use greedy::{extend_palette, select_palette, select_palette_with_budget};

use crate::api::ConfigError;
use crate::color::Rgb;

/// Reject colors with a channel outside 0.0..=1.0 (or NaN).
pub(crate) fn check_channels(colors: &[Rgb]) -> Result<(), ConfigError> {
    for color in colors {
        for (channel, value) in [('r', color.r), ('g', color.g), ('b', color.b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChannelOutOfRange { channel, value });
            }
        }
    }
    Ok(())
}
