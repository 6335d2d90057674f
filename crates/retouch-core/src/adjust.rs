//! Adjustment vectors.
//!
//! An [`Adjustments`] value is one complete edit state: eight numeric
//! channels, every one of them always defined. [`Adjustments::NEUTRAL`] is
//! the identity adjustment that a freshly loaded image starts from.
//!
//! [`PartialAdjustments`] carries only the channels a filter preset
//! overrides; [`Adjustments::overlay`] lays those on top of a base vector.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{Adjustments, Channel, PartialAdjustments};
//!
//! let base = Adjustments::NEUTRAL.with(Channel::Brightness, 20.0);
//! let warm = PartialAdjustments::new()
//!     .with(Channel::Temperature, 25.0)
//!     .with(Channel::Saturation, 10.0);
//!
//! let out = base.overlay(&warm);
//! assert_eq!(out.brightness, 20.0);
//! assert_eq!(out.temperature, 25.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the eight adjustment channels.
///
/// Serializes as its lowercase [`name`](Self::name); deserializes through
/// [`FromStr`], so any letter case is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Channel {
    /// Overall lightness.
    Brightness,
    /// Tonal spread.
    Contrast,
    /// Colour intensity.
    Saturation,
    /// Exposure compensation.
    Exposure,
    /// Warm/cool white balance shift.
    Temperature,
    /// Blur radius in pixels.
    Blur,
    /// Sharpening amount.
    Sharpen,
    /// Hue rotation in degrees.
    Hue,
}

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Brightness,
        Self::Contrast,
        Self::Saturation,
        Self::Exposure,
        Self::Temperature,
        Self::Blur,
        Self::Sharpen,
        Self::Hue,
    ];

    /// Identifier used in configs, scripts and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::Exposure => "exposure",
            Self::Temperature => "temperature",
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Hue => "hue",
        }
    }

    /// Display label for UI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Brightness => "Brightness",
            Self::Contrast => "Contrast",
            Self::Saturation => "Saturation",
            Self::Exposure => "Exposure",
            Self::Temperature => "Temperature",
            Self::Blur => "Blur",
            Self::Sharpen => "Sharpen",
            Self::Hue => "Hue",
        }
    }

    /// Slider range offered by editing controls.
    ///
    /// Informational only: the engine stores whatever value it is given.
    pub const fn range(self) -> ChannelRange {
        match self {
            Self::Hue => ChannelRange::new(-180.0, 180.0),
            Self::Sharpen => ChannelRange::new(0.0, 100.0),
            Self::Blur => ChannelRange::new(0.0, 20.0),
            _ => ChannelRange::new(-100.0, 100.0),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::unknown_channel(s))
    }
}

impl TryFrom<String> for Channel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Inclusive value range for a channel control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl ChannelRange {
    /// Creates a range. `min` must not exceed `max`.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the range.
    #[inline]
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A complete edit state over all eight channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Adjustments {
    /// Brightness offset, percent.
    pub brightness: f32,
    /// Contrast offset, percent.
    pub contrast: f32,
    /// Saturation offset, percent.
    pub saturation: f32,
    /// Exposure offset.
    pub exposure: f32,
    /// White balance shift; positive is warmer.
    pub temperature: f32,
    /// Blur radius in pixels.
    pub blur: f32,
    /// Sharpening amount.
    pub sharpen: f32,
    /// Hue rotation in degrees.
    pub hue: f32,
}

impl Adjustments {
    /// The identity adjustment: every channel at neutral.
    pub const NEUTRAL: Self = Self {
        brightness: 0.0,
        contrast: 0.0,
        saturation: 0.0,
        exposure: 0.0,
        temperature: 0.0,
        blur: 0.0,
        sharpen: 0.0,
        hue: 0.0,
    };

    /// Returns the value of one channel.
    pub const fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Brightness => self.brightness,
            Channel::Contrast => self.contrast,
            Channel::Saturation => self.saturation,
            Channel::Exposure => self.exposure,
            Channel::Temperature => self.temperature,
            Channel::Blur => self.blur,
            Channel::Sharpen => self.sharpen,
            Channel::Hue => self.hue,
        }
    }

    /// Replaces the value of one channel in place.
    pub fn set(&mut self, channel: Channel, value: f32) {
        let slot = match channel {
            Channel::Brightness => &mut self.brightness,
            Channel::Contrast => &mut self.contrast,
            Channel::Saturation => &mut self.saturation,
            Channel::Exposure => &mut self.exposure,
            Channel::Temperature => &mut self.temperature,
            Channel::Blur => &mut self.blur,
            Channel::Sharpen => &mut self.sharpen,
            Channel::Hue => &mut self.hue,
        };
        *slot = value;
    }

    /// Returns a copy with one channel replaced.
    #[must_use]
    pub fn with(mut self, channel: Channel, value: f32) -> Self {
        self.set(channel, value);
        self
    }

    /// Returns a copy with every channel specified in `partial` replaced.
    #[must_use]
    pub fn overlay(mut self, partial: &PartialAdjustments) -> Self {
        for (channel, value) in partial.iter() {
            self.set(channel, value);
        }
        self
    }

    /// Returns `true` if every channel is at neutral.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Iterates `(channel, value)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        Channel::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Adjustments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (channel, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{channel}={value}")?;
        }
        Ok(())
    }
}

/// A sparse set of channel overrides, as carried by a filter preset.
///
/// Fields mirror [`Adjustments`]; `None` leaves the channel to the base.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialAdjustments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpen: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<f32>,
}

impl PartialAdjustments {
    /// Creates an empty override set.
    pub const fn new() -> Self {
        Self {
            brightness: None,
            contrast: None,
            saturation: None,
            exposure: None,
            temperature: None,
            blur: None,
            sharpen: None,
            hue: None,
        }
    }

    /// Returns the override for one channel, if any.
    pub const fn get(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::Brightness => self.brightness,
            Channel::Contrast => self.contrast,
            Channel::Saturation => self.saturation,
            Channel::Exposure => self.exposure,
            Channel::Temperature => self.temperature,
            Channel::Blur => self.blur,
            Channel::Sharpen => self.sharpen,
            Channel::Hue => self.hue,
        }
    }

    /// Returns a copy that overrides `channel` with `value`.
    #[must_use]
    pub const fn with(mut self, channel: Channel, value: f32) -> Self {
        match channel {
            Channel::Brightness => self.brightness = Some(value),
            Channel::Contrast => self.contrast = Some(value),
            Channel::Saturation => self.saturation = Some(value),
            Channel::Exposure => self.exposure = Some(value),
            Channel::Temperature => self.temperature = Some(value),
            Channel::Blur => self.blur = Some(value),
            Channel::Sharpen => self.sharpen = Some(value),
            Channel::Hue => self.hue = Some(value),
        }
        self
    }

    /// Iterates the specified overrides in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        Channel::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }

    /// Number of channels overridden.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no channel is overridden.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
