//! Render filter chain projection.
//!
//! The engine never touches pixels. Instead it projects the adjustment
//! vector onto an ordered chain of compositor filter operations that a
//! declarative rendering layer can apply live:
//!
//! | Operation    | Source channel | Value                  |
//! |--------------|----------------|------------------------|
//! | `brightness` | brightness     | `1 + brightness / 100` |
//! | `contrast`   | contrast       | `1 + contrast / 100`   |
//! | `saturate`   | saturation     | `1 + saturation / 100` |
//! | `blur`       | blur           | radius in pixels       |
//! | `hue-rotate` | hue            | degrees                |
//!
//! Exposure, temperature and sharpen have no compositing equivalent and are
//! left out of the projection.

use std::fmt;

use crate::Adjustments;

/// A single compositor filter operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderFilter {
    /// Brightness multiplier.
    Brightness(f32),
    /// Contrast multiplier.
    Contrast(f32),
    /// Saturation multiplier.
    Saturate(f32),
    /// Gaussian blur radius in pixels.
    Blur(f32),
    /// Hue rotation in degrees.
    HueRotate(f32),
}

impl RenderFilter {
    /// Function name in the compositor syntax.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brightness(_) => "brightness",
            Self::Contrast(_) => "contrast",
            Self::Saturate(_) => "saturate",
            Self::Blur(_) => "blur",
            Self::HueRotate(_) => "hue-rotate",
        }
    }

    /// Numeric argument.
    pub const fn value(self) -> f32 {
        match self {
            Self::Brightness(v)
            | Self::Contrast(v)
            | Self::Saturate(v)
            | Self::Blur(v)
            | Self::HueRotate(v) => v,
        }
    }

    /// Returns `true` if the operation leaves the image unchanged.
    pub fn is_identity(self) -> bool {
        match self {
            Self::Brightness(v) | Self::Contrast(v) | Self::Saturate(v) => v == 1.0,
            Self::Blur(v) | Self::HueRotate(v) => v == 0.0,
        }
    }
}

impl fmt::Display for RenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Blur(px) => write!(f, "blur({px}px)"),
            Self::HueRotate(deg) => write!(f, "hue-rotate({deg}deg)"),
            other => write!(f, "{}({})", other.name(), other.value()),
        }
    }
}

/// Ordered chain of compositor filter operations.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChain {
    filters: Vec<RenderFilter>,
}

impl FilterChain {
    /// Projects an adjustment vector onto the compositor chain.
    pub fn from_adjustments(adj: &Adjustments) -> Self {
        Self {
            filters: vec![
                RenderFilter::Brightness(percent_to_multiplier(adj.brightness)),
                RenderFilter::Contrast(percent_to_multiplier(adj.contrast)),
                RenderFilter::Saturate(percent_to_multiplier(adj.saturation)),
                RenderFilter::Blur(adj.blur),
                RenderFilter::HueRotate(adj.hue),
            ],
        }
    }

    /// Operations in application order.
    pub fn filters(&self) -> &[RenderFilter] {
        &self.filters
    }

    /// Iterates operations in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderFilter> {
        self.filters.iter()
    }

    /// Returns `true` if every operation is neutral.
    pub fn is_identity(&self) -> bool {
        self.filters.iter().all(|f| f.is_identity())
    }
}

impl From<&Adjustments> for FilterChain {
    fn from(adj: &Adjustments) -> Self {
        Self::from_adjustments(adj)
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a RenderFilter;
    type IntoIter = std::slice::Iter<'a, RenderFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

#[inline]
fn percent_to_multiplier(percent: f32) -> f32 {
    1.0 + percent / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Channel;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_projects_to_identity() {
        let chain = FilterChain::from_adjustments(&Adjustments::NEUTRAL);
        assert!(chain.is_identity());
        assert_eq!(
            chain.to_string(),
            "brightness(1) contrast(1) saturate(1) blur(0px) hue-rotate(0deg)"
        );
    }

    #[test]
    fn multipliers_follow_percentages() {
        let adj = Adjustments::NEUTRAL
            .with(Channel::Brightness, 20.0)
            .with(Channel::Contrast, -50.0)
            .with(Channel::Saturation, -100.0)
            .with(Channel::Blur, 4.0)
            .with(Channel::Hue, 90.0);
        let chain = FilterChain::from(&adj);
        let values: Vec<f32> = chain.iter().map(|f| f.value()).collect();

        assert_relative_eq!(values[0], 1.2);
        assert_relative_eq!(values[1], 0.5);
        assert_relative_eq!(values[2], 0.0);
        assert_relative_eq!(values[3], 4.0);
        assert_relative_eq!(values[4], 90.0);
        assert!(!chain.is_identity());
    }

    #[test]
    fn excluded_channels_do_not_affect_chain() {
        let adj = Adjustments::NEUTRAL
            .with(Channel::Exposure, 40.0)
            .with(Channel::Temperature, -25.0)
            .with(Channel::Sharpen, 80.0);
        assert!(FilterChain::from_adjustments(&adj).is_identity());
    }

    #[test]
    fn order_is_fixed() {
        let chain = FilterChain::from_adjustments(&Adjustments::NEUTRAL);
        let names: Vec<&str> = chain.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["brightness", "contrast", "saturate", "blur", "hue-rotate"]
        );
    }

    #[test]
    fn display_units() {
        assert_eq!(RenderFilter::Blur(2.5).to_string(), "blur(2.5px)");
        assert_eq!(RenderFilter::HueRotate(-45.0).to_string(), "hue-rotate(-45deg)");
        assert_eq!(RenderFilter::Saturate(0.0).to_string(), "saturate(0)");
    }
}
