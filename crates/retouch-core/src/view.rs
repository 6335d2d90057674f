//! Zoom and rotation view state.
//!
//! Neither value is part of the undo history.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Smallest zoom factor.
pub const ZOOM_MIN: f32 = 0.1;

/// Largest zoom factor.
pub const ZOOM_MAX: f32 = 3.0;

/// Display transform applied on top of the adjusted image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Zoom factor (1.0 = 100%).
    pub zoom: f32,
    /// Rotation in degrees, in `(-360, 360)`.
    pub rotation: f32,
}

impl ViewTransform {
    /// 1x zoom, no rotation.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        rotation: 0.0,
    };

    /// Sets the zoom factor, clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    ///
    /// NaN leaves the zoom unchanged.
    pub fn set_zoom(&mut self, factor: f32) {
        if factor.is_nan() {
            trace!("Ignoring NaN zoom");
            return;
        }
        self.zoom = factor.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Sets the rotation to `degrees % 360`.
    ///
    /// The remainder keeps the sign of `degrees`, so `-90` stays `-90` and
    /// `450` becomes `90`. Non-finite input leaves the rotation unchanged.
    pub fn set_rotation(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            trace!("Ignoring non-finite rotation");
            return;
        }
        self.rotation = degrees % 360.0;
    }

    /// Adds `delta` to the zoom, then clamps like [`set_zoom`](Self::set_zoom).
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    /// Adds `degrees` to the rotation, then wraps like
    /// [`set_rotation`](Self::set_rotation).
    pub fn rotate_by(&mut self, degrees: f32) {
        self.set_rotation(self.rotation + degrees);
    }

    /// 1x zoom, rotation unchanged.
    pub fn fit(&mut self) {
        self.zoom = Self::IDENTITY.zoom;
    }

    /// Back to [`ViewTransform::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
