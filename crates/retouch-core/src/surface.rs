//! Render surface boundary.
//!
//! The engine does not draw. Export hands the surface a [`RenderFrame`]
//! describing the working image, the current adjustments and their
//! compositor projection; the surface returns encoded bytes.

use crate::{Adjustments, FilterChain, RasterImage, Result, ViewTransform};

/// Everything a surface needs to produce one snapshot.
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    /// Working image.
    pub image: &'a RasterImage,
    /// Current adjustment vector.
    pub adjustments: Adjustments,
    /// Compositor projection of `adjustments`.
    pub chain: FilterChain,
    /// Zoom and rotation.
    pub view: ViewTransform,
}

impl<'a> RenderFrame<'a> {
    /// Builds a frame, deriving the chain from `adjustments`.
    pub fn new(image: &'a RasterImage, adjustments: Adjustments, view: ViewTransform) -> Self {
        Self {
            image,
            chain: FilterChain::from_adjustments(&adjustments),
            adjustments,
            view,
        }
    }
}

/// A drawable surface owned by the presentation layer.
pub trait RenderSurface {
    /// Renders `frame` and returns its encoded bytes.
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<Vec<u8>>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<Vec<u8>> {
        (**self).render(frame)
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<Vec<u8>> {
        (**self).render(frame)
    }
}
