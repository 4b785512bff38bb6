use crate::error::{Error, Result};

/// Size of the picture being generated, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Center pixel, rounded towards the top left.
    pub fn center(&self) -> (f64, f64) {
        ((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// Radius of the largest disk centered on the canvas, never less than 1.
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2).max(1) as f64
    }
}

/// Pixel coordinates of a canvas in raster order.
pub struct CanvasIter {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Iterator for CanvasIter {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.y >= self.height {
            return None;
        }
        let current = (self.x, self.y);
        self.x += 1;
        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = self.y as usize * self.width as usize + self.x as usize;
        let left = (self.width as usize * self.height as usize).saturating_sub(done);
        (left, Some(left))
    }
}

impl ExactSizeIterator for CanvasIter {}

impl IntoIterator for Canvas {
    type Item = (u32, u32);
    type IntoIter = CanvasIter;

    fn into_iter(self) -> CanvasIter {
        CanvasIter {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}
