use image::Rgb;

use crate::palette::Palette;

/// Turns a gradation value into a pixel color.
pub trait Painter: Send + Sync {
    fn color(&self, grad: f64) -> Rgb<u8>;
}

impl<P: Painter + ?Sized> Painter for Box<P> {
    fn color(&self, grad: f64) -> Rgb<u8> {
        (**self).color(grad)
    }
}

fn mix(a: u8, b: u8, frac: f64) -> u8 {
    let af = a as f64;
    let bf = b as f64;
    let m = af + frac * (bf - af);
    m.round().clamp(0.0, 255.0) as u8
}

/// Returns the color `frac` of the way from `c1` to `c2`; 0 is `c1` and 1 is
/// `c2` exactly.
pub fn gradate(c1: Rgb<u8>, c2: Rgb<u8>, frac: f64) -> Rgb<u8> {
    Rgb([
        mix(c1[0], c2[0], frac),
        mix(c1[1], c2[1], frac),
        mix(c1[2], c2[2], frac),
    ])
}

/// Spreads gradation values evenly between two colors.
#[derive(Clone, Debug)]
pub struct ContinuousPainter {
    from: Rgb<u8>,
    to: Rgb<u8>,
}

impl ContinuousPainter {
    pub fn new(from: Rgb<u8>, to: Rgb<u8>) -> Self {
        Self { from, to }
    }
}

impl Painter for ContinuousPainter {
    fn color(&self, grad: f64) -> Rgb<u8> {
        gradate(self.from, self.to, grad)
    }
}

/// Like [`ContinuousPainter`], but only ever paints colors of the palette.
#[derive(Clone, Debug)]
pub struct DiscretePainter {
    gradient: ContinuousPainter,
    palette: Palette,
}

impl DiscretePainter {
    pub fn new(from: Rgb<u8>, to: Rgb<u8>, palette: Palette) -> Self {
        assert!(!palette.is_empty(), "discrete painter needs colors");
        Self {
            gradient: ContinuousPainter::new(from, to),
            palette,
        }
    }
}

impl Painter for DiscretePainter {
    fn color(&self, grad: f64) -> Rgb<u8> {
        crate::color::nearest(self.gradient.color(grad), self.palette.colors())
    }
}
