//! Wallpaper generator.
//!
//! A wallpaper is the combination of a gradation field, giving each pixel a
//! value between 0 and 1, and a painter turning those values into colors
//! picked from a palette.
use log::debug;
use rand::Rng;

pub mod color;
pub mod coord;
mod error;
pub mod gradation;
pub mod painter;
pub mod palette;
mod wallpaper;

pub use crate::coord::Canvas;
pub use crate::error::{Error, Result};
pub use crate::gradation::{Field, Generator};
pub use crate::painter::{ContinuousPainter, DiscretePainter, Painter};
pub use crate::palette::Palette;
pub use crate::wallpaper::Wallpaper;

/// Everything needed to build a wallpaper apart from the palette.
#[derive(Clone, Debug)]
pub struct Options {
    pub width: u32,
    pub height: u32,
    pub generator: Generator,
    pub args: Vec<String>,
    /// Only paint with colors of the palette.
    pub discrete: bool,
}

/// Chooses two anchor colors of `palette` and builds the picture.
///
/// The palette is checked before the generator runs, so a bad palette never
/// costs an image load.
pub fn wallpaper<R: Rng + ?Sized>(
    opts: &Options,
    palette: &Palette,
    rng: &mut R,
) -> Result<Wallpaper<Field, Box<dyn Painter>>> {
    let canvas = Canvas::new(opts.width, opts.height)?;
    let (c1, c2) = palette.choose_two(rng)?;
    let painter: Box<dyn Painter> = if opts.discrete {
        Box::new(DiscretePainter::new(c1, c2, palette.clone()))
    } else {
        Box::new(ContinuousPainter::new(c1, c2))
    };
    let field = opts.generator.build(canvas, &opts.args)?;
    debug!("wallpaper ready, discrete={}", opts.discrete);
    Ok(Wallpaper::new(canvas, field, painter))
}
