use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, GenericImageView, ImageEncoder, Rgb, RgbImage};
use log::info;

use crate::coord::Canvas;
use crate::error::{Error, Result};
use crate::gradation::Gradation;
use crate::painter::Painter;

/// An image whose pixels are computed on demand by feeding the gradation of
/// each pixel to a painter.
pub struct Wallpaper<G, P> {
    canvas: Canvas,
    gradation: G,
    painter: P,
}

impl<G, P> Wallpaper<G, P>
where
    G: Gradation,
    P: Painter,
{
    pub fn new(canvas: Canvas, gradation: G, painter: P) -> Self {
        Self {
            canvas,
            gradation,
            painter,
        }
    }

    pub fn at(&self, x: u32, y: u32) -> Rgb<u8> {
        self.painter.color(self.gradation.at(x, y))
    }

    /// Evaluates every pixel once, in raster order.
    pub fn render(&self) -> RgbImage {
        let mut img = RgbImage::new(self.canvas.width, self.canvas.height);
        for (x, y) in self.canvas {
            img.put_pixel(x, y, self.at(x, y));
        }
        img
    }

    /// Renders the wallpaper and writes it to `path` as a PNG. The file is
    /// only created once rendering is done.
    pub fn save(&self, path: &Path) -> Result<()> {
        let img = self.render();

        let file = File::create(path).map_err(|source| Error::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        PngEncoder::new(&mut out)
            .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
            .map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        let close = |source| Error::OutputClose {
            path: path.to_path_buf(),
            source,
        };
        out.flush().map_err(close)?;
        out.get_ref().sync_all().map_err(close)?;
        info!("wrote {}x{} image to {}", img.width(), img.height(), path.display());
        Ok(())
    }
}

impl<G, P> GenericImageView for Wallpaper<G, P>
where
    G: Gradation,
    P: Painter,
{
    type Pixel = Rgb<u8>;

    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width, self.canvas.height)
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        (0, 0, self.canvas.width, self.canvas.height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.at(x, y)
    }
}
