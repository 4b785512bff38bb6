use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::GrayImage;
use log::info;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::coord::Canvas;
use crate::error::{Error, Result};
use crate::gradation::Gradation;

#[derive(StructOpt, Debug)]
#[structopt(name = "graphic", setting = AppSettings::ColorNever)]
pub(super) struct Opts {
    /// Image to take the gradation from
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
}

/// Grayscale projection of an image, scaled to cover the whole canvas while
/// keeping its proportions. Sampling is nearest neighbor, clamped to the
/// image edges.
#[derive(Clone, Debug)]
pub struct Graphic {
    img: Arc<GrayImage>,
    scale: f64,
}

impl Graphic {
    pub fn load(canvas: Canvas, path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|source| Error::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_luma8();
        info!("loaded {} ({}x{})", path.display(), img.width(), img.height());
        Self::new(canvas, img).map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn new(canvas: Canvas, img: GrayImage) -> std::result::Result<Self, image::ImageError> {
        if img.width() == 0 || img.height() == 0 {
            return Err(image::ImageError::Limits(image::error::LimitError::from_kind(
                image::error::LimitErrorKind::DimensionError,
            )));
        }
        let sx = canvas.width as f64 / img.width() as f64;
        let sy = canvas.height as f64 / img.height() as f64;
        Ok(Self {
            img: Arc::new(img),
            scale: sx.max(sy),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Gradation for Graphic {
    fn at(&self, x: u32, y: u32) -> f64 {
        let px = (x as f64 / self.scale) as u32;
        let py = (y as f64 / self.scale) as u32;
        let px = px.min(self.img.width() - 1);
        let py = py.min(self.img.height() - 1);
        self.img.get_pixel(px, py).0[0] as f64 / 255.0
    }
}
