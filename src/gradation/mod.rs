//! Gradation fields: functions from pixel coordinates to values in \[0, 1\].
//!
//! Every picture the program knows is a [`Generator`]. Building one for a
//! canvas yields a [`Field`], which is then evaluated once per pixel.
use std::fmt;
use std::str::FromStr;

use log::debug;
use structopt::StructOpt;

use crate::coord::Canvas;
use crate::error::{Error, Result};

mod graphic;
mod linear;
mod mandelbrot;

pub use graphic::Graphic;
pub use linear::Linear;
pub use mandelbrot::Mandelbrot;

pub trait Gradation {
    /// Gradation value of the pixel at `(x, y)`, in \[0, 1\].
    fn at(&self, x: u32, y: u32) -> f64;
}

impl<G: Gradation + ?Sized> Gradation for Box<G> {
    fn at(&self, x: u32, y: u32) -> f64 {
        (**self).at(x, y)
    }
}

#[derive(Clone, Debug)]
pub enum Field {
    Linear(Linear),
    Mandelbrot(Mandelbrot),
    Graphic(Graphic),
}

impl Gradation for Field {
    fn at(&self, x: u32, y: u32) -> f64 {
        match self {
            Self::Linear(f) => f.at(x, y),
            Self::Mandelbrot(f) => f.at(x, y),
            Self::Graphic(f) => f.at(x, y),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generator {
    Gradient,
    Mandelbrot,
    Graphic,
}

impl Generator {
    pub const ALL: [Generator; 3] = [Self::Gradient, Self::Mandelbrot, Self::Graphic];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Mandelbrot => "mandelbrot",
            Self::Graphic => "graphic",
        }
    }

    /// Builds the gradation field of this picture for the given canvas.
    /// `args` are the command line arguments following the picture name.
    pub fn build(self, canvas: Canvas, args: &[String]) -> Result<Field> {
        debug!("building {} for {}x{} with {:?}", self, canvas.width, canvas.height, args);
        let field = match self {
            Self::Gradient => Field::Linear(Linear::new(canvas)),
            Self::Mandelbrot => {
                let opts: mandelbrot::Opts = parse_args(self, args)?;
                Field::Mandelbrot(Mandelbrot::new(canvas, opts.iterations)?)
            }
            Self::Graphic => {
                let opts: graphic::Opts = parse_args(self, args)?;
                Field::Graphic(Graphic::load(canvas, &opts.path)?)
            }
        };
        Ok(field)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| Error::UnknownGenerator(s.to_string()))
    }
}

fn parse_args<T: StructOpt>(generator: Generator, args: &[String]) -> Result<T> {
    let argv = std::iter::once(generator.name()).chain(args.iter().map(String::as_str));
    T::from_iter_safe(argv).map_err(|e| Error::GeneratorArguments {
        generator: generator.name(),
        message: e.message.trim_start_matches("error: ").to_string(),
    })
}
