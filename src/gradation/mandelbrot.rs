use num::complex::Complex64;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::coord::Canvas;
use crate::error::{Error, Result};
use crate::gradation::Gradation;

#[derive(StructOpt, Debug)]
#[structopt(name = "mandelbrot", setting = AppSettings::ColorNever)]
pub(super) struct Opts {
    /// Set the number of iterations
    #[structopt(short = "i", default_value = "50")]
    pub iterations: u32,
}

/// Escape-time field of the Mandelbrot set.
///
/// The disk of radius 2 around the origin is fitted inside the canvas. Points
/// that never escape within `iterations` steps get 1.
#[derive(Copy, Clone, Debug)]
pub struct Mandelbrot {
    iterations: u32,
    center: (f64, f64),
    radius: f64,
    treshold: f64,
}

impl Mandelbrot {
    pub fn new(canvas: Canvas, iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::GeneratorArguments {
                generator: "mandelbrot",
                message: "number of iterations must be at least 1".to_string(),
            });
        }
        Ok(Self {
            iterations,
            center: canvas.center(),
            radius: canvas.radius(),
            treshold: 2.0,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    fn point(&self, x: u32, y: u32) -> Complex64 {
        let (cx, cy) = self.center;
        Complex64::new(
            2.0 * (x as f64 - cx) / self.radius,
            2.0 * (y as f64 - cy) / self.radius,
        )
    }

    /// Number of steps taken before `c` escapes, capped at `iterations`.
    fn escape_time(&self, c: Complex64) -> u32 {
        let mut z = Complex64::new(0.0, 0.0);
        let mut i = 0;
        while i < self.iterations {
            if z.norm() > self.treshold {
                break;
            }
            z = z * z + c;
            i += 1;
        }
        i
    }
}

impl Gradation for Mandelbrot {
    fn at(&self, x: u32, y: u32) -> f64 {
        self.escape_time(self.point(x, y)) as f64 / self.iterations as f64
    }
}
