use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a color: {0}")]
    PaletteParse(String),

    #[error("could not read colors")]
    PaletteRead(#[source] io::Error),

    #[error("not enough colors: need at least 2, got {0}")]
    InsufficientColors(usize),

    #[error("unknown picture {0}")]
    UnknownGenerator(String),

    #[error("{generator}: {message}")]
    GeneratorArguments {
        generator: &'static str,
        message: String,
    },

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("loading image {}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not create image file {}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write image {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not close output {}", .path.display())]
    OutputClose {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Errors caused by how the program was invoked rather than by its inputs.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::UnknownGenerator(_) | Self::GeneratorArguments { .. } | Self::InvalidCanvas { .. }
        )
    }
}
