use std::io::BufRead;
use std::str::FromStr;

use image::Rgb;
use log::debug;
use rand::Rng;

use crate::color::{parse_color, to_hex};
use crate::error::{Error, Result};

/// The colors a wallpaper may be painted with, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb<u8>>) -> Self {
        Self { colors }
    }

    /// Reads one `#RRGGBB` color per line. Empty lines are skipped, any other
    /// line that is not exactly a color fails the whole read.
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut colors = vec![];
        for line in reader.lines() {
            let line = line.map_err(Error::PaletteRead)?;
            let text = line.strip_suffix('\r').unwrap_or(&line);
            if text.is_empty() {
                continue;
            }
            match parse_color(text) {
                Some(c) => colors.push(c),
                None => return Err(Error::PaletteParse(line)),
            }
        }
        debug!("read {} colors", colors.len());
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Picks two colors at distinct positions of the palette.
    pub fn choose_two<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Rgb<u8>, Rgb<u8>)> {
        if self.len() < 2 {
            return Err(Error::InsufficientColors(self.len()));
        }
        let idx = rand::seq::index::sample(rng, self.len(), 2);
        let (c1, c2) = (self.colors[idx.index(0)], self.colors[idx.index(1)]);
        debug!("anchor colors {} and {}", to_hex(c1), to_hex(c2));
        Ok((c1, c2))
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::read(s.as_bytes())
    }
}
