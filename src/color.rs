//! Color parsing and comparison.
use image::Rgb;

/// Parses a color written as `#RRGGBB` (hex digits in either case).
pub fn parse_color(s: &str) -> Option<Rgb<u8>> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

pub fn to_hex(c: Rgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

/// Squared euclidean distance between two colors.
pub fn distance(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}

/// Returns the color of `colors` closest to `c`, the first one on ties.
///
/// Panics if `colors` is empty.
pub fn nearest(c: Rgb<u8>, colors: &[Rgb<u8>]) -> Rgb<u8> {
    assert!(!colors.is_empty(), "no colors to choose from");
    let mut closest = colors[0];
    let mut d = distance(c, closest);
    for &color in &colors[1..] {
        let nd = distance(c, color);
        if nd < d {
            closest = color;
            d = nd;
        }
    }
    closest
}
