use crate::coord::Canvas;
use crate::gradation::Gradation;

/// Horizontal gradient, 0 on the left edge rising towards 1 on the right.
#[derive(Copy, Clone, Debug)]
pub struct Linear {
    width: f64,
}

impl Linear {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width as f64,
        }
    }
}

impl Gradation for Linear {
    fn at(&self, x: u32, _y: u32) -> f64 {
        x as f64 / self.width
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linear_edges() {
        for (w, h) in [(1, 1), (4, 3), (1366, 738)] {
            let field = Linear::new(Canvas::new(w, h).unwrap());
            for y in 0..h {
                assert_eq!(field.at(0, y), 0.0);
                let right = field.at(w - 1, y);
                assert!((right - (w - 1) as f64 / w as f64).abs() < 1e-12);
                assert!(right < 1.0);
            }
        }
    }
}
