use crate::{MomentTensor, Vec3};

const COMPRESSION: char = '#';
const DILATATION: char = '-';

/// Text rendering of a focal sphere as a lower hemisphere, equal-area
/// projection with north up. Each row is sampled at twice the horizontal
/// resolution to make up for the aspect ratio of terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct Beachball {
    /// radius of the projection in rows
    pub radius: usize,
}

impl Default for Beachball {
    fn default() -> Self {
        Self { radius: 10 }
    }
}

impl Beachball {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// polarity of the P wave radiated in the direction of the projection
    /// point (x east, y north), both in [-1, 1]. `None` outside the circle
    fn polarity(m: &nalgebra::Matrix3<f64>, x: f64, y: f64) -> Option<char> {
        let r2 = x * x + y * y;
        if r2 > 1.0 {
            return None;
        }
        // equal area: r = sqrt(2) sin(i / 2) for take-off angle i from down
        let inc = 2.0 * (r2.sqrt() / std::f64::consts::SQRT_2).asin();
        let az = x.atan2(y);
        let (si, ci) = inc.sin_cos();
        let (sa, ca) = az.sin_cos();
        // (up, south, east)
        let v = Vec3::new(-ci, -si * ca, si * sa);
        let amp = v.dot(&(m * v));
        Some(if amp > 0.0 { COMPRESSION } else { DILATATION })
    }

    pub fn render(&self, tensor: &MomentTensor) -> String {
        let m = tensor.matrix();
        let r = self.radius.max(1) as isize;
        let mut ret = String::new();
        for row in -r..=r {
            let y = -(row as f64) / r as f64;
            let mut line = String::new();
            for col in -2 * r..=2 * r {
                let x = col as f64 / (2 * r) as f64;
                line.push(Self::polarity(&m, x, y).unwrap_or(' '));
            }
            ret.push_str(line.trim_end());
            ret.push('\n');
        }
        ret
    }
}
