//! Peano-type space-filling curve mapping `[0, 1]` onto the search box.
//!
//! The curve splits the unit hypercube into `2^n` subcubes per level, visits
//! them in an order where consecutive subcubes share a face, and recurses into
//! each subcube with a rotated and reflected copy of the same order. After
//! `density` levels the parameter has selected one of `2^(n * density)` cells
//! and the mapped point is that cell's center.
//!
//! The parameter is read as a fixed-point number with `n * density` bits so
//! that each level consumes one `n`-bit digit. Digit orientations depend only
//! on the digit, so they are tabulated once per curve.

use super::bounds::{Bounds, MAX_DIMENSION};
use super::config::MAX_DENSITY;

// The fixed-point parameter must fit in a `u128`.
const _: () = assert!(MAX_DIMENSION * MAX_DENSITY as usize <= 128);

/// Orientation of the subcube selected by one digit.
#[derive(Debug, Clone)]
struct Node {
    /// Corner of the subcube, one `±1` per coordinate.
    u: Vec<i32>,

    /// Reflections carried into the next level.
    v: Vec<i32>,

    /// Coordinate that leads the next level.
    l: usize,
}

impl Node {
    fn for_digit(digit: usize, n: usize) -> Self {
        let last = n - 1;
        let count = 1_usize << n;
        let mut u = vec![-1; n];
        let mut v = vec![-1; n];
        let mut l = last;

        if digit == count - 1 {
            u[0] = 1;
            v[0] = 1;
            v[last] = 1;
        } else if digit != 0 {
            let mut rest = digit;
            let mut half = count;
            let mut prev = -1;
            let mut flip = 1;
            l = 0;

            for i in 0..n {
                half /= 2;
                let bit = if rest >= half {
                    if rest == half && rest != 1 {
                        l = i;
                        flip = -1;
                    }
                    rest -= half;
                    1
                } else {
                    if rest == half - 1 && rest != 0 {
                        l = i;
                        flip = 1;
                    }
                    -1
                };
                let sign = -prev * bit;
                u[i] = sign;
                v[i] = sign;
                prev = bit;
            }

            v[l] *= flip;
            v[last] = -v[last];
        }

        Self { u, v, l }
    }
}

/// Maps curve parameters `t ∈ [0, 1]` to points in a search box.
#[derive(Debug, Clone)]
pub struct PeanoCurve {
    dimension: usize,
    density: u32,
    nodes: Vec<Node>,
    scale: Vec<f64>,
    center: Vec<f64>,
}

impl PeanoCurve {
    /// Builds the curve for a validated box and resolution.
    #[must_use]
    pub fn new(bounds: &Bounds, density: u32) -> Self {
        let dimension = bounds.dimension();
        let nodes = if dimension > 1 {
            (0..1_usize << dimension)
                .map(|digit| Node::for_digit(digit, dimension))
                .collect()
        } else {
            Vec::new()
        };

        let (scale, center) = bounds
            .lower()
            .iter()
            .zip(bounds.upper())
            .map(|(lo, hi)| (hi - lo, 0.5 * (hi + lo)))
            .unzip();

        Self {
            dimension,
            density,
            nodes,
            scale,
            center,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the box point for parameter `t`.
    ///
    /// Values of `t` outside `[0, 1]` are clamped.
    #[must_use]
    pub fn map(&self, t: f64) -> Vec<f64> {
        let mut y = self.unit_point(t.clamp(0.0, 1.0));
        for ((yi, scale), center) in y.iter_mut().zip(&self.scale).zip(&self.center) {
            *yi = *yi * scale + center;
        }
        y
    }

    /// Returns the point in `[-0.5, 0.5]^n` for parameter `t`.
    fn unit_point(&self, t: f64) -> Vec<f64> {
        let n = self.dimension;
        if n == 1 {
            return vec![t - 0.5];
        }

        let density = self.density as usize;
        let bits = n * density;
        let code = fixed_point(t, bits);
        let mask = (1_usize << n) - 1;

        let mut y = vec![0.0; n];
        let mut reflect = vec![1; n];
        let mut u = vec![0; n];
        let mut v = vec![0; n];
        let mut lead = 0;
        let mut step = 0.5;

        for level in 0..density {
            let shift = bits - n * (level + 1);
            #[allow(clippy::cast_possible_truncation)]
            let digit = (code >> shift) as usize & mask;
            let node = &self.nodes[digit];

            u.copy_from_slice(&node.u);
            v.copy_from_slice(&node.v);
            u.swap(0, lead);
            v.swap(0, lead);

            lead = if node.l == 0 {
                lead
            } else if node.l == lead {
                0
            } else {
                node.l
            };

            step *= 0.5;
            for i in 0..n {
                u[i] *= reflect[i];
                reflect[i] *= -v[i];
                y[i] += step * f64::from(u[i]);
            }
        }

        y
    }
}

/// Reads `t ∈ [0, 1]` as an unsigned fixed-point fraction with `bits` bits.
///
/// `t = 1` saturates to the largest code, which selects the last cell.
fn fixed_point(t: f64, bits: usize) -> u128 {
    let max = u128::MAX >> (128 - bits);
    if t >= 1.0 {
        return max;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let scale = 2.0_f64.powi(bits as i32);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let code = (t * scale) as u128;
    code.min(max)
}
