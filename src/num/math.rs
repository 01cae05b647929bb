use std::ops::Mul;

use num_traits::{AsPrimitive, Euclid, PrimInt};

use super::error::{DegenerateFit, FitError, check_points};

pub fn square<T: Mul<Output = T> + Copy>(x: T) -> T {
    x * x
}

/// Returns true if `x` is even. Works for negative values too.
pub fn is_even<T: PrimInt>(x: T) -> bool {
    x & T::one() == T::zero()
}

pub fn is_odd<T: PrimInt>(x: T) -> bool {
    !is_even(x)
}

/// The sign function, returning a value of the same type as its argument.
pub trait Sgn: Copy {
    /// - Floats: NaN and (signed) zero are returned unchanged, everything else, infinities and
    ///   subnormals included, maps to `±1`.
    /// - Signed integers: `-1`, `0` or `1`.
    /// - Unsigned integers: `0` or `1`.
    fn sgn(self) -> Self;
}

macro_rules! impl_sgn {
    (float: $($f:ty),*; signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl Sgn for $f {
                fn sgn(self) -> $f {
                    if self.is_nan() || self == 0.0 {
                        self
                    } else {
                        (1.0 as $f).copysign(self)
                    }
                }
            }
        )*
        $(
            impl Sgn for $s {
                fn sgn(self) -> $s {
                    self.signum()
                }
            }
        )*
        $(
            impl Sgn for $u {
                fn sgn(self) -> $u {
                    (self > 0) as $u
                }
            }
        )*
    };
}

impl_sgn! {
    float: f32, f64;
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize
}

/// See [`Sgn::sgn`].
///
/// # Examples
/// ```
/// # use meadow::num::sgn;
/// assert_eq!(sgn(-3.5_f64), -1.0);
/// assert_eq!(sgn(0_i8), 0);
/// assert!(sgn(f32::NAN).is_nan());
/// ```
pub fn sgn<T: Sgn>(x: T) -> T {
    x.sgn()
}

/// The Euclidean remainder of `x / m`, which for a positive `m` always lies in `[0, m)`, unlike
/// the `%` operator.
///
/// # Examples
/// ```
/// # use meadow::num::modulo;
/// assert_eq!(modulo(-1, 25), 24);
/// assert_eq!(modulo(-2.0, 2.5), 0.5);
/// ```
pub fn modulo<T: Euclid>(x: T, m: T) -> T {
    x.rem_euclid(&m)
}

/// Fits a parabola through `(-1, ym1)`, `(0, y0)` and `(1, yp1)` and returns the point `(x, y)`
/// where its derivative is zero.
///
/// The three values must not lie on a line, that is `(ym1 + yp1) / 2 != y0`.
///
/// # Examples
/// ```
/// # use meadow::num::extremum_of_parabola;
/// assert_eq!(extremum_of_parabola(-1.0, 1.0, 1.0), (0.5, 1.25));
/// ```
#[track_caller]
pub fn extremum_of_parabola(ym1: f64, y0: f64, yp1: f64) -> (f64, f64) {
    let a = (ym1 + yp1) / 2.0 - y0;
    let b = (yp1 - ym1) / 2.0;
    debug_assert!(a != 0.0, "the points lie on a line");
    let x = -b / (2.0 * a);
    let y = (a * x + b) * x + y0;
    (x, y)
}

/// Fits a parabola through the points `(xs[i], ys[i])` and returns the point `(x, y)` where its
/// derivative is zero.
///
/// With exactly three points the parabola goes through all of them. With more, it is the least
/// squares fit, computed on x values centred on their mean and scaled into `[-1, 1]` to keep the
/// normal equations well conditioned whatever the spacing of the points.
///
/// # Errors
/// - [`FitError::LengthMismatch`] if `xs` and `ys` have different lengths.
/// - [`FitError::TooFewPoints`] for fewer than three points.
/// - [`FitError::Degenerate`] if the points don't determine a unique parabola, or it has no
///   extremum (a straight line).
///
/// # Examples
/// ```
/// # use meadow::num::fit_parabola_extremum;
/// let (x, y) = fit_parabola_extremum(&[5, 7, 11], &[2, 5, 3]).unwrap();
/// assert!((x - 8.25).abs() < 1e-12);
/// assert!((y - 5.520833333333333).abs() < 1e-12);
/// ```
pub fn fit_parabola_extremum<X, Y>(xs: &[X], ys: &[Y]) -> Result<(f64, f64), FitError>
where
    X: AsPrimitive<f64>,
    Y: AsPrimitive<f64>,
{
    let n = check_points(xs.len(), ys.len(), 3)?;
    let xs = xs.iter().map(|&x| -> f64 { x.as_() });
    let ys = ys.iter().map(|&y| -> f64 { y.as_() });

    if n == 3 {
        let [x0, x1, x2]: [f64; 3] = collect_three(xs);
        let [y0, y1, y2]: [f64; 3] = collect_three(ys);
        let (x, y) = exact_parabola_extremum([x0 - x1, x2 - x1], [y0 - y1, y2 - y1])?;
        return Ok((x + x1, y + y1));
    }

    let (x_mean, y_mean) = xs.clone().zip(ys.clone()).fold((0.0, 0.0), |(sx, sy), (x, y)| {
        (sx + x, sy + y)
    });
    let (x_mean, y_mean) = (x_mean / n as f64, y_mean / n as f64);
    let x_scale = xs.clone().fold(0.0_f64, |acc, x| acc.max((x - x_mean).abs()));
    if x_scale == 0.0 || !x_scale.is_finite() {
        return Err(DegenerateFit.into());
    }

    // Power sums of the normalised x values and their products with the centred y values.
    let mut s = [0.0_f64; 5];
    let mut t = [0.0_f64; 3];
    for (x, y) in xs.zip(ys) {
        let (u, w) = ((x - x_mean) / x_scale, y - y_mean);
        let powers = [1.0, u, u * u, u * u * u, u * u * u * u];
        for (sum, p) in s.iter_mut().zip(powers) {
            *sum += p;
        }
        for (sum, p) in t.iter_mut().zip(powers) {
            *sum += p * w;
        }
    }

    let [a, b, c] = solve3(
        [[s[4], s[3], s[2]], [s[3], s[2], s[1]], [s[2], s[1], s[0]]],
        [t[2], t[1], t[0]],
    )
    .ok_or(DegenerateFit)?;
    let (u, y) = vertex(a, b)?;
    Ok((u * x_scale + x_mean, y + c + y_mean))
}

fn collect_three(mut iter: impl Iterator<Item = f64>) -> [f64; 3] {
    [(); 3].map(|_| iter.next().unwrap_or(f64::NAN))
}

/// Solves for the parabola `a x^2 + b x` through the origin and the two given points.
fn exact_parabola_extremum([x0, x2]: [f64; 2], [y0, y2]: [f64; 2]) -> Result<(f64, f64), FitError> {
    let det = x0 * x0 * x2 - x0 * x2 * x2;
    if det == 0.0 {
        return Err(DegenerateFit.into());
    }
    let a = (x2 * y0 - x0 * y2) / det;
    let b = (-x2 * x2 * y0 + x0 * x0 * y2) / det;
    vertex(a, b)
}

/// The extremum of `a x^2 + b x`.
fn vertex(a: f64, b: f64) -> Result<(f64, f64), FitError> {
    if a == 0.0 || !a.is_finite() || !b.is_finite() {
        return Err(DegenerateFit.into());
    }
    let x = -b / (2.0 * a);
    Ok((x, (a * x + b) * x))
}

/// Gaussian elimination with partial pivoting. Returns `None` for a singular system.
fn solve3(mut m: [[f64; 3]; 3], mut rhs: [f64; 3]) -> Option<[f64; 3]> {
    let scale = m.iter().flatten().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return None;
    }

    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot][col].abs() <= scale * 1e-13 {
            return None;
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..3 {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut out = [0.0; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * out[k]).sum();
        out[row] = (rhs[row] - tail) / m[row][row];
    }
    Some(out)
}
