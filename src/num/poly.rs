//! Low-degree polynomial helpers. Coefficients are always ordered from the highest degree down to
//! the constant term.

use num_traits::{Float, Num};

#[cfg(feature = "bounded")]
use crate::collections::bounded::BoundedVector;

use super::error::{DegenerateFit, FitError, check_points};

/// Fits a line through the points `(xs[i], ys[i])` by least squares and returns its coefficients
/// as `[slope, intercept]`.
///
/// # Errors
/// - [`FitError::LengthMismatch`] if `xs` and `ys` have different lengths.
/// - [`FitError::TooFewPoints`] for fewer than two points.
/// - [`FitError::Degenerate`] if every `x` is the same.
///
/// # Examples
/// ```
/// # use meadow::num::polyfit1;
/// let [slope, intercept] = polyfit1(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
/// assert_eq!((slope, intercept), (2.0, 1.0));
/// ```
pub fn polyfit1<T: Float>(xs: &[T], ys: &[T]) -> Result<[T; 2], FitError> {
    let n = check_points(xs.len(), ys.len(), 2)?;
    let n = T::from(n).ok_or(DegenerateFit)?;

    let (mut sx, mut sx2, mut sy, mut sxy) = (T::zero(), T::zero(), T::zero(), T::zero());
    for (&x, &y) in xs.iter().zip(ys) {
        sx = sx + x;
        sx2 = sx2 + x * x;
        sy = sy + y;
        sxy = sxy + x * y;
    }

    // The inverse of [n sx; sx sx2] applied to [sy; sxy].
    let det = n * sx2 - sx * sx;
    if det.is_zero() {
        return Err(DegenerateFit.into());
    }
    Ok([(n * sxy - sx * sy) / det, (sx2 * sy - sx * sxy) / det])
}

/// Evaluates the polynomial `cs` at `x` with Horner's method. No coefficients evaluate to zero.
///
/// # Examples
/// ```
/// # use meadow::num::polyval;
/// assert_eq!(polyval(&[2, 3, 4, 5], 7), 866);
/// assert_eq!(polyval::<f64>(&[], 1.5), 0.0);
/// ```
pub fn polyval<T: Num + Copy>(cs: &[T], x: T) -> T {
    match cs.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &c| acc * x + c),
        None => T::zero(),
    }
}

/// Returns the coefficients of the derivative of `cs`. The derivative of a constant (or of no
/// coefficients at all) is `[0]`.
///
/// # Examples
/// ```
/// # use meadow::num::polyder;
/// assert_eq!(polyder(&[1, 2, 3, 4]), [3, 4, 3]);
/// assert_eq!(polyder(&[5]), [0]);
/// ```
pub fn polyder<T: Num + Copy>(cs: &[T]) -> Vec<T> {
    let Some((_, terms)) = cs.split_last() else {
        return vec![T::zero()];
    };
    if terms.is_empty() {
        return vec![T::zero()];
    }

    let mut out: Vec<T> = Vec::with_capacity(terms.len());
    let mut degree = T::zero();
    for &c in terms.iter().rev() {
        degree = degree + T::one();
        out.push(c * degree);
    }
    out.reverse();
    out
}

/// Returns the real roots of `a x^2 + b x + c`, given as `[a, b, c]`, in ascending order. A double
/// root is reported once. With `a == 0` the linear equation is solved instead, and an equation
/// without a variable has no roots.
///
/// # Examples
/// ```
/// # use meadow::num::real_roots2;
/// assert_eq!(&*real_roots2([1.0, -3.0, 2.0]), &[1.0, 2.0]);
/// assert_eq!(&*real_roots2([0.0, 2.0, -1.0]), &[0.5]);
/// assert!(real_roots2([1.0, 0.0, 1.0]).is_empty());
/// ```
#[cfg(feature = "bounded")]
pub fn real_roots2<T: Float>([a, b, c]: [T; 3]) -> BoundedVector<T, 2> {
    let mut roots = BoundedVector::new();
    let two = T::one() + T::one();

    if a.is_zero() {
        if !b.is_zero() {
            roots.push(-c / b);
        }
        return roots;
    }

    let disc = b * b - two * two * a * c;
    if disc < T::zero() {
        return roots;
    }
    if disc.is_zero() {
        roots.push(-b / (two * a));
        return roots;
    }

    // Avoids cancellation between -b and the square root.
    let q = -(b + T::one().copysign(b) * disc.sqrt()) / two;
    let (r1, r2) = (q / a, c / q);
    if r1 <= r2 {
        roots.extend([r1, r2]);
    } else {
        roots.extend([r2, r1]);
    }
    roots
}
