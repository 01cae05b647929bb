use num_traits::{AsPrimitive, Float};

/// The arithmetic mean of `xs`, accumulated and returned in the float type `R`. Returns `None` for
/// an empty slice.
///
/// # Examples
/// ```
/// # use meadow::num::mean;
/// assert_eq!(mean::<f64, _>(&[1, 2]), Some(1.5));
/// assert_eq!(mean::<f32, f32>(&[]), None);
/// ```
pub fn mean<R, T>(xs: &[T]) -> Option<R>
where
    R: Float + 'static,
    T: AsPrimitive<R>,
{
    if xs.is_empty() {
        return None;
    }
    let sum = xs.iter().fold(R::zero(), |acc, &x| acc + x.as_());
    Some(sum / R::from(xs.len())?)
}

/// One-dimensional linear interpolation. `x` must be sorted in ascending order and pair up with
/// `v`. Queries outside `x` take the value at the nearest end. Returns `None` when there is
/// nothing to interpolate.
///
/// # Examples
/// ```
/// # use meadow::num::interp1;
/// let x = [7.0, 9.0, 10.0];
/// let v = [8.0, 12.0, 20.0];
/// assert_eq!(interp1(&x, &v, 9.5), Some(16.0));
/// assert_eq!(interp1(&x, &v, 6.9), Some(8.0));
/// assert_eq!(interp1(&x, &v, 10.1), Some(20.0));
/// ```
#[track_caller]
pub fn interp1<T: Float>(x: &[T], v: &[T], xq: T) -> Option<T> {
    debug_assert_eq!(x.len(), v.len(), "x and v must have the same length");

    let j = x.partition_point(|&xi| xi < xq);
    if j == 0 {
        return v.first().copied();
    }
    if j == x.len() {
        return v.get(j - 1).copied();
    }

    let i = j - 1;
    let (xi, xj) = (x[i], x[j]);
    let (vi, vj) = (*v.get(i)?, *v.get(j)?);
    let t = (xq - xi) / (xj - xi);
    Some(vi + t * (vj - vi))
}
