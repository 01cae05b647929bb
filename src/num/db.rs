//! Conversions between linear values and decibels, and between radians and degrees.

use num_traits::{Float, FloatConst};

/// Converts a magnitude to decibels, `20 log10(x)`. Zero maps to negative infinity.
#[track_caller]
pub fn mag2db<T: Float>(x: T) -> T {
    debug_assert!(!(x < T::zero()), "magnitude must not be negative");
    if x.is_zero() {
        T::neg_infinity()
    } else {
        lit::<T>(20.0) * x.log10()
    }
}

/// Converts a power to decibels, `10 log10(x)`. Zero maps to negative infinity.
#[track_caller]
pub fn pow2db<T: Float>(x: T) -> T {
    debug_assert!(!(x < T::zero()), "power must not be negative");
    if x.is_zero() {
        T::neg_infinity()
    } else {
        lit::<T>(10.0) * x.log10()
    }
}

pub fn db2mag<T: Float>(x: T) -> T {
    lit::<T>(10.0).powf(x / lit(20.0))
}

pub fn db2pow<T: Float>(x: T) -> T {
    lit::<T>(10.0).powf(x / lit(10.0))
}

pub fn rad2deg<T: Float + FloatConst>(x: T) -> T {
    x * (lit::<T>(180.0) / T::PI())
}

pub fn deg2rad<T: Float + FloatConst>(x: T) -> T {
    x * (T::PI() / lit(180.0))
}

/// Small literals are exact in every float type.
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
