//! Numeric casts that state their intent and check, in debug builds, that no information is lost.
//!
//! In release builds every cast here compiles down to a plain `as`.

use num_traits::{AsPrimitive, Float, NumCast, PrimInt, Signed, Unsigned};

#[track_caller]
fn float_to_int<R, T>(fx: T) -> R
where
    T: Float + AsPrimitive<R>,
    R: PrimInt + 'static,
{
    debug_assert!(
        !fx.is_nan() && <R as NumCast>::from(fx).is_some(),
        "float value doesn't fit the integer type"
    );
    fx.as_()
}

/// Rounds `x` towards negative infinity and converts it to the integer type `R`.
///
/// # Examples
/// ```
/// # use meadow::num::ifloor;
/// assert_eq!(ifloor::<i32, _>(-1.5_f64), -2);
/// ```
#[track_caller]
pub fn ifloor<R, T>(x: T) -> R
where
    T: Float + AsPrimitive<R>,
    R: PrimInt + 'static,
{
    float_to_int(x.floor())
}

/// Rounds `x` to the nearest integer, half away from zero, and converts it to the integer type `R`.
///
/// # Examples
/// ```
/// # use meadow::num::iround;
/// assert_eq!(iround::<i32, _>(2.5_f64), 3);
/// assert_eq!(iround::<i32, _>(-2.5_f64), -3);
/// ```
#[track_caller]
pub fn iround<R, T>(x: T) -> R
where
    T: Float + AsPrimitive<R>,
    R: PrimInt + 'static,
{
    float_to_int(x.round())
}

/// Rounds `x` towards positive infinity and converts it to the integer type `R`.
#[track_caller]
pub fn iceil<R, T>(x: T) -> R
where
    T: Float + AsPrimitive<R>,
    R: PrimInt + 'static,
{
    float_to_int(x.ceil())
}

/// Converts between integer types. The value must fit the target type.
#[track_caller]
pub fn iicast<To, From>(f: From) -> To
where
    From: PrimInt + AsPrimitive<To>,
    To: PrimInt + 'static,
{
    debug_assert!(
        <To as NumCast>::from(f).is_some(),
        "integer value doesn't fit the target type"
    );
    f.as_()
}

/// Converts between floating point types.
pub fn ffcast<To, From>(f: From) -> To
where
    From: Float + AsPrimitive<To>,
    To: Float + 'static,
{
    f.as_()
}

/// Converts an integer to a floating point type.
pub fn ifcast<To, From>(f: From) -> To
where
    From: PrimInt + AsPrimitive<To>,
    To: Float + 'static,
{
    f.as_()
}

/// Integers with a signed and an unsigned counterpart of the same width.
pub trait SignCast: PrimInt {
    type Signed: PrimInt + Signed;
    type Unsigned: PrimInt + Unsigned;

    /// Reinterprets `self` as the signed type of the same width. The value must be representable.
    fn signed_cast(self) -> Self::Signed;

    /// Reinterprets `self` as the unsigned type of the same width. The value must be
    /// representable.
    fn unsigned_cast(self) -> Self::Unsigned;
}

macro_rules! impl_sign_cast {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl SignCast for $signed {
                type Signed = $signed;
                type Unsigned = $unsigned;

                fn signed_cast(self) -> $signed {
                    self
                }

                #[track_caller]
                fn unsigned_cast(self) -> $unsigned {
                    debug_assert!(self >= 0, "negative value {} cast to unsigned", self);
                    self as $unsigned
                }
            }

            impl SignCast for $unsigned {
                type Signed = $signed;
                type Unsigned = $unsigned;

                #[track_caller]
                fn signed_cast(self) -> $signed {
                    debug_assert!(
                        self <= <$signed>::MAX as $unsigned,
                        "value {} too large for a signed cast",
                        self
                    );
                    self as $signed
                }

                fn unsigned_cast(self) -> $unsigned {
                    self
                }
            }
        )*
    };
}

impl_sign_cast! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

/// Converts an unsigned integer to the signed integer of the same width.
///
/// # Examples
/// ```
/// # use meadow::num::uscast;
/// let n: i32 = uscast(7_u32);
/// assert_eq!(n, 7);
/// ```
#[track_caller]
pub fn uscast<F: SignCast + Unsigned>(f: F) -> F::Signed {
    f.signed_cast()
}

/// Converts a signed integer to the unsigned integer of the same width.
#[track_caller]
pub fn sucast<F: SignCast + Signed>(f: F) -> F::Unsigned {
    f.unsigned_cast()
}

/// Converts any integer to the signed integer of the same width.
#[track_caller]
pub fn scast<F: SignCast>(f: F) -> F::Signed {
    f.signed_cast()
}

/// Converts any integer to the unsigned integer of the same width.
#[track_caller]
pub fn ucast<F: SignCast>(f: F) -> F::Unsigned {
    f.unsigned_cast()
}
