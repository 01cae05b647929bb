//! Small numeric helpers: checked casts, scalar math, decibel conversions, basic statistics and
//! low-degree polynomials.
//!
//! Everything here is a free function generic over the [`num_traits`] numeric traits, so the same
//! helper works for `f32` and `f64` (or every integer width) without a macro per type.

pub mod bits;
pub mod cast;
pub mod db;
pub mod error;
pub mod math;
pub mod poly;
pub mod stats;


#[doc(inline)]
pub use bits::nextpow2;
#[doc(inline)]
pub use cast::*;
#[doc(inline)]
pub use db::*;
#[doc(inline)]
pub use error::*;
#[doc(inline)]
pub use math::*;
#[doc(inline)]
pub use poly::*;
#[doc(inline)]
pub use stats::*;
