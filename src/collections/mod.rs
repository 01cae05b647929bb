//! Fixed-capacity collection types. Namely [`BoundedVector`] for a vector that lives entirely
//! inline and [`SaturatingRing`] for keeping the most recent values of a stream.
//!
//! # Method
//! Both types implement [`Deref<Target = [T]>`](std::ops::Deref) where it makes sense, which saves
//! me from writing some of the more repetitive functionality. Neither of them ever allocates.

#[cfg(feature = "bounded")]
pub mod bounded;
#[cfg(feature = "ring")]
pub mod ring;

#[cfg(feature = "bounded")]
#[doc(inline)]
pub use bounded::BoundedVector;
#[cfg(feature = "ring")]
#[doc(inline)]
pub use ring::SaturatingRing;
