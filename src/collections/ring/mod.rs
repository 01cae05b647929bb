//! A ring that keeps the most recent values pushed into it, see [`SaturatingRing`].

mod iter;
mod saturating_ring;
mod tests;

pub use iter::*;
pub use saturating_ring::*;
