//! A module containing [`BoundedVector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration, while [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration. Failed
//! operations report [`CapacityExceeded`], [`IndexOutOfBounds`] or [`IndexOrCapacity`], and
//! [`Rejected`] when the element that didn't fit is handed back.
//!
//! [`BoundedVector`] is also re-exported under the parent module.

mod bounded_vector;
mod error;
mod iter;

pub use bounded_vector::*;
pub use error::*;
pub use iter::*;
pub use crate::util::error::{CapacityExceeded, IndexOrCapacity, IndexOutOfBounds};
