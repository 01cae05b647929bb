//! Signal processing helpers. At the moment that's a handful of window functions, see
//! [`window`].

pub mod window;

mod tests;

#[doc(inline)]
pub use window::Window;
