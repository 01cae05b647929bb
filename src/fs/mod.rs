//! Whole-file helpers built directly on the POSIX file API through `libc`.
//!
//! Failures are reported as a [`FileError`], where errors from the OS carry the `errno` code along
//! with its symbolic name and description, such as `"No such file or directory (ENOENT)"`. Every
//! operation also logs through the [`log`] facade: successful reads and writes at debug level
//! with their byte counts, failures as warnings. No logger is installed by this crate.

mod ascii;
mod error;
mod fd;
mod file;
mod tests;

pub use ascii::*;
pub use error::*;
pub use file::*;
