//! Thin wrappers around OS level details. Only available on unix, with the `fs` feature.

pub mod errno;


#[doc(inline)]
pub use errno::{OsError, RawOsError, errno_name, last_errno, strerrno_or_int, strerror};
