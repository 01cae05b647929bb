//! Symbolic names and descriptions for `errno` codes.

use std::ffi::CStr;
use std::io;

use derive_more::{Display, Error};
use libc::{c_char, c_int};

/// A raw `errno` value.
pub type RawOsError = c_int;

macro_rules! errno_table {
    ($($name:ident),* $(,)?) => {
        /// Every code with a name, in lookup order. Where two names share a code (such as
        /// `EAGAIN` and `EWOULDBLOCK` on most systems), the first one wins.
        const ERRNO_NAMES: &[(RawOsError, &str)] = &[$((libc::$name, stringify!($name)),)*];
    };
}

errno_table! {
    E2BIG, EACCES, EADDRINUSE, EADDRNOTAVAIL, EAFNOSUPPORT, EAGAIN, EALREADY, EBADF, EBADMSG,
    EBUSY, ECANCELED, ECHILD, ECONNABORTED, ECONNREFUSED, ECONNRESET, EDEADLK, EDESTADDRREQ, EDOM,
    EEXIST, EFAULT, EFBIG, EHOSTUNREACH, EIDRM, EILSEQ, EINPROGRESS, EINTR, EINVAL, EIO, EISCONN,
    EISDIR, ELOOP, EMFILE, EMLINK, EMSGSIZE, ENAMETOOLONG, ENETDOWN, ENETRESET, ENETUNREACH,
    ENFILE, ENOBUFS, ENODATA, ENODEV, ENOENT, ENOEXEC, ENOLCK, ENOLINK, ENOMEM, ENOMSG,
    ENOPROTOOPT, ENOSPC, ENOSR, ENOSTR, ENOSYS, ENOTCONN, ENOTDIR, ENOTEMPTY, ENOTRECOVERABLE,
    ENOTSOCK, ENOTSUP, ENOTTY, ENXIO, EOPNOTSUPP, EOVERFLOW, EOWNERDEAD, EPERM, EPIPE, EPROTO,
    EPROTONOSUPPORT, EPROTOTYPE, ERANGE, EROFS, ESPIPE, ESRCH, ETIME, ETIMEDOUT, ETXTBSY, EXDEV,
    EWOULDBLOCK,
}

/// Returns the symbolic name of a POSIX error code, such as `"ENOENT"`.
///
/// # Examples
/// ```
/// # use meadow::sys::errno_name;
/// assert_eq!(errno_name(libc::ENXIO), Some("ENXIO"));
/// assert_eq!(errno_name(12345), None);
/// ```
pub fn errno_name(code: RawOsError) -> Option<&'static str> {
    ERRNO_NAMES
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, name)| *name)
}

/// Returns the symbolic name of `code`, or the code itself in decimal if it has none.
pub fn strerrno_or_int(code: RawOsError) -> String {
    errno_name(code).map_or_else(|| code.to_string(), str::to_owned)
}

/// Returns the system's description of `code`, like `strerror`.
pub fn strerror(code: RawOsError) -> String {
    let mut buf = [0 as c_char; 256];
    // SAFETY: buf is valid for writes of its full length. The XSI strerror_r writes a
    // NUL-terminated message into it and returns zero, or returns an error and leaves it alone.
    if unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) } != 0 {
        return format!("Unknown error {code}");
    }
    // SAFETY: strerror_r succeeded, so buf holds a NUL-terminated string.
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

/// Returns the calling thread's current `errno`.
pub fn last_errno() -> RawOsError {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// An error reported by the OS, with its code, symbolic name and description.
///
/// # Examples
/// ```
/// # use meadow::sys::OsError;
/// let err = OsError::from_code(libc::ENOENT);
/// assert_eq!(err.name, "ENOENT");
/// assert_eq!(err.to_string(), "No such file or directory (ENOENT)");
/// ```
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{description} ({name})")]
pub struct OsError {
    pub code: RawOsError,
    pub name: String,
    pub description: String,
}

impl OsError {
    pub fn from_code(code: RawOsError) -> OsError {
        OsError {
            code,
            name: strerrno_or_int(code),
            description: strerror(code),
        }
    }

    /// Captures the calling thread's current `errno`.
    pub fn last() -> OsError {
        OsError::from_code(last_errno())
    }
}

impl From<io::Error> for OsError {
    fn from(value: io::Error) -> Self {
        match value.raw_os_error() {
            Some(code) => OsError::from_code(code),
            None => OsError {
                code: 0,
                name: format!("{:?}", value.kind()),
                description: value.to_string(),
            },
        }
    }
}
