use std::ffi::CString;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_int, mode_t, stat};

use super::error::{FileError, InvalidPath, OsError};
use crate::sys::errno;

/// An owned file descriptor, closed when dropped.
#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn open(path: &Path, flags: c_int, mode: mode_t) -> Result<Fd, FileError> {
        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPath)?;
        loop {
            // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
            match unsafe { libc::open(c_path.as_ptr(), flags | libc::O_CLOEXEC, mode as c_int) } {
                -1 => match errno::last_errno() {
                    libc::EINTR => continue,
                    e => return Err(OsError::from_code(e).into()),
                },
                fd => return Ok(Fd(fd)),
            }
        }
    }

    /// Returns the size of the file in bytes, as reported by `fstat`.
    pub fn size(&self) -> Result<usize, OsError> {
        let mut raw_meta: MaybeUninit<stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            return Err(OsError::last());
        }
        // SAFETY: fstat succeeded, so it initialized raw_meta.
        let raw = unsafe { raw_meta.assume_init() };
        usize::try_from(raw.st_size).map_err(|_| OsError::from_code(libc::EOVERFLOW))
    }

    /// Reads until `buf` is full or the end of the file is reached, returning the number of bytes
    /// read.
    pub fn read_full(&self, buf: &mut [u8]) -> Result<usize, OsError> {
        let mut filled = 0;
        while filled < buf.len() {
            let rest = &mut buf[filled..];
            // SAFETY: rest is valid for writes of rest.len() bytes.
            match unsafe { libc::read(self.0, rest.as_mut_ptr().cast(), rest.len()) } {
                -1 => match errno::last_errno() {
                    libc::EINTR => continue,
                    e => return Err(OsError::from_code(e)),
                },
                0 => break,
                count => filled += count as usize,
            }
        }
        Ok(filled)
    }

    /// Writes as much of `buf` as the file accepts, returning the number of bytes written.
    pub fn write_full(&self, buf: &[u8]) -> Result<usize, OsError> {
        let mut written = 0;
        while written < buf.len() {
            let rest = &buf[written..];
            // SAFETY: rest is valid for reads of rest.len() bytes.
            match unsafe { libc::write(self.0, rest.as_ptr().cast(), rest.len()) } {
                -1 => match errno::last_errno() {
                    libc::EINTR => continue,
                    e => return Err(OsError::from_code(e)),
                },
                0 => break,
                count => written += count as usize,
            }
        }
        Ok(written)
    }

    /// Closes the descriptor, reporting errors that would otherwise be lost on drop, such as a
    /// deferred write failure.
    pub fn close(self) -> Result<(), OsError> {
        let fd = self.0;
        std::mem::forget(self);
        // SAFETY: close invalidates the provided file descriptor regardless of the outcome, and
        // self has been forgotten so it won't be closed again.
        if unsafe { libc::close(fd) } == -1 {
            match errno::last_errno() {
                // The descriptor is released even when interrupted.
                libc::EINTR => {}
                e => return Err(OsError::from_code(e)),
            }
        }
        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            log::warn!(
                "error while dropping file descriptor {}: {}",
                self.0,
                OsError::last()
            );
        }
    }
}
