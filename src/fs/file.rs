use std::path::Path;

use libc::mode_t;

use super::error::{FileError, InvalidUtf8, ShortRead, ShortWrite};
use super::fd::Fd;

/// Permissions for newly created files, before the umask is applied.
const CREATE_MODE: mode_t = 0o666;

/// Reads the whole file at `path` into a string.
///
/// # Errors
/// - [`FileError::Os`] if the file can't be opened, inspected or read.
/// - [`FileError::ShortRead`] if the file turned out shorter than its reported size.
/// - [`FileError::InvalidUtf8`] if the contents aren't valid UTF-8.
/// - [`FileError::InvalidPath`] if `path` contains a NUL byte.
pub fn read_file_to_string<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
    let path = path.as_ref();
    let result = read_to_string(path);
    match &result {
        Ok(contents) => log::debug!("read {} bytes from {}", contents.len(), path.display()),
        Err(err) => log::warn!("failed to read {}: {}", path.display(), err),
    }
    result
}

fn read_to_string(path: &Path) -> Result<String, FileError> {
    let fd = Fd::open(path, libc::O_RDONLY, 0)?;
    let expected = fd.size()?;

    let mut buf = vec![0_u8; expected];
    let actual = fd.read_full(&mut buf)?;
    fd.close()?;
    if actual != expected {
        return Err(ShortRead { expected, actual }.into());
    }

    String::from_utf8(buf).map_err(|err| {
        InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
        .into()
    })
}

/// Writes `contents` to the file at `path`, creating it if needed and replacing whatever it held.
///
/// # Errors
/// - [`FileError::Os`] if the file can't be opened, written or closed.
/// - [`FileError::ShortWrite`] if the file stopped accepting bytes.
/// - [`FileError::InvalidPath`] if `path` contains a NUL byte.
///
/// # Examples
/// ```
/// # use meadow::fs::{read_file_to_string, write_string_to_file};
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("greeting.txt");
/// write_string_to_file("hello", &path).unwrap();
/// assert_eq!(read_file_to_string(&path).unwrap(), "hello");
/// ```
pub fn write_string_to_file<P: AsRef<Path>>(contents: &str, path: P) -> Result<(), FileError> {
    let path = path.as_ref();
    let result = write_bytes(contents.as_bytes(), path);
    match &result {
        Ok(()) => log::debug!("wrote {} bytes to {}", contents.len(), path.display()),
        Err(err) => log::warn!("failed to write {}: {}", path.display(), err),
    }
    result
}

fn write_bytes(bytes: &[u8], path: &Path) -> Result<(), FileError> {
    let fd = Fd::open(path, libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC, CREATE_MODE)?;
    let actual = fd.write_full(bytes)?;
    fd.close()?;
    if actual != bytes.len() {
        return Err(ShortWrite {
            expected: bytes.len(),
            actual,
        }
        .into());
    }
    Ok(())
}
