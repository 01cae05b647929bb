use derive_more::{Display, Error, From, IsVariant, TryInto};

pub use crate::sys::OsError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("read {actual} bytes instead of {expected}")]
pub struct ShortRead {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("wrote {actual} bytes instead of {expected}")]
pub struct ShortWrite {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file contents aren't valid UTF-8 after byte {valid_up_to}")]
pub struct InvalidUtf8 {
    pub valid_up_to: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains an interior NUL byte")]
pub struct InvalidPath;

/// Errors produced by the file helpers in this module.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum FileError {
    Os(OsError),
    ShortRead(ShortRead),
    ShortWrite(ShortWrite),
    InvalidUtf8(InvalidUtf8),
    InvalidPath(InvalidPath),
}
