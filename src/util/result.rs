use std::error::Error;

/// Turns a failed `try_` call into a panic carrying the error's own message, which is how every
/// panicking container method is built.
pub(crate) trait ResultExtension<T, E: Error> {
    /// # Panics
    /// Panics with the [`Display`](std::fmt::Display) output of the error if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
