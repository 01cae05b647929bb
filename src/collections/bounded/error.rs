use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::util::error::CapacityExceeded;

/// An error that hands back the element an operation couldn't store, next to the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T, E = CapacityExceeded> {
    pub element: T,
    pub error: E,
}

impl<T, E> Rejected<T, E> {
    pub(crate) const fn new(element: T, error: E) -> Rejected<T, E> {
        Rejected {
            element,
            error,
        }
    }

    /// Returns the rejected element, discarding the error.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Returns the reason the element was rejected.
    pub const fn error(&self) -> &E {
        &self.error
    }
}

impl<T, E: Display> Display for Rejected<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "element rejected: {}", self.error)
    }
}

impl<T: Debug, E: Error + 'static> Error for Rejected<T, E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
