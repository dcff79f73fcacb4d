use std::error::Error as StdError;
use std::fmt;

/// A named error meant to live in a `static` and be matched by value.
///
/// Wrapping a sentinel copies it into the chain, so [`is`](crate::is)
/// compares sentinels by their message in addition to identity. Two
/// sentinels with the same text are therefore the same error: give each
/// sentinel a message of its own.
///
/// ```
/// use error_trail::{is, Error, Sentinel};
///
/// static ERR_CLOSED: Sentinel = Sentinel::new("file already closed");
///
/// let err = Error::builder().msg("flush").cause(ERR_CLOSED).build();
/// assert!(is(&err, &ERR_CLOSED));
/// assert_eq!(err.to_string(), "flush: file already closed");
///
/// static ERR_SHUT: Sentinel = Sentinel::new("file already closed");
/// assert!(is(&err, &ERR_SHUT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sentinel {
    message: &'static str,
}

impl Sentinel {
    #[inline]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl StdError for Sentinel {}
