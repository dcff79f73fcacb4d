//! Transient error classification.
//!
//! This module provides the [`TransientError`] trait for classifying errors
//! as transient (temporary, potentially recoverable by retry) or permanent.
//! error-trail does not retry anything itself.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::TransientError;
//! use error_trail::{Error, ErrorKind};
//!
//! let busy = Error::builder().kind(ErrorKind::SERVER | ErrorKind::TRANSIENT).msg("busy").build();
//! assert!(busy.is_transient());
//!
//! let bad = Error::builder().kind(ErrorKind::CLIENT).msg("bad input").build();
//! assert!(bad.is_permanent());
//! ```

use crate::classify;
use crate::types::{Error, ErrorKind, ErrorList};

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried,
/// such as network timeouts or lock contention.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

/// Transient if the chain's kind includes [`ErrorKind::TRANSIENT`].
impl TransientError for Error {
    #[inline]
    fn is_transient(&self) -> bool {
        classify::kind(self).contains(ErrorKind::TRANSIENT)
    }
}

/// Transient if any element is.
impl TransientError for ErrorList {
    fn is_transient(&self) -> bool {
        classify::has(self, ErrorKind::TRANSIENT)
    }
}

impl TransientError for std::io::Error {
    fn is_transient(&self) -> bool {
        use std::io::ErrorKind;
        matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        )
    }
}
