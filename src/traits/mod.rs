//! Extension traits.
//!
//! - [`ResultExt`]: wraps the error of a `Result` into an [`Error`](crate::Error)
//! - [`TransientError`]: classifies errors as transient or permanent
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ResultExt, TransientError};
//! use error_trail::ErrorKind;
//!
//! let res: Result<(), std::io::Error> =
//!     Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"));
//! assert!(res.as_ref().unwrap_err().is_transient());
//!
//! let err = res.classify(|b| b.kind(ErrorKind::TRANSIENT)).unwrap_err();
//! assert!(err.is_transient());
//! ```

pub mod result_ext;
pub mod transient;

pub use result_ext::ResultExt;
pub use transient::TransientError;
