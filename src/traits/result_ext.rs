//! Extension trait for wrapping the error of a `Result` into an [`Error`].
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{classify, ErrorCode, ErrorKind, Op};
//!
//! fn load_config() -> Result<String, error_trail::Error> {
//!     std::fs::read_to_string("/nonexistent/config.toml").op("config.load")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(classify::ops(&err).as_slice(), [Op::new("config.load")]);
//!
//! let err = "x".parse::<u8>()
//!     .classify(|b| b.kind(ErrorKind::CLIENT).code(ErrorCode::INVALID).msg("bad port"))
//!     .unwrap_err();
//! assert_eq!(classify::client_msg(&err), "bad port");
//! ```

use std::error::Error as StdError;

use crate::types::{Error, ErrorBuilder, Op};

/// Wraps errors of a `Result` without verbose `.map_err()` chains.
pub trait ResultExt<T> {
    /// Wraps the error, labelling it with `op`.
    fn op<O: Into<Op>>(self, op: O) -> Result<T, Error>;

    /// Wraps the error with the facets set by `f`.
    ///
    /// The closure receives a fresh builder; the error becomes its cause.
    ///
    /// # Panics
    ///
    /// Panics if `f` sets a cause of its own or supplies a facet twice.
    fn classify<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce(ErrorBuilder) -> ErrorBuilder;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline(never)]
    fn op<O: Into<Op>>(self, op: O) -> Result<T, Error> {
        let entry = <Self as ResultExt<T>>::op::<O> as fn(Self, O) -> Result<T, Error>;
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ErrorBuilder::new().op(op).cause(error).build_within(entry as usize)),
        }
    }

    #[inline(never)]
    fn classify<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce(ErrorBuilder) -> ErrorBuilder,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let entry = <Self as ResultExt<T>>::classify::<F> as fn(Self, F) -> Result<T, Error>;
                Err(f(ErrorBuilder::new()).cause(error).build_within(entry as usize))
            },
        }
    }
}
