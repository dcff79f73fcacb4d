//! Error types and their building blocks.
//!
//! - [`Error`]: the tagged wrapper node, built through [`ErrorBuilder`]
//! - [`ErrorList`]: an ordered aggregate of independent errors
//! - [`Op`], [`ErrorKind`], [`ErrorCode`]: the classification facets
//! - [`Sentinel`]: named `'static` errors compared by value
//!
//! # Examples
//!
//! ```
//! use error_trail::{Error, ErrorCode, ErrorKind, Op};
//!
//! let err = Error::builder()
//!     .op(Op::new("db.findUser"))
//!     .kind(ErrorKind::CLIENT)
//!     .code(ErrorCode::NOT_FOUND)
//!     .msg("user not found: 1")
//!     .build();
//!
//! assert_eq!(err.to_string(), "user not found: 1");
//! assert!(err.stack().is_some());
//! ```
use smallvec::SmallVec;
use std::any::Any;
use std::error::Error as StdError;
use std::sync::Arc;

pub mod error;
pub mod error_list;
pub mod facets;
pub mod sentinel;

pub use error::builder::{ConstructionFault, Definite, ErrorBuilder, Nullable};
pub use error::Error;
pub use error_list::ErrorList;
pub use facets::{ErrorCode, ErrorKind, Op};
pub use sentinel::Sentinel;

/// SmallVec-backed collection used for list elements and op stacks.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of short chains and small batches.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Shared, immutable handle to any error.
///
/// Causes and list elements are stored this way so that one error value can
/// be referenced from several wrappers.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Converts an error into a [`SharedError`], reusing the handle if `error`
/// already is one.
///
/// `Arc<Error>` and `Arc<ErrorList>` are coerced rather than nested, so the
/// node they hold stays visible to downcasts along the chain.
pub(crate) fn into_shared<E>(error: E) -> SharedError
where
    E: StdError + Send + Sync + 'static,
{
    let any: &dyn Any = &error;
    if let Some(shared) = any.downcast_ref::<SharedError>() {
        return Arc::clone(shared);
    }
    if let Some(node) = any.downcast_ref::<Arc<Error>>() {
        return Arc::clone(node) as SharedError;
    }
    if let Some(list) = any.downcast_ref::<Arc<ErrorList>>() {
        return Arc::clone(list) as SharedError;
    }
    Arc::new(error)
}
