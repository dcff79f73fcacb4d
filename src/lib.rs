//! Classified errors with call-stack traces.
//!
//! error-trail augments errors with four orthogonal facets: an operation
//! label ([`Op`]), a bit set of coarse kinds ([`ErrorKind`]), one fine-grained
//! code ([`ErrorCode`]) and a [`StackTrace`](stack::StackTrace) captured where
//! the failure first entered an [`Error`]. Chains of wrapped causes, including
//! plain `std::error::Error` chains, stay traversable and matchable through
//! the functions of [`classify`].
//!
//! Independent failures are gathered in an [`ErrorList`], and a [`Group`]
//! collects the errors of concurrently running subtasks into one.
//!
//! # Examples
//!
//! ## Classifying a chain
//!
//! ```
//! use error_trail::{classify, Error, ErrorCode, ErrorKind, Op};
//!
//! fn find_user(id: u32) -> Result<(), Error> {
//!     Err(Error::builder()
//!         .op(Op::new("db.findUser"))
//!         .kind(ErrorKind::CLIENT)
//!         .code(ErrorCode::NOT_FOUND)
//!         .msg(format!("user not found: {}", id))
//!         .build())
//! }
//!
//! fn buff_user(id: u32) -> Result<(), Error> {
//!     find_user(id).map_err(|err| {
//!         Error::builder().op(Op::new("svc.buffUser")).msg("buffing user").cause(err).build()
//!     })
//! }
//!
//! let err = buff_user(1).unwrap_err();
//! assert_eq!(err.to_string(), "buffing user: user not found: 1");
//! assert_eq!(classify::ops(&err).as_slice(), [Op::new("svc.buffUser"), Op::new("db.findUser")]);
//! assert_eq!(classify::kind(&err), ErrorKind::CLIENT);
//! assert_eq!(classify::code(&err), ErrorCode::NOT_FOUND);
//! assert_eq!(classify::client_msg(&err), "user not found: 1");
//! assert!(err.stack().is_none());
//! assert!(classify::trace(&err).is_some());
//! ```
//!
//! ## Aggregating errors
//!
//! ```
//! use error_trail::{has, is, Error, ErrorKind, ErrorList};
//!
//! let mut list = ErrorList::new();
//! list.add(Error::builder().kind(ErrorKind::CLIENT).msg("bad name").build());
//! list.add(Error::builder().kind(ErrorKind::SERVER).msg("db down").build());
//!
//! assert!(!list.is(ErrorKind::SERVER));
//! assert!(has(&list, ErrorKind::SERVER));
//! assert!(is(&list, ErrorKind::SERVER));
//! ```

/// Chain traversal and matching
pub mod classify;
/// Concurrent subtasks with error aggregation
pub mod group;
/// Error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Stack trace capture and formatting
pub mod stack;
/// Extension traits
pub mod traits;
/// Error, ErrorList and the classification facets
pub mod types;

/// Async extensions (requires `async-tokio` feature)
#[cfg(feature = "async-tokio")]
pub mod async_ext;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use classify::{
    client_msg, code, find, has, has_any_of, is, is_any_of, kind, multiple, ops, trace, unwrap,
    Target,
};
pub use group::Group;
pub use traits::*;
pub use types::{
    ConstructionFault, Error, ErrorBuilder, ErrorCode, ErrorKind, ErrorList, ErrorVec, Op,
    Sentinel, SharedError,
};
