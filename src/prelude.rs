//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`e!`]
//! - **Types**: [`Error`], [`ErrorList`], [`Group`], [`Op`], [`ErrorKind`], [`ErrorCode`], [`Sentinel`]
//! - **Traits**: [`ResultExt`], [`TransientError`]
//! - **Functions**: the [`classify`] module
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! const OP: Op = Op::new("config.load");
//!
//! fn load_config() -> Result<String> {
//!     std::fs::read_to_string("/nonexistent/config.toml")
//!         .classify(|b| b.op(OP).kind(ErrorKind::SERVER).code(ErrorCode::IO))
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(classify::is(&err, ErrorCode::IO));
//! ```

// Macros
pub use crate::e;

// Core types
pub use crate::group::Group;
pub use crate::types::{Error, ErrorCode, ErrorKind, ErrorList, Op, Sentinel};

// Traits
pub use crate::traits::{ResultExt, TransientError};

pub use crate::classify;

/// Result type alias for functions failing with an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
