//! Async extensions for error-trail.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["async-tokio"] }
//! ```

mod group;

pub use group::AsyncGroup;
