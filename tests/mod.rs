pub mod classify;
pub mod group;
pub mod macros;
pub mod traits;

#[cfg(feature = "async-tokio")]
pub mod async_ext;
