//! Tagged error wrapper.
//!
//! [`Error`] attaches an operation label, a kind bit set, a code and a message
//! to an optional cause. The first node of a chain that does not wrap another
//! [`Error`] also carries a captured [`StackTrace`], so traces are taken once
//! per chain, at the point where the failure entered this crate's types.

use crate::classify::{self, Target};
use crate::stack::StackTrace;
use crate::types::{ErrorCode, ErrorKind, Op, SharedError};
use std::error::Error as StdError;
use std::sync::Arc;

pub mod builder;
mod traits;

use builder::ErrorBuilder;

/// Error wrapper carrying classification facets and an optional cause.
///
/// Values are immutable once built and cheap to clone: the cause is shared.
#[must_use]
#[derive(Clone)]
pub struct Error {
    pub(crate) op: Option<Op>,
    pub(crate) kind: ErrorKind,
    pub(crate) code: ErrorCode,
    pub(crate) msg: String,
    pub(crate) cause: Option<SharedError>,
    pub(crate) stack: Option<StackTrace>,
}

impl Error {
    /// Starts building an error.
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::new()
    }

    /// Creates an error holding only a message.
    #[inline(never)]
    pub fn new<M: Into<String>>(msg: M) -> Self {
        ErrorBuilder::new().msg(msg).build_within(Self::new::<M> as fn(M) -> Self as usize)
    }

    /// Wraps `cause` without adding any facet of its own.
    #[inline(never)]
    pub fn wrap<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorBuilder::new().cause(cause).build_within(Self::wrap::<E> as fn(E) -> Self as usize)
    }

    /// Operation label of this node only.
    #[inline]
    pub fn op(&self) -> Option<&Op> {
        self.op.as_ref()
    }

    /// Kind set on this node only; see [`classify::kind`] for the chain value.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Code set on this node only; see [`classify::code`] for the chain value.
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message fragment of this node only, without the cause.
    #[inline]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[inline]
    pub fn shared_cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Trace captured by this node, if it captured one.
    #[inline]
    pub fn stack(&self) -> Option<&StackTrace> {
        self.stack.as_ref()
    }

    /// Matches this error against a kind, a code or another error.
    ///
    /// Kinds and codes are decided by the outermost node that sets one;
    /// error targets are searched through the whole chain.
    pub fn is<'t>(&self, target: impl Into<Target<'t>>) -> bool {
        self.matches(target.into())
    }

    pub(crate) fn matches(&self, target: Target<'_>) -> bool {
        match target {
            Target::Error(wanted) => return classify::chain_contains(self, wanted),
            Target::Kind(kind) if !self.kind.is_empty() => return self.kind.intersects(kind),
            Target::Code(code) if !self.code.is_unexpected() => return self.code == code,
            _ => {},
        }
        self.source_dyn().is_some_and(|cause| classify::is_target(cause, target))
    }

    #[inline]
    pub(crate) fn source_dyn(&self) -> Option<&(dyn StdError + 'static)> {
        let cause: &(dyn StdError + 'static) = &**self.cause.as_ref()?;
        Some(cause)
    }

    /// Converts the error into a shared handle.
    #[inline]
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}
