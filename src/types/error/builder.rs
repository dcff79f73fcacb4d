//! Construction of [`Error`] values.
//!
//! Each facet has one setter. Setting a facet twice (two ops, two codes, two
//! messages or two causes) is a programmer error: [`ErrorBuilder::build`]
//! panics with the recorded [`ConstructionFault`], while
//! [`ErrorBuilder::try_build`] returns it. Kinds may be set repeatedly and
//! are OR-ed together.
//!
//! Supplying an absent cause through [`ErrorBuilder::maybe_cause`] (or
//! [`ErrorBuilder::nil`]) switches the builder to the [`Nullable`] state, whose
//! terminals return `Option<Error>`: `None` once an absent cause was given.

use super::Error;
use crate::stack::capture_from;
use crate::types::{into_shared, ErrorCode, ErrorKind, Op, SharedError};
use smallvec::SmallVec;
use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

/// Builder state whose terminals always produce an [`Error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Definite;

/// Builder state that may have been given an absent cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable;

/// Misuse of [`ErrorBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionFault {
    MultipleOps,
    MultipleCodes,
    MultipleMessages,
    MultipleCauses,
}

impl fmt::Display for ConstructionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::MultipleOps => "multiple ops",
            Self::MultipleCodes => "multiple codes",
            Self::MultipleMessages => "multiple messages",
            Self::MultipleCauses => "multiple causes",
        };
        write!(f, "bad error construction: {}", what)
    }
}

impl StdError for ConstructionFault {}

/// Builder for [`Error`].
///
/// # Examples
///
/// ```
/// use error_trail::{Error, ErrorCode, ErrorKind, Op};
///
/// let inner = Error::builder().code(ErrorCode::IO).msg("connection failure").build();
/// let outer = Error::builder().op(Op::new("svc.load")).kind(ErrorKind::SERVER).cause(inner).build();
///
/// assert_eq!(outer.to_string(), "connection failure");
/// assert!(outer.stack().is_none());
///
/// let maybe: Option<std::io::Error> = None;
/// assert!(Error::builder().msg("ignored").maybe_cause(maybe).build().is_none());
/// ```
#[must_use]
pub struct ErrorBuilder<N = Definite> {
    op: Option<Op>,
    kind: ErrorKind,
    code: ErrorCode,
    msg: String,
    cause: Option<SharedError>,
    fault: Option<ConstructionFault>,
    nil: bool,
    state: PhantomData<N>,
}

impl ErrorBuilder<Definite> {
    #[inline]
    pub fn new() -> Self {
        Self {
            op: None,
            kind: ErrorKind::empty(),
            code: ErrorCode::UNEXPECTED,
            msg: String::new(),
            cause: None,
            fault: None,
            nil: false,
            state: PhantomData,
        }
    }

    /// Builds the error.
    ///
    /// # Panics
    ///
    /// Panics if a facet was supplied twice.
    #[inline(never)]
    pub fn build(self) -> Error {
        self.build_within(Self::build as fn(Self) -> Error as usize)
    }

    /// Builds the error, returning misuse as a [`ConstructionFault`].
    #[inline(never)]
    pub fn try_build(self) -> Result<Error, ConstructionFault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        let caller = Self::try_build as fn(Self) -> Result<Error, ConstructionFault>;
        Ok(self.assemble(&[caller as usize]))
    }

    /// Builds on behalf of a crate entry point. `caller` is the start address
    /// of that entry point, whose frame is left out of the trace.
    #[inline(never)]
    pub(crate) fn build_within(self, caller: usize) -> Error {
        if let Some(fault) = self.fault {
            panic!("{}", fault);
        }
        self.assemble(&[caller, Self::build_within as fn(Self, usize) -> Error as usize])
    }
}

impl Default for ErrorBuilder<Definite> {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorBuilder<Nullable> {
    /// Builds the error, or `None` if an absent cause was supplied.
    ///
    /// # Panics
    ///
    /// Panics if a facet was supplied twice before the absent cause.
    #[inline(never)]
    pub fn build(self) -> Option<Error> {
        if let Some(fault) = self.fault {
            panic!("{}", fault);
        }
        if self.nil {
            return None;
        }
        Some(self.assemble(&[Self::build as fn(Self) -> Option<Error> as usize]))
    }

    /// Like [`build`](Self::build), returning misuse as a [`ConstructionFault`].
    #[inline(never)]
    pub fn try_build(self) -> Result<Option<Error>, ConstructionFault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        if self.nil {
            return Ok(None);
        }
        let caller = Self::try_build as fn(Self) -> Result<Option<Error>, ConstructionFault>;
        Ok(Some(self.assemble(&[caller as usize])))
    }
}

impl<N> ErrorBuilder<N> {
    /// Sets the operation label.
    ///
    /// An empty label leaves the slot unset, but any label supplied after a
    /// non-empty one is a fault.
    pub fn op(mut self, op: impl Into<Op>) -> Self {
        if self.nil {
            return self;
        }
        if self.op.is_some() {
            return self.fail(ConstructionFault::MultipleOps);
        }
        let op = op.into();
        if !op.is_empty() {
            self.op = Some(op);
        }
        self
    }

    /// Adds kind flags; repeated calls accumulate.
    pub fn kind(mut self, kind: ErrorKind) -> Self {
        if !self.nil {
            self.kind |= kind;
        }
        self
    }

    /// Sets the code. [`ErrorCode::UNEXPECTED`] leaves the code unset.
    pub fn code(mut self, code: ErrorCode) -> Self {
        if self.nil {
            return self;
        }
        if !self.code.is_unexpected() {
            return self.fail(ConstructionFault::MultipleCodes);
        }
        self.code = code;
        self
    }

    /// Sets the message fragment. An empty message leaves the slot unset.
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        if self.nil {
            return self;
        }
        if !self.msg.is_empty() {
            return self.fail(ConstructionFault::MultipleMessages);
        }
        self.msg = msg.into();
        self
    }

    /// Sets the cause. A [`SharedError`] is stored as is, without rewrapping.
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if self.nil {
            return self;
        }
        if self.cause.is_some() {
            return self.fail(ConstructionFault::MultipleCauses);
        }
        self.cause = Some(into_shared(cause));
        self
    }

    /// Sets the cause if present; an absent cause makes the result "no error".
    pub fn maybe_cause<E>(self, cause: Option<E>) -> ErrorBuilder<Nullable>
    where
        E: StdError + Send + Sync + 'static,
    {
        match cause {
            Some(cause) => self.cause(cause).into_state(),
            None => self.nil(),
        }
    }

    /// Marks the result as "no error"; later setters are ignored.
    pub fn nil(self) -> ErrorBuilder<Nullable> {
        let mut builder = self.into_state();
        builder.nil = true;
        builder
    }

    fn fail(mut self, fault: ConstructionFault) -> Self {
        self.fault.get_or_insert(fault);
        self
    }

    fn into_state<M>(self) -> ErrorBuilder<M> {
        ErrorBuilder {
            op: self.op,
            kind: self.kind,
            code: self.code,
            msg: self.msg,
            cause: self.cause,
            fault: self.fault,
            nil: self.nil,
            state: PhantomData,
        }
    }

    /// Creates the node, capturing a trace unless the cause is an [`Error`].
    ///
    /// `callers` holds the start addresses of the crate functions between
    /// user code and this one; their frames are left out of the trace.
    #[inline(never)]
    fn assemble(self, callers: &[usize]) -> Error {
        let wraps_error = self.cause.as_ref().is_some_and(|cause| cause.is::<Error>());
        let stack = if wraps_error {
            None
        } else {
            let mut plumbing: SmallVec<[usize; 4]> = SmallVec::from_slice(callers);
            plumbing.push(Self::assemble as fn(Self, &[usize]) -> Error as usize);
            Some(capture_from(&plumbing))
        };
        Error {
            op: self.op,
            kind: self.kind,
            code: self.code,
            msg: self.msg,
            cause: self.cause,
            stack,
        }
    }
}

impl<N> fmt::Debug for ErrorBuilder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuilder")
            .field("op", &self.op)
            .field("kind", &self.kind)
            .field("code", &self.code)
            .field("msg", &self.msg)
            .field("cause", &self.cause)
            .field("fault", &self.fault)
            .field("nil", &self.nil)
            .finish()
    }
}
