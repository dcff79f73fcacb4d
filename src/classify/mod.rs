//! Chain traversal and matching.
//!
//! Every function here accepts any `std::error::Error`. [`Error`] and
//! [`ErrorList`] are recognised by downcasting; anything else is an opaque
//! leaf whose own `source()` chain is still followed when looking for an
//! error value. A [`SharedError`] handle is looked through, so passing
//! `&Arc<dyn Error>` behaves like passing the error it holds.
//!
//! # Examples
//!
//! ```
//! use error_trail::{classify, Error, ErrorCode, ErrorKind, Op};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
//! let inner = Error::builder().op(Op::new("db.read")).code(ErrorCode::IO).cause(io).build();
//! let outer = Error::builder().op(Op::new("svc.load")).kind(ErrorKind::SERVER).cause(inner).build();
//!
//! assert_eq!(classify::kind(&outer), ErrorKind::SERVER);
//! assert_eq!(classify::code(&outer), ErrorCode::IO);
//! assert_eq!(classify::ops(&outer).as_slice(), [Op::new("svc.load"), Op::new("db.read")]);
//! assert!(classify::find::<std::io::Error>(&outer).is_some());
//! assert!(classify::trace(&outer).is_some());
//! ```

use crate::stack::StackTrace;
use crate::types::{Error, ErrorCode, ErrorKind, ErrorList, ErrorVec, Op, Sentinel, SharedError};
use std::error::Error as StdError;
use std::ptr;
use std::sync::Arc;

/// What an error can be matched against.
///
/// Built implicitly through `From`: pass an [`ErrorKind`], an [`ErrorCode`]
/// or a reference to an error value.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Any overlap with the first non-empty kind in the chain.
    Kind(ErrorKind),
    /// Equality with the first set code in the chain.
    Code(ErrorCode),
    /// Identity (or [`Sentinel`] equality) with some error in the chain.
    Error(&'a (dyn StdError + 'static)),
}

impl From<ErrorKind> for Target<'_> {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Target::Kind(kind)
    }
}

impl From<ErrorCode> for Target<'_> {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Target::Code(code)
    }
}

impl<'a, E> From<&'a E> for Target<'a>
where
    E: StdError + 'static,
{
    #[inline]
    fn from(error: &'a E) -> Self {
        Target::Error(unshare(error))
    }
}

impl<'a> From<&'a (dyn StdError + 'static)> for Target<'a> {
    #[inline]
    fn from(error: &'a (dyn StdError + 'static)) -> Self {
        Target::Error(unshare(error))
    }
}

impl<'a> From<&'a (dyn StdError + Send + Sync + 'static)> for Target<'a> {
    #[inline]
    fn from(error: &'a (dyn StdError + Send + Sync + 'static)) -> Self {
        Target::Error(unshare(error))
    }
}

/// Kind of the chain: the first non-empty kind among [`Error`] nodes.
///
/// Foreign errors and lists have no kind.
pub fn kind(err: &(dyn StdError + 'static)) -> ErrorKind {
    match unshare(err).downcast_ref::<Error>() {
        Some(e) if !e.kind.is_empty() => e.kind,
        Some(e) => e.source_dyn().map_or(ErrorKind::empty(), kind),
        None => ErrorKind::empty(),
    }
}

/// Code of the chain: the first set code among [`Error`] nodes, else
/// [`ErrorCode::UNEXPECTED`].
pub fn code(err: &(dyn StdError + 'static)) -> ErrorCode {
    match unshare(err).downcast_ref::<Error>() {
        Some(e) if !e.code.is_unexpected() => e.code,
        Some(e) => e.source_dyn().map_or(ErrorCode::UNEXPECTED, code),
        None => ErrorCode::UNEXPECTED,
    }
}

/// Operation labels, outermost first.
///
/// Only consecutive [`Error`] nodes contribute; the walk stops at the first
/// cause of any other type.
pub fn ops(err: &(dyn StdError + 'static)) -> ErrorVec<Op> {
    let mut ops = ErrorVec::new();
    let mut node = unshare(err).downcast_ref::<Error>();
    while let Some(e) = node {
        if let Some(op) = &e.op {
            ops.push(op.clone());
        }
        node = e.source_dyn().and_then(|cause| unshare(cause).downcast_ref::<Error>());
    }
    ops
}

/// Trace held by the deepest [`Error`] node of the chain.
pub fn trace<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a StackTrace> {
    let mut e = unshare(err).downcast_ref::<Error>()?;
    while let Some(inner) = e.source_dyn().and_then(|cause| unshare(cause).downcast_ref::<Error>()) {
        e = inner;
    }
    e.stack.as_ref()
}

/// Message meant for clients: the fragment of the first node classified
/// [`ErrorKind::CLIENT`], or `""`.
pub fn client_msg<'a>(err: &'a (dyn StdError + 'static)) -> &'a str {
    let mut e = match unshare(err).downcast_ref::<Error>() {
        Some(e) => e,
        None => return "",
    };
    loop {
        if e.kind.intersects(ErrorKind::CLIENT) {
            return &e.msg;
        }
        match e.source_dyn().and_then(|cause| unshare(cause).downcast_ref::<Error>()) {
            Some(inner) => e = inner,
            None => return "",
        }
    }
}

/// The direct cause of `err`, if it has one.
///
/// For an [`ErrorList`] of two or more elements this is the list of the
/// remaining elements.
#[inline]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    unshare(err).source()
}

/// Matches `err` against a kind, a code or an error value.
///
/// - A kind matches if it overlaps the first non-empty kind in the chain.
/// - A code matches if it equals the first set code in the chain. A foreign
///   error matches [`ErrorCode::UNEXPECTED`] only.
/// - An error value matches if it is found anywhere in the chain, by identity
///   or, for [`Sentinel`]s, by value.
///
/// Lists match if any element does.
///
/// ```
/// use error_trail::{is, Error, ErrorKind, ErrorList, Sentinel};
///
/// static ERR_GONE: Sentinel = Sentinel::new("gone");
///
/// let mut list = ErrorList::new();
/// list.add(Error::builder().kind(ErrorKind::CLIENT).msg("bad input").build());
/// list.add(Error::builder().kind(ErrorKind::SERVER).cause(ERR_GONE).build());
///
/// assert!(is(&list, ErrorKind::SERVER));
/// assert!(is(&list, &ERR_GONE));
/// assert!(!is(&list, ErrorKind::TRANSIENT));
/// ```
pub fn is<'t>(err: &(dyn StdError + 'static), target: impl Into<Target<'t>>) -> bool {
    is_target(err, target.into())
}

/// True if `err` matches at least one of `targets`.
pub fn is_any_of<'t, I>(err: &(dyn StdError + 'static), targets: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Target<'t>>,
{
    targets.into_iter().any(|target| is_target(err, target.into()))
}

/// First error of type `T` in the chain of `err`, searching every element of
/// lists met on the way.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut node = Some(unshare(err));
    while let Some(current) = node {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(list) = current.downcast_ref::<ErrorList>() {
            return list.iter().find_map(|element| find::<T>(&**element));
        }
        node = current.source().map(unshare);
    }
    None
}

/// The elements of `err` if it is a list, otherwise `err` alone.
pub fn multiple<'a>(err: &'a (dyn StdError + 'static)) -> ErrorVec<&'a (dyn StdError + 'static)> {
    let err = unshare(err);
    match err.downcast_ref::<ErrorList>() {
        Some(list) => list.iter().map(|element| unshare(&**element)).collect(),
        None => std::iter::once(err).collect(),
    }
}

/// True if any element of the list `err` matches `target`; for anything
/// other than a list this is [`is`].
pub fn has<'t>(err: &(dyn StdError + 'static), target: impl Into<Target<'t>>) -> bool {
    let target = target.into();
    let err = unshare(err);
    match err.downcast_ref::<ErrorList>() {
        Some(list) => list.iter().any(|element| is_target(&**element, target)),
        None => is_target(err, target),
    }
}

/// True if any element of `err` matches any of `targets`. An empty list
/// has nothing.
pub fn has_any_of<'t, I>(err: &(dyn StdError + 'static), targets: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Target<'t>>,
{
    let err = unshare(err);
    if err.downcast_ref::<ErrorList>().is_some_and(ErrorList::is_empty) {
        return false;
    }
    targets.into_iter().any(|target| has(err, target))
}

/// Identity of two errors, or equality when both are [`Sentinel`]s.
pub fn same_error(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    let (a, b) = (unshare(a), unshare(b));
    if ptr::addr_eq(a as *const dyn StdError, b as *const dyn StdError) {
        return true;
    }
    match (a.downcast_ref::<Sentinel>(), b.downcast_ref::<Sentinel>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

pub(crate) fn is_target(err: &(dyn StdError + 'static), target: Target<'_>) -> bool {
    let err = unshare(err);
    if let Some(e) = err.downcast_ref::<Error>() {
        return e.matches(target);
    }
    if let Some(list) = err.downcast_ref::<ErrorList>() {
        return list.iter().any(|element| is_target(&**element, target));
    }
    match target {
        Target::Kind(_) => false,
        Target::Code(code) => code.is_unexpected(),
        Target::Error(wanted) => chain_contains(err, wanted),
    }
}

/// Walks `source()` from `err`, descending into every list element.
pub(crate) fn chain_contains(
    err: &(dyn StdError + 'static),
    wanted: &(dyn StdError + 'static),
) -> bool {
    let mut node = Some(unshare(err));
    while let Some(current) = node {
        if same_error(current, wanted) {
            return true;
        }
        if let Some(list) = current.downcast_ref::<ErrorList>() {
            return list.iter().any(|element| chain_contains(&**element, wanted));
        }
        node = current.source().map(unshare);
    }
    false
}

/// Looks through [`SharedError`], `Arc<Error>` and `Arc<ErrorList>` handles
/// to the error they hold.
pub(crate) fn unshare<'a>(mut err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    loop {
        if let Some(shared) = err.downcast_ref::<SharedError>() {
            err = &**shared;
        } else if let Some(node) = err.downcast_ref::<Arc<Error>>() {
            return &**node;
        } else if let Some(list) = err.downcast_ref::<Arc<ErrorList>>() {
            return &**list;
        } else {
            return err;
        }
    }
}
