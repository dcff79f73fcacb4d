//! Ordered collection of independent errors.
//!
//! An [`ErrorList`] is itself an error, so it can be returned, wrapped as a
//! cause and classified like any other. Its own [`ErrorList::is`] and
//! [`ErrorList::find`] look at the first element only; use
//! [`has`](crate::has) or [`has_any_of`](crate::has_any_of) to test every
//! element.
//!
//! # Examples
//!
//! ```
//! use error_trail::{has, Error, ErrorCode, ErrorList};
//!
//! let mut list = ErrorList::new();
//! assert!(list.clone().err_or_nil().is_none());
//!
//! list.add(Error::builder().code(ErrorCode::INVALID).msg("bad name").build());
//! list.add(Error::builder().code(ErrorCode::NOT_FOUND).msg("no user").build());
//!
//! assert_eq!(list.to_string(), "bad name");
//! assert!(!list.is(ErrorCode::NOT_FOUND));
//! assert!(has(&list, ErrorCode::NOT_FOUND));
//! ```

use crate::classify::{self, Target};
use crate::types::{into_shared, ErrorVec, SharedError};
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Appendable sequence of errors.
///
/// An empty list and "no error" are different values; [`err_or_nil`]
/// collapses the former into the latter.
///
/// [`err_or_nil`]: ErrorList::err_or_nil
#[derive(Default)]
pub struct ErrorList {
    errors: ErrorVec<SharedError>,
    rest: OnceLock<Box<ErrorList>>,
}

impl ErrorList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn add<E>(&mut self, error: E)
    where
        E: StdError + Send + Sync + 'static,
    {
        self.add_shared(into_shared(error));
    }

    /// Appends an already shared error.
    pub fn add_shared(&mut self, error: SharedError) {
        self.rest.take();
        self.errors.push(error);
    }

    /// Appends `error` if present.
    pub fn add_opt<E>(&mut self, error: Option<E>)
    where
        E: StdError + Send + Sync + 'static,
    {
        if let Some(error) = error {
            self.add(error);
        }
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.rest.take();
        self.errors.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&SharedError> {
        self.errors.first()
    }

    #[inline]
    pub fn as_slice(&self) -> &[SharedError] {
        &self.errors
    }

    /// `None` when empty, otherwise the list itself.
    #[inline]
    pub fn err_or_nil(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Matches the first element against `target`. An empty list matches
    /// nothing.
    pub fn is<'t>(&self, target: impl Into<Target<'t>>) -> bool {
        self.matches(target.into())
    }

    pub(crate) fn matches(&self, target: Target<'_>) -> bool {
        self.first_dyn().is_some_and(|first| classify::is_target(first, target))
    }

    /// Finds an error of type `T` in the chain of the first element.
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        classify::find(self.first_dyn()?)
    }

    /// The remaining elements after the first, as a list.
    ///
    /// Empty and single-element lists have nothing to unwrap to.
    pub fn unwrap(&self) -> Option<&ErrorList> {
        if self.errors.len() < 2 {
            return None;
        }
        let rest = self.rest.get_or_init(|| {
            Box::new(ErrorList {
                errors: self.errors[1..].iter().cloned().collect(),
                rest: OnceLock::new(),
            })
        });
        Some(rest)
    }

    pub(crate) fn first_dyn(&self) -> Option<&(dyn StdError + 'static)> {
        let first: &(dyn StdError + 'static) = &**self.errors.first()?;
        Some(first)
    }
}

impl Clone for ErrorList {
    fn clone(&self) -> Self {
        Self { errors: self.errors.clone(), rest: OnceLock::new() }
    }
}

/// Renders the first element, or nothing for an empty list.
impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) => fmt::Display::fmt(first, f),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorList").field(&self.errors).finish()
    }
}

impl StdError for ErrorList {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let rest: &(dyn StdError + 'static) = self.unwrap()?;
        Some(rest)
    }
}

impl From<Vec<SharedError>> for ErrorList {
    fn from(errors: Vec<SharedError>) -> Self {
        Self { errors: ErrorVec::from_vec(errors), rest: OnceLock::new() }
    }
}

impl FromIterator<SharedError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect(), rest: OnceLock::new() }
    }
}

impl Extend<SharedError> for ErrorList {
    fn extend<I: IntoIterator<Item = SharedError>>(&mut self, iter: I) {
        self.rest.take();
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = SharedError;
    type IntoIter = smallvec::IntoIter<[SharedError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a SharedError;
    type IntoIter = std::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Serializes as the array of rendered element messages.
#[cfg(feature = "serde")]
impl Serialize for ErrorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.errors.iter().map(|error| error.to_string()))
    }
}

impl PartialEq for ErrorList {
    /// Lists are equal when they hold the same error values in order.
    fn eq(&self, other: &Self) -> bool {
        self.errors.len() == other.errors.len()
            && self.errors.iter().zip(&other.errors).all(|(a, b)| Arc::ptr_eq(a, b))
    }
}
