//! Running subtasks concurrently and collecting their errors.
//!
//! A [`Group`] starts each subtask on its own thread. Unlike a fail-fast
//! join, every task runs to completion: errors are appended to a shared
//! [`ErrorList`] in completion order and [`Group::wait`] returns them all.
//!
//! # Examples
//!
//! ```
//! use error_trail::{has, Error, ErrorCode, Group};
//!
//! let group = Group::new();
//! for i in 0..4 {
//!     group.go(move || {
//!         if i % 2 == 0 {
//!             return Err(Error::builder().code(ErrorCode::INVALID).msg(format!("task {}", i)).build());
//!         }
//!         Ok(())
//!     });
//! }
//!
//! let errors = group.wait().expect("two tasks failed");
//! assert_eq!(errors.len(), 2);
//! assert!(has(&errors, ErrorCode::INVALID));
//! ```

use crate::types::{Error, ErrorKind, ErrorList};
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;

#[derive(Default)]
struct GroupState {
    errors: Mutex<ErrorList>,
    pending: Mutex<usize>,
    done: Condvar,
}

impl GroupState {
    fn record<E>(&self, error: E)
    where
        E: StdError + Send + Sync + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %error, "group task failed");
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).add(error);
    }

    fn finish_one(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.done.notify_all();
        }
    }
}

/// Coordinator for a set of subtasks working on one overall task.
#[derive(Default)]
pub struct Group {
    state: Arc<GroupState>,
}

impl Group {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on a new thread.
    ///
    /// An `Err` returned by `f` is added to the group's list. A panic inside
    /// `f` is caught and recorded as a [`ErrorKind::SERVER`] error.
    pub fn go<F, E>(&self, f: F)
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        *self.state.pending.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        let state = Arc::clone(&self.state);
        thread::spawn(move || {
            match panic::catch_unwind(AssertUnwindSafe(f)) {
                Ok(Ok(())) => {},
                Ok(Err(error)) => state.record(error),
                Err(payload) => state.record(panicked(payload.as_ref())),
            }
            state.finish_one();
        });
    }

    /// Blocks until every task started with [`go`](Self::go) has finished.
    ///
    /// Returns `None` if no task failed, otherwise the errors in the order
    /// the tasks completed.
    pub fn wait(self) -> Option<ErrorList> {
        let pending = self.state.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let pending = self
            .state
            .done
            .wait_while(pending, |pending| *pending > 0)
            .unwrap_or_else(PoisonError::into_inner);
        drop(pending);

        let mut list = self.state.errors.lock().unwrap_or_else(PoisonError::into_inner);
        let errors = std::mem::take(&mut *list).err_or_nil();
        #[cfg(feature = "tracing")]
        if let Some(errors) = &errors {
            tracing::debug!(count = errors.len(), "group finished with errors");
        }
        errors
    }
}

impl std::fmt::Debug for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = *self.state.pending.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Group").field("pending", &pending).finish()
    }
}

pub(crate) fn panicked(payload: &(dyn Any + Send)) -> Error {
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    Error::builder().kind(ErrorKind::SERVER).msg(format!("task panicked: {}", reason)).build()
}
