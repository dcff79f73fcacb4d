use std::error::Error as StdError;
use std::future::Future;

use tokio::task::{JoinError, JoinSet};

use crate::types::{into_shared, Error, ErrorKind, ErrorList, SharedError};

/// Tokio counterpart of [`Group`](crate::Group).
///
/// Subtasks are spawned onto the current runtime and all run to completion.
/// [`wait`](Self::wait) collects their errors in completion order; a task that
/// panics or is cancelled contributes an [`ErrorKind::SERVER`] error whose
/// cause is the [`JoinError`].
///
/// # Examples
///
/// ```
/// use error_trail::async_ext::AsyncGroup;
/// use error_trail::{Error, ErrorKind};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut group = AsyncGroup::new();
/// group.spawn(async { Ok::<_, Error>(()) });
/// group.spawn(async { Err(Error::builder().kind(ErrorKind::TRANSIENT).msg("timeout").build()) });
///
/// let errors = group.wait().await.expect("one task failed");
/// assert_eq!(errors.to_string(), "timeout");
/// # });
/// ```
#[derive(Default)]
pub struct AsyncGroup {
    tasks: JoinSet<Option<SharedError>>,
}

impl AsyncGroup {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` onto the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<F, E>(&mut self, task: F)
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        self.tasks.spawn(async move { task.await.err().map(into_shared) });
    }

    /// Number of tasks not yet collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Waits for every spawned task; `None` if none of them failed.
    pub async fn wait(mut self) -> Option<ErrorList> {
        let mut errors = ErrorList::new();
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(None) => {},
                Ok(Some(error)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %error, "group task failed");
                    errors.add_shared(error);
                },
                Err(join_error) => errors.add(join_failure(join_error)),
            }
        }
        #[cfg(feature = "tracing")]
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "group finished with errors");
        }
        errors.err_or_nil()
    }
}

impl std::fmt::Debug for AsyncGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncGroup").field("pending", &self.tasks.len()).finish()
    }
}

fn join_failure(join_error: JoinError) -> Error {
    let msg = if join_error.is_panic() { "task panicked" } else { "task cancelled" };
    Error::builder().kind(ErrorKind::SERVER).msg(msg).cause(join_error).build()
}
