//! Cancellation guards for in-flight requests.
//!
//! Mirrors the screen-lifecycle contract: when a screen goes away, its
//! in-flight fetches are aborted, and aborted fetches surface as
//! [`ApiError::Aborted`] so call sites can ignore them silently.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use wealthdesk_core::errors::{ApiError, Error, Result};

/// Handle that cancels the paired request future.
///
/// Dropping the guard aborts the request, so an abandoned screen cannot leave
/// fetches running.
#[derive(Debug)]
pub struct AbortGuard {
    handle: AbortHandle,
    disarmed: bool,
}

impl AbortGuard {
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Let the request keep running after the guard is dropped.
    pub fn disarm(mut self) {
        self.disarmed = true;
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if !self.disarmed {
            self.handle.abort();
        }
    }
}

/// Wrap a request future so it can be cancelled from the outside.
///
/// The wrapped future resolves to [`ApiError::Aborted`] if the guard fires
/// first, even when the inner request never completes.
pub fn abortable<T, F>(future: F) -> (AbortGuard, impl Future<Output = Result<T>>)
where
    F: Future<Output = Result<T>>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let wrapped = Abortable::new(future, registration);
    let guard = AbortGuard {
        handle,
        disarmed: false,
    };
    let task = async move {
        match wrapped.await {
            Ok(result) => result,
            Err(futures::future::Aborted) => Err(Error::Api(ApiError::Aborted)),
        }
    };
    (guard, task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_normally_when_not_aborted() {
        let (guard, task) = abortable(async { Ok::<_, Error>(42) });
        let result = task.await.unwrap();
        assert_eq!(result, 42);
        drop(guard);
    }

    #[tokio::test]
    async fn test_abort_resolves_pending_request_as_aborted() {
        let (guard, task) = abortable(futures::future::pending::<Result<()>>());
        guard.abort();
        let err = task.await.unwrap_err();
        assert!(err.is_abort());
    }

    #[tokio::test]
    async fn test_dropping_guard_aborts_request() {
        let (guard, task) = abortable(futures::future::pending::<Result<()>>());
        drop(guard);
        let err = task.await.unwrap_err();
        assert!(err.is_abort());
    }

    #[tokio::test]
    async fn test_disarmed_guard_lets_request_finish() {
        let (guard, task) = abortable(async { Ok::<_, Error>("done") });
        guard.disarm();
        assert_eq!(task.await.unwrap(), "done");
    }
}
