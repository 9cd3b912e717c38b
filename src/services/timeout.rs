use crate::models::error::AppError;
use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::pin;

/// Resolves `operation`, or fails with [`AppError::Timeout`] once `timeout_ms` has elapsed.
pub async fn with_timeout<F, T>(operation: F, timeout_ms: u32) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    with_deadline(operation, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// Races `operation` against an arbitrary `deadline` future.
///
/// Whichever completes first wins; the loser is dropped, which cancels it.
pub async fn with_deadline<F, D, T>(
    operation: F,
    deadline: D,
    timeout_ms: u32,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
    D: Future<Output = ()>,
{
    let operation = pin!(operation);
    let deadline = pin!(deadline);

    match select(operation, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AppError::Timeout(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_operation_finishing_first_wins() {
        let finished = ready(Ok::<_, AppError>(42));
        let result = block_on(with_deadline(finished, pending(), 100));
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_operation_error_passes_through() {
        let failing = ready(Err::<u8, _>(AppError::ApiError("boom".to_string())));
        let result = block_on(with_deadline(failing, pending(), 100));
        assert_eq!(result, Err(AppError::ApiError("boom".to_string())));
    }

    #[test]
    fn test_deadline_finishing_first_times_out() {
        let never = pending::<Result<u8, AppError>>();
        let result = block_on(with_deadline(never, ready(()), 250));
        assert_eq!(result, Err(AppError::Timeout(250)));
    }
}
