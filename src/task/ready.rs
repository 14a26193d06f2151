use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use super::{Cause, Outcome};

/// A task that is already settled.
///
/// This `struct` is created by [`from_value`], [`from_result`],
/// [`from_outcome`], [`failed`] and [`cancelled`]. See their documentation for
/// more.
#[derive(Debug, Clone)]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Ready<T> {
    outcome: Option<Outcome<T>>,
}

impl<T> Unpin for Ready<T> {}

impl<T> Future for Ready<T> {
    type Output = Outcome<T>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.outcome.take() {
            Some(outcome) => Poll::Ready(outcome),
            None => panic!("future polled after completing"),
        }
    }
}

/// Create a task that has already succeeded with `value`.
///
/// # Examples
///
/// ```
/// use settle::task;
///
/// settle::runtime::block_on(async {
///     assert_eq!(task::from_value(7).await.unwrap(), 7);
/// });
/// ```
pub fn from_value<T>(value: T) -> Ready<T> {
    from_outcome(Outcome::Succeeded(value))
}

/// Create a task that settles with the given outcome.
pub fn from_outcome<T>(outcome: Outcome<T>) -> Ready<T> {
    Ready {
        outcome: Some(outcome),
    }
}

/// Create a task that has already succeeded or failed, depending on `result`.
pub fn from_result<T, E>(result: Result<T, E>) -> Ready<T>
where
    E: Into<Cause>,
{
    from_outcome(result.into())
}

/// Create a task that has already failed with `cause`.
pub fn failed<T>(cause: impl Into<Cause>) -> Ready<T> {
    from_outcome(Outcome::from_cause(cause.into()))
}

/// Create a task that has already been cancelled.
pub fn cancelled<T>() -> Ready<T> {
    from_outcome(Outcome::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::block_on;
    use std::fmt;

    #[test]
    fn settled_constructors() {
        assert_eq!(block_on(from_value("meow")).unwrap(), "meow");
        assert!(block_on(cancelled::<()>()).is_cancelled());
        assert!(block_on(failed::<()>(fmt::Error)).cause().unwrap().is::<fmt::Error>());
        assert!(block_on(from_result::<(), _>(Err(fmt::Error))).is_failed());
    }

    #[test]
    #[should_panic(expected = "future polled after completing")]
    fn polled_twice() {
        let mut task = from_value(1);
        let mut cx = Context::from_waker(core::task::Waker::noop());
        let _ = Pin::new(&mut task).poll(&mut cx);
        let _ = Pin::new(&mut task).poll(&mut cx);
    }
}
