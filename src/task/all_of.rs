use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_concurrency::future::Join;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::chain::Settling;
use super::{Outcome, Task};
use crate::log::trace;

/// Wait for every task to settle, polling them concurrently.
///
/// The result succeeds with the values in the order the tasks were given,
/// regardless of the order in which they settled. Otherwise it is cancelled
/// if any task was cancelled, and failed with the first failing task's cause
/// (by position) if any failed. The result only settles once every task has
/// settled.
///
/// # Examples
///
/// ```
/// use settle::task;
///
/// settle::runtime::block_on(async {
///     let all = task::all_of(vec![task::from_value(1), task::from_value(2)]);
///     assert_eq!(all.await.unwrap(), vec![1, 2]);
/// });
/// ```
pub fn all_of<I>(tasks: I) -> AllOf<I::Item>
where
    I: IntoIterator,
    I::Item: Task,
{
    let tasks: Vec<_> = tasks.into_iter().map(Settling::new).collect();
    AllOf { join: tasks.join() }
}

pin_project! {
    /// Waits for a set of tasks concurrently.
    ///
    /// This `struct` is created by the [`all_of`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct AllOf<A>
    where
        A: Task,
    {
        #[pin]
        join: <Vec<Settling<A>> as Join>::Future,
    }
}

impl<A> Future for AllOf<A>
where
    A: Task,
{
    type Output = Outcome<Vec<A::Value>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcomes = ready!(self.project().join.poll(cx));
        Poll::Ready(gather(outcomes))
    }
}

/// Reduce a set of settled outcomes into one.
///
/// Cancellation takes precedence over failure, and the first failure by
/// position is the one reported. The cause is moved, not wrapped.
pub(crate) fn gather<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Outcome<Vec<T>> {
    let mut values = Vec::new();
    let mut first_failure = None;
    for (position, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Outcome::Succeeded(value) => values.push(value),
            Outcome::Failed(cause) => {
                if first_failure.is_none() {
                    first_failure = Some((position, cause));
                }
            }
            Outcome::Cancelled => {
                trace!(position, "aggregate cancelled");
                return Outcome::Cancelled;
            }
        }
    }
    match first_failure {
        Some((position, cause)) => {
            trace!(position, %cause, "aggregate failed");
            Outcome::Failed(cause)
        }
        None => Outcome::Succeeded(values),
    }
}
