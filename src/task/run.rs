use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use super::{Cause, Outcome};

/// Create a task that runs `f` when it is first polled.
///
/// An `Err` returned by `f` fails the task with that error as its cause.
///
/// # Examples
///
/// ```
/// use settle::task;
///
/// settle::runtime::block_on(async {
///     let parsed = task::run(|| "12".parse::<u8>()).await;
///     assert_eq!(parsed.unwrap(), 12);
///
///     let parsed = task::run(|| "twelve".parse::<u8>()).await;
///     assert!(parsed.is_failed());
/// });
/// ```
pub fn run<T, E, F>(f: F) -> Run<F>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    Run { f: Some(f) }
}

/// Runs a fallible closure as a task.
///
/// This `struct` is created by the [`run`] function. See its documentation for
/// more.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Run<F> {
    f: Option<F>,
}

impl<F> Unpin for Run<F> {}

impl<T, E, F> Future for Run<F>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.f.take() {
            Some(f) => Poll::Ready(f().into()),
            None => panic!("future polled after completing"),
        }
    }
}
