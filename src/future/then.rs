use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::log::trace;
use crate::task::chain::{Chain, Observe, Step};
use crate::task::{Cause, Outcome, Task};

pin_project! {
    /// Runs a callback after a task succeeds.
    ///
    /// This `struct` is created by the [`then`] method on [`TaskExt`]. See its
    /// documentation for more.
    ///
    /// [`then`]: crate::future::TaskExt::then
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Then<Fut, F> {
        #[pin]
        observe: Observe<Fut, F>,
    }
}

impl<Fut, F> Then<Fut, F>
where
    Fut: Task,
{
    pub(super) fn new(source: Fut, callback: F) -> Self {
        Self {
            observe: Observe::new(source, callback),
        }
    }
}

impl<Fut, F, U, E> Future for Then<Fut, F>
where
    Fut: Task,
    F: FnOnce() -> Result<U, E>,
    E: Into<Cause>,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, callback| match settled.branch() {
                Ok(_) => callback().into(),
                Err(other) => {
                    trace!(
                        cancelled = other.is_cancelled(),
                        "antecedent did not succeed; skipping callback"
                    );
                    other
                }
            })
    }
}

pin_project! {
    /// Runs a task-returning callback after a task succeeds.
    ///
    /// This `struct` is created by the [`then_task`] method on [`TaskExt`].
    /// See its documentation for more.
    ///
    /// [`then_task`]: crate::future::TaskExt::then_task
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct ThenTask<Fut, F, R> {
        #[pin]
        chain: Chain<Fut, R, F>,
    }
}

impl<Fut, F, R> ThenTask<Fut, F, R>
where
    Fut: Task,
    R: Task,
{
    pub(super) fn new(source: Fut, callback: F) -> Self {
        Self {
            chain: Chain::new(source, callback),
        }
    }
}

impl<Fut, F, R> Future for ThenTask<Fut, F, R>
where
    Fut: Task,
    F: FnOnce() -> R,
    R: Task,
{
    type Output = Outcome<R::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().chain.poll_chain(cx, |settled, callback| {
            Step::or_forward(settled, |_| callback())
        })
    }
}
