use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::log::trace;
use crate::task::chain::{Chain, Observe, Step};
use crate::task::{Outcome, Task};

pin_project! {
    /// Recovers from cancellation with a replacement value.
    ///
    /// This `struct` is created by the [`when_canceled`] method on
    /// [`Except`]. See its documentation for more.
    ///
    /// [`when_canceled`]: crate::except::Except::when_canceled
    /// [`Except`]: crate::except::Except
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct WhenCanceled<Fut, F> {
        #[pin]
        observe: Observe<Fut, F>,
    }
}

impl<Fut, F> WhenCanceled<Fut, F> {
    pub(super) fn new(source: Fut, replacement: F) -> Self {
        Self {
            observe: Observe::new(source, replacement),
        }
    }
}

impl<Fut, F> Future for WhenCanceled<Fut, F>
where
    Fut: Task,
    F: FnOnce() -> Fut::Value,
{
    type Output = Outcome<Fut::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, replacement| match settled {
                Outcome::Cancelled => {
                    trace!("recovering from cancellation");
                    Outcome::Succeeded(replacement())
                }
                other => other,
            })
    }
}

pin_project! {
    /// Recovers from cancellation with a replacement task.
    ///
    /// This `struct` is created by the [`when_canceled_task`] method on
    /// [`Except`]. See its documentation for more.
    ///
    /// [`when_canceled_task`]: crate::except::Except::when_canceled_task
    /// [`Except`]: crate::except::Except
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct WhenCanceledTask<Fut, F, R> {
        #[pin]
        chain: Chain<Fut, R, F>,
    }
}

impl<Fut, F, R> WhenCanceledTask<Fut, F, R> {
    pub(super) fn new(source: Fut, replacement: F) -> Self {
        Self {
            chain: Chain::new(source, replacement),
        }
    }
}

impl<Fut, F, R> Future for WhenCanceledTask<Fut, F, R>
where
    Fut: Task,
    F: FnOnce() -> R,
    R: Task<Value = Fut::Value>,
{
    type Output = Outcome<Fut::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, replacement| match settled {
                Outcome::Cancelled => {
                    trace!("recovering from cancellation with a task");
                    Step::Continue(replacement())
                }
                other => Step::Settle(other),
            })
    }
}
