use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::ErrorKind;
use crate::log::trace;
use crate::task::chain::{Chain, Observe, Step};
use crate::task::{Outcome, Task};

pin_project! {
    /// Recovers from a matching failure with a replacement value.
    ///
    /// This `struct` is created by the [`on`] method on [`Except`]. See its
    /// documentation for more.
    ///
    /// [`on`]: crate::except::Except::on
    /// [`Except`]: crate::except::Except
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct On<Fut, K, F> {
        #[pin]
        observe: Observe<Fut, F>,
        kind: PhantomData<fn() -> K>,
    }
}

impl<Fut, K, F> On<Fut, K, F> {
    pub(super) fn new(source: Fut, replacement: F) -> Self {
        Self {
            observe: Observe::new(source, replacement),
            kind: PhantomData,
        }
    }
}

impl<Fut, K, F> Future for On<Fut, K, F>
where
    Fut: Task,
    K: ErrorKind,
    F: FnOnce() -> Fut::Value,
{
    type Output = Outcome<Fut::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, replacement| match settled {
                Outcome::Failed(cause) if K::matches(&cause) => {
                    trace!(%cause, "recovering from matched failure");
                    Outcome::Succeeded(replacement())
                }
                other => other,
            })
    }
}

pin_project! {
    /// Recovers from a matching failure with a replacement task.
    ///
    /// This `struct` is created by the [`on_task`] method on [`Except`]. See
    /// its documentation for more.
    ///
    /// [`on_task`]: crate::except::Except::on_task
    /// [`Except`]: crate::except::Except
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct OnTask<Fut, K, F, R> {
        #[pin]
        chain: Chain<Fut, R, F>,
        kind: PhantomData<fn() -> K>,
    }
}

impl<Fut, K, F, R> OnTask<Fut, K, F, R> {
    pub(super) fn new(source: Fut, replacement: F) -> Self {
        Self {
            chain: Chain::new(source, replacement),
            kind: PhantomData,
        }
    }
}

impl<Fut, K, F, R> Future for OnTask<Fut, K, F, R>
where
    Fut: Task,
    K: ErrorKind,
    F: FnOnce() -> R,
    R: Task<Value = Fut::Value>,
{
    type Output = Outcome<Fut::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, replacement| match settled {
                Outcome::Failed(cause) if K::matches(&cause) => {
                    trace!(%cause, "recovering from matched failure with a task");
                    Step::Continue(replacement())
                }
                other => Step::Settle(other),
            })
    }
}
