use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::task::chain::Observe;
use crate::task::{Outcome, Task};

pin_project! {
    /// Projects the value of a task.
    ///
    /// This `struct` is created by the [`select`] method on [`TaskExt`]. See
    /// its documentation for more.
    ///
    /// [`select`]: crate::future::TaskExt::select
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Select<Fut, F> {
        #[pin]
        observe: Observe<Fut, F>,
    }
}

impl<Fut, F> Select<Fut, F>
where
    Fut: Task,
{
    pub(super) fn new(source: Fut, projection: F) -> Self {
        Self {
            observe: Observe::new(source, projection),
        }
    }
}

impl<Fut, F, U> Future for Select<Fut, F>
where
    Fut: Task,
    F: FnOnce(Fut::Value) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, projection| settled.map(projection))
    }
}
