use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_concurrency::future::Join;
use futures_core::ready;
use pin_project_lite::pin_project;

use crate::task::all_of::gather;
use crate::task::chain::Settling;
use crate::task::{Outcome, Task};

pin_project! {
    /// Waits for two tasks concurrently and collects both values.
    ///
    /// This `struct` is created by the [`and`] method on [`TaskExt`]. See its
    /// documentation for more.
    ///
    /// [`and`]: crate::future::TaskExt::and
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct And<A, B>
    where
        A: Task,
        B: Task,
    {
        #[pin]
        join: <(Settling<A>, Settling<B>) as Join>::Future,
    }
}

impl<A, B> And<A, B>
where
    A: Task,
    B: Task<Value = A::Value>,
{
    pub(crate) fn new(a: A, b: B) -> Self {
        Self {
            join: (Settling::new(a), Settling::new(b)).join(),
        }
    }
}

impl<A, B> Future for And<A, B>
where
    A: Task,
    B: Task<Value = A::Value>,
{
    type Output = Outcome<Vec<A::Value>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let (a, b) = ready!(self.project().join.poll(cx));
        Poll::Ready(gather([a, b]))
    }
}
