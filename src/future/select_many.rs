use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::task::chain::{Chain, Observe, Step};
use crate::task::{Outcome, Task};

pin_project! {
    /// Projects the value of a task into another task.
    ///
    /// This `struct` is created by the [`select_many`] method on [`TaskExt`].
    /// See its documentation for more.
    ///
    /// [`select_many`]: crate::future::TaskExt::select_many
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct SelectMany<Fut, F, R> {
        #[pin]
        chain: Chain<Fut, R, F>,
    }
}

impl<Fut, F, R> SelectMany<Fut, F, R>
where
    Fut: Task,
    R: Task,
{
    pub(super) fn new(source: Fut, projection: F) -> Self {
        Self {
            chain: Chain::new(source, projection),
        }
    }
}

impl<Fut, F, R> Future for SelectMany<Fut, F, R>
where
    Fut: Task,
    F: FnOnce(Fut::Value) -> R,
    R: Task,
{
    type Output = Outcome<R::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, projection| Step::or_forward(settled, projection))
    }
}

pin_project! {
    /// Sequences a task, a dependent task, and a final projection.
    ///
    /// This `struct` is created by the [`select_many_with`] method on
    /// [`TaskExt`]. See its documentation for more.
    ///
    /// [`select_many_with`]: crate::future::TaskExt::select_many_with
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct SelectManyWith<Fut, I, M, C>
    where
        Fut: Task,
    {
        #[pin]
        chain: Chain<Fut, Combine<M, Fut::Value, C>, (I, C)>,
    }
}

impl<Fut, I, M, C> SelectManyWith<Fut, I, M, C>
where
    Fut: Task,
{
    pub(super) fn new(source: Fut, intermediate: I, combine: C) -> Self {
        Self {
            chain: Chain::new(source, (intermediate, combine)),
        }
    }
}

impl<Fut, I, M, C, U> Future for SelectManyWith<Fut, I, M, C>
where
    Fut: Task,
    I: FnOnce(&Fut::Value) -> M,
    M: Task,
    C: FnOnce(Fut::Value, M::Value) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, (intermediate, combine)| {
                Step::or_forward(settled, |source| {
                    let inner = intermediate(&source);
                    Combine::new(inner, source, combine)
                })
            })
    }
}

pin_project! {
    /// The second half of [`SelectManyWith`]: waits for the dependent task,
    /// then combines both values.
    pub(crate) struct Combine<M, T, C> {
        #[pin]
        observe: Observe<M, (T, C)>,
    }
}

impl<M, T, C> Combine<M, T, C> {
    fn new(inner: M, source: T, combine: C) -> Self {
        Self {
            observe: Observe::new(inner, (source, combine)),
        }
    }
}

impl<M, T, C, U> Future for Combine<M, T, C>
where
    M: Task,
    C: FnOnce(T, M::Value) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, (source, combine)| {
                settled.map(|inner| combine(source, inner))
            })
    }
}
