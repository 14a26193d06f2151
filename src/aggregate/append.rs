use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::task::chain::{Chain, Observe, Step};
use crate::task::{Outcome, Task};

/// How a tail value is added onto the list.
type ExtendFn<T, V> = fn(&mut Vec<T>, V);

pin_project! {
    /// Extends the list one task produces with the value(s) of another.
    ///
    /// This `struct` is created by the [`append`] and [`concat`] methods on
    /// [`TaskExt`]. See their documentation for more.
    ///
    /// [`append`]: crate::future::TaskExt::append
    /// [`concat`]: crate::future::TaskExt::concat
    /// [`TaskExt`]: crate::future::TaskExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Append<L, R, T>
    where
        R: Task,
    {
        #[pin]
        chain: Chain<L, Extended<R, T>, (R, ExtendFn<T, R::Value>)>,
    }
}

impl<L, R, T> Append<L, R, T>
where
    L: Task<Value = Vec<T>>,
    R: Task,
{
    pub(crate) fn new(list: L, tail: R, extend: ExtendFn<T, R::Value>) -> Self {
        Self {
            chain: Chain::new(list, (tail, extend)),
        }
    }
}

impl<L, R, T> Future for Append<L, R, T>
where
    L: Task<Value = Vec<T>>,
    R: Task,
{
    type Output = Outcome<Vec<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, (tail, extend)| {
                Step::or_forward(settled, |list| Extended::new(tail, list, extend))
            })
    }
}

pin_project! {
    /// Waits for the tail task, then adds its value onto an already known
    /// list.
    pub(crate) struct Extended<R, T>
    where
        R: Task,
    {
        #[pin]
        observe: Observe<R, (Vec<T>, ExtendFn<T, R::Value>)>,
    }
}

impl<R, T> Extended<R, T>
where
    R: Task,
{
    fn new(tail: R, list: Vec<T>, extend: ExtendFn<T, R::Value>) -> Self {
        Self {
            observe: Observe::new(tail, (list, extend)),
        }
    }
}

impl<R, T> Future for Extended<R, T>
where
    R: Task,
{
    type Output = Outcome<Vec<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, (mut list, extend)| {
                settled.map(|tail| {
                    extend(&mut list, tail);
                    list
                })
            })
    }
}
