//! The settle-then-continue steps every combinator is assembled from.
//!
//! [`Observe`] waits for an antecedent to settle and hands its outcome, along
//! with whatever data the combinator stored, to a step function. [`Chain`]
//! does the same but lets the step continue with a second task, whose
//! outcome then becomes the outcome of the whole chain. That second half is
//! what flattening means here: a chain never yields a task of a task.
//!
//! The step functions are passed in at poll time rather than stored, which
//! keeps the combinator types nameable.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::ready;
use pin_project_lite::pin_project;

use super::{Outcome, Task};

pin_project! {
    /// Waits for `antecedent`, then runs a step over its outcome once.
    pub(crate) struct Observe<A, C> {
        #[pin]
        antecedent: A,
        data: Option<C>,
    }
}

impl<A, C> Observe<A, C> {
    pub(crate) fn new(antecedent: A, data: C) -> Self {
        Self {
            antecedent,
            data: Some(data),
        }
    }
}

impl<A, C> Observe<A, C>
where
    A: Task,
{
    pub(crate) fn poll_with<R, F>(self: Pin<&mut Self>, cx: &mut Context<'_>, step: F) -> Poll<R>
    where
        F: FnOnce(Outcome<A::Value>, C) -> R,
    {
        let this = self.project();
        assert!(this.data.is_some(), "future polled after completing");
        let settled = ready!(this.antecedent.poll_settle(cx));
        match this.data.take() {
            Some(data) => Poll::Ready(step(settled, data)),
            None => unreachable!(),
        }
    }
}

/// What a chain does once its antecedent has settled.
pub(crate) enum Step<B: Task> {
    /// Settle the chain right away.
    Settle(Outcome<B::Value>),
    /// Settle the chain the same way this task settles.
    Continue(B),
}

impl<B: Task> Step<B> {
    /// Continue with `inner` if the antecedent succeeded, otherwise settle
    /// with the antecedent's failure or cancellation.
    pub(crate) fn or_forward<T>(settled: Outcome<T>, inner: impl FnOnce(T) -> B) -> Self {
        match settled.branch() {
            Ok(value) => Step::Continue(inner(value)),
            Err(other) => Step::Settle(other),
        }
    }
}

pin_project! {
    #[project = ChainProj]
    /// Waits for `A`, then possibly for a `B` produced from its outcome.
    pub(crate) enum Chain<A, B, C> {
        First {
            #[pin]
            antecedent: A,
            data: Option<C>,
        },
        Second {
            #[pin]
            inner: B,
        },
        Done,
    }
}

impl<A, B, C> Chain<A, B, C> {
    pub(crate) fn new(antecedent: A, data: C) -> Self {
        Chain::First {
            antecedent,
            data: Some(data),
        }
    }
}

impl<A, B, C> Chain<A, B, C>
where
    A: Task,
    B: Task,
{
    pub(crate) fn poll_chain<F>(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        step: F,
    ) -> Poll<Outcome<B::Value>>
    where
        F: FnOnce(Outcome<A::Value>, C) -> Step<B>,
    {
        let mut pending_step = Some(step);
        loop {
            match self.as_mut().project() {
                ChainProj::First { antecedent, data } => {
                    let settled = ready!(antecedent.poll_settle(cx));
                    let (Some(data), Some(step)) = (data.take(), pending_step.take()) else {
                        unreachable!()
                    };
                    match step(settled, data) {
                        Step::Settle(outcome) => {
                            self.set(Chain::Done);
                            return Poll::Ready(outcome);
                        }
                        Step::Continue(inner) => self.set(Chain::Second { inner }),
                    }
                }
                ChainProj::Second { inner } => {
                    let outcome = ready!(inner.poll_settle(cx));
                    self.set(Chain::Done);
                    return Poll::Ready(outcome);
                }
                ChainProj::Done => panic!("future polled after completing"),
            }
        }
    }
}

pin_project! {
    /// Exposes a task as a plain future of its outcome.
    ///
    /// Generic code only knows a `Task`'s output through `poll_settle`; this
    /// lets such tasks be handed to future adapters that read `Output`.
    pub(crate) struct Settling<A> {
        #[pin]
        task: A,
    }
}

impl<A> Settling<A> {
    pub(crate) fn new(task: A) -> Self {
        Self { task }
    }
}

impl<A> Future for Settling<A>
where
    A: Task,
{
    type Output = Outcome<A::Value>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().task.poll_settle(cx)
    }
}
