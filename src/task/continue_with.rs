use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::chain::Observe;
use super::{Outcome, Task};

/// Run `callback` once `task` has settled, whatever its outcome.
///
/// The callback receives the settled [`Outcome`] and the returned future
/// resolves to whatever the callback returns. When the callback returns an
/// `Outcome` the result is a task in its own right.
///
/// This is the one scheduling primitive the rest of the crate is expressed
/// in. Unlike the combinators on [`TaskExt`], it does not short-circuit:
/// failed and cancelled antecedents reach the callback too.
///
/// [`TaskExt`]: crate::future::TaskExt
pub fn continue_with<A, B, F>(task: A, callback: F) -> ContinueWith<A, F>
where
    A: Task,
    F: FnOnce(Outcome<A::Value>) -> B,
{
    ContinueWith {
        observe: Observe::new(task, callback),
    }
}

pin_project! {
    /// Runs a callback over the outcome of a task.
    ///
    /// This `struct` is created by the [`continue_with`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct ContinueWith<A, F> {
        #[pin]
        observe: Observe<A, F>,
    }
}

impl<A, B, F> Future for ContinueWith<A, F>
where
    A: Task,
    F: FnOnce(Outcome<A::Value>) -> B,
{
    type Output = B;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .observe
            .poll_with(cx, |settled, callback| callback(settled))
    }
}
