use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::chain::{Chain, Step};
use super::{Outcome, Task};

/// Collapse a task whose value is another task.
///
/// The result settles the way the inner task settles. If the outer task fails
/// or is cancelled there is no inner task, and the result settles with the
/// outer task's outcome instead.
///
/// # Examples
///
/// ```
/// use settle::task;
///
/// settle::runtime::block_on(async {
///     let nested = task::from_value(task::from_value("inner"));
///     assert_eq!(task::flatten(nested).await.unwrap(), "inner");
/// });
/// ```
pub fn flatten<A>(task: A) -> Flatten<A>
where
    A: Task,
    A::Value: Task,
{
    Flatten {
        chain: Chain::new(task, ()),
    }
}

pin_project! {
    /// Collapses a task of a task.
    ///
    /// This `struct` is created by the [`flatten`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Flatten<A>
    where
        A: Task,
    {
        #[pin]
        chain: Chain<A, A::Value, ()>,
    }
}

impl<A> Future for Flatten<A>
where
    A: Task,
    A::Value: Task,
{
    type Output = Outcome<<A::Value as Task>::Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .chain
            .poll_chain(cx, |settled, ()| Step::or_forward(settled, |inner| inner))
    }
}
