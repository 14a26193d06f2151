use crate::aggregate::{And, Append};
use crate::except::Except;
use crate::task::{Cause, Task};

use super::{Select, SelectMany, SelectManyWith, Then, ThenTask};

/// Extend [`Task`] with sequencing, recovery and aggregation operators.
pub trait TaskExt: Task {
    /// Run `callback` once this task has succeeded.
    ///
    /// The value of this task is not passed on; `callback` is for work that
    /// has to happen afterwards. Returning `Err` fails the resulting task with
    /// that error as its cause, returning `Ok` succeeds it with the value.
    ///
    /// If this task fails or is cancelled, `callback` never runs and the
    /// resulting task fails with the same cause, or is cancelled.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    /// use std::cell::Cell;
    ///
    /// settle::runtime::block_on(async {
    ///     let counter = Cell::new(1);
    ///     let outcome = task::cancelled::<()>()
    ///         .then(|| {
    ///             counter.set(counter.get() + 1);
    ///             Ok::<_, std::fmt::Error>(())
    ///         })
    ///         .await;
    ///     assert!(outcome.is_cancelled());
    ///     assert_eq!(counter.get(), 1);
    /// });
    /// ```
    fn then<U, E, F>(self, callback: F) -> Then<Self, F>
    where
        Self: Sized,
        F: FnOnce() -> Result<U, E>,
        E: Into<Cause>,
    {
        Then::new(self, callback)
    }

    /// Run a task-returning `callback` once this task has succeeded.
    ///
    /// The resulting task settles the same way as the task `callback`
    /// returns. Failure and cancellation of this task short-circuit as with
    /// [`TaskExt::then`].
    fn then_task<R, F>(self, callback: F) -> ThenTask<Self, F, R>
    where
        Self: Sized,
        F: FnOnce() -> R,
        R: Task,
    {
        ThenTask::new(self, callback)
    }

    /// Project the value of this task once it has succeeded.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    ///
    /// settle::runtime::block_on(async {
    ///     let projected = task::from_value(2).select(|x| x * 2).await;
    ///     assert_eq!(projected.unwrap(), 4);
    /// });
    /// ```
    fn select<U, F>(self, projection: F) -> Select<Self, F>
    where
        Self: Sized,
        F: FnOnce(Self::Value) -> U,
    {
        Select::new(self, projection)
    }

    /// Project the value of this task into another task, and settle the way
    /// that task settles.
    fn select_many<R, F>(self, projection: F) -> SelectMany<Self, F, R>
    where
        Self: Sized,
        F: FnOnce(Self::Value) -> R,
        R: Task,
    {
        SelectMany::new(self, projection)
    }

    /// Sequence a dependent task, then combine both values.
    ///
    /// Once this task succeeds with `x`, `intermediate(&x)` is called to get
    /// a second task. Once that one succeeds with `y`, the result succeeds
    /// with `combine(x, y)`. The second task is not created before the first
    /// has succeeded, so the two never run at the same time.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    ///
    /// settle::runtime::block_on(async {
    ///     let product = task::from_value(2)
    ///         .select_many_with(|x| task::from_value(*x), |x, y| x * y)
    ///         .await;
    ///     assert_eq!(product.unwrap(), 4);
    /// });
    /// ```
    fn select_many_with<M, U, I, C>(
        self,
        intermediate: I,
        combine: C,
    ) -> SelectManyWith<Self, I, M, C>
    where
        Self: Sized,
        I: FnOnce(&Self::Value) -> M,
        M: Task,
        C: FnOnce(Self::Value, M::Value) -> U,
    {
        SelectManyWith::new(self, intermediate, combine)
    }

    /// Start building a recovery for this task.
    ///
    /// See [`Except`] for the operators available.
    fn except(self) -> Except<Self>
    where
        Self: Sized,
    {
        Except::new(self)
    }

    /// Wait for this task and `other` concurrently, and collect both values.
    ///
    /// The values come back in call order, `[self, other]`, whichever task
    /// settles first. If either task is cancelled the result is cancelled;
    /// otherwise if either fails, the result fails with the first failure's
    /// cause.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    ///
    /// settle::runtime::block_on(async {
    ///     let sum = task::from_value(1)
    ///         .and(task::from_value(2))
    ///         .select(|pair| pair[0] + pair[1])
    ///         .await;
    ///     assert_eq!(sum.unwrap(), 3);
    /// });
    /// ```
    fn and<B>(self, other: B) -> And<Self, B>
    where
        Self: Sized,
        B: Task<Value = Self::Value>,
    {
        And::new(self, other)
    }

    /// Append the value of `tail` to the list this task produces.
    ///
    /// Unlike [`TaskExt::and`] this is sequential: `tail` is not polled until
    /// this task has succeeded. If this task fails or is cancelled, `tail` is
    /// dropped without ever being polled.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    ///
    /// settle::runtime::block_on(async {
    ///     let nums = task::from_value(vec![1, 2, 3, 4]).append(task::from_value(5));
    ///     assert_eq!(nums.await.unwrap(), vec![1, 2, 3, 4, 5]);
    /// });
    /// ```
    fn append<T, R>(self, tail: R) -> Append<Self, R, T>
    where
        Self: Sized + Task<Value = Vec<T>>,
        R: Task<Value = T>,
    {
        Append::new(self, tail, push_one::<T>)
    }

    /// Append the list `tail` produces to the list this task produces.
    ///
    /// Sequential in the same way as [`TaskExt::append`].
    fn concat<T, R>(self, tail: R) -> Append<Self, R, T>
    where
        Self: Sized + Task<Value = Vec<T>>,
        R: Task<Value = Vec<T>>,
    {
        Append::new(self, tail, push_all::<T>)
    }
}

impl<T> TaskExt for T where T: Task + ?Sized {}

fn push_one<T>(list: &mut Vec<T>, tail: T) {
    list.push(tail);
}

fn push_all<T>(list: &mut Vec<T>, tail: Vec<T>) {
    list.extend(tail);
}
