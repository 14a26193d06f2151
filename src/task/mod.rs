//! Tasks and the primitives every combinator is built from.
//!
//! A task is any [`Future`] whose output is an [`Outcome`]. That makes the
//! standard library's future machinery the task runtime: tasks are lazy, they
//! make progress when polled, and they are driven by whichever executor
//! awaits them. The [`Task`] trait is implemented for all such futures
//! automatically.
//!
//! This module holds the pieces the rest of the crate is layered on:
//!
//! - already settled tasks: [`from_value`], [`from_result`], [`from_outcome`],
//!   [`failed`] and [`cancelled`],
//! - new work: [`run`] and the [`promise`] pair,
//! - the continuation primitive [`continue_with`], which hands the settled
//!   antecedent to a callback,
//! - [`flatten`], which collapses a task of a task,
//! - [`all_of`], which waits for a set of tasks concurrently.
//!
//! # Examples
//!
//! ```
//! use settle::task::{self, Outcome};
//!
//! settle::runtime::block_on(async {
//!     let described = task::continue_with(task::cancelled::<u8>(), |settled| match settled {
//!         Outcome::Cancelled => "cancelled",
//!         _ => "settled",
//!     })
//!     .await;
//!     assert_eq!(described, "cancelled");
//! });
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

pub(crate) mod all_of;
mod cause;
pub(crate) mod chain;
mod continue_with;
mod flatten;
mod outcome;
mod promise;
mod ready;
mod run;

pub use all_of::{all_of, AllOf};
pub use cause::Cause;
pub use continue_with::{continue_with, ContinueWith};
pub use flatten::{flatten, Flatten};
pub use outcome::{Outcome, TaskError};
pub use promise::{promise, Promise, Settler};
pub use ready::{cancelled, failed, from_outcome, from_result, from_value, Ready};
pub use run::{run, Run};

mod private {
    use super::Outcome;
    use core::future::Future;

    pub trait Sealed {}

    impl<F, T> Sealed for F where F: ?Sized + Future<Output = Outcome<T>> {}
}

/// A future which settles to an [`Outcome`].
///
/// This trait is implemented for every `Future<Output = Outcome<T>>` and
/// cannot be implemented by hand. It names the value type of the outcome so
/// that combinators can be written against it.
pub trait Task: Future + private::Sealed {
    /// The type of value the task produces when it succeeds.
    type Value;

    /// Poll this task, returning its outcome once it has settled.
    ///
    /// This is [`Future::poll`] with the output type spelled out.
    fn poll_settle(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome<Self::Value>>;
}

impl<F, T> Task for F
where
    F: ?Sized + Future<Output = Outcome<T>>,
{
    type Value = T;

    #[inline]
    fn poll_settle(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome<T>> {
        self.poll(cx)
    }
}
