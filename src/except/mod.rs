//! Selective recovery from failure and cancellation.
//!
//! [`TaskExt::except`] wraps a task in an [`Except`] builder. Each operator on
//! the builder inspects how the task settled and either recovers, by settling
//! with a replacement, or forwards the task's own outcome untouched:
//!
//! - [`Except::on`] and [`Except::on_task`] recover from failures whose cause
//!   matches an [`ErrorKind`],
//! - [`Except::when_canceled`] and [`Except::when_canceled_task`] recover from
//!   cancellation.
//!
//! Forwarding is exact. A value is handed on as is, a cause is handed on as
//! the same [`Cause`] (no extra layer of wrapping), and a cancellation stays a
//! cancellation.
//!
//! # Examples
//!
//! ```
//! use settle::prelude::*;
//! use settle::task;
//! use std::num::ParseIntError;
//!
//! settle::runtime::block_on(async {
//!     let parsed = task::run(|| "many".parse::<u32>())
//!         .except()
//!         .on::<ParseIntError, _>(|| 0)
//!         .await;
//!     assert_eq!(parsed.unwrap(), 0);
//! });
//! ```
//!
//! [`TaskExt::except`]: crate::future::TaskExt::except
//! [`Cause`]: crate::task::Cause

mod error_kind;
mod on;
mod when_canceled;

pub use error_kind::ErrorKind;
pub use on::{On, OnTask};
pub use when_canceled::{WhenCanceled, WhenCanceledTask};

use crate::task::Task;

/// A task waiting to be given a recovery.
///
/// This `struct` is created by the [`except`] method on [`TaskExt`]. It holds
/// nothing but the task, and does nothing until one of its operators is
/// called.
///
/// [`except`]: crate::future::TaskExt::except
/// [`TaskExt`]: crate::future::TaskExt
#[derive(Debug)]
#[must_use = "an `Except` does nothing until a recovery is chosen"]
pub struct Except<Fut> {
    source: Fut,
}

impl<Fut> Except<Fut>
where
    Fut: Task,
{
    pub(crate) fn new(source: Fut) -> Self {
        Self { source }
    }

    /// Recover from a failure whose cause matches `K` by settling with the
    /// value `replacement` returns.
    ///
    /// Anything else is forwarded: a value, a cause that does not match `K`,
    /// or a cancellation.
    ///
    /// `replacement` cannot fail. A recovery that can fail goes through
    /// [`Except::on_task`], for instance as
    /// `on_task::<K, _, _>(|| task::from_result(..))`: its error then fails
    /// the result with that new cause.
    pub fn on<K, F>(self, replacement: F) -> On<Fut, K, F>
    where
        K: ErrorKind,
        F: FnOnce() -> Fut::Value,
    {
        On::new(self.source, replacement)
    }

    /// Recover from a failure whose cause matches `K` by settling the way
    /// the task `replacement` returns settles.
    ///
    /// A replacement task that fails in turn fails the result with its own,
    /// new cause.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    /// use std::num::ParseIntError;
    ///
    /// settle::runtime::block_on(async {
    ///     let port = task::run(|| "eighty".parse::<u16>())
    ///         .except()
    ///         .on_task::<ParseIntError, _, _>(|| task::run(|| "0x50".parse::<u16>()))
    ///         .await;
    ///     assert!(port.cause().unwrap().is::<ParseIntError>());
    /// });
    /// ```
    pub fn on_task<K, F, R>(self, replacement: F) -> OnTask<Fut, K, F, R>
    where
        K: ErrorKind,
        F: FnOnce() -> R,
        R: Task<Value = Fut::Value>,
    {
        OnTask::new(self.source, replacement)
    }

    /// Recover from cancellation by settling with the value `replacement`
    /// returns.
    ///
    /// A value or a failure is forwarded unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use settle::prelude::*;
    /// use settle::task;
    ///
    /// settle::runtime::block_on(async {
    ///     let replaced = task::cancelled::<i32>().except().when_canceled(|| 2).await;
    ///     assert_eq!(replaced.unwrap(), 2);
    /// });
    /// ```
    pub fn when_canceled<F>(self, replacement: F) -> WhenCanceled<Fut, F>
    where
        F: FnOnce() -> Fut::Value,
    {
        WhenCanceled::new(self.source, replacement)
    }

    /// Recover from cancellation by settling the way the task `replacement`
    /// returns settles.
    pub fn when_canceled_task<F, R>(self, replacement: F) -> WhenCanceledTask<Fut, F, R>
    where
        F: FnOnce() -> R,
        R: Task<Value = Fut::Value>,
    {
        WhenCanceledTask::new(self.source, replacement)
    }

    /// Give up on recovering and get the task back.
    pub fn into_inner(self) -> Fut {
        self.source
    }
}
