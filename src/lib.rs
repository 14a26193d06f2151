#![warn(future_incompatible, unreachable_pub)]
//#![deny(missing_debug_implementations)]
//#![warn(missing_docs)]

//! Chaining, recovery and fan-in for three-state async tasks.
//!
//! A task is a future that settles exactly once, to one of three outcomes: it
//! succeeds with a value, it fails with a single [`Cause`], or it is
//! cancelled. This crate is the algebra over such tasks: sequencing, mapping
//! and flattening, recovering from selected failures or from cancellation,
//! and collecting the values of several tasks. Every operator threads all
//! three outcomes through without losing a cause, wrapping it twice, or
//! running a callback after its antecedent failed or was cancelled.
//!
//! # Examples
//!
//! **Sequencing**
//!
//! ```rust
//! use settle::prelude::*;
//! use settle::task;
//!
//! settle::runtime::block_on(async {
//!     let sum = task::from_value(2)
//!         .select_many(|x| task::from_value(3).select(move |y| x + y))
//!         .await;
//!     assert_eq!(sum.unwrap(), 5);
//! });
//! ```
//!
//! **Recovery**
//!
//! ```rust
//! use settle::prelude::*;
//! use settle::task;
//! use std::num::ParseIntError;
//!
//! settle::runtime::block_on(async {
//!     let port = task::run(|| "eighty".parse::<u16>())
//!         .except()
//!         .on::<ParseIntError, _>(|| 80)
//!         .await;
//!     assert_eq!(port.unwrap(), 80);
//! });
//! ```
//!
//! **Aggregation**
//!
//! ```rust
//! use settle::prelude::*;
//! use settle::task;
//!
//! settle::runtime::block_on(async {
//!     let nums = task::from_value(1)
//!         .and(task::from_value(2))
//!         .concat(task::from_value(vec![3, 4]))
//!         .append(task::from_value(5))
//!         .await;
//!     assert_eq!(nums.unwrap(), vec![1, 2, 3, 4, 5]);
//! });
//! ```
//!
//! # Design Decisions
//!
//! A task is any `Future<Output = Outcome<T>>`. The crate does not ship an
//! executor or a task type of its own, so anything that can poll a future can
//! drive these tasks, and any async block returning an [`Outcome`] is a task.
//! [`runtime::block_on`] is only there for tests and examples.
//!
//! Cancellation is kept distinct from failure all the way through. A
//! cancelled antecedent yields a cancelled result from every combinator; it
//! never turns into a failure one step down. The only operator that changes
//! it is [`Except::when_canceled`].
//!
//! Pairing two tasks with [`TaskExt::and`] is concurrent, while extending a
//! list with [`TaskExt::append`] or [`TaskExt::concat`] is sequential. The
//! difference is deliberate, and callers rely on both.
//!
//! [`Cause`]: task::Cause
//! [`Outcome`]: task::Outcome
//! [`Except::when_canceled`]: except::Except::when_canceled
//! [`TaskExt::and`]: future::TaskExt::and
//! [`TaskExt::append`]: future::TaskExt::append
//! [`TaskExt::concat`]: future::TaskExt::concat

pub mod aggregate;
pub mod except;
pub mod future;
mod log;
pub mod runtime;
pub mod task;

pub use settle_macro::attr_macro_test as test;

pub mod prelude {
    pub use crate::future::TaskExt as _;
    pub use crate::task::Task as _;
}
