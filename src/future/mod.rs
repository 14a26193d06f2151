//! Sequencing and projecting tasks.
//!
//! The [`TaskExt`] trait adds the combinators of this crate to every
//! [`Task`]. They all follow the same rule: a step only runs once the task
//! before it has succeeded. A failed task hands its cause on unchanged, a
//! cancelled task stays cancelled, and in neither case does any later
//! callback run. The only operators allowed to turn a failure or a
//! cancellation into a value are the recovery operators reached through
//! [`TaskExt::except`].
//!
//! # Examples
//!
//! ```
//! use settle::prelude::*;
//! use settle::task;
//!
//! settle::runtime::block_on(async {
//!     let total = task::from_value(2)
//!         .select(|n| n * 2)
//!         .select_many_with(|n| task::from_value(*n + 1), |n, m| n * m)
//!         .await;
//!     assert_eq!(total.unwrap(), 20);
//! });
//! ```
//!
//! [`Task`]: crate::task::Task

mod select;
mod select_many;
mod task_ext;
mod then;

pub use select::Select;
pub use select_many::{SelectMany, SelectManyWith};
pub use task_ext::TaskExt;
pub use then::{Then, ThenTask};
