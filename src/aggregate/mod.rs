//! Collecting the values of several tasks.
//!
//! There are two policies here, and they are kept apart on purpose:
//!
//! - [`TaskExt::and`] runs two tasks *concurrently* and collects both values
//!   in call order, the way [`all_of`] does for any number of tasks.
//! - [`TaskExt::append`] and [`TaskExt::concat`] extend a list *sequentially*:
//!   the tail task is only polled after the list task has succeeded.
//!
//! [`TaskExt::and`]: crate::future::TaskExt::and
//! [`TaskExt::append`]: crate::future::TaskExt::append
//! [`TaskExt::concat`]: crate::future::TaskExt::concat
//! [`all_of`]: crate::task::all_of

mod and;
mod append;

pub use and::And;
pub use append::Append;
