//! A minimal driver for tasks.
//!
//! This crate does not ship an executor: tasks are plain futures and run on
//! whichever executor polls them. [`block_on()`] exists so tests and examples
//! have something to drive a task to completion with. It polls a single
//! future on the current thread and parks that thread while the future is
//! pending.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod block_on;

pub use block_on::block_on;
