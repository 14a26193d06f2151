use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Cause, Outcome};

/// Create a task that is settled from the outside.
///
/// The returned [`Promise`] stays pending until the [`Settler`] settles it.
/// Dropping the settler without settling cancels the promise. This is the
/// way to get hold of a task before the work it stands for has started.
///
/// # Examples
///
/// ```
/// use settle::prelude::*;
/// use settle::task;
///
/// settle::runtime::block_on(async {
///     let (settler, promise) = task::promise::<u8>();
///     let doubled = promise.select(|n| n * 2);
///     settler.succeed(21);
///     assert_eq!(doubled.await.unwrap(), 42);
/// });
/// ```
pub fn promise<T>() -> (Settler<T>, Promise<T>) {
    let slot = Arc::new(Mutex::new(Slot {
        state: State::Pending(None),
    }));
    let settler = Settler {
        slot: Some(Arc::clone(&slot)),
    };
    (settler, Promise { slot })
}

/// The consuming half of a [`promise`] pair.
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Promise<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

/// The producing half of a [`promise`] pair.
///
/// Each method consumes the settler, so a promise is settled at most once.
pub struct Settler<T> {
    slot: Option<Arc<Mutex<Slot<T>>>>,
}

struct Slot<T> {
    state: State<T>,
}

enum State<T> {
    /// Not settled yet, with the waker of the last poll.
    Pending(Option<Waker>),
    /// Settled, waiting to be picked up.
    Settled(Outcome<T>),
    /// The outcome has been handed to the promise.
    Taken,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Settler<T> {
    /// Settle the promise with a value.
    pub fn succeed(self, value: T) {
        self.settle(Outcome::Succeeded(value));
    }

    /// Settle the promise with a failure.
    pub fn fail(self, cause: impl Into<Cause>) {
        self.settle(Outcome::from_cause(cause.into()));
    }

    /// Settle the promise as cancelled.
    pub fn cancel(self) {
        self.settle(Outcome::Cancelled);
    }

    /// Settle the promise with an outcome.
    pub fn settle(mut self, outcome: Outcome<T>) {
        self.deliver(outcome);
    }

    fn deliver(&mut self, outcome: Outcome<T>) {
        let Some(slot) = self.slot.take() else {
            return;
        };
        let waker = {
            let mut slot = lock(&slot);
            match std::mem::replace(&mut slot.state, State::Settled(outcome)) {
                State::Pending(waker) => waker,
                // Only a settler moves the state out of `Pending`.
                State::Settled(_) | State::Taken => unreachable!("promise settled twice"),
            }
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<T> Drop for Settler<T> {
    fn drop(&mut self) {
        if self.slot.is_some() {
            crate::log::trace!("settler dropped before settling; cancelling promise");
            self.deliver(Outcome::Cancelled);
        }
    }
}

impl<T> Future for Promise<T> {
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = lock(&self.slot);
        match std::mem::replace(&mut slot.state, State::Taken) {
            State::Settled(outcome) => Poll::Ready(outcome),
            State::Pending(waker) => {
                let waker = match waker {
                    Some(waker) if waker.will_wake(cx.waker()) => waker,
                    _ => cx.waker().clone(),
                };
                slot.state = State::Pending(Some(waker));
                Poll::Pending
            }
            State::Taken => panic!("future polled after completing"),
        }
    }
}

impl<T> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise").finish_non_exhaustive()
    }
}

impl<T> fmt::Debug for Settler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settler")
            .field("settled", &self.slot.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::block_on;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn pending_until_settled() {
        let (settler, mut promise) = promise::<u8>();
        let polled = block_on(futures_lite::future::poll_once(&mut promise));
        assert!(polled.is_none());
        settler.succeed(5);
        assert_eq!(block_on(promise).unwrap(), 5);
    }

    #[test]
    fn settled_from_another_thread() {
        let (settler, promise) = promise::<&str>();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            settler.fail(Cause::msg("remote"));
        });
        let outcome = block_on(promise);
        assert_eq!(outcome.cause().unwrap().to_string(), "remote");
        handle.join().unwrap();
    }

    #[test]
    fn dropped_settler_cancels() {
        let (settler, promise) = promise::<()>();
        drop(settler);
        assert!(block_on(promise).is_cancelled());
    }
}
