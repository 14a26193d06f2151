use core::future::Future;
use core::pin::pin;
use core::task::Waker;
use core::task::{Context, Poll};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Wake;
use std::thread::{self, Thread};

/// Drive a future to completion on the current thread.
///
/// The calling thread is parked whenever the future is pending and unparked
/// by the future's waker.
pub fn block_on<Fut>(fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    // Pin the future so it can be polled
    let mut fut = pin!(fut);

    // Create a new context to be passed to the future.
    let waker_impl = Arc::new(ThreadWaker::new(thread::current()));
    let waker = Waker::from(Arc::clone(&waker_impl));
    let mut cx = Context::from_waker(&waker);

    // Either the future completes and we return, or we park until someone
    // calls the waker.
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(res) => break res,
            Poll::Pending => {
                while !waker_impl.take_awake() {
                    thread::park();
                }
            }
        }
    }
}

struct ThreadWaker {
    thread: Thread,
    awake: AtomicBool,
}

impl ThreadWaker {
    fn new(thread: Thread) -> Self {
        Self {
            thread,
            awake: AtomicBool::new(false),
        }
    }

    #[inline]
    fn take_awake(&self) -> bool {
        self.awake.swap(false, Ordering::Acquire)
    }
}

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.awake.store(true, Ordering::Release);
        self.thread.unpark();
    }
}
