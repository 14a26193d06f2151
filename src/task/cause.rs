use std::error::Error;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The single error value carried by a failed task.
///
/// A `Cause` is a shared reference: cloning it does not copy the underlying
/// error, and forwarding it through a combinator hands on the same
/// allocation. Use [`Cause::ptr_eq`] to check whether two causes are the same
/// error.
///
/// `Cause` derefs to `dyn Error + Send + Sync`, so the usual inspection
/// methods (`is`, `downcast_ref`, `source`) are available on it directly. It
/// does not implement [`Error`] itself, which is what allows any error type to
/// convert into it with `?` or `.into()`.
#[derive(Clone)]
pub struct Cause {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Cause {
    /// Wrap an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Create a cause from a plain message.
    ///
    /// # Examples
    ///
    /// ```
    /// use settle::task::Cause;
    ///
    /// let cause = Cause::msg("disk on fire");
    /// assert_eq!(cause.to_string(), "disk on fire");
    /// ```
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display,
    {
        Self::new(Message(message.to_string()))
    }

    /// Wrap an already boxed error without boxing it again.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if both causes refer to the same error allocation.
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for Cause {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}
