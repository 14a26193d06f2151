use std::error::Error;
use std::fmt;

use super::Cause;

/// The terminal state of a task.
///
/// Every task settles exactly once, to exactly one of these variants.
/// Cancellation is a state of its own rather than a kind of error: it carries
/// no cause, and only [`when_canceled`] turns it into anything else.
///
/// [`when_canceled`]: crate::except::Except::when_canceled
#[derive(Debug, Clone)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T> {
    /// The task produced a value.
    Succeeded(T),
    /// The task failed with a single cause.
    Failed(Cause),
    /// The task was cancelled before producing a value.
    Cancelled,
}

impl<T> Outcome<T> {
    /// Returns `true` if the task produced a value.
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the task failed.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` if the task was cancelled.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the value if the task succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the cause if the task failed.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failed(cause) => Some(cause),
            _ => None,
        }
    }

    /// Convert into a `Result`, with failure and cancellation as errors.
    pub fn into_result(self) -> Result<T, TaskError> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(cause) => Err(TaskError::Failed(cause)),
            Self::Cancelled => Err(TaskError::Cancelled),
        }
    }

    /// Map the value of a succeeded outcome, leaving other outcomes as they
    /// are.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.branch() {
            Ok(value) => Outcome::Succeeded(f(value)),
            Err(other) => other,
        }
    }

    /// Returns the value of a succeeded outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is failed or cancelled.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(cause) => {
                panic!("called `Outcome::unwrap()` on a `Failed` value: {cause:?}")
            }
            Self::Cancelled => panic!("called `Outcome::unwrap()` on a `Cancelled` value"),
        }
    }

    /// A failed outcome for `cause`.
    ///
    /// A cause that is itself a [`TaskError`] is unpacked: the cause inside
    /// it is handed on as is, and a cancellation stays a cancellation.
    pub(crate) fn from_cause(cause: Cause) -> Self {
        match cause.downcast_ref::<TaskError>() {
            Some(TaskError::Failed(inner)) => Self::Failed(inner.clone()),
            Some(TaskError::Cancelled) => Self::Cancelled,
            None => Self::Failed(cause),
        }
    }

    /// Split off the value of a succeeded outcome. Anything else is handed
    /// back retyped, with its cause moved rather than copied.
    pub(crate) fn branch<U>(self) -> Result<T, Outcome<U>> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(cause) => Err(Outcome::Failed(cause)),
            Self::Cancelled => Err(Outcome::Cancelled),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Cause>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::from_cause(error.into()),
        }
    }
}

/// Why a task did not produce a value.
///
/// This is the error half of [`Outcome::into_result`].
#[derive(Debug, Clone)]
pub enum TaskError {
    /// The task failed with this cause.
    Failed(Cause),
    /// The task was cancelled.
    Cancelled,
}

impl TaskError {
    /// Returns the cause if the task failed.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failed(cause) => Some(cause),
            Self::Cancelled => None,
        }
    }

    /// Returns `true` if the task was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(cause) => write!(f, "task failed: {cause}"),
            Self::Cancelled => f.write_str("task was cancelled"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failed(cause) => Some(&**cause),
            Self::Cancelled => None,
        }
    }
}

impl<T> From<TaskError> for Outcome<T> {
    fn from(error: TaskError) -> Self {
        match error {
            TaskError::Failed(cause) => Self::Failed(cause),
            TaskError::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn predicates() {
        let ok: Outcome<u8> = Outcome::Succeeded(1);
        let failed: Outcome<u8> = Outcome::Failed(Cause::msg("nope"));
        let cancelled: Outcome<u8> = Outcome::Cancelled;

        assert!(ok.is_succeeded() && !ok.is_failed() && !ok.is_cancelled());
        assert!(failed.is_failed() && !failed.is_succeeded());
        assert!(cancelled.is_cancelled() && !cancelled.is_failed());
        assert_eq!(ok.value(), Some(&1));
        assert!(failed.cause().is_some());
        assert!(cancelled.cause().is_none());
    }

    #[test]
    fn map_keeps_the_cause() {
        let cause = Cause::msg("nope");
        let mapped = Outcome::<u8>::Failed(cause.clone()).map(|n| n * 2);
        assert!(mapped.cause().unwrap().ptr_eq(&cause));
        assert!(Outcome::<u8>::Cancelled.map(|n| n * 2).is_cancelled());
        assert_eq!(Outcome::Succeeded(4).map(|n| n * 2).unwrap(), 8);
    }

    #[test]
    fn into_result_reports_source() {
        let err = Outcome::<()>::Failed(io::Error::new(io::ErrorKind::Other, "inner").into())
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "task failed: inner");
        assert_eq!(err.source().unwrap().to_string(), "inner");

        let err = Outcome::<()>::Cancelled.into_result().unwrap_err();
        assert!(err.is_cancelled());
        assert!(err.source().is_none());
    }

    #[test]
    fn from_result() {
        let ok: Outcome<u8> = Ok::<_, io::Error>(3).into();
        assert_eq!(ok.unwrap(), 3);
        let failed: Outcome<u8> = Err(io::Error::new(io::ErrorKind::Other, "x")).into();
        assert!(failed.cause().unwrap().is::<io::Error>());
    }

    #[test]
    fn task_errors_are_unpacked() {
        let cause = Cause::msg("inner");
        let failed: Outcome<u8> = Err(TaskError::Failed(cause.clone())).into();
        assert!(failed.cause().unwrap().ptr_eq(&cause));

        let cancelled: Outcome<u8> = Err(TaskError::Cancelled).into();
        assert!(cancelled.is_cancelled());
    }

    #[test]
    #[should_panic(expected = "`Cancelled` value")]
    fn unwrap_cancelled_panics() {
        Outcome::<u8>::Cancelled.unwrap();
    }
}
