use std::error::Error;

use crate::task::Cause;

/// A class of errors that [`Except::on`] can recover from.
///
/// Every error type is its own kind: the blanket implementation matches a
/// cause when it downcasts to exactly that type.
///
/// A kind can also stand for a family of errors. Implement `ErrorKind` for a
/// marker type and accept every member of the family in
/// [`matches`](ErrorKind::matches):
///
/// ```
/// use settle::except::ErrorKind;
/// use settle::task::Cause;
/// use std::num::{ParseFloatError, ParseIntError};
///
/// /// Any number that failed to parse.
/// struct BadNumber;
///
/// impl ErrorKind for BadNumber {
///     fn matches(cause: &Cause) -> bool {
///         cause.is::<ParseIntError>() || cause.is::<ParseFloatError>()
///     }
/// }
///
/// let cause: Cause = "x".parse::<f32>().unwrap_err().into();
/// assert!(BadNumber::matches(&cause));
/// assert!(!ParseIntError::matches(&cause));
/// ```
///
/// [`Except::on`]: crate::except::Except::on
pub trait ErrorKind {
    /// Returns `true` if `cause` belongs to this kind.
    fn matches(cause: &Cause) -> bool;
}

impl<E> ErrorKind for E
where
    E: Error + Send + Sync + 'static,
{
    fn matches(cause: &Cause) -> bool {
        cause.is::<E>()
    }
}
