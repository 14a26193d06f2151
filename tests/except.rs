use std::cell::Cell;
use std::error::Error;
use std::fmt;

use settle::except::ErrorKind;
use settle::prelude::*;
use settle::task::{self, Cause};

#[derive(Debug)]
struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("arithmetic overflow")
    }
}

impl Error for Overflow {}

#[derive(Debug)]
struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("divide by zero")
    }
}

impl Error for DivideByZero {}

#[derive(Debug)]
struct InvalidOperation;

impl fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid operation")
    }
}

impl Error for InvalidOperation {}

/// Every arithmetic error.
struct Arithmetic;

impl ErrorKind for Arithmetic {
    fn matches(cause: &Cause) -> bool {
        cause.is::<Overflow>() || cause.is::<DivideByZero>()
    }
}

#[settle::test]
async fn can_handle_exceptions() -> anyhow::Result<()> {
    let value = task::run(|| Err::<i32, _>(Overflow))
        .except()
        .on::<Overflow, _>(|| 2)
        .await
        .into_result()?;
    assert_eq!(value, 2);
    Ok(())
}

#[settle::test]
async fn other_exceptions_pass_through() {
    let cause = Cause::new(InvalidOperation);
    let replaced = Cell::new(false);
    let outcome = task::failed::<i32>(cause.clone())
        .except()
        .on::<Overflow, _>(|| {
            replaced.set(true);
            2
        })
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));
    assert!(!replaced.get());
}

#[settle::test]
async fn kinds_can_cover_a_family() {
    for cause in [Cause::new(Overflow), Cause::new(DivideByZero)] {
        let outcome = task::failed::<i32>(cause).except().on::<Arithmetic, _>(|| 0).await;
        assert_eq!(outcome.unwrap(), 0);
    }

    let outcome = task::failed::<i32>(InvalidOperation)
        .except()
        .on::<Arithmetic, _>(|| 0)
        .await;
    assert!(outcome.cause().unwrap().is::<InvalidOperation>());
}

#[settle::test]
async fn success_and_cancellation_are_forwarded() {
    let replaced = Cell::new(false);

    let outcome = task::from_value(7)
        .except()
        .on::<Overflow, _>(|| {
            replaced.set(true);
            0
        })
        .await;
    assert_eq!(outcome.unwrap(), 7);

    let outcome = task::cancelled::<i32>()
        .except()
        .on::<Overflow, _>(|| {
            replaced.set(true);
            0
        })
        .await;
    assert!(outcome.is_cancelled());

    assert!(!replaced.get());
}

#[settle::test]
async fn replacement_tasks_settle_the_result() {
    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on_task::<Overflow, _, _>(|| task::from_value::<i32>(3))
        .await;
    assert_eq!(outcome.unwrap(), 3);

    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on_task::<Overflow, _, _>(|| task::failed::<i32>(DivideByZero))
        .await;
    assert!(outcome.cause().unwrap().is::<DivideByZero>());

    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on_task::<Overflow, _, _>(task::cancelled::<i32>)
        .await;
    assert!(outcome.is_cancelled());
}

#[settle::test]
async fn fallible_replacements_fail_with_the_new_cause() {
    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on_task::<Overflow, _, _>(|| task::from_result(Err::<i32, _>(DivideByZero)))
        .await;
    assert!(outcome.cause().unwrap().is::<DivideByZero>());

    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on_task::<Overflow, _, _>(|| task::from_result(Ok::<i32, DivideByZero>(6)))
        .await;
    assert_eq!(outcome.unwrap(), 6);
}

#[settle::test]
async fn unmatched_failures_pass_through_task_recovery() {
    let cause = Cause::new(InvalidOperation);
    let mut replaced = false;
    let outcome = task::failed::<i32>(cause.clone())
        .except()
        .on_task::<Overflow, _, _>(|| {
            replaced = true;
            task::from_value(0)
        })
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));
    assert!(!replaced);
}

#[settle::test]
async fn recovery_only_applies_once() {
    let outcome = task::failed::<i32>(Overflow)
        .except()
        .on::<Overflow, _>(|| 1)
        .then(|| Err::<i32, _>(Overflow))
        .await;
    assert!(outcome.cause().unwrap().is::<Overflow>());
}

#[settle::test]
async fn when_canceled_replaces_cancellation() -> anyhow::Result<()> {
    let value = task::cancelled::<i32>()
        .except()
        .when_canceled(|| 1)
        .select(|x| x + 1)
        .await
        .into_result()?;
    assert_eq!(value, 2);

    let value = task::cancelled::<i32>()
        .except()
        .when_canceled_task(|| task::from_value(5))
        .await
        .into_result()?;
    assert_eq!(value, 5);
    Ok(())
}

#[settle::test]
async fn when_canceled_replacement_tasks_may_fail() {
    let cause = Cause::msg("replacement failed");
    let outcome = task::cancelled::<i32>()
        .except()
        .when_canceled_task(|| task::failed::<i32>(cause.clone()))
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));

    let outcome = task::cancelled::<i32>()
        .except()
        .when_canceled_task(task::cancelled::<i32>)
        .await;
    assert!(outcome.is_cancelled());
}

#[settle::test]
async fn when_canceled_forwards_everything_else() {
    let replaced = Cell::new(false);

    let outcome = task::from_value(4)
        .except()
        .when_canceled(|| {
            replaced.set(true);
            0
        })
        .await;
    assert_eq!(outcome.unwrap(), 4);

    let cause = Cause::msg("not a cancellation");
    let outcome = task::failed::<i32>(cause.clone())
        .except()
        .when_canceled(|| {
            replaced.set(true);
            0
        })
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));

    assert!(!replaced.get());
}

#[settle::test]
async fn into_inner_gives_the_task_back() {
    let outcome = task::from_value("kept").except().into_inner().await;
    assert_eq!(outcome.unwrap(), "kept");
}
