use std::cell::Cell;
use std::convert::Infallible;
use std::io;
use std::pin::pin;

use futures_lite::future::poll_once;
use settle::prelude::*;
use settle::task::{self, Cause, TaskError};

#[settle::test]
async fn actions_chained_to_cancelled_tasks_dont_run() {
    let mut counter = 1;
    let outcome = task::cancelled::<u8>()
        .then(|| {
            counter += 1;
            Ok::<_, Infallible>(())
        })
        .await;
    assert!(outcome.is_cancelled());
    assert_eq!(counter, 1);
}

#[settle::test]
async fn actions_chained_to_failed_tasks_dont_run() {
    let mut counter = 1;
    let cause = Cause::msg("always fails");
    let outcome = task::failed::<()>(cause.clone())
        .then(|| {
            counter += 1;
            Ok::<_, Infallible>(())
        })
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));
    assert_eq!(counter, 1);
}

#[settle::test]
async fn actions_can_be_chained_to_tasks_before_they_start() -> anyhow::Result<()> {
    let counter = Cell::new(1);
    let (settler, source) = task::promise::<bool>();
    let mut chained = pin!(source.then(|| {
        counter.set(counter.get() + 1);
        Ok::<_, Infallible>(())
    }));

    assert!(poll_once(chained.as_mut()).await.is_none());
    assert_eq!(counter.get(), 1);

    settler.succeed(true);
    chained.await.into_result()?;
    assert_eq!(counter.get(), 2);
    Ok(())
}

#[settle::test]
async fn actions_can_be_chained_to_completed_tasks() -> anyhow::Result<()> {
    let counter = Cell::new(1);
    let done = task::from_value(true);
    done.then(|| {
        counter.set(counter.get() + 1);
        Ok::<_, Infallible>(())
    })
    .await
    .into_result()?;
    assert_eq!(counter.get(), 2);
    Ok(())
}

#[settle::test]
async fn then_runs_the_callback_exactly_once() {
    for v in [0, 1, -7, i32::MAX - 1] {
        let calls = Cell::new(0);
        let outcome = task::from_value(v)
            .then(|| {
                calls.set(calls.get() + 1);
                Ok::<_, Infallible>(v + 1)
            })
            .await;
        assert_eq!(outcome.unwrap(), v + 1);
        assert_eq!(calls.get(), 1);
    }
}

#[settle::test]
async fn callback_errors_become_the_cause() {
    let outcome = task::from_value(())
        .then(|| Err::<u8, _>(io::Error::new(io::ErrorKind::Other, "callback failed")))
        .await;
    let cause = outcome.cause().unwrap();
    assert!(cause.is::<io::Error>());
    assert_eq!(cause.to_string(), "callback failed");
}

#[settle::test]
async fn task_errors_from_callbacks_are_unpacked() {
    let cause = Cause::msg("earlier step failed");
    let earlier = cause.clone();
    let outcome = task::from_value(())
        .then(move || Err::<u8, _>(TaskError::Failed(earlier)))
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));
    assert!(!outcome.cause().unwrap().is::<TaskError>());

    let outcome = task::from_value(())
        .then(|| Err::<u8, _>(TaskError::Cancelled))
        .await;
    assert!(outcome.is_cancelled());
}

#[settle::test]
async fn settled_outcomes_can_be_returned_from_callbacks() {
    let cause = Cause::msg("settled elsewhere");
    let settled = task::failed::<u8>(cause.clone()).await;
    let outcome = task::from_value(()).then(|| settled.into_result()).await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));

    let settled = task::cancelled::<u8>().await;
    let outcome = task::run(|| settled.into_result()).await;
    assert!(outcome.is_cancelled());
}

#[settle::test]
async fn task_callbacks_are_flattened() {
    let outcome = task::from_value(())
        .then_task(|| task::from_value("inner"))
        .await;
    assert_eq!(outcome.unwrap(), "inner");

    let outcome = task::from_value(())
        .then_task(task::cancelled::<&str>)
        .await;
    assert!(outcome.is_cancelled());

    let cause = Cause::msg("inner failed");
    let outcome = task::from_value(())
        .then_task(|| task::failed::<&str>(cause.clone()))
        .await;
    assert!(outcome.cause().unwrap().ptr_eq(&cause));
}

#[settle::test]
async fn task_callbacks_skip_on_cancellation() {
    let mut ran = false;
    let outcome = task::cancelled::<()>()
        .then_task(|| {
            ran = true;
            task::from_value(1)
        })
        .await;
    assert!(outcome.is_cancelled());
    assert!(!ran);
}

#[settle::test]
async fn steps_run_in_order() {
    let (first, first_task) = task::promise::<()>();
    let (second, second_task) = task::promise::<u8>();
    let step = Cell::new(0);

    let mut chain = pin!(first_task
        .then(|| {
            assert_eq!(step.replace(1), 0);
            Ok::<_, Infallible>(())
        })
        .then_task(|| second_task)
        .then(|| {
            assert_eq!(step.replace(2), 1);
            Ok::<_, Infallible>("done")
        }));

    assert!(poll_once(chain.as_mut()).await.is_none());
    assert_eq!(step.get(), 0);

    first.succeed(());
    assert!(poll_once(chain.as_mut()).await.is_none());
    assert_eq!(step.get(), 1);

    second.succeed(9);
    assert_eq!(chain.await.unwrap(), "done");
    assert_eq!(step.get(), 2);
}

#[test_log::test]
fn cancellation_is_not_turned_into_failure_down_the_chain() {
    let outcome = settle::runtime::block_on(
        task::cancelled::<u8>()
            .select(|n| n + 1)
            .then(|| Ok::<_, Infallible>(()))
            .select_many(|()| task::from_value(2)),
    );
    assert!(outcome.is_cancelled());
    assert!(!outcome.is_failed());
}
