#![cfg(feature = "async")]
//! Async combinators and `Task`.
//!
//! Steps in a pipeline run strictly in source order, whether each step's
//! future is already resolved or actually suspends.

use lambars_adt::Error;
use lambars_adt::combinator::{Combinators, OptionExt, OptionFutureExt, OutcomeFuture, Sequence};
use lambars_adt::control::Validation;
use lambars_adt::effect::{Task, ToTask};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Log = Arc<Mutex<Vec<u32>>>;

fn recorder() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<u32> {
    log.lock().map(|entries| entries.clone()).unwrap_or_default()
}

async fn record(log: Log, entry: u32, suspend: bool) {
    if suspend {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    log.lock().unwrap().push(entry);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case(false, false, false)]
#[case(true, false, false)]
#[case(false, true, false)]
#[case(true, true, true)]
#[tokio::test]
async fn side_effects_run_in_chain_order(
    #[case] first_suspends: bool,
    #[case] second_suspends: bool,
    #[case] third_suspends: bool,
) {
    let log = recorder();
    let (first, second, third) = (log.clone(), log.clone(), log.clone());

    let value = Some(1)
        .on_success_async(move |_| record(first, 1, first_suspends))
        .on_success_async(move |_| record(second, 2, second_suspends))
        .on_success_async(move |_| record(third, 3, third_suspends))
        .await;

    assert_eq!(value, Some(1));
    assert_eq!(entries(&log), vec![1, 2, 3]);
}

#[rstest]
#[case(false, false, false)]
#[case(false, true, false)]
#[case(true, false, true)]
#[case(true, true, true)]
#[tokio::test]
async fn map_async_steps_run_in_chain_order(
    #[case] first_suspends: bool,
    #[case] second_suspends: bool,
    #[case] third_suspends: bool,
) {
    let log = recorder();
    let (first, second, third) = (log.clone(), log.clone(), log.clone());

    let value = Some(0)
        .map_async(move |value| async move {
            record(first, 1, first_suspends).await;
            value + 1
        })
        .map_async(move |value| async move {
            record(second, 2, second_suspends).await;
            value + 1
        })
        .map_async(move |value| async move {
            record(third, 3, third_suspends).await;
            value + 1
        })
        .await;

    assert_eq!(value, Some(3));
    assert_eq!(entries(&log), vec![1, 2, 3]);
}

#[rstest]
#[tokio::test]
async fn sync_and_async_steps_interleave_in_order() {
    let log = recorder();
    let (first, third) = (log.clone(), log.clone());
    let second = log.clone();

    let result = Ok::<i32, Error>(10)
        .on_success_async(move |_| record(first, 1, true))
        .map_with(move |value| {
            second.lock().unwrap().push(2);
            value + 1
        })
        .on_success_async(move |_| record(third, 3, false))
        .await;

    assert_eq!(result, Ok(11));
    assert_eq!(entries(&log), vec![1, 2, 3]);
}

// =============================================================================
// End-to-end
// =============================================================================

async fn double_then_require_large(input: i32) -> Option<i32> {
    Some(input)
        .map_async(|value| async move {
            tokio::task::yield_now().await;
            value * 2
        })
        .bind_async(|value| if value > 5 { Some(value).to_task() } else { None.to_task() })
        .await
}

#[rstest]
#[case(5, Some(10))]
#[case(2, None)]
#[tokio::test]
async fn map_then_bind_pipeline(#[case] input: i32, #[case] expected: Option<i32>) {
    assert_eq!(double_then_require_large(input).await, expected);
}

#[rstest]
#[tokio::test]
async fn failed_pipeline_skips_every_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (map_calls, bind_calls) = (calls.clone(), calls.clone());

    let failed: Result<i32, Error> = Err(Error::new("upstream", "unavailable"));
    let result = failed
        .map_async(move |value| {
            map_calls.fetch_add(1, Ordering::SeqCst);
            async move { value }
        })
        .bind_async(move |value| {
            bind_calls.fetch_add(1, Ordering::SeqCst);
            Ok::<i32, Error>(value).to_task()
        })
        .await;

    assert_eq!(result, Err(Error::new("upstream", "unavailable")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Fallbacks / Perform
// =============================================================================

#[rstest]
#[tokio::test]
async fn fallback_to_async_replaces_failure() {
    let recovered = Task::new(async { Err::<i32, Error>(Error::from_message("cache miss")) })
        .fallback_to_async(|error| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            if error.message() == "cache miss" { Ok(0) } else { Err(error) }
        })
        .await;
    assert_eq!(recovered, Ok(0));
}

#[rstest]
#[tokio::test]
async fn perform_async_fires_failure_handler_only() {
    let log = recorder();
    let (on_success, on_failure) = (log.clone(), log.clone());

    let failed: Validation<i32> = Validation::failure(Error::from_message("invalid"));
    let result = failed
        .perform_async(
            Some(move |_: &i32| record(on_success, 1, false)),
            Some(move |_: &lambars_adt::control::NonEmpty<Error>| record(on_failure, 2, true)),
        )
        .await;

    assert!(result.is_failure());
    assert_eq!(entries(&log), vec![2]);
}

#[rstest]
#[tokio::test]
async fn fold_async_on_plain_receiver() {
    let text = Some(3)
        .fold_async(|value| async move { value.to_string() }, |()| async { "none".to_string() })
        .await;
    assert_eq!(text, "3");
}

#[rstest]
#[tokio::test]
async fn option_async_extensions() {
    let log = recorder();
    let (first, second) = (log.clone(), log.clone());

    let value = None::<i32>
        .on_some_async(move |_| record(first, 1, false))
        .on_none_async(move || record(second, 2, true))
        .await;

    assert_eq!(value, None);
    assert_eq!(entries(&log), vec![2]);
}

#[rstest]
#[tokio::test]
async fn unit_returning_async_handlers_on_plain_receivers() {
    let log = recorder();
    let (on_some, on_failure, on_success) = (log.clone(), log.clone(), log.clone());

    let present = Some(1)
        .on_some_async(move |_| async move {
            record(on_some, 1, true).await;
            lambars_adt::Unit
        })
        .await;
    let failed = Err::<i32, Error>(Error::from_message("down"))
        .on_failure_async(move |_| async move {
            record(on_failure, 2, false).await;
            lambars_adt::Unit
        })
        .await;
    let performed = Ok::<String, Error>("2".to_string())
        .perform_async(
            Some(move |_: &String| async move {
                record(on_success, 3, false).await;
                lambars_adt::Unit
            }),
            None::<fn(&Error) -> std::future::Ready<lambars_adt::Unit>>,
        )
        .await;

    assert_eq!(present, Some(1));
    assert!(failed.is_err());
    assert_eq!(performed, Ok("2".to_string()));
    assert_eq!(entries(&log), vec![1, 2, 3]);
}

// =============================================================================
// Sequence
// =============================================================================

#[rstest]
#[tokio::test]
async fn sequence_async_never_polls_after_first_failure() {
    let polled = Arc::new(AtomicUsize::new(0));
    let steps: Vec<Task<Result<usize, String>>> = (0..4)
        .map(|index| {
            let polled = polled.clone();
            Task::new(async move {
                polled.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                if index == 1 { Err(format!("step {index}")) } else { Ok(index) }
            })
        })
        .collect();

    let collected = Result::sequence_async(steps).await;

    assert_eq!(collected, Err("step 1".to_string()));
    assert_eq!(polled.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn sequence_async_validation_awaits_everything() {
    let steps = (0..3).map(|index| {
        Task::new(async move {
            if index % 2 == 0 {
                Validation::<u32, String>::failure(format!("even {index}"))
            } else {
                Validation::success(index)
            }
        })
    });

    let collected = Validation::sequence_async(steps.collect::<Vec<_>>()).await;

    assert_eq!(
        collected.into_result().map_err(|errors| errors.into_vec()),
        Err(vec!["even 0".to_string(), "even 2".to_string()])
    );
}

// =============================================================================
// Task
// =============================================================================

#[rstest]
fn resolved_task_completes_on_first_poll() {
    use futures::FutureExt;

    assert_eq!(Task::pure(Some(5)).now_or_never(), Some(Some(5)));
    assert_eq!(Ok::<u8, ()>(1).to_task().now_or_never(), Some(Ok(1)));
}

#[tokio::test]
#[should_panic(expected = "callback failed")]
async fn callback_panic_propagates() {
    let _ = Some(1)
        .map_async(|_| async { panic!("callback failed") })
        .map_with(|()| 0)
        .await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn tasks_run_on_spawned_workers() {
    let handle = tokio::spawn(Some(20).map_async(|value| async move { value + 1 }));
    assert_eq!(handle.await.ok().flatten(), Some(21));
}
