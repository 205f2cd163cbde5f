use std::panic::panic_any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::either::Either;
use crate::io::{Io, Task, Unfailing};

#[tokio::test]
async fn construction_evaluates_nothing() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = invocations.clone();

    let root: Io<String, usize> = Io::succeed_with(move || {
        probe.fetch_add(1, Ordering::SeqCst);
        1
    });
    let chain = root
        .map(|n| n + 1)
        .and_then(|n| Io::succeed_with(move || n * 2))
        .map_err(|e| e)
        .for_each(|_| {})
        .filter_or_fail(|_| true, |_| "unreachable".to_string())
        .zip_with(Io::succeed_with(|| 0), |a, b| a + b)
        .map(|n| n - 1)
        .recover(|_: String| Io::<String, usize>::succeed_with(|| 0))
        .map(|n| n + 1)
        .filter_or_fail(|_| true, |_| "still unreachable".to_string());

    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    let outcome = chain.run().await;
    assert_eq!(outcome, Either::Right(4));
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn thunks_run_once_per_evaluation() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = invocations.clone();

    let effect: Io<String, u32> = Io::succeed_with(move || {
        probe.fetch_add(1, Ordering::SeqCst);
        5
    });

    assert_eq!(effect.run().await, Either::Right(5));
    assert_eq!(effect.run().await, Either::Right(5));
    assert_eq!(effect.run().await, Either::Right(5));
    assert_eq!(invocations.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn succeed_clones_the_same_value_on_every_run() {
    let effect: Io<String, Vec<i32>> = Io::succeed(vec![1, 2, 3]);
    assert_eq!(effect.run().await, Either::Right(vec![1, 2, 3]));
    assert_eq!(effect.run().await, Either::Right(vec![1, 2, 3]));
}

#[tokio::test]
async fn and_then_short_circuits_without_invoking_the_continuation() {
    let touched = Arc::new(AtomicBool::new(false));
    let probe = touched.clone();

    let failing: Io<String, i32> = Io::fail("broken".to_string());
    let chained = failing.and_then(move |n| {
        probe.store(true, Ordering::SeqCst);
        Io::succeed_with(move || n + 1)
    });

    assert_eq!(chained.run().await, Either::Left("broken".to_string()));
    assert!(!touched.load(Ordering::SeqCst));
}

#[tokio::test]
async fn zip_is_left_biased_and_skips_the_right_on_failure() {
    let right_ran = Arc::new(AtomicBool::new(false));
    let probe = right_ran.clone();

    let left: Io<&str, i32> = Io::fail("left error");
    let right: Io<&str, i32> = Io::succeed_with(move || {
        probe.store(true, Ordering::SeqCst);
        2
    });

    assert_eq!(left.zip(right).run().await, Either::Left("left error"));
    assert!(!right_ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn zip_with_combines_both_successes_in_order() {
    let left: Io<&str, &str> = Io::succeed_with(|| "a");
    let right: Io<&str, &str> = Io::succeed_with(|| "b");
    let combined = left.zip_with(right, |a, b| format!("{a}{b}"));
    assert_eq!(combined.run().await, Either::Right("ab".to_string()));
}

#[tokio::test]
async fn map_err_rewrites_only_the_failure_channel() {
    let failing: Io<u32, &str> = Io::fail_with(|| 404);
    assert_eq!(
        failing.map_err(|code| format!("status {code}")).run().await,
        Either::Left("status 404".to_string())
    );

    let fine: Io<u32, &str> = Io::succeed_with(|| "ok");
    assert_eq!(
        fine.map_err(|code| format!("status {code}")).run().await,
        Either::Right("ok")
    );
}

#[tokio::test]
async fn recover_replaces_a_failure_and_skips_on_success() {
    let handled = Arc::new(AtomicUsize::new(0));
    let probe = handled.clone();

    let failing: Io<String, i32> = Io::fail_with(|| "transient".to_string());
    let recovered = failing.recover(move |_: String| {
        probe.fetch_add(1, Ordering::SeqCst);
        Io::<&str, i32>::succeed_with(|| 0)
    });
    assert_eq!(recovered.run().await, Either::Right(0));
    assert_eq!(handled.load(Ordering::SeqCst), 1);

    let fine: Io<String, i32> = Io::succeed_with(|| 9);
    let untouched = fine.recover(|_: String| Io::<&str, i32>::succeed_with(|| 0));
    assert_eq!(untouched.run().await, Either::Right(9));
}

#[tokio::test]
async fn flat_map_err_rewrites_the_error_effectfully() {
    let failing: Io<u32, i32> = Io::fail_with(|| 500);
    let rewritten = failing.flat_map_err(|code| Io::fail_with(move || format!("http {code}")));
    assert_eq!(rewritten.run().await, Either::Left("http 500".to_string()));

    let fine: Io<u32, i32> = Io::succeed_with(|| 3);
    let untouched = fine.flat_map_err(|code| Io::fail_with(move || format!("http {code}")));
    assert_eq!(untouched.run().await, Either::Right(3));
}

#[tokio::test]
async fn effect_captures_a_future_panic_as_the_error() {
    let doomed: Task<i32> = Task::effect(|| async { panic!("kaboom") });
    match doomed.run().await {
        Either::Left(defect) => assert_eq!(defect.message(), Some("kaboom")),
        Either::Right(_) => panic!("expected the panic as a failure"),
    }
}

#[tokio::test]
#[allow(unreachable_code)]
async fn effect_captures_a_closure_panic_as_the_error() {
    let doomed: Task<i32> = Task::effect(|| {
        panic!("before the future");
        async { 1 }
    });
    match doomed.run().await {
        Either::Left(defect) => assert_eq!(defect.message(), Some("before the future")),
        Either::Right(_) => panic!("expected the panic as a failure"),
    }
}

#[tokio::test]
async fn effect_total_passes_values_straight_through() {
    let effect: Io<String, i32> = Io::effect_total(|| async { 6 * 7 });
    assert_eq!(effect.run().await, Either::Right(42));
}

#[derive(Debug, PartialEq)]
struct DbError(&'static str);

#[tokio::test]
async fn refine_or_die_narrows_a_matching_payload() {
    let task: Task<i32> = Task::effect(|| async { panic_any(DbError("connection reset")) });
    let refined: Io<DbError, i32> = task.refine_or_die();
    assert_eq!(refined.run().await, Either::Left(DbError("connection reset")));
}

#[tokio::test]
#[should_panic(expected = "not a DbError")]
async fn refine_or_die_aborts_on_a_mismatched_payload() {
    let task: Task<i32> = Task::effect(|| async { panic!("not a DbError") });
    let refined: Io<DbError, i32> = task.refine_or_die();
    let _ = refined.run().await;
}

#[tokio::test]
async fn timeout_fires_and_cancels_the_slow_evaluation() {
    let completed = Arc::new(AtomicBool::new(false));
    let inner_flag = completed.clone();

    let slow: Io<String, i32> = Io::effect_total(move || {
        let flag = inner_flag.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            flag.store(true, Ordering::SeqCst);
            1
        }
    });
    let bounded = slow.timeout(Duration::from_millis(50), |_| "deadline".to_string());

    let start = Instant::now();
    let outcome = bounded.run().await;
    let elapsed = start.elapsed();

    assert_eq!(outcome, Either::Left("deadline".to_string()));
    assert!(
        elapsed < Duration::from_millis(150),
        "timeout should fire at the deadline, took {elapsed:?}"
    );

    // The evaluation must be cancelled outright, not left to finish
    // in the background and be discarded.
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn timeout_passes_a_prompt_outcome_through_unchanged() {
    let quick: Io<String, i32> = Io::succeed_with(|| 11);
    let bounded = quick.timeout(Duration::from_secs(5), |_| "deadline".to_string());
    assert_eq!(bounded.run().await, Either::Right(11));

    let failing: Io<String, i32> = Io::fail_with(|| "typed".to_string());
    let bounded = failing.timeout(Duration::from_secs(5), |_| "deadline".to_string());
    assert_eq!(bounded.run().await, Either::Left("typed".to_string()));
}

#[tokio::test]
async fn for_each_observes_the_value_and_passes_it_through() {
    let seen = Arc::new(AtomicUsize::new(0));
    let probe = seen.clone();

    let effect: Io<String, usize> = Io::succeed_with(|| 13);
    let observed = effect.for_each(move |n| {
        probe.store(*n, Ordering::SeqCst);
    });

    assert_eq!(observed.run().await, Either::Right(13));
    assert_eq!(seen.load(Ordering::SeqCst), 13);
}

#[tokio::test]
async fn tap_discards_the_probe_outcome_entirely() {
    let probed = Arc::new(AtomicUsize::new(0));
    let probe = probed.clone();

    let effect: Io<String, usize> = Io::succeed_with(|| 21);
    let tapped = effect.tap(move |n| {
        probe.store(*n, Ordering::SeqCst);
        Io::<&str, ()>::fail("probe failure is invisible")
    });

    assert_eq!(tapped.run().await, Either::Right(21));
    assert_eq!(probed.load(Ordering::SeqCst), 21);
}

#[tokio::test]
async fn tap_err_observes_failures_only() {
    let observed = Arc::new(AtomicBool::new(false));
    let probe = observed.clone();

    let failing: Io<String, i32> = Io::fail_with(|| "observed".to_string());
    let tapped = failing.tap_err(move |_e| {
        probe.store(true, Ordering::SeqCst);
        Io::<&str, ()>::succeed_with(|| ())
    });
    assert_eq!(tapped.run().await, Either::Left("observed".to_string()));
    assert!(observed.load(Ordering::SeqCst));

    let fine: Io<String, i32> = Io::succeed_with(|| 1);
    let untouched = fine.tap_err(|_e| Io::<&str, ()>::succeed_with(|| ()));
    assert_eq!(untouched.run().await, Either::Right(1));
}

#[tokio::test]
async fn filter_or_fail_converts_rejected_values() {
    let effect: Io<String, i32> = Io::succeed_with(|| 7);
    let even_only = effect.filter_or_fail(|n| n % 2 == 0, |n| format!("{n} is odd"));
    assert_eq!(even_only.run().await, Either::Left("7 is odd".to_string()));

    let effect: Io<String, i32> = Io::succeed_with(|| 8);
    let even_only = effect.filter_or_fail(|n| n % 2 == 0, |n| format!("{n} is odd"));
    assert_eq!(even_only.run().await, Either::Right(8));
}

#[tokio::test]
async fn coalesce_fail_turns_success_into_failure() {
    let effect: Io<String, String> = Io::succeed_with(|| "was fine".to_string());
    let unproductive = effect.coalesce_fail(|value| value);
    assert_eq!(unproductive.run().await, Either::Left("was fine".to_string()));

    let failing: Io<String, String> = Io::fail_with(|| "already failed".to_string());
    let unproductive = failing.coalesce_fail(|value| value);
    assert_eq!(unproductive.run().await, Either::Left("already failed".to_string()));
}

#[tokio::test]
async fn from_either_and_from_result_lift_eager_outcomes() {
    let success: Io<String, i32> = Io::from_either(Either::Right(4));
    assert_eq!(success.run().await, Either::Right(4));

    let failure: Io<String, i32> = Io::from_result(Err("nope".to_string()));
    assert_eq!(failure.run().await, Either::Left("nope".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn on_evaluates_against_the_given_runtime() {
    let effect: Io<String, i32> = Io::succeed_with(|| 5);
    let switched = effect.on(Handle::current());
    assert_eq!(switched.run().await, Either::Right(5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn run_on_is_equivalent_to_switching_first() {
    let effect: Io<String, i32> = Io::succeed_with(|| 6);
    assert_eq!(effect.run_on(Handle::current()).await, Either::Right(6));
}

#[tokio::test]
async fn unfailing_effects_widen_into_any_error_type() {
    let total: Unfailing<i32> = Unfailing::succeed_with(|| 3);
    let widened: Io<String, i32> = total.into_failable();
    assert_eq!(widened.run().await, Either::Right(3));
}

#[tokio::test]
async fn cloned_descriptions_share_the_tree_and_rerun_independently() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = invocations.clone();

    let effect: Io<String, usize> = Io::succeed_with(move || probe.fetch_add(1, Ordering::SeqCst));
    let copy = effect.clone();

    assert_eq!(effect.run().await, Either::Right(0));
    assert_eq!(copy.run().await, Either::Right(1));
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}
