//! End-to-end pipelines composing construction, evaluation, recovery,
//! resource safety, and concurrency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tarn::{combine3, par, Either, Io, Task, Validated};

fn fetch_record(id: u32, delay: Duration) -> Io<String, String> {
    Io::effect_total(move || async move {
        tokio::time::sleep(delay).await;
        format!("record-{id}")
    })
}

#[tokio::test]
async fn a_full_pipeline_runs_lazily_and_repeatedly() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let probe = fetches.clone();

    let pipeline: Io<String, String> = Io::succeed_with(move || {
        probe.fetch_add(1, Ordering::SeqCst);
        7u32
    })
    .filter_or_fail(|id| *id != 0, |id| format!("bad id {id}"))
    .and_then(|id| fetch_record(id, Duration::from_millis(5)))
    .map(|record| record.to_uppercase());

    // Construction alone must not execute anything.
    assert_eq!(fetches.load(Ordering::SeqCst), 0);

    assert_eq!(pipeline.run().await, Either::Right("RECORD-7".to_string()));
    assert_eq!(pipeline.run().await, Either::Right("RECORD-7".to_string()));
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn recovery_turns_a_failed_fetch_into_a_fallback() {
    let primary: Io<String, String> = Io::fail_with(|| "primary unreachable".to_string());
    let attempts = Arc::new(AtomicUsize::new(0));
    let probe = attempts.clone();

    let served = primary
        .tap_err(move |_e| {
            probe.fetch_add(1, Ordering::SeqCst);
            Io::<String, ()>::succeed_with(|| ())
        })
        .recover(|_: String| fetch_record(1, Duration::from_millis(1)));

    assert_eq!(served.run().await, Either::Right("record-1".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn parallel_aggregation_respects_input_order_and_deadline() {
    let aggregate = par(vec![
        fetch_record(1, Duration::from_millis(40)),
        fetch_record(2, Duration::from_millis(10)),
        fetch_record(3, Duration::from_millis(25)),
    ])
    .timeout(Duration::from_secs(2), |_| "aggregation deadline".to_string());

    let start = Instant::now();
    let outcome = aggregate.run().await;
    let elapsed = start.elapsed();

    assert_eq!(
        outcome,
        Either::Right(vec![
            "record-1".to_string(),
            "record-2".to_string(),
            "record-3".to_string(),
        ])
    );
    assert!(
        elapsed < Duration::from_millis(200),
        "expected concurrent fetches, took {elapsed:?}"
    );
}

#[tokio::test]
async fn a_slow_aggregation_fails_with_the_deadline_error() {
    let aggregate = par(vec![fetch_record(1, Duration::from_millis(500))])
        .timeout(Duration::from_millis(30), |_| "aggregation deadline".to_string());

    assert_eq!(
        aggregate.run().await,
        Either::Left("aggregation deadline".to_string())
    );
}

#[tokio::test]
async fn bracketed_sessions_release_even_when_work_panics() {
    let open_sessions = Arc::new(AtomicUsize::new(0));

    let opens = open_sessions.clone();
    let closes = open_sessions.clone();
    let session_work: Task<usize> = Task::bracket(
        move || {
            opens.fetch_add(1, Ordering::SeqCst);
            "session-42".to_string()
        },
        |session: &String| {
            let id = session.clone();
            async move {
                if id.ends_with("42") {
                    panic!("query failed on {id}");
                }
                id.len()
            }
        },
        move |_session| {
            closes.fetch_sub(1, Ordering::SeqCst);
        },
    );

    match session_work.run().await {
        Either::Left(defect) => {
            assert_eq!(defect.message(), Some("query failed on session-42"));
        }
        Either::Right(_) => panic!("expected the query panic as a failure"),
    }
    assert_eq!(open_sessions.load(Ordering::SeqCst), 0, "session leaked");
}

#[tokio::test]
async fn defects_refine_into_typed_errors_and_recover() {
    #[derive(Debug, Clone, PartialEq)]
    struct QueryError {
        code: u32,
    }

    let flaky: Task<String> = Task::effect(|| async {
        std::panic::panic_any(QueryError { code: 1205 })
    });

    let handled = flaky
        .refine_or_die::<QueryError>()
        .recover(|err: QueryError| {
            Io::<QueryError, String>::succeed_with(move || format!("retried after {}", err.code))
        });

    assert_eq!(
        handled.run().await,
        Either::Right("retried after 1205".to_string())
    );
}

#[tokio::test]
async fn validated_input_feeds_the_effect_layer() {
    fn field(name: &'static str, value: &str) -> Validated<String, Vec<String>> {
        if value.is_empty() {
            Validated::invalid(vec![format!("{name} is required")])
        } else {
            Validated::valid(value.to_string())
        }
    }

    let assembled = combine3(
        field("host", "db.internal"),
        field("user", ""),
        field("password", ""),
        |host, user, _password| format!("{user}@{host}"),
    );

    let connect: Io<Vec<String>, String> = Io::from_either(assembled.into_either())
        .and_then(|dsn| Io::succeed_with(move || format!("connected to {dsn}")));

    assert_eq!(
        connect.run().await,
        Either::Left(vec![
            "user is required".to_string(),
            "password is required".to_string(),
        ])
    );
}
