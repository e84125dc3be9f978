//! Parity between the synchronous protocol and the pending-computation proxy.
//!
//! Every combinator applied through a `FutureOutcome::ready(..)` proxy must
//! produce the identical `Outcome` as the synchronous form.

use watershed::{FutureOutcome, Outcome, Trace};

fn samples() -> Vec<Outcome<i32, String>> {
    vec![
        Outcome::ok(42),
        Outcome::err("boom".to_string()),
        Outcome::err_with_trace("traced".to_string(), Trace::message("origin")),
    ]
}

fn assert_same(sync: &Outcome<i32, String>, via_proxy: &Outcome<i32, String>) {
    assert_eq!(sync, via_proxy);
    // Equality ignores diagnostics, so compare the rendered traces too.
    let rendered = |o: &Outcome<i32, String>| o.trace().map(Trace::to_string);
    assert_eq!(rendered(sync), rendered(via_proxy));
}

#[tokio::test]
async fn map_parity() {
    for outcome in samples() {
        let sync = outcome.clone().map(|n| n + 1);
        let proxied = FutureOutcome::ready(outcome).map(|n| n + 1).await;
        assert_same(&sync, &proxied);
    }
}

#[tokio::test]
async fn map_err_parity() {
    for outcome in samples() {
        let sync = outcome.clone().map_err(|e| format!("wrapped: {}", e));
        let proxied = FutureOutcome::ready(outcome)
            .map_err(|e| format!("wrapped: {}", e))
            .await;
        assert_same(&sync, &proxied);
    }
}

#[tokio::test]
async fn and_then_parity() {
    let halve = |n: i32| Outcome::from_condition(n % 2 == 0, n / 2, "odd".to_string());
    for outcome in samples() {
        let sync = outcome.clone().and_then(halve);
        let proxied = FutureOutcome::ready(outcome).and_then(halve).await;
        assert_same(&sync, &proxied);
    }
}

#[tokio::test]
async fn or_else_parity_including_trace_chaining() {
    let recover = |e: String| {
        Outcome::<i32, String>::err_with_trace(e, Trace::message("recovery also failed"))
    };
    for outcome in samples() {
        let sync = outcome.clone().or_else(recover);
        let proxied = FutureOutcome::ready(outcome).or_else(recover).await;
        assert_same(&sync, &proxied);
    }
}

#[tokio::test]
async fn fold_parity() {
    for outcome in samples() {
        let sync = outcome
            .clone()
            .fold(|n| format!("ok {}", n), |e| format!("err {}", e));
        let proxied = FutureOutcome::ready(outcome)
            .fold(|n| format!("ok {}", n), |e| format!("err {}", e))
            .await;
        assert_eq!(sync, proxied);
    }
}

#[tokio::test]
async fn unwrap_or_parity() {
    for outcome in samples() {
        let sync = outcome.clone().unwrap_or(0);
        let proxied = FutureOutcome::ready(outcome).unwrap_or(0).await;
        assert_eq!(sync, proxied);
    }
}

#[tokio::test]
async fn containment_parity() {
    for outcome in samples() {
        let sync = outcome.contains(&42);
        let proxied = FutureOutcome::ready(outcome.clone()).contains(&42).await;
        assert_eq!(sync, proxied);

        let sync_err = outcome.contains_err(&"boom".to_string());
        let proxied_err = FutureOutcome::ready(outcome)
            .contains_err(&"boom".to_string())
            .await;
        assert_eq!(sync_err, proxied_err);
    }
}

#[tokio::test]
async fn async_transforms_match_sync_transforms() {
    for outcome in samples() {
        let sync = outcome.clone().map(|n| n * 3);
        let via_async = outcome
            .clone()
            .map_async(|n| async move { n * 3 })
            .await;
        assert_same(&sync, &via_async);

        let proxied = FutureOutcome::ready(outcome)
            .map_async(|n| async move { n * 3 })
            .await;
        assert_same(&sync, &proxied);
    }
}

#[tokio::test]
async fn long_chain_runs_strictly_in_sequence() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let step = Arc::new(AtomicUsize::new(0));
    let expect_step = |expected: usize, step: &Arc<AtomicUsize>| {
        let step = Arc::clone(step);
        move |n: i32| {
            let observed = step.fetch_add(1, Ordering::SeqCst);
            assert_eq!(observed, expected);
            n
        }
    };

    let outcome = FutureOutcome::ready(Outcome::<i32, String>::ok(1))
        .map(expect_step(0, &step))
        .map_async({
            let step = Arc::clone(&step);
            move |n| async move {
                assert_eq!(step.fetch_add(1, Ordering::SeqCst), 1);
                n
            }
        })
        .map(expect_step(2, &step))
        .await;

    assert_eq!(outcome, Outcome::ok(1));
    assert_eq!(step.load(Ordering::SeqCst), 3);
}
