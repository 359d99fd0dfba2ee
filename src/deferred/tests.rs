// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Deferred, on_fail, on_success, reject, resolve};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_reject_is_failed() {
    let result = reject::<u32, &str>("no project").await;
    assert_eq!(result, Err("no project"));
}

#[tokio::test]
async fn test_on_fail_keeps_rejection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(None));

    let counter = Arc::clone(&calls);
    let sink = Arc::clone(&seen);
    let result = on_fail(
        move |reason: &String| {
            counter.fetch_add(1, Ordering::SeqCst);
            *sink.lock().unwrap() = Some(reason.clone());
        },
        reject::<(), String>("build failed".to_string()),
    )
    .await;

    assert_eq!(result, Err("build failed".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(seen.lock().unwrap().as_deref(), Some("build failed"));
}

#[tokio::test]
async fn test_on_success_keeps_payload() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let result = on_success(
        move |value: &i32| {
            assert_eq!(*value, 42);
            counter.fetch_add(1, Ordering::SeqCst);
        },
        resolve::<i32, String>(42),
    )
    .await;

    assert_eq!(result, Ok(42));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_taps_skip_other_disposition() {
    let calls = Arc::new(AtomicUsize::new(0));

    let on_ok = Arc::clone(&calls);
    let failed = Deferred::<u8, &str>::rejected("boom")
        .on_success(move |_| {
            on_ok.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    let on_err = Arc::clone(&calls);
    let fulfilled = Deferred::<u8, &str>::resolved(7)
        .on_fail(move |_| {
            on_err.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    assert_eq!(failed, Err("boom"));
    assert_eq!(fulfilled, Ok(7));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chained_taps_run_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&log);
    let second = Arc::clone(&log);
    let third = Arc::clone(&log);
    let result = Deferred::<&str, &str>::new(async { Err("exit 1") })
        .on_fail(move |e| first.lock().unwrap().push(format!("fail:{e}")))
        .on_success(move |v| second.lock().unwrap().push(format!("ok:{v}")))
        .on_fail(move |e| third.lock().unwrap().push(format!("again:{e}")))
        .await;

    assert_eq!(result, Err("exit 1"));
    assert_eq!(*log.lock().unwrap(), vec!["fail:exit 1", "again:exit 1"]);
}

#[tokio::test]
async fn test_map_transforms_payload_only() {
    let doubled = Deferred::<i32, String>::resolved(21).map(|v| v * 2).await;
    let untouched = Deferred::<i32, String>::rejected("bad".into())
        .map(|v| v * 2)
        .await;

    assert_eq!(doubled, Ok(42));
    assert_eq!(untouched, Err("bad".to_string()));
}
