// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the deferred adapter.

use ionide_rs::deferred::{Deferred, on_fail, on_success, reject, resolve};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn deferred_taps_compose_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (Arc::clone(&seen), Arc::clone(&seen));

    let deferred: Deferred<u32, String> = resolve(7);
    let deferred = on_success(move |v: &u32| a.lock().unwrap().push(format!("first {v}")), deferred);
    let deferred = on_success(move |v: &u32| b.lock().unwrap().push(format!("second {v}")), deferred);

    assert_eq!(deferred.await, Ok(7));
    assert_eq!(*seen.lock().unwrap(), vec!["first 7", "second 7"]);
}

#[tokio::test]
async fn deferred_rejection_passes_through() {
    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&failures);

    let deferred = on_fail(
        move |e: &String| sink.lock().unwrap().push(e.clone()),
        reject::<u32, String>("restore failed".to_string()),
    )
    .on_success(|_| panic!("success tap must not run"));

    assert_eq!(deferred.await, Err("restore failed".to_string()));
    assert_eq!(*failures.lock().unwrap(), vec!["restore failed"]);
}

#[tokio::test]
async fn deferred_from_spawned_work() {
    let deferred = Deferred::<usize, std::io::Error>::new(async {
        let text = tokio::task::spawn_blocking(|| "a b c".to_string())
            .await
            .map_err(std::io::Error::other)?;
        Ok::<_, std::io::Error>(text.split(' ').count())
    })
    .map(|n| n * 2);

    assert_eq!(deferred.await.unwrap(), 6);
}
