// ionide-rs: Ionide editor tooling support
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deferred values with side-effect taps.
//!
//! ```text
//! Deferred<T, E>  (boxed future of Result<T, E>)
//!   resolve(v) / reject(e)
//!   .on_success(|v| ..)  --> same Ok(v)   (skipped on Err)
//!   .on_fail(|e| ..)     --> same Err(e)  (skipped on Ok)
//!   .await               --> Result<T, E>
//! ```
//!
//! Taps never change the disposition: a failed value stays failed after
//! `on_fail`, a fulfilled value keeps its payload after `on_success`.

use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A value that settles exactly once to either a payload or a failure reason.
#[must_use = "deferred values do nothing unless awaited"]
pub struct Deferred<T, E> {
    inner: BoxFuture<'static, Result<T, E>>,
}

impl<T, E> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wraps a future resolving to `Result<T, E>`.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            inner: future.boxed(),
        }
    }

    /// Already-fulfilled deferred value.
    pub fn resolved(value: T) -> Self {
        Self::from_result(Ok(value))
    }

    /// Already-failed deferred value.
    pub fn rejected(reason: E) -> Self {
        Self::from_result(Err(reason))
    }

    pub fn from_result(result: Result<T, E>) -> Self {
        Self::new(std::future::ready(result))
    }

    /// Runs `effect` with the payload once this value fulfils.
    ///
    /// The returned value fulfils with the same payload; the effect never runs
    /// if this value fails.
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::new(self.inner.inspect(move |result| {
            if let Ok(value) = result {
                effect(value);
            }
        }))
    }

    /// Runs `effect` with the failure reason once this value fails.
    ///
    /// The returned value re-rejects with the same reason; the effect never
    /// runs if this value fulfils.
    pub fn on_fail<F>(self, effect: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::new(self.inner.inspect(move |result| {
            if let Err(reason) = result {
                effect(reason);
            }
        }))
    }

    /// Transforms the payload, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Deferred<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::new(self.inner.map(move |result| result.map(f)))
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Produces an already-failed deferred value carrying `reason`.
pub fn reject<T, E>(reason: E) -> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    Deferred::rejected(reason)
}

/// Produces an already-fulfilled deferred value carrying `value`.
pub fn resolve<T, E>(value: T) -> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    Deferred::resolved(value)
}

/// Function form of [`Deferred::on_success`].
pub fn on_success<T, E, F>(effect: F, deferred: Deferred<T, E>) -> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&T) + Send + 'static,
{
    deferred.on_success(effect)
}

/// Function form of [`Deferred::on_fail`].
pub fn on_fail<T, E, F>(effect: F, deferred: Deferred<T, E>) -> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&E) + Send + 'static,
{
    deferred.on_fail(effect)
}

#[cfg(test)]
mod tests;
