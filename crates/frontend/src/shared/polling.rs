//! Periodic work bound to a page's lifetime.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run `tick` every `period_ms` until the current owner is cleaned up.
///
/// The first tick fires one period after the call.
pub fn poll_while_mounted(period_ms: u32, tick: impl Fn() + 'static) {
    let alive = Arc::new(AtomicBool::new(true));
    let running = alive.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            if !running.load(Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
