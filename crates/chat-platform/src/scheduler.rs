//! Delayed tasks on the browser event loop via gloo-timers.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

use chat_core::ports::{ScheduledTask, SchedulerPort};

#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulerPort for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let handle = ScheduledTask::new();
        let guard = handle.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if guard.is_cancelled() {
                log::debug!("Scheduled task cancelled before it ran");
                return;
            }
            task();
        });

        handle
    }
}
