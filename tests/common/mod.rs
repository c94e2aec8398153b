use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use boot_runner::prelude::*;

/// A step that completes immediately with success.
pub fn ok_step(name: &str, mode: StepMode) -> BootStep {
    BootStep::new(name, mode, |_| StepOutcome::ok())
}

/// A step that completes immediately with the given failure message.
pub fn failing_step(name: &str, mode: StepMode, message: &str) -> BootStep {
    let message = message.to_string();
    BootStep::new(name, mode, move |_| StepOutcome::failure(message.clone()))
}

/// A step that blocks for `delay` before succeeding.
pub fn slow_ok_step(name: &str, mode: StepMode, delay: Duration) -> BootStep {
    BootStep::new(name, mode, move |_| {
        thread::sleep(delay);
        StepOutcome::ok()
    })
}

/// A step that appends its name to the shared log, then succeeds.
pub fn recording_step(name: &str, mode: StepMode, log: Arc<Mutex<Vec<String>>>) -> BootStep {
    let entry = name.to_string();
    BootStep::new(name, mode, move |_| {
        log.lock().unwrap().push(entry.clone());
        StepOutcome::ok()
    })
}

/// A step that polls the cancellation signal for up to two seconds and
/// succeeds only once it observes the signal set.
pub fn cancellation_watcher(name: &str, mode: StepMode) -> BootStep {
    BootStep::new(name, mode, |state| {
        for _ in 0..200 {
            if state.is_cancelled() {
                return StepOutcome::ok();
            }
            thread::sleep(Duration::from_millis(10));
        }
        StepOutcome::failure("cancellation never observed")
    })
}

/// Collects progress callback values for later assertions.
#[derive(Clone, Default)]
pub struct ProgressRecorder {
    values: Arc<Mutex<Vec<u8>>>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A closure suitable for `BootRunner::on_progress`.
    pub fn sink(&self) -> impl Fn(u8) + Send + Sync + 'static {
        let values = Arc::clone(&self.values);
        move |pct| values.lock().unwrap().push(pct)
    }

    pub fn values(&self) -> Vec<u8> {
        self.values.lock().unwrap().clone()
    }
}
