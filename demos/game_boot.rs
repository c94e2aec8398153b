//! Game startup sequence example
//!
//! Run with: cargo run --example game_boot

use std::thread;
use std::time::Duration;

use boot_runner::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("boot_runner=debug")
        .init();

    let plan = BootPlan::build(vec![
        BootStep::new("verify-core-components", StepMode::Sequential, |_state| {
            thread::sleep(Duration::from_millis(300));
            StepOutcome::ok()
        }),
        // An optional component check that is allowed to fail
        BootStep::new("verify-optional-components", StepMode::Sequential, |_| {
            thread::sleep(Duration::from_millis(200));
            StepOutcome::failure("optional renderer plugin not found")
        })
        .with_suppress_error(true),
        BootStep::new("download-catalog", StepMode::Parallel, |state| {
            thread::sleep(Duration::from_millis(400));
            if state.is_cancelled() {
                return StepOutcome::failure("catalog download cancelled");
            }
            StepOutcome::ok()
        }),
        BootStep::new("download-remote-config", StepMode::Parallel, |_| {
            thread::sleep(Duration::from_millis(250));
            StepOutcome::ok()
        }),
        // Deliberately slower than its timeout; suppressed so boot continues
        BootStep::new("prepare-characters", StepMode::Parallel, |_| {
            thread::sleep(Duration::from_secs(3));
            StepOutcome::ok()
        })
        .with_timeout(Duration::from_secs(1))
        .with_suppress_error(true),
        BootStep::new("prepare-scenes", StepMode::Parallel, |state| {
            // Cooperative loop: bail out early if the run gets cancelled
            for _ in 0..10 {
                if state.is_cancelled() {
                    return StepOutcome::failure("scene preparation cancelled");
                }
                thread::sleep(Duration::from_millis(50));
            }
            StepOutcome::ok()
        }),
        BootStep::new("upload-session-report", StepMode::Parallel, |_| {
            thread::sleep(Duration::from_millis(150));
            StepOutcome::ok()
        }),
        BootStep::new("show-consent-prompt", StepMode::Forget, |_| {
            thread::sleep(Duration::from_secs(2));
            StepOutcome::ok()
        }),
    ])?;

    let runner = BootRunner::new().on_progress(|pct| println!("boot progress: {pct}%"));

    println!("Starting boot sequence...");
    let outcome = runner.run(&plan).await;

    println!("\n=== Boot Result ===");
    println!("Run ID: {}", outcome.run_id);
    println!("Success: {}", outcome.success);
    println!("Steps completed: {}", outcome.completed_steps);
    if let Some(message) = &outcome.message {
        println!("Message: {}", message);
    }

    Ok(())
}
