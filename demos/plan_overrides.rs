//! Step override config example
//!
//! Run with: cargo run --example plan_overrides

use std::thread;
use std::time::Duration;

use boot_runner::prelude::*;

const OVERRIDES_YAML: &str = include_str!("fixtures/boot_overrides.yaml");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("boot_runner=info")
        .init();

    let mut plan = BootPlan::build(vec![
        BootStep::new("download-catalog", StepMode::Parallel, |_| {
            thread::sleep(Duration::from_millis(200));
            StepOutcome::ok()
        }),
        BootStep::new("download-remote-config", StepMode::Parallel, |_| {
            thread::sleep(Duration::from_millis(100));
            StepOutcome::ok()
        }),
        // Flaky in this demo; the override config marks it non-fatal
        BootStep::new("upload-session-report", StepMode::Parallel, |_| {
            StepOutcome::failure("telemetry endpoint unreachable")
        }),
    ])?;

    println!("Before overrides:");
    for step in plan.steps() {
        println!(
            "  {} timeout={:?} suppress_error={}",
            step.name(),
            step.timeout(),
            step.suppress_error()
        );
    }

    let config = PlanConfig::from_yaml(OVERRIDES_YAML)?;
    config.apply(&mut plan)?;

    println!("\nAfter overrides:");
    for step in plan.steps() {
        println!(
            "  {} timeout={:?} suppress_error={}",
            step.name(),
            step.timeout(),
            step.suppress_error()
        );
    }

    let outcome = BootRunner::new().run(&plan).await;

    println!("\n=== Boot Result ===");
    println!("Success: {}", outcome.success);
    if let Some(message) = &outcome.message {
        println!("Message: {}", message);
    }

    Ok(())
}
