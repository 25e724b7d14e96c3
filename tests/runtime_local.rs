// ABOUTME: Integration tests for container runtime operations.
// ABOUTME: Tests run against the local Docker/Podman daemon and skip when none is found.

use neops::diagnostics::Diagnostics;
use neops::listing::collect_records;
use neops::records::normalize;
use neops::runtime::{BollardRuntime, ContainerOps, RuntimeInfo, detect_local};
use std::time::Duration;

/// Get local runtime, skipping test if unavailable or not answering.
async fn local_runtime() -> Option<BollardRuntime> {
    let info = detect_local().ok()?;
    let runtime = BollardRuntime::connect(&info, Duration::from_secs(30)).ok()?;
    runtime.ping().await.ok()?;
    Some(runtime)
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match local_runtime().await {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local container runtime found");
                return;
            }
        }
    };
}

#[tokio::test]
async fn runtime_info() {
    let runtime = require_runtime!();

    let info = runtime.info().await.expect("should get runtime info");

    assert!(
        !info.name.is_empty(),
        "runtime name should not be empty, got: {}",
        info.name
    );
}

#[tokio::test]
async fn runtime_ping() {
    let runtime = require_runtime!();
    runtime.ping().await.expect("ping should succeed");
}

#[tokio::test]
async fn listed_containers_can_be_inspected() {
    let runtime = require_runtime!();

    let ids = runtime
        .list_container_ids(true)
        .await
        .expect("list should succeed");

    for id in ids {
        // Containers can disappear between list and inspect.
        let Ok(raw) = runtime.inspect_container(&id).await else {
            continue;
        };
        if let Ok(record) = normalize(&raw) {
            assert_eq!(record.id, id.short());
        }
    }
}

#[tokio::test]
async fn collect_records_lists_all_containers() {
    let runtime = require_runtime!();
    let mut diag = Diagnostics::default();

    let records = collect_records(&runtime, true, &mut diag)
        .await
        .expect("listing should succeed");

    let running_only = collect_records(&runtime, false, &mut Diagnostics::default())
        .await
        .expect("listing should succeed");

    // Containers may start or stop between the two calls, so only sanity-check.
    for record in records.iter().chain(running_only.iter()) {
        assert_eq!(record.id.len(), 12);
    }
}
