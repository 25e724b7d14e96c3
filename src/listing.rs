// ABOUTME: Collects display records for every container known to a runtime.
// ABOUTME: A failed list call fails the listing; a failed container is skipped and reported.

use crate::diagnostics::{Diagnostics, Warning};
use crate::records::{DisplayRecord, normalize};
use crate::runtime::{ContainerError, ContainerOps};
use tracing::debug;

/// List containers (stopped ones too when `all` is set) and normalize each.
///
/// Records keep the order the runtime listed them in. Containers that cannot
/// be inspected or normalized are left out and recorded in `diagnostics`.
pub async fn collect_records<R>(
    runtime: &R,
    all: bool,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<DisplayRecord>, ContainerError>
where
    R: ContainerOps + ?Sized,
{
    let ids = runtime.list_container_ids(all).await?;
    debug!(count = ids.len(), all, "listed containers");

    let mut records = Vec::with_capacity(ids.len());
    for id in &ids {
        let raw = match runtime.inspect_container(id).await {
            Ok(raw) => raw,
            Err(e) => {
                diagnostics.warn(Warning::inspect_failed(id.short(), e.to_string()));
                continue;
            }
        };

        match normalize(&raw) {
            Ok(record) => records.push(record),
            Err(e) => diagnostics.warn(Warning::malformed_record(id.short(), e.to_string())),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::WarningKind;
    use crate::runtime::traits::sealed::Sealed;
    use crate::runtime::{HostBinding, NetworkEndpoint, RawContainer};
    use crate::types::ContainerId;
    use async_trait::async_trait;
    use std::sync::Once;

    static TRACING: Once = Once::new();

    /// Route `warn!` output from the collector through the test harness.
    fn init_tracing() {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("neops=debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// In-memory runtime returning canned inspect results.
    #[derive(Default)]
    struct FakeRuntime {
        containers: Vec<(ContainerId, Result<RawContainer, String>)>,
        list_error: Option<String>,
        stopped: Vec<ContainerId>,
    }

    impl Sealed for FakeRuntime {}

    #[async_trait]
    impl ContainerOps for FakeRuntime {
        async fn list_container_ids(&self, all: bool) -> Result<Vec<ContainerId>, ContainerError> {
            if let Some(msg) = &self.list_error {
                return Err(ContainerError::Runtime(msg.clone()));
            }
            Ok(self
                .containers
                .iter()
                .map(|(id, _)| id.clone())
                .filter(|id| all || !self.stopped.contains(id))
                .collect())
        }

        async fn inspect_container(
            &self,
            id: &ContainerId,
        ) -> Result<RawContainer, ContainerError> {
            self.containers
                .iter()
                .find(|(candidate, _)| candidate == id)
                .map(|(_, result)| result.clone().map_err(ContainerError::NotFound))
                .unwrap_or_else(|| Err(ContainerError::NotFound(id.to_string())))
        }
    }

    fn raw(id: &str, name: &str) -> RawContainer {
        RawContainer {
            id: Some(id.to_string()),
            image: Some("redis:7".to_string()),
            command: Some(vec!["redis-server".to_string()]),
            created: Some("2024-05-01T10:00:00Z".to_string()),
            status: Some("running".to_string()),
            name: Some(name.to_string()),
            ports: vec![("6379/tcp".to_string(), Some(vec![HostBinding::port("6379")]))],
            networks: vec![("bridge".to_string(), NetworkEndpoint::default())],
        }
    }

    fn entry(id: &str, name: &str) -> (ContainerId, Result<RawContainer, String>) {
        (ContainerId::new(id), Ok(raw(id, name)))
    }

    const ID_A: &str = "aaaaaaaaaaaa1111111111111111";
    const ID_B: &str = "bbbbbbbbbbbb2222222222222222";
    const ID_C: &str = "cccccccccccc3333333333333333";

    #[tokio::test]
    async fn records_follow_listing_order() {
        let runtime = FakeRuntime {
            containers: vec![entry(ID_B, "/second"), entry(ID_A, "/first")],
            ..Default::default()
        };
        init_tracing();
        let mut diag = Diagnostics::default();

        let records = collect_records(&runtime, true, &mut diag).await.unwrap();

        let names: Vec<_> = records.iter().map(|r| r.names.as_str()).collect();
        assert_eq!(names, ["/second", "/first"]);
        assert_eq!(records[0].id, "bbbbbbbbbbbb");
        assert!(!diag.has_warnings());
    }

    #[tokio::test]
    async fn malformed_record_is_skipped_and_reported() {
        let mut broken = raw(ID_B, "/broken");
        broken.image = None;

        let runtime = FakeRuntime {
            containers: vec![
                entry(ID_A, "/first"),
                (ContainerId::new(ID_B), Ok(broken)),
                entry(ID_C, "/third"),
            ],
            ..Default::default()
        };
        init_tracing();
        let mut diag = Diagnostics::default();

        let records = collect_records(&runtime, true, &mut diag).await.unwrap();

        let names: Vec<_> = records.iter().map(|r| r.names.as_str()).collect();
        assert_eq!(names, ["/first", "/third"]);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].kind, WarningKind::MalformedRecord);
        assert_eq!(diag.warnings()[0].container, "bbbbbbbbbbbb");
        assert!(diag.warnings()[0].reason.contains("Image"));
    }

    #[tokio::test]
    async fn failed_inspect_is_skipped_and_reported() {
        let runtime = FakeRuntime {
            containers: vec![
                (ContainerId::new(ID_A), Err("No such container".to_string())),
                entry(ID_B, "/survivor"),
            ],
            ..Default::default()
        };
        init_tracing();
        let mut diag = Diagnostics::default();

        let records = collect_records(&runtime, true, &mut diag).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].names, "/survivor");
        assert_eq!(diag.warnings()[0].kind, WarningKind::InspectFailed);
        assert_eq!(diag.warnings()[0].container, "aaaaaaaaaaaa");
        assert!(diag.warnings()[0].reason.contains("No such container"));
    }

    #[tokio::test]
    async fn list_failure_returns_error() {
        let runtime = FakeRuntime {
            containers: vec![entry(ID_A, "/first")],
            list_error: Some("daemon went away".to_string()),
            ..Default::default()
        };
        init_tracing();
        let mut diag = Diagnostics::default();

        let err = collect_records(&runtime, true, &mut diag)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("daemon went away"));
        assert!(!diag.has_warnings());
    }

    #[tokio::test]
    async fn stopped_containers_need_all_flag() {
        let runtime = FakeRuntime {
            containers: vec![entry(ID_A, "/up"), entry(ID_B, "/down")],
            stopped: vec![ContainerId::new(ID_B)],
            ..Default::default()
        };
        init_tracing();
        let mut diag = Diagnostics::default();

        let running = collect_records(&runtime, false, &mut diag).await.unwrap();
        assert_eq!(running.len(), 1);

        let all = collect_records(&runtime, true, &mut diag).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
