//! ---
//! vk_section: "05-testing"
//! vk_subsection: "integration-tests"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Integration and validation tests for the VoltKit stack."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc;

use voltkit_cache::{
    AssetManifest, CacheWorker, CachedResource, Fetcher, Result as CacheResult, ServedFrom,
    WorkerMessage,
};

struct FakeNetwork {
    online: AtomicBool,
    resources: HashMap<String, String>,
}

impl FakeNetwork {
    fn new(resources: &[(&str, &str)]) -> Self {
        Self {
            online: AtomicBool::new(true),
            resources: resources
                .iter()
                .map(|(p, b)| ((*p).to_owned(), (*b).to_owned()))
                .collect(),
        }
    }

    fn disconnect(&self) {
        self.online.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Fetcher for FakeNetwork {
    async fn fetch(&self, path: &str) -> CacheResult<CachedResource> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(voltkit_cache::CacheError::Network {
                path: path.to_owned(),
                reason: "disconnected".to_owned(),
            });
        }
        self.resources
            .get(path)
            .map(|body| CachedResource::new(body.as_bytes(), "text/html"))
            .ok_or_else(|| voltkit_cache::CacheError::Network {
                path: path.to_owned(),
                reason: "404".to_owned(),
            })
    }
}

fn page_manifest() -> AssetManifest {
    AssetManifest::new(
        "calc-v1",
        vec![
            "/index.html".into(),
            "/style.css".into(),
            "/chart.min.js".into(),
        ],
    )
}

#[tokio::test]
async fn page_loads_offline_after_install() {
    let network = FakeNetwork::new(&[
        ("/index.html", "<html>calculator</html>"),
        ("/style.css", "body{}"),
        ("/chart.min.js", "chart()"),
    ]);
    let mut worker = CacheWorker::new(page_manifest());
    worker.install(&network).await.unwrap();
    worker.activate(chrono::Utc::now());

    network.disconnect();
    for path in ["/index.html", "/style.css", "/chart.min.js"] {
        let response = worker.fetch(path, &network).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.served_from, ServedFrom::Cache);
    }
}

#[tokio::test]
async fn calculation_payload_handed_over_is_served_offline() {
    let network = FakeNetwork::new(&[("/index.html", "<html>"), ("/style.css", ""), (
        "/chart.min.js",
        "",
    )]);
    let mut worker = CacheWorker::new(page_manifest());
    worker.install(&network).await.unwrap();

    // The calculator context hands the payload over the message channel;
    // no memory is shared between the two contexts.
    let (tx, mut rx) = mpsc::channel(1);
    tx.send(WorkerMessage::CachePayload {
        path: "/api/calculation".into(),
        resource: CachedResource::new("{\"power\":460,\"energy\":5.0}", "application/json"),
    })
    .await
    .unwrap();
    let message = rx.recv().await.unwrap();
    worker.handle_message(message);

    network.disconnect();
    let response = worker.fetch("/api/calculation", &network).await;
    assert_eq!(response.served_from, ServedFrom::Cache);
    assert_eq!(response.resource.body, b"{\"power\":460,\"energy\":5.0}");
}

#[tokio::test]
async fn unknown_resource_offline_gets_synthesized_response() {
    let network = FakeNetwork::new(&[("/index.html", ""), ("/style.css", ""), ("/chart.min.js", "")]);
    let mut worker = CacheWorker::new(page_manifest());
    worker.install(&network).await.unwrap();

    network.disconnect();
    let response = worker.fetch("/never-seen.png", &network).await;
    assert_eq!(response.status, 503);
    assert_eq!(response.served_from, ServedFrom::Synthesized);
}

#[tokio::test]
async fn version_bump_purges_the_previous_caches() {
    let network = FakeNetwork::new(&[("/index.html", "v1"), ("/style.css", ""), ("/chart.min.js", "")]);
    let mut worker = CacheWorker::new(page_manifest());
    worker.install(&network).await.unwrap();
    worker.activate(chrono::Utc::now());
    assert!(!worker.store().cache_names().is_empty());

    // New deploy: the successor worker takes over the cache storage under a
    // bumped version tag. Install repopulates, activation sweeps v1.
    let mut worker = CacheWorker::with_store(
        AssetManifest::new(
            "calc-v2",
            vec!["/index.html".into(), "/style.css".into(), "/chart.min.js".into()],
        ),
        worker.into_store(),
    );
    worker.install(&network).await.unwrap();
    let purged = worker.activate(chrono::Utc::now());
    assert!(purged >= 1);

    let names = worker.store().cache_names();
    assert!(names.contains(&"calc-v2-static".to_owned()));
    assert!(!names.contains(&"calc-v1-static".to_owned()));
}
