//! Deployment collection contracts (COLL-001 through COLL-004)
//!
//! The collection never caches: each read reflects the remote state at
//! the time of the read.

use crate::common::*;

/// CONTRACT COLL-001: Every lookup lists deployments again
#[test]
fn contract_each_read_is_a_request() {
    let client = memory_client();
    let api = client.api().transport();
    let id = api.seed_deployment("site", &[]);
    let deployments = client.deployments();

    for _ in 0..3 {
        deployments.get(&id).unwrap();
    }

    assert_eq!(api.request_count(), 3);
    assert!(api.requests().iter().all(|r| r.path == "deployments"));
}

/// CONTRACT COLL-002: Deployments created elsewhere are visible immediately
#[test]
fn contract_remote_changes_visible() {
    let client = memory_client();
    let deployments = client.deployments();
    assert_eq!(deployments.len().unwrap(), 0);

    let id = client.api().transport().seed_deployment("elsewhere", &[]);

    assert_eq!(deployments.ids().unwrap(), vec![id]);
}

/// CONTRACT COLL-003: Records carry the payload's id and creation time
#[test]
fn contract_record_matches_payload() {
    let client = memory_client();
    let api = client.api().transport();
    api.seed_deployment("a", &[]);
    api.seed_deployment("b", &[]);

    let payloads = client.api().list_deployments().unwrap();
    let deployments = client.deployments();

    for payload in payloads {
        let id = payload["uid"].as_str().unwrap();
        let deployment = deployments.get(id).unwrap();
        assert_eq!(deployment.id(), id);
        assert_eq!(
            deployment.created_at().timestamp_millis(),
            payload["created"].as_i64().unwrap()
        );
    }
}

/// CONTRACT COLL-004: Failures surface as errors, never as empty results
#[test]
fn contract_failures_are_not_empty_listings() {
    let client = memory_client();
    client.api().transport().fail_next(503, "maintenance");

    let err = client.deployments().len().unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}
