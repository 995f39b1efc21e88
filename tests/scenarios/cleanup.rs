//! Scenario: Clean up old deployments
//!
//! Journey: A user lists deployments, deletes the stale ones and checks
//! that only the fresh one remains.

use crate::common::*;

/// SCENARIO: Delete all but the newest deployment
#[test]
fn scenario_delete_all_but_newest() {
    let client = memory_client();
    let api = client.api().transport();
    for name in ["v1", "v2", "v3"] {
        api.seed_deployment(name, &[("index.html", INDEX_HTML)]);
    }
    let deployments = client.deployments();

    let mut all = deployments.list().unwrap();
    all.sort_by_key(|d| d.created_at());
    let newest = all.pop().unwrap();

    for stale in &all {
        stale.delete().unwrap();
    }

    assert_eq!(deployments.ids().unwrap(), vec![newest.id().to_string()]);
    for stale in &all {
        assert!(deployments.get(stale.id()).unwrap_err().is_not_found());
    }
    assert_eq!(api.deployment_count(), 1);
}

/// SCENARIO: Deleting twice reports the API's error
#[test]
fn scenario_double_delete() {
    let client = memory_client();
    let id = client.api().transport().seed_deployment("once", &[]);
    let deployment = client.deployments().get(&id).unwrap();

    deployment.delete().unwrap();
    let err = deployment.delete().unwrap_err();

    assert_eq!(err.status(), Some(404));
}
