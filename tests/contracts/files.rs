//! File listing contracts (FILE-001 through FILE-003)

use crate::common::*;

/// CONTRACT FILE-001: The listing is fetched once per `files()` call
#[test]
fn contract_listing_fetched_once() {
    let client = memory_client();
    let api = client.api().transport();
    let id = api.seed_deployment("site", &[("index.html", INDEX_HTML), ("css/site.css", SITE_CSS)]);
    let deployment = client.deployments().get(&id).unwrap();

    let files = deployment.files().unwrap();
    let after_listing = api.request_count();

    assert!(files.contains("index.html"));
    assert!(files.get("css/site.css").is_ok());
    assert_eq!(files.names().count(), 2);
    assert_eq!(api.request_count(), after_listing);
}

/// CONTRACT FILE-002: Content is fetched only when materialized
#[test]
fn contract_content_fetched_on_demand() {
    let client = memory_client();
    let api = client.api().transport();
    let id = api.seed_deployment("site", &[("index.html", INDEX_HTML)]);
    let files = client.deployments().get(&id).unwrap().files().unwrap();
    let before = api.request_count();

    let handle = files.get("index.html").unwrap();
    assert_eq!(api.request_count(), before);

    let file = handle.materialize().unwrap();
    assert_eq!(api.request_count(), before + 1);
    assert_eq!(file.text(), Some(INDEX_HTML));
}

/// CONTRACT FILE-003: Id and name lookups resolve to the same file
#[test]
fn contract_id_and_name_agree() {
    let client = memory_client();
    let id = client
        .api()
        .transport()
        .seed_deployment("site", &[("a.txt", "A"), ("b.txt", "B")]);
    let files = client.deployments().get(&id).unwrap().files().unwrap();

    for entry in files.entries() {
        let by_id = files.get(entry.id()).unwrap();
        let by_name = files.get(entry.name()).unwrap();
        assert_eq!(by_id, by_name);
        assert_eq!(by_id.fetch_content().unwrap(), by_name.fetch_content().unwrap());
    }

    let err = files.get("c.txt").unwrap_err();
    assert!(err.is_not_found());
}
