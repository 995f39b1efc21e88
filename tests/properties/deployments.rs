//! Property tests for deployment and file lookups.

use proptest::prelude::*;

use now_client::{ClientConfig, MemoryTransport, NowClient};

fn client_with(names: &[String]) -> (NowClient<MemoryTransport>, Vec<String>) {
    let client = NowClient::with_transport(MemoryTransport::new(), &ClientConfig::default());
    let ids = names
        .iter()
        .map(|name| {
            client
                .api()
                .transport()
                .seed_deployment(name, &[("index.html", name.as_str())])
        })
        .collect();
    (client, ids)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every listed id resolves to a deployment with that id.
    #[test]
    fn property_listed_ids_resolve(names in proptest::collection::vec("[a-z]{1,10}", 0..6)) {
        let (client, ids) = client_with(&names);
        let deployments = client.deployments();

        prop_assert_eq!(deployments.ids().unwrap(), ids.clone());
        for (id, name) in ids.iter().zip(&names) {
            let deployment = deployments.get(id).unwrap();
            prop_assert_eq!(deployment.id(), id.as_str());
            prop_assert_eq!(deployment.name(), name.as_str());
        }
    }

    /// PROPERTY: Keys that are not listed are reported as not found.
    #[test]
    fn property_unknown_ids_not_found(
        names in proptest::collection::vec("[a-z]{1,10}", 0..4),
        key in "[A-Za-z0-9_]{1,12}",
    ) {
        let (client, ids) = client_with(&names);
        prop_assume!(!ids.contains(&key));

        let err = client.deployments().get(&key).unwrap_err();
        prop_assert!(err.is_not_found());

        if let Some(id) = ids.first() {
            let files = client.deployments().get(id).unwrap().files().unwrap();
            prop_assume!(key != "index.html" && !files.contains(&key));
            prop_assert!(files.get(&key).unwrap_err().is_not_found());
        }
    }
}
