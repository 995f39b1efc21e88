//! Property tests for the manifest rename and placeholder rules.

use std::collections::BTreeMap;

use proptest::prelude::*;

use now_client::domain::value_objects::{placeholder_manifest, prepare_manifest};
use now_client::{FileMap, ManifestConflict};

const RESERVED: [&str; 3] = ["Dockerfile", "package", "package.json"];

/// File maps without any manifest or Dockerfile entry
fn plain_files() -> impl Strategy<Value = BTreeMap<String, String>> {
    let key = proptest::string::string_regex("[a-z0-9/_.-]{1,16}")
        .unwrap()
        .prop_filter("not a manifest key", |k| !RESERVED.contains(&k.as_str()));
    proptest::collection::btree_map(key, "[ -~]{0,32}", 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without build input, preparing adds exactly the placeholder entry.
    #[test]
    fn property_injection_adds_one_key(
        files in plain_files(),
        name in "[a-z][a-z0-9-]{0,20}",
    ) {
        let prepared = prepare_manifest(
            FileMap::from(files.clone()),
            &name,
            ManifestConflict::Reject,
        ).unwrap();

        prop_assert_eq!(prepared.len(), files.len() + 1);
        prop_assert_eq!(prepared.get("package"), Some(&placeholder_manifest(&name)));
        for (key, content) in &files {
            prop_assert_eq!(prepared.text(key), Some(content.as_str()));
        }
    }

    /// PROPERTY: `package.json` content moves to `package`; nothing else changes.
    #[test]
    fn property_rename_moves_content(
        files in plain_files(),
        manifest in "[ -~]{0,64}",
    ) {
        let mut input = files.clone();
        input.insert("package.json".to_string(), manifest.clone());

        let prepared = prepare_manifest(
            FileMap::from(input),
            "ignored",
            ManifestConflict::Reject,
        ).unwrap();

        prop_assert!(!prepared.contains_key("package.json"));
        prop_assert_eq!(prepared.text("package"), Some(manifest.as_str()));
        prop_assert_eq!(prepared.len(), files.len() + 1);
        for (key, content) in &files {
            prop_assert_eq!(prepared.text(key), Some(content.as_str()));
        }
    }

    /// PROPERTY: A Dockerfile leaves the map untouched.
    #[test]
    fn property_dockerfile_is_passthrough(files in plain_files()) {
        let mut input = files;
        input.insert("Dockerfile".to_string(), "FROM scratch".to_string());
        let expected = FileMap::from(input.clone());

        let prepared = prepare_manifest(
            FileMap::from(input),
            "ignored",
            ManifestConflict::Reject,
        ).unwrap();

        prop_assert_eq!(prepared, expected);
    }
}
