//! Property tests for folder packing.

use std::collections::BTreeMap;
use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use now_client::FolderPackager;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,8}(\\.[a-z]{1,3})?").unwrap()
}

/// Relative file paths with text content, none of which is a directory of another
fn file_tree() -> impl Strategy<Value = BTreeMap<String, String>> {
    let path = proptest::collection::vec(segment(), 1..=3).prop_map(|s| s.join("/"));
    let content = proptest::string::string_regex("[ -~\n]{0,64}").unwrap();
    proptest::collection::btree_map(path, content, 0..12).prop_filter(
        "no file may also be a directory",
        |tree| {
            tree.keys().all(|a| {
                tree.keys()
                    .all(|b| !b.starts_with(&format!("{}/", a)))
            })
        },
    )
}

fn write_tree(tree: &BTreeMap<String, String>) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in tree {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Packing yields exactly the files of the tree, keyed by relative path.
    #[test]
    fn property_pack_matches_tree(tree in file_tree()) {
        let dir = write_tree(&tree);

        let packed = FolderPackager::local().pack(dir.path()).unwrap();

        prop_assert_eq!(packed.len(), tree.len());
        for (relative, content) in &tree {
            prop_assert_eq!(packed.text(relative), Some(content.as_str()));
        }
    }

    /// PROPERTY: Packing an unchanged tree twice gives the same map.
    #[test]
    fn property_pack_is_idempotent(tree in file_tree()) {
        let dir = write_tree(&tree);
        let packager = FolderPackager::local();

        prop_assert_eq!(packager.pack(dir.path()).unwrap(), packager.pack(dir.path()).unwrap());
    }
}
