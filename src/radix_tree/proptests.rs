use std::collections::HashSet;

use proptest::prelude::*;

use super::RadixTree;

// A three letter alphabet keeps shared prefixes, splits and near misses
// frequent.
fn key_strategy() -> impl Strategy<Value = String> {
    "[abc]{0,6}"
}

fn keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 0..32)
}

fn build(keys: &[String]) -> RadixTree {
    let mut rax = RadixTree::new();
    for key in keys {
        rax.insert(key);
    }
    rax
}

fn stored_keys(rax: &RadixTree) -> HashSet<Vec<u8>> {
    rax.keys().collect()
}

proptest! {
    #[test]
    fn inserted_keys_are_found(keys in keys_strategy()) {
        let rax = build(&keys);

        for key in &keys {
            prop_assert!(rax.search(key), "missing {:?}", key);
        }
    }

    #[test]
    fn absent_keys_are_not_found(keys in keys_strategy(), queries in keys_strategy()) {
        let rax = build(&keys);
        let model: HashSet<&String> = keys.iter().collect();

        for query in &queries {
            prop_assert_eq!(rax.search(query), model.contains(query), "query {:?}", query);
        }

        // strict prefixes and extensions of stored keys
        for key in &keys {
            for cut in 0..key.len() {
                let prefix = &key[..cut];
                prop_assert_eq!(rax.search(prefix), model.contains(&prefix.to_string()));
            }
            let longer = format!("{}a", key);
            prop_assert_eq!(rax.search(&longer), model.contains(&longer));
        }
    }

    #[test]
    fn reinsert_is_idempotent(keys in keys_strategy(), queries in keys_strategy()) {
        let once = build(&keys);
        let mut twice = build(&keys);
        twice.extend(keys.iter());

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(stored_keys(&once), stored_keys(&twice));
        for query in queries.iter().chain(keys.iter()) {
            prop_assert_eq!(once.search(query), twice.search(query));
        }
    }

    #[test]
    fn insertion_order_does_not_matter(keys in keys_strategy()) {
        let forward = build(&keys);

        let mut reversed_keys = keys.clone();
        reversed_keys.reverse();
        let reversed = build(&reversed_keys);

        let mut sorted_keys = keys.clone();
        sorted_keys.sort();
        let sorted = build(&sorted_keys);

        let expected: HashSet<Vec<u8>> = keys.iter().map(|key| key.as_bytes().to_vec()).collect();
        prop_assert_eq!(&stored_keys(&forward), &expected);
        prop_assert_eq!(&stored_keys(&reversed), &expected);
        prop_assert_eq!(&stored_keys(&sorted), &expected);
        prop_assert_eq!(forward.len(), expected.len());
    }

    #[test]
    fn structure_stays_valid(keys in keys_strategy()) {
        let mut rax = RadixTree::new();

        for key in &keys {
            rax.insert(key);
            rax.root().assert_invariants(true);
        }
        prop_assert_eq!(rax.root().is_leaf(), keys.iter().any(|key| key.is_empty()));
    }

    #[test]
    fn arbitrary_bytes_never_panic(
        keys in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..16),
        query in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut rax = RadixTree::new();
        for key in &keys {
            rax.insert(key);
        }

        prop_assert_eq!(rax.search(&query), keys.contains(&query));
        rax.root().assert_invariants(true);
        let _ = rax.view().to_string();
    }
}
