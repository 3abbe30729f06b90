//! Property tests: the store against a snapshot-copy model.
//!
//! The model keeps a full copy of the map per open transaction, which is
//! obviously correct and obviously slow. After every operation the store's
//! GET/COUNTS/FIND answers must match the model for a small key/value universe.

use std::collections::BTreeMap;

use ghostdb_core::{NoTransaction, TransactionalStore};
use proptest::prelude::*;

const KEYS: [&str; 4] = ["a", "b", "c", "d"];
const VALUES: [&str; 3] = ["1", "2", "3"];

#[derive(Debug, Clone)]
enum Op {
    Set(usize, usize),
    Unset(usize),
    Begin,
    Rollback,
    Commit,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..KEYS.len(), 0..VALUES.len()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => (0..KEYS.len()).prop_map(Op::Unset),
        2 => Just(Op::Begin),
        2 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

#[derive(Default)]
struct Model {
    map: BTreeMap<String, String>,
    snapshots: Vec<BTreeMap<String, String>>,
}

impl Model {
    fn apply(&mut self, op: &Op) -> Result<(), NoTransaction> {
        match op {
            Op::Set(k, v) => {
                self.map.insert(KEYS[*k].to_string(), VALUES[*v].to_string());
            }
            Op::Unset(k) => {
                self.map.remove(KEYS[*k]);
            }
            Op::Begin => self.snapshots.push(self.map.clone()),
            Op::Rollback => {
                self.map = self.snapshots.pop().ok_or(NoTransaction)?;
            }
            Op::Commit => {
                if self.snapshots.is_empty() {
                    return Err(NoTransaction);
                }
                self.snapshots.clear();
            }
        }
        Ok(())
    }
}

fn apply(store: &mut TransactionalStore, op: &Op) -> Result<(), NoTransaction> {
    match op {
        Op::Set(k, v) => store.set(KEYS[*k], VALUES[*v]),
        Op::Unset(k) => store.unset(KEYS[*k]),
        Op::Begin => store.begin(),
        Op::Rollback => return store.rollback(),
        Op::Commit => return store.commit(),
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut store = TransactionalStore::new();
        let mut model = Model::default();

        for op in &ops {
            prop_assert_eq!(apply(&mut store, op), model.apply(op), "op {:?}", op);
            prop_assert_eq!(store.depth(), model.snapshots.len());
            prop_assert_eq!(store.len(), model.map.len());

            for key in KEYS {
                prop_assert_eq!(store.get(key), model.map.get(key).map(String::as_str));
            }
            for value in VALUES {
                let expected: Vec<String> = model.map.iter()
                    .filter(|(_, v)| v.as_str() == value)
                    .map(|(k, _)| k.clone())
                    .collect();
                prop_assert_eq!(store.count(value), expected.len());
                prop_assert_eq!(store.find(value), expected);
            }
            let distinct: std::collections::BTreeSet<&String> = model.map.values().collect();
            prop_assert_eq!(store.distinct_values(), distinct.len());
        }
    }

    #[test]
    fn prop_unset_is_idempotent(ops in prop::collection::vec(op_strategy(), 0..40), k in 0..KEYS.len()) {
        let mut once = TransactionalStore::new();
        let mut twice = TransactionalStore::new();
        for op in &ops {
            let _ = apply(&mut once, op);
            let _ = apply(&mut twice, op);
        }
        once.unset(KEYS[k]);
        twice.unset(KEYS[k]);
        twice.unset(KEYS[k]);

        for key in KEYS {
            prop_assert_eq!(once.get(key), twice.get(key));
        }
        for value in VALUES {
            prop_assert_eq!(once.count(value), twice.count(value));
        }
        // Both stores must also roll back to the same state.
        while once.depth() > 0 {
            once.rollback().unwrap();
            twice.rollback().unwrap();
            for key in KEYS {
                prop_assert_eq!(once.get(key), twice.get(key));
            }
        }
    }
}
