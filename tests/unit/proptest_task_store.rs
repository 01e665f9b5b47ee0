//! Property-based tests for the task store
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use cleanmate::models::Task;
use cleanmate::storage::task::{decode_tasks, encode_tasks};
use cleanmate::storage::{MemoryStore, TaskStore};
use proptest::prelude::*;

fn arb_task() -> impl Strategy<Value = Task> {
    (any::<u64>(), "\\PC{1,30}", "[0-9]{4}-[0-9]{2}-[0-9]{2}", any::<bool>()).prop_map(
        |(id, name, due_date, completed)| Task {
            id,
            name,
            due_date,
            completed,
        },
    )
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

proptest! {
    /// Any task list survives encode then decode unchanged
    #[test]
    fn encode_decode_is_identity(tasks in prop::collection::vec(arb_task(), 0..20)) {
        let raw = encode_tasks(&tasks).unwrap();
        prop_assert_eq!(decode_tasks(&raw).unwrap(), tasks);
    }

    /// Adds keep call order, produce distinct IDs, and persist what is in memory
    #[test]
    fn adds_keep_order_and_unique_ids(names in prop::collection::vec(arb_name(), 1..30)) {
        let kv = MemoryStore::new();
        let mut store = TaskStore::load(&kv);
        for name in &names {
            store.add(name, "2024-03-01").unwrap();
        }

        let tasks = store.tasks();
        prop_assert_eq!(tasks.len(), names.len());
        prop_assert!(tasks.iter().map(|t| &t.name).eq(names.iter()));
        let ids: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), names.len());

        let reloaded = TaskStore::load(&kv);
        prop_assert_eq!(reloaded.tasks(), tasks);
    }

    /// Marking one task done touches nothing else
    #[test]
    fn mark_done_only_touches_target(count in 1usize..10, pick in any::<prop::sample::Index>()) {
        let kv = MemoryStore::new();
        let mut store = TaskStore::load(&kv);
        for i in 0..count {
            store.add(&format!("Task {i}"), "2024-03-01").unwrap();
        }
        let before = store.tasks().to_vec();
        let target = pick.index(count);

        let after = store.mark_done(before[target].id).unwrap().to_vec();
        for (i, (b, a)) in before.iter().zip(&after).enumerate() {
            if i == target {
                prop_assert!(a.completed);
                prop_assert_eq!((&a.name, &a.due_date, a.id), (&b.name, &b.due_date, b.id));
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }
}
