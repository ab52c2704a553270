//! Anonymous node id issuance and classification.

use std::collections::HashSet;
use std::thread;

use obo_ids::{NodeId, NodeIdGenerator};

#[test]
fn concurrent_issuance_is_unique() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let generator = &NodeIdGenerator::new();
    let batches: Vec<Vec<NodeId>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    (0..PER_THREAD)
                        .map(|_| generator.next_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let numbers = |batch: &[NodeId]| -> Vec<u64> {
        batch
            .iter()
            .map(|id| id.as_str().trim_start_matches("_:genid").parse().unwrap())
            .collect()
    };
    for batch in &batches {
        let issued = numbers(batch);
        assert!(issued.windows(2).all(|w| w[0] < w[1]), "per-thread order");
    }

    let all: HashSet<&NodeId> = batches.iter().flatten().collect();
    assert_eq!(all.len(), THREADS * PER_THREAD);
    assert_eq!(generator.issued(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn generated_ids_are_anonymous() {
    let generator = NodeIdGenerator::new();
    for id in [generator.next_id(), generator.node_id(None), generator.node_id(Some(""))] {
        assert!(NodeId::is_anonymous(id.as_str()), "{id}");
    }
}

#[test]
fn global_generator_is_shared() {
    let global = NodeIdGenerator::global();
    let before = global.issued();
    let first = global.next_id();
    let second = NodeIdGenerator::global().next_id();
    assert_ne!(first, second);
    assert!(global.issued() >= before + 2);
}
