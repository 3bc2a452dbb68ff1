//! Unit and property tests for the pairing heap.

use proptest::prelude::*;

use super::PairingHeap;

#[test]
fn pops_in_key_order() {
    let mut heap = PairingHeap::new();
    for (key, payload) in [(4.0, 'd'), (1.0, 'a'), (3.0, 'c'), (2.0, 'b')] {
        heap.push(key, payload);
    }
    assert_eq!(heap.len(), 4);

    let mut drained = Vec::new();
    while let Some((_, payload)) = heap.pop() {
        drained.push(payload);
    }
    assert_eq!(drained, vec!['a', 'b', 'c', 'd']);
    assert!(heap.is_empty());
}

#[test]
fn peek_matches_the_next_pop() {
    let mut heap = PairingHeap::new();
    heap.push(2.5, 1usize);
    heap.push(0.5, 2usize);
    assert_eq!(heap.peek(), Some((0.5, 2)));
    assert_eq!(heap.pop(), Some((0.5, 2)));
    assert_eq!(heap.peek(), Some((2.5, 1)));
}

#[test]
fn decrease_key_moves_an_element_forward() {
    let mut heap = PairingHeap::new();
    heap.push(1.0, 'a');
    let handle = heap.push(5.0, 'b');
    heap.push(3.0, 'c');

    heap.update(handle, 0.5, 'b');
    assert_eq!(heap.pop(), Some((0.5, 'b')));
    assert_eq!(heap.pop(), Some((1.0, 'a')));
}

#[test]
fn increase_key_moves_an_element_back() {
    let mut heap = PairingHeap::new();
    let handle = heap.push(1.0, 'a');
    heap.push(2.0, 'b');
    heap.push(3.0, 'c');

    heap.update(handle, 9.0, 'a');
    assert_eq!(heap.pop(), Some((2.0, 'b')));
    assert_eq!(heap.pop(), Some((3.0, 'c')));
    assert_eq!(heap.pop(), Some((9.0, 'a')));
    assert_eq!(heap.pop(), None);
}

#[test]
fn increasing_the_root_reheapifies_its_children() {
    let mut heap = PairingHeap::new();
    let root = heap.push(0.0, 0usize);
    heap.push(4.0, 4usize);
    heap.push(2.0, 2usize);

    heap.update(root, 3.0, 0usize);
    assert_eq!(heap.pop(), Some((2.0, 2)));
    assert_eq!(heap.pop(), Some((3.0, 0)));
    assert_eq!(heap.pop(), Some((4.0, 4)));
}

#[test]
fn handles_survive_unrelated_pops() {
    let mut heap = PairingHeap::new();
    heap.push(1.0, 'a');
    let handle = heap.push(2.0, 'b');
    heap.push(3.0, 'c');

    assert_eq!(heap.pop(), Some((1.0, 'a')));
    heap.update(handle, 4.0, 'b');
    assert_eq!(heap.pop(), Some((3.0, 'c')));
    assert_eq!(heap.pop(), Some((4.0, 'b')));
}

#[test]
fn update_replaces_the_payload() {
    let mut heap = PairingHeap::new();
    let handle = heap.push(1.0, 10usize);
    heap.update(handle, 1.0, 20usize);
    assert_eq!(heap.pop(), Some((1.0, 20)));
}

#[test]
fn single_element_update_round_trips() {
    let mut heap = PairingHeap::new();
    let handle = heap.push(1.0, 'x');
    heap.update(handle, 7.0, 'x');
    heap.update(handle, 0.25, 'x');
    assert_eq!(heap.pop(), Some((0.25, 'x')));
    assert!(heap.is_empty());
}

proptest! {
    #[test]
    fn drains_any_push_sequence_in_sorted_order(keys in proptest::collection::vec(0u32..10_000, 1..200)) {
        let mut heap = PairingHeap::new();
        for (payload, &key) in keys.iter().enumerate() {
            heap.push(f64::from(key), payload);
        }

        let mut drained = Vec::with_capacity(keys.len());
        while let Some((key, _)) = heap.pop() {
            drained.push(key);
        }

        let mut expected: Vec<f64> = keys.iter().map(|&key| f64::from(key)).collect();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn drains_sorted_after_arbitrary_updates(
        keys in proptest::collection::vec(0u32..10_000, 2..100),
        updates in proptest::collection::vec((0usize..100, 0u32..10_000), 1..50),
    ) {
        let mut heap = PairingHeap::new();
        let mut handles = Vec::with_capacity(keys.len());
        let mut model: Vec<f64> = Vec::with_capacity(keys.len());
        for (payload, &key) in keys.iter().enumerate() {
            handles.push(heap.push(f64::from(key), payload));
            model.push(f64::from(key));
        }

        for &(slot, key) in &updates {
            let slot = slot % keys.len();
            heap.update(handles[slot], f64::from(key), slot);
            model[slot] = f64::from(key);
        }

        let mut drained = Vec::with_capacity(keys.len());
        while let Some((key, _)) = heap.pop() {
            drained.push(key);
        }

        model.sort_by(f64::total_cmp);
        prop_assert_eq!(drained, model);
    }
}
