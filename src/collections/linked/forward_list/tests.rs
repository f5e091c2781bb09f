#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_traverse_in_push_order() {
    let mut list = ForwardList::new();
    list.push_back(5);
    list.push_back(10);
    list.push_back(20);
    list.push_back(40);

    let mut visited = Vec::new();
    list.traverse(|node| visited.push(*node.value()));
    assert_eq!(visited, [5, 10, 20, 40], "Traversal should follow push order.");
}

#[test]
fn test_empty() {
    let list = ForwardList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert!(list.head().is_none());

    let mut calls = 0;
    list.traverse(|_| calls += 1);
    assert_eq!(calls, 0, "The visitor shouldn't be called for an empty list.");
}

#[test]
fn test_head_and_tail() {
    let mut list = ForwardList::new();
    list.push_back('a');
    assert_eq!(list.front(), Some(&'a'));
    assert_eq!(list.back(), Some(&'a'), "A single node should be both the head and tail.");

    list.push_back('b');
    assert_eq!(list.front(), Some(&'a'));
    assert_eq!(list.back(), Some(&'b'));

    let head = list.head().unwrap();
    assert!(head.has_next());
    let tail = head.next().unwrap();
    assert_eq!(tail.value(), &'b');
    assert!(!tail.has_next(), "The tail should never have a next node.");
}

#[test]
fn test_traverse_values() {
    let list: ForwardList<_> = ["x", "y", "z"].into_iter().collect();
    let mut joined = String::new();
    list.traverse_values(|value| joined.push_str(value));
    assert_eq!(joined, "xyz");
}

#[test]
fn test_iter_restarts() {
    let list: ForwardList<u8> = (1..=4).collect();
    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 3);

    assert_eq!(list.iter().copied().sum::<u8>(), 10, "A new iterator should start from the head.");
    assert_eq!(iter.clone().count(), 3);
    assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_contains_eq_clone() {
    let list: ForwardList<i32> = [5, 10, 20, 40].into_iter().collect();
    assert!(list.contains(&20));
    assert!(!list.contains(&15));

    let mut clone = list.clone();
    assert_eq!(clone, list);
    clone.push_back(80);
    assert_ne!(clone, list);
    assert_eq!(list.len(), 4, "Cloned lists shouldn't share nodes.");
}

#[test]
fn test_fmt() {
    let list: ForwardList<i32> = [5, 10, 20].into_iter().collect();
    assert_eq!(format!("{list}"), "(5) -> (10) -> (20)");
    assert_eq!(
        format!("{list:?}"),
        "ForwardList { contents: [5, 10, 20], len: 3 }"
    );
    assert_eq!(format!("{}", ForwardList::<i32>::new()), "");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let list: ForwardList<_> = (0..10).map(|_| counter.clone()).collect();
    assert_eq!(*counter.borrow(), 0);

    drop(list);
    assert_eq!(*counter.borrow(), 10, "Every value should be dropped exactly once.");
}

#[test]
fn test_drop_long_list() {
    let mut list = ForwardList::new();
    for i in 0..1_000_000_u32 {
        list.push_back(i);
    }
    assert_eq!(list.len(), 1_000_000);

    let mut count = 0;
    list.traverse(|_| count += 1);
    assert_eq!(count, 1_000_000);
    // Neither traversal nor drop should recurse per node.
    drop(list);
}

proptest! {
    #[test]
    fn prop_traverse_visits_all_in_order(values in prop::collection::vec(any::<i32>(), 1..200)) {
        let list: ForwardList<i32> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());

        let mut visited = Vec::new();
        let mut last_has_next = true;
        list.traverse(|node| {
            visited.push(*node.value());
            last_has_next = node.has_next();
        });

        prop_assert_eq!(&visited, &values);
        prop_assert!(!last_has_next, "The last visited node shouldn't have a next node.");
        prop_assert_eq!(list.back(), values.last());
    }
}
