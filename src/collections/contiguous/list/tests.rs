#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::testing::{CountedDrop, assert_panics};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    tags: Vec<&'static str>,
}

impl Person {
    fn new(name: &str, tags: &[&'static str]) -> Person {
        Person {
            name: name.to_owned(),
            tags: tags.to_vec(),
        }
    }
}

#[test]
fn test_construction() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.as_slice(), &[] as &[i32], "An empty List should give an empty slice.");

    let list = List::from([1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.as_slice(), &[1, 2, 3], "Elements should keep their argument order.");

    assert_eq!(
        list,
        (1..=3).collect::<List<_>>(),
        "Different construction methods should produce equal results."
    );
    assert_eq!(list, List::from(vec![1, 2, 3]));
    assert_eq!(Vec::from(list), vec![1, 2, 3]);
}

#[test]
fn test_add() {
    let mut list = List::new();
    list.add([1, 2, 3]);
    list.add(iter::empty());
    assert_eq!(list.len(), 3, "Adding nothing should be a no-op.");

    list.add(vec![4, 5]);
    list.push(6);
    list.extend([7]);
    assert_eq!(list.len(), 7, "Length should equal the number of individually added elements.");
    assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6, 7], "Elements should stay in added order.");
}

#[test]
fn test_get() {
    let mut list = List::from(["a", "b", "c"]);
    assert_eq!(*list.get(0), "a");
    assert_eq!(list[2], "c");

    *list.get_mut(1) = "z";
    assert_eq!(
        list.as_slice(),
        &["a", "z", "c"],
        "Writing through get_mut should be visible in the List."
    );
    list[0] = "y";
    assert_eq!(list[0], "y");

    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        list.try_get(3).map_err(|e| e.to_string()),
        Err("Index 3 out of bounds for collection with 3 elements!".to_owned())
    );
    assert!(list.try_get_mut(10).is_err());

    assert_panics!(list.get(3), "get past the end should panic");
    assert_panics!(List::<u8>::new().get(0), "get on an empty List should panic");
    assert_panics!(list[5], "indexing past the end should panic");
}

#[test]
fn test_insert() {
    let mut list = List::from([1, 2, 3]);
    list.insert(1, 9);
    assert_eq!(list.as_slice(), &[1, 9, 2, 3]);

    let old = list.clone();
    list.insert(2, 42);
    assert_eq!(list[2], 42, "Inserted value should occupy the given index.");
    for j in 0..2 {
        assert_eq!(list[j], old[j], "Elements before the index shouldn't move.");
    }
    for j in 2..old.len() {
        assert_eq!(list[j + 1], old[j], "Elements from the index onwards should move back by one.");
    }

    list.insert(0, 0);
    assert_eq!(list[0], 0);

    let len = list.len();
    list.insert(len, 100);
    list.insert(len + 50, 200);
    assert_eq!(
        &list.as_slice()[len..],
        &[100, 200],
        "Inserting at or past the end should append."
    );

    let mut list = List::new();
    list.insert(5, "only");
    assert_eq!(list.as_slice(), &["only"]);
}

#[test]
fn test_remove() {
    let mut list = List::from([1, 2, 3, 4, 5]);
    assert_eq!(list.remove(2), Some(3));
    assert_eq!(list.as_slice(), &[1, 2, 4, 5]);
    assert_eq!(list.len(), 4, "Removing should decrease the length by exactly one.");

    let before = list.clone();
    assert_eq!(list.remove(list.len()), None);
    assert_eq!(list.remove(list.len() + 5), None);
    assert_eq!(list.remove(usize::MAX), None);
    assert_eq!(list, before, "Removing out of bounds should leave the List unchanged.");

    assert_eq!(list.remove(0), Some(1));
    assert_eq!(list.remove(list.len() - 1), Some(5));
    assert_eq!(list.as_slice(), &[2, 4]);

    let counter = CountedDrop::new();
    let mut list: List<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    drop(list.remove(1));
    assert_eq!(counter.drops(), 1, "The removed element should be dropped once.");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_clear() {
    let mut list = List::from([1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    let mut list: List<u8> = List::new();
    list.clear();
    assert!(list.is_empty(), "Clearing an empty List should keep it empty.");

    let counter = CountedDrop::new();
    let mut list: List<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    list.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop every element.");
}

#[test]
fn test_index_of_and_contains() {
    let list = List::from([5, 7, 5, 9]);
    assert_eq!(list.index_of(&5), Some(0), "The first match should win.");
    assert_eq!(list.index_of(&9), Some(3));
    assert_eq!(list.index_of(&1), None);
    assert!(list.contains(&7));
    assert!(!list.contains(&8));

    let list = List::from([
        Person::new("ann", &["admin"]),
        Person::new("bob", &["user"]),
        Person::new("ann", &["user", "admin"]),
    ]);
    let probe = Person::new("ann", &["user", "admin"]);
    assert_eq!(
        list.index_of(&probe),
        Some(2),
        "Equality should compare nested values rather than identity."
    );
    assert!(!list.contains(&Person::new("ann", &["admin", "user"])));

    let empty: List<Person> = List::new();
    assert_eq!(empty.index_of(&probe), None);
}

#[test]
fn test_find() {
    let list = List::from([1, 2, 3, 4]);
    assert_eq!(list.find(|&i| i % 2 == 0), Some((1, &2)), "The first match should win.");
    assert_eq!(list.find(|&i| i > 4), None);
    assert_eq!(List::<i32>::new().find(|_| true), None);

    let (index, found) = list.find(|&i| i == 3).expect("3 is in the list");
    assert!(
        std::ptr::eq(found, &list[index]),
        "find should return a reference into the List, not a copy."
    );

    let mut list = List::from([1, 2, 3]);
    if let Some((_, found)) = list.find_mut(|&i| i == 2) {
        *found = 20;
    }
    assert_eq!(list.as_slice(), &[1, 20, 3], "Writing through find_mut should be visible.");
    assert!(list.find_mut(|&i| i == 2).is_none());
}

#[test]
fn test_find_all() {
    let list = List::from([1, -2, 3, -4, 5]);
    let positive = list.find_all(|&i| i > 0);
    assert_eq!(positive.as_slice(), &[1, 3, 5]);
    assert_eq!(list.as_slice(), &[1, -2, 3, -4, 5], "find_all shouldn't modify the source.");

    let none = list.find_all(|&i| i > 100);
    assert!(none.is_empty(), "No matches should give an empty List.");

    let words = List::from(["apple".to_owned(), "kiwi".to_owned(), "avocado".to_owned()]);
    assert_eq!(
        words.find_all(|w| w.starts_with('a')).as_slice(),
        &["apple", "avocado"]
    );
}

#[test]
fn test_for_each() {
    let list = List::from(['a', 'b', 'c']);
    let mut visited = Vec::new();
    list.for_each(|index, &item| visited.push((index, item)));
    assert_eq!(
        visited,
        [(0, 'a'), (1, 'b'), (2, 'c')],
        "for_each should visit every element in ascending order."
    );

    let mut calls = 0;
    List::<u8>::new().for_each(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_for_each() {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let list: List<usize> = (0..1000).map(|i| i % 17).collect();
    let calls = AtomicUsize::new(0);
    let visited = Mutex::new(Vec::new());

    list.par_for_each(|index, &item| {
        calls.fetch_add(1, Ordering::SeqCst);
        visited.lock().expect("no task panics while holding the lock").push((index, item));
    });

    assert_eq!(calls.load(Ordering::SeqCst), list.len(), "Each element should be visited once.");

    let mut visited = visited.into_inner().expect("no task panicked");
    visited.sort_unstable();
    let expected: Vec<_> = list.iter().copied().enumerate().collect();
    assert_eq!(visited, expected, "Visited pairs should match the stored elements.");

    let empty: List<usize> = List::new();
    empty.par_for_each(|_, _| {
        calls.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(calls.load(Ordering::SeqCst), list.len());

    assert_panics!(
        List::from([1, 2, 3]).par_for_each(|_, &item| assert_ne!(item, 2)),
        "A panicking task should propagate out of par_for_each"
    );
}

#[test]
fn test_iterators() {
    let mut list = List::from([1, 2, 3]);
    for item in &mut list {
        *item *= 10;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    assert_eq!(list.first(), Some(&10), "Slice methods should be available through Deref.");

    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.next_back(), Some(30));
    assert_eq!(iter.next(), Some(20));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let list: List<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    drop(list.into_iter());
    assert_eq!(counter.drops(), 4, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_equality_hash_and_formatting() {
    let state = RandomState::new();
    assert_eq!(
        state.hash_one(List::from([1, 2, 3])),
        state.hash_one(List::from_iter(1..=3)),
        "Equal Lists should produce the same hash."
    );
    assert_ne!(List::from([1, 2, 3]), List::from([1, 3, 2]));

    let list = List::from([1, 2]);
    assert_eq!(list.to_string(), "[1, 2]");
    assert_eq!(format!("{list:?}"), "List { contents: [1, 2], len: 2 }");
}

#[test]
fn test_const_queries() {
    const EMPTY: &List<u8> = &List::new();
    const LEN: usize = EMPTY.len();
    const IS_EMPTY: bool = EMPTY.is_empty();
    const SLICE_LEN: usize = EMPTY.as_slice().len();

    assert_eq!(LEN, 0, "len should be usable in const contexts.");
    assert!(IS_EMPTY);
    assert_eq!(SLICE_LEN, 0);
}
