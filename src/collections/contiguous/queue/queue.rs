use std::collections::{VecDeque, vec_deque};
use std::fmt::{self, Debug, Formatter};

/// A first in, first out container. Values are pushed onto the tail and popped or peeked from the
/// head.
///
/// The elements live in a single ring buffer, so popping from the head doesn't shift the rest of
/// the Queue.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* Amortized, growing the buffer takes `O(n)`.
///
/// # Examples
/// ```
/// # use container_kit::collections::contiguous::Queue;
/// let mut queue = Queue::from([1, 2, 3]);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` to the tail of the Queue.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the element at the head of the Queue and returns it, if the Queue isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the element at the head of the Queue, if it exists. The Queue
    /// itself is left unchanged.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the element at the head of the Queue, if it exists.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Removes all elements from the Queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements from head to tail, which is the order they would be
    /// popped in.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        Queue {
            items: VecDeque::from(value),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}
