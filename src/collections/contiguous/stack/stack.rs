use std::fmt::{self, Debug, Formatter};
use std::{slice, vec};

/// A last in, first out container. Values are pushed onto, popped from and peeked at the top,
/// which is the most recently pushed element.
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
/// # use container_kit::collections::contiguous::Stack;
/// let mut stack = Stack::from([1, 2, 3]);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            items: Vec::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the top element and returns it, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top element, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top element, if it exists.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Removes all elements from the Stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements from the bottom of the Stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        Stack {
            items: Vec::from(value),
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}
