use crate::features::stack::StackLike;

/// A growable last-in-first-out stack
///
/// The last element of the backing vector is the top. `Stack` never prints
/// or logs; wrap it in [`Observed`](crate::common::observed::Observed) to
/// get notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Default::default()
    }

    /// Preallocate room for `capacity` items. The stack still grows past it.
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> StackLike<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item)
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
