/// The last-in-first-out contract shared by every stack in this crate
///
/// Popping or peeking an empty stack is not an error: both return `None`.
pub trait StackLike<T> {
    /// Put `item` on the top
    fn push(&mut self, item: T);

    /// Remove and return the top, `None` when the stack is empty
    fn pop(&mut self) -> Option<T>;

    /// Borrow the top without removing it
    ///
    /// Right after `push(item)` this must return `Some(&item)`.
    fn peek(&self) -> Option<&T>;

    /// The number of items currently held
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
