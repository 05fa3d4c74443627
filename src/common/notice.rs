use std::{cell::RefCell, fmt};

/// A report about one stack operation
#[derive(Debug, PartialEq, Eq)]
pub enum Notice<'a, T> {
    Pushed(&'a T),
    Popped(&'a T),
    /// `pop` was called on an empty stack
    PopEmpty,
    /// `peek` was called on an empty stack
    PeekEmpty,
}

impl<'a, T: fmt::Display> fmt::Display for Notice<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Pushed(item) => write!(f, "Pushed {} onto the stack", item),
            Notice::Popped(item) => write!(f, "Popped {} from the stack", item),
            Notice::PopEmpty => write!(f, "Stack is empty, cannot pop"),
            Notice::PeekEmpty => write!(f, "Stack is empty, nothing to peek"),
        }
    }
}

pub trait StackObserver<T> {
    fn notify(&self, notice: Notice<'_, T>);
}

impl<T, F> StackObserver<T> for F
where
    F: Fn(Notice<'_, T>),
{
    fn notify(&self, notice: Notice<'_, T>) {
        self(notice)
    }
}

/// Keep rendered notices until the caller drains them
///
/// Every notice is also sent as a `debug` event on the `lifo::stack` target.
#[derive(Debug, Default)]
pub struct NoticeBuffer {
    lines: RefCell<Vec<String>>,
}

impl NoticeBuffer {
    pub fn new() -> NoticeBuffer {
        Default::default()
    }

    /// Take the pending notices in the order they were sent
    pub fn drain(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl<T: fmt::Display> StackObserver<T> for NoticeBuffer {
    fn notify(&self, notice: Notice<'_, T>) {
        tracing::debug!(target: "lifo::stack", "{}", notice);
        self.lines.borrow_mut().push(notice.to_string());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> StackObserver<T> for NoopObserver {
    fn notify(&self, _: Notice<'_, T>) {}
}
