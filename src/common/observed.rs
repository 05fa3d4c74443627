use crate::{
    common::notice::{Notice, StackObserver},
    features::stack::StackLike,
};

/// A stack that reports its operations to an observer
///
/// Each `push` and `pop` yields one notice, and so does a `peek` on an
/// empty stack. `peek` on a non-empty stack, `size` and `is_empty` stay
/// silent.
#[derive(Debug, Clone)]
pub struct Observed<S, O> {
    inner: S,
    observer: O,
}

impl<S, O> Observed<S, O> {
    pub fn new(inner: S, observer: O) -> Observed<S, O> {
        Observed { inner, observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S, O> StackLike<T> for Observed<S, O>
where
    S: StackLike<T>,
    O: StackObserver<T>,
{
    /// Relies on `peek` returning the pushed item to report it
    fn push(&mut self, item: T) {
        self.inner.push(item);
        if let Some(top) = self.inner.peek() {
            self.observer.notify(Notice::Pushed(top));
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self.inner.pop() {
            Some(item) => {
                self.observer.notify(Notice::Popped(&item));
                Some(item)
            }
            None => {
                self.observer.notify(Notice::PopEmpty);
                None
            }
        }
    }

    fn peek(&self) -> Option<&T> {
        let top = self.inner.peek();
        if top.is_none() {
            self.observer.notify(Notice::PeekEmpty);
        }
        top
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fmt::Display};

    use super::Observed;
    use crate::{
        common::{
            notice::{Notice, NoopObserver, StackObserver},
            stack::Stack,
        },
        features::stack::StackLike,
    };

    #[derive(Default)]
    struct Recorder {
        lines: RefCell<Vec<String>>,
    }

    impl<T: Display> StackObserver<T> for Recorder {
        fn notify(&self, notice: Notice<'_, T>) {
            self.lines.borrow_mut().push(notice.to_string());
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<String> {
            self.lines.borrow_mut().drain(..).collect()
        }
    }

    #[test]
    fn test_notices_follow_operations() {
        let mut stack = Observed::new(Stack::new(), Recorder::default());

        assert!(stack.is_empty());
        stack.push(10);
        stack.push(20);
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.peek(), Some(&20));
        assert_eq!(
            stack.observer().take(),
            vec!["Pushed 10 onto the stack", "Pushed 20 onto the stack"]
        );

        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(
            stack.observer().take(),
            vec![
                "Popped 20 from the stack",
                "Popped 10 from the stack",
                "Stack is empty, cannot pop",
                "Stack is empty, nothing to peek",
            ]
        );
    }

    #[test]
    fn test_queries_are_silent() {
        let mut stack = Observed::new(Stack::new(), Recorder::default());
        stack.push('a');
        stack.observer().take();

        for _ in 0..3 {
            assert_eq!(stack.peek(), Some(&'a'));
            assert_eq!(stack.size(), 1);
            assert!(!stack.is_empty());
        }
        assert!(stack.observer().take().is_empty());
    }

    #[test]
    fn test_empty_operations_keep_size() {
        let mut stack: Observed<Stack<u8>, _> = Observed::new(Stack::new(), NoopObserver);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.into_inner(), Stack::new());
    }

    #[test]
    fn test_every_push_is_reported_through_layers() {
        let outer = Recorder::default();
        let mut stack = Observed::new(Observed::new(Stack::new(), Recorder::default()), outer);

        for i in 0..5u8 {
            stack.push(i);
        }
        assert_eq!(stack.observer().take().len(), 5);

        let inner = stack.into_inner();
        assert_eq!(
            inner.observer().take(),
            (0..5)
                .map(|i| format!("Pushed {} onto the stack", i))
                .collect::<Vec<_>>()
        );
    }
}
