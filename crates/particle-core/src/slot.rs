use std::cell::RefCell;
use std::rc::Rc;

/// Single-slot "latest value" handle shared between a producer callback and
/// the frame loop. A newer value replaces an unread older one.
#[derive(Debug)]
pub struct Latest<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for Latest<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    /// Non-blocking read that empties the slot.
    pub fn take(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl<T: Clone> Latest<T> {
    pub fn peek(&self) -> Option<T> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let slot = Latest::new();
        let producer = slot.clone();
        producer.publish(1);
        producer.publish(2);
        assert_eq!(slot.peek(), Some(2));
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
        assert!(slot.is_empty());
    }
}
