use std::collections::VecDeque;

/// Count-bounded FIFO window.
///
/// Holds at most `capacity` items in insertion order. Pushing past capacity
/// evicts from the front; nothing else ever removes an item.
#[derive(Clone, Debug)]
pub struct RollingWindow<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// A zero capacity is bumped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a window from existing items, oldest first, keeping only the
    /// newest `capacity` of them.
    pub fn from_items<I>(capacity: usize, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut window = Self::new(capacity);
        for item in items {
            window.push(item);
        }
        window
    }

    /// Appends `item` and returns the oldest evicted item, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.values.push_back(item);
        self.evict_overflow()
    }

    fn evict_overflow(&mut self) -> Option<T> {
        let mut evicted = None;
        while self.values.len() > self.capacity {
            evicted = self.values.pop_front();
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> RollingWindow<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut w = RollingWindow::new(3);
        assert_eq!(w.push(1), None);
        assert_eq!(w.push(2), None);
        assert_eq!(w.push(3), None);
        assert_eq!(w.push(4), Some(1));
        assert_eq!(w.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn from_items_keeps_newest() {
        let w = RollingWindow::from_items(2, vec![1, 2, 3, 4, 5]);
        assert_eq!(w.to_vec(), vec![4, 5]);
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut w = RollingWindow::new(0);
        w.push('a');
        w.push('b');
        assert_eq!(w.capacity(), 1);
        assert_eq!(w.to_vec(), vec!['b']);
    }
}
