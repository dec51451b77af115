use std::collections::vec_deque::{self, VecDeque};

/// Ordered, double-ended sequence of path elements.
///
/// Appending and peeking at either end are O(1). Cloning deep-copies the elements,
/// so a cloned sequence can grow independently of its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSequence<T> {
    items: VecDeque<T>,
}

impl<T> PathSequence<T> {
    /// Creates an empty sequence
    pub fn new() -> Self {
        PathSequence {
            items: VecDeque::new(),
        }
    }

    /// Creates a sequence holding a single element
    pub fn singleton(item: T) -> Self {
        let mut items = VecDeque::with_capacity(1);
        items.push_back(item);
        PathSequence { items }
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Last element (the tail)
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// First element (the head)
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from head to tail
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> PathSequence<T> {
    /// Linear scan for `item`
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for PathSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PathSequence<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for PathSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PathSequence {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_ends() {
        let seq = PathSequence::singleton("a");
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.front(), Some(&"a"));
        assert_eq!(seq.back(), Some(&"a"));
    }

    #[test]
    fn test_push_both_ends() {
        let mut seq = PathSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.back(), None);
        seq.push_back(2);
        seq.push_back(3);
        seq.push_front(1);
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.back(), Some(&3));
        assert!(seq.contains(&2));
        assert!(!seq.contains(&4));
    }

    #[test]
    fn test_clone_is_independent() {
        let original: PathSequence<_> = ["x", "y"].into_iter().collect();
        let mut copy = original.clone();
        copy.push_back("z");
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
        assert_eq!(original.back(), Some(&"y"));
    }
}
