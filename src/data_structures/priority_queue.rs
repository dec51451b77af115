use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// Total order injected into a [`PriorityQueue`].
///
/// The element that compares `Less` than every other is the queue's minimum.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation, smallest first
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A binary min-heap ordered by an injected comparator.
///
/// There is no iteration and no removal from arbitrary positions. Elements that compare
/// `Equal` come out in an unspecified order.
pub struct PriorityQueue<T, C> {
    heap: Vec<T>,
    comparator: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    /// Creates a new empty priority queue
    pub fn new(comparator: C) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty priority queue able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an element in O(log n)
    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Returns the minimum element without removing it
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes and returns the minimum element in O(log n)
    pub fn remove_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.heap.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.heap.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<T, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .finish()
    }
}
