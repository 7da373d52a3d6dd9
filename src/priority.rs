use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

pub trait PriorityContainer<T> {
    fn insert(&mut self, item: T);

    fn remove(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityContainer<T> for MinHeap<T> {
    fn insert(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    fn remove(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// `pop` hands out the least element, not the most recently pushed one.
#[derive(Debug, Clone)]
pub struct PriorityStack<T, C = MinHeap<T>> {
    inner: C,
    _item: std::marker::PhantomData<T>,
}

impl<T: Ord> PriorityStack<T> {
    pub fn new() -> Self {
        Self::with_container(MinHeap::new())
    }
}

impl<T: Ord> Default for PriorityStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: PriorityContainer<T>> PriorityStack<T, C> {
    pub fn with_container(inner: C) -> Self {
        Self {
            inner,
            _item: std::marker::PhantomData,
        }
    }

    pub fn push(&mut self, item: T) {
        self.inner.insert(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.remove()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T, C = MinHeap<T>> {
    inner: C,
    _item: std::marker::PhantomData<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_container(MinHeap::new())
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: PriorityContainer<T>> PriorityQueue<T, C> {
    pub fn with_container(inner: C) -> Self {
        Self {
            inner,
            _item: std::marker::PhantomData,
        }
    }

    pub fn offer(&mut self, item: T) {
        self.inner.insert(item);
    }

    pub fn poll(&mut self) -> Option<T> {
        self.inner.remove()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Longest first by character count, ties broken alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestFirst(pub String);

impl Ord for LongestFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .char_len()
            .cmp(&self.char_len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl LongestFirst {
    fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl PartialOrd for LongestFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for LongestFirst {
    fn from(s: &str) -> Self {
        LongestFirst(s.to_owned())
    }
}

impl fmt::Display for LongestFirst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
