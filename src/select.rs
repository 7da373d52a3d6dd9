use std::collections::BinaryHeap;

use tracing::{debug, instrument, trace};

use crate::errors::SelectError;

/// Max-heap capped at `k`; the root is the k-th smallest element offered so far.
#[derive(Debug, Clone)]
pub struct BoundedSelector<T> {
    heap: BinaryHeap<T>,
    k: usize,
    seen: usize,
}

impl<T: Ord> BoundedSelector<T> {
    pub fn new(k: usize) -> Result<Self, SelectError> {
        if k == 0 {
            return Err(SelectError::OutOfRange { k, len: 0 });
        }

        Ok(Self {
            heap: BinaryHeap::with_capacity(k + 1),
            k,
            seen: 0,
        })
    }

    pub fn offer(&mut self, item: T) {
        self.seen += 1;
        self.heap.push(item);
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn finish(self) -> Result<T, SelectError> {
        if self.heap.len() < self.k {
            return Err(SelectError::OutOfRange { k: self.k, len: self.seen });
        }

        let mut heap = self.heap;
        heap.pop().ok_or(SelectError::OutOfRange { k: self.k, len: self.seen })
    }
}

#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn select_kth_smallest<T: Ord + Clone>(sequence: &[T], k: usize) -> Result<T, SelectError> {
    if k == 0 || k > sequence.len() {
        debug!("rank out of range");
        return Err(SelectError::OutOfRange { k, len: sequence.len() });
    }

    select_kth_smallest_in(sequence.iter().cloned(), k)
}

pub fn select_kth_smallest_in<I>(items: I, k: usize) -> Result<I::Item, SelectError>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut selector = BoundedSelector::new(k)?;
    for item in items {
        selector.offer(item);
    }

    trace!(k, seen = selector.seen(), "selection pass complete");
    selector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_kth_smallest_scenarios() {
        let cases = vec![
            (vec![7, 10, 4, 3, 20, 15], 3, 7),
            (vec![5], 1, 5),
            (vec![2, 2, 2], 2, 2),
            (vec![7, 10, 4, 3, 20, 15], 1, 3),
            (vec![7, 10, 4, 3, 20, 15], 6, 20),
            (vec![-4, 0, -9, 12], 2, -4),
        ];

        for (sequence, k, expected) in cases {
            assert_eq!(select_kth_smallest(&sequence, k), Ok(expected));
        }
    }

    #[test]
    fn test_out_of_range() {
        let sequence = vec![7, 10, 4];

        assert_eq!(
            select_kth_smallest(&sequence, 0),
            Err(SelectError::OutOfRange { k: 0, len: 3 })
        );
        assert_eq!(
            select_kth_smallest(&sequence, 4),
            Err(SelectError::OutOfRange { k: 4, len: 3 })
        );

        let empty: Vec<i32> = Vec::new();
        assert_eq!(
            select_kth_smallest(&empty, 1),
            Err(SelectError::OutOfRange { k: 1, len: 0 })
        );
    }

    #[test]
    fn test_input_untouched_and_repeatable() {
        let sequence = vec![9, 1, 8, 2, 7, 3];

        let first = select_kth_smallest(&sequence, 4);
        let second = select_kth_smallest(&sequence, 4);

        assert_eq!(first, Ok(7));
        assert_eq!(first, second);
        assert_eq!(sequence, vec![9, 1, 8, 2, 7, 3]);
    }

    #[test]
    fn test_matches_full_sort() {
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let len = rng.gen_range(1..64);
            let sequence: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let k = rng.gen_range(1..=len);

            let mut sorted = sequence.clone();
            sorted.sort();

            assert_eq!(select_kth_smallest(&sequence, k), Ok(sorted[k - 1]));
        }
    }

    #[test]
    fn test_selector_stays_bounded() {
        let mut selector = BoundedSelector::new(3).unwrap();

        for x in [50, 40, 30, 20, 10, 60] {
            selector.offer(x);
            assert!(selector.len() <= selector.capacity());
        }

        // holds {10, 20, 30}
        assert_eq!(selector.peek(), Some(&30));
        assert_eq!(selector.seen(), 6);
        assert_eq!(selector.finish(), Ok(30));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(BoundedSelector::<i32>::new(0).is_err());
    }

    #[test]
    fn test_streaming_short_input() {
        let res = select_kth_smallest_in(vec![3, 1], 5);
        assert_eq!(res, Err(SelectError::OutOfRange { k: 5, len: 2 }));
    }

    #[test]
    fn test_streaming_strings() {
        let words = ["pear", "apple", "fig", "banana"].into_iter().map(String::from);
        assert_eq!(select_kth_smallest_in(words, 2), Ok("banana".to_owned()));
    }
}
