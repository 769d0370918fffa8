//! In-place heap sort.
//!
//! The sorted string report needs an explicit sort because trie traversal
//! order reflects insertion/split history, not alphabetical order. Heap sort
//! keeps the worst case at O(n log n) with no auxiliary allocation. It is not
//! stable, which is irrelevant here: set elements are distinct.

use std::cmp::Ordering;

/// Sort `data` in place in ascending order.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, T::cmp);
}

/// Sort `data` in place with a caller-supplied comparator.
pub fn heap_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    // Build a max-heap bottom-up, then repeatedly swap the maximum to the
    // shrinking tail and restore the heap over the remaining prefix.
    for i in (0..n / 2).rev() {
        sift_down(data, i, n, &mut cmp);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &mut cmp);
    }
}

fn sift_down<T, F>(data: &mut [T], mut node: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * node + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let mut largest = node;
        if cmp(&data[left], &data[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < end && cmp(&data[right], &data[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == node {
            return;
        }
        data.swap(node, largest);
        node = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: [u32; 0] = [];
        heap_sort(&mut empty);

        let mut one = [42];
        heap_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_sorts_integers() {
        let mut data = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
        heap_sort(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        let mut data: Vec<u32> = (0..100).collect();
        heap_sort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));

        let mut data: Vec<u32> = (0..100).rev().collect();
        heap_sort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![3, 1, 3, 1, 3, 1];
        heap_sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 3]);
    }

    #[test]
    fn test_byte_strings_lexicographic() {
        let mut data: Vec<Vec<u8>> = vec![
            b"GT".to_vec(),
            b"AC".to_vec(),
            b"ACGT".to_vec(),
            b"A".to_vec(),
            b"TA".to_vec(),
        ];
        heap_sort(&mut data);
        assert_eq!(
            data,
            vec![
                b"A".to_vec(),
                b"AC".to_vec(),
                b"ACGT".to_vec(),
                b"GT".to_vec(),
                b"TA".to_vec(),
            ]
        );
    }

    #[test]
    fn test_heap_sort_by_reverse_order() {
        let mut data = vec![1, 4, 2, 3];
        heap_sort_by(&mut data, |a, b| b.cmp(a));
        assert_eq!(data, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_matches_std_sort() {
        let mut a: Vec<u64> = (0..500).map(|i| (i * 2654435761u64) % 997).collect();
        let mut b = a.clone();
        heap_sort(&mut a);
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
