//! Comparison-based sorting routines.
//!
//! Three textbook O(n log n) sorts used to cross-check the heap mechanics
//! and feed the [`crate::benchmark`] harness:
//! - `heapsort`: in-place, same iterative sift-down as the priority queue
//! - `mergesort`: stable, allocates the output
//! - `quicksort`: in-place, randomized pivot

use rand::Rng;

/// Sort a slice in ascending order with heapsort.
///
/// Builds a max-heap bottom-up, then repeatedly swaps the root into the
/// shrinking tail. O(1) auxiliary space.
pub fn heapsort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    if n < 2 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(a, n, i);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(a, end, 0);
    }
}

/// Restore the max-heap property for the subtree rooted at `root`, treating
/// only `a[..size]` as the heap.
fn sift_down<T: Ord>(a: &mut [T], size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let l = 2 * root + 1;
        let r = 2 * root + 2;
        if l < size && a[l] > a[largest] {
            largest = l;
        }
        if r < size && a[r] > a[largest] {
            largest = r;
        }
        if largest == root {
            return;
        }
        a.swap(root, largest);
        root = largest;
    }
}

/// Return a new slice sorted in ascending order with top-down mergesort.
///
/// Stable: equal elements keep their input order.
pub fn mergesort<T: Ord + Clone>(a: &[T]) -> Vec<T> {
    if a.len() <= 1 {
        return a.to_vec();
    }
    let mid = a.len() / 2;
    let lhs = mergesort(&a[..mid]);
    let rhs = mergesort(&a[mid..]);

    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        if lhs[i] <= rhs[j] {
            out.push(lhs[i].clone());
            i += 1;
        } else {
            out.push(rhs[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&lhs[i..]);
    out.extend_from_slice(&rhs[j..]);
    out
}

/// Sort a slice in ascending order with randomized quicksort.
///
/// The random pivot avoids the quadratic worst case on sorted and
/// reverse-sorted inputs; expected O(n log n).
pub fn quicksort<T: Ord>(a: &mut [T]) {
    let mut rng = rand::thread_rng();
    quicksort_with(a, &mut rng);
}

fn quicksort_with<T: Ord, R: Rng>(a: &mut [T], rng: &mut R) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let pivot = rng.gen_range(0..n);
    a.swap(pivot, n - 1);

    // Lomuto partition against the pivot now at the end.
    let mut store = 0;
    for j in 0..n - 1 {
        if a[j] <= a[n - 1] {
            a.swap(store, j);
            store += 1;
        }
    }
    a.swap(store, n - 1);

    let (lo, hi) = a.split_at_mut(store);
    quicksort_with(lo, rng);
    quicksort_with(&mut hi[1..], rng);
}
