//! In-place heap sort.
//!
//! Equations:
//!   heapify:  sift_down(i, N) for i = N/2 - 1 down to 0   (max-heap)
//!   extract:  swap(0, end), sift_down(0, end)  for end = N-1 down to 1

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, i, len);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, 0, end);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], mut i: usize, n: usize) {
    loop {
        let (l, r) = (2 * i + 1, 2 * i + 2);
        let mut largest = i;
        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}
