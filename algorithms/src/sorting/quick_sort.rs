//! Randomized quicksort with a three-way partition.
//!
//! Equations:
//!   pick p uniformly from arr
//!   partition:  arr[..lt] < p,  arr[lt..gt] == p,  arr[gt..] > p
//!   recurse into the smaller side, loop on the larger (stack depth O(log N))

use rand::Rng;

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_with_rng(arr, &mut rand::thread_rng());
}

pub fn quick_sort_with_rng<T: Ord, R: Rng + ?Sized>(mut arr: &mut [T], rng: &mut R) {
    while arr.len() > 1 {
        let pivot = rng.gen_range(0..arr.len());
        let (lt, gt) = partition(arr, pivot);
        let slice = std::mem::take(&mut arr);
        let (left, rest) = slice.split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort_with_rng(left, rng);
            arr = right;
        } else {
            quick_sort_with_rng(right, rng);
            arr = left;
        }
    }
}

fn partition<T: Ord>(arr: &mut [T], pivot: usize) -> (usize, usize) {
    arr.swap(0, pivot);
    // arr[lt] always holds a pivot-equal element
    let (mut lt, mut i, mut gt) = (0, 1, arr.len());
    while i < gt {
        match arr[i].cmp(&arr[lt]) {
            std::cmp::Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
