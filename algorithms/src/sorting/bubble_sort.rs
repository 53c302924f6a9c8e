/// Bubble sort; stops after the first pass with no swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut end = arr.len();
    while end > 1 {
        let mut last_swap = 0;
        for j in 1..end {
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                last_swap = j;
            }
        }
        // everything from last_swap on is in final position
        end = last_swap;
    }
}
