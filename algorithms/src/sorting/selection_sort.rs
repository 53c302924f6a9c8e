pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let min = (i..arr.len())
            .min_by(|&a, &b| arr[a].cmp(&arr[b]))
            .unwrap_or(i);
        arr.swap(i, min);
    }
}
