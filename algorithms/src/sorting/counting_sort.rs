//! Counting sort over `i64`.
//!
//! Equations:
//!   count[v - min] = |{ i | arr[i] = v }|     for v in min..=max
//!   output         = v repeated count[v - min] times, v ascending
//!   table size     = max - min + 1   (bounded by options.max_range)

use crate::config::CountingSortOptions;
use crate::error::{AlgorithmError, Result};

pub fn counting_sort(arr: &mut [i64]) -> Result<()> {
    counting_sort_with(arr, &CountingSortOptions::default())
}

pub fn counting_sort_with(arr: &mut [i64], options: &CountingSortOptions) -> Result<()> {
    let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
        return Ok(());
    };
    let range = i128::from(max) - i128::from(min) + 1;
    if range > i128::from(options.max_range()) {
        return Err(AlgorithmError::invalid(format!(
            "value range {range} exceeds counting sort limit {}",
            options.max_range()
        )));
    }

    let mut counts = vec![0usize; range as usize];
    for &v in arr.iter() {
        counts[(i128::from(v) - i128::from(min)) as usize] += 1;
    }
    let values = counts.iter().enumerate().flat_map(|(offset, &n)| {
        std::iter::repeat((i128::from(min) + offset as i128) as i64).take(n)
    });
    for (slot, v) in arr.iter_mut().zip(values) {
        *slot = v;
    }
    Ok(())
}
