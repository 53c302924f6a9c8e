//! LSD radix sort over `i64`.
//!
//! Variables:
//!   b       = base (options, default 10)
//!   key(v)  = v - min  as u64    (order preserving, handles negatives)
//!
//! Equations:
//!   pass k:  stable distribute by (key(v) / b^k) mod b, then concatenate
//!   passes   = number of base-b digits of max key

use crate::config::RadixSortOptions;
use crate::error::{AlgorithmError, Result};

pub fn radix_sort(arr: &mut [i64]) {
    sort_by_digits(arr, RadixSortOptions::default().base());
}

pub fn radix_sort_with(arr: &mut [i64], options: &RadixSortOptions) -> Result<()> {
    let base = options.base();
    if !(2..=RadixSortOptions::MAX_BASE).contains(&base) {
        return Err(AlgorithmError::invalid(format!("unsupported radix base {base}")));
    }
    sort_by_digits(arr, base);
    Ok(())
}

fn sort_by_digits(arr: &mut [i64], base: u64) {
    let Some(&min) = arr.iter().min() else {
        return;
    };
    let key = |v: i64| (v as u64).wrapping_sub(min as u64);
    let max_key = arr.iter().map(|&v| key(v)).max().unwrap_or(0);

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); base as usize];
    let mut place: u64 = 1;
    loop {
        for &v in arr.iter() {
            buckets[((key(v) / place) % base) as usize].push(v);
        }
        for (slot, v) in arr
            .iter_mut()
            .zip(buckets.iter_mut().flat_map(|b| b.drain(..)))
        {
            *slot = v;
        }
        match place.checked_mul(base) {
            Some(next) if next <= max_key => place = next,
            _ => break,
        }
    }
}
