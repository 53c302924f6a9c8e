//! Recursive bucket sort over `i64`.
//!
//! Variables:
//!   B           = bucket count (options, default 10)
//!   lo, hi      = min and max of the current run
//!   width       = (hi - lo) / B + 1
//!
//! Equations:
//!   bucket(v)   = (v - lo) / width            in 0..B
//!   a run that is already non-decreasing is emitted as is
//!   each bucket's span is at most width - 1 < hi - lo, so recursion ends

use crate::config::BucketSortOptions;
use crate::error::{AlgorithmError, Result};
use crate::invariant::{Invariant, Sorted};

pub fn bucket_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(arr.len());
    sort_into(arr.to_vec(), BucketSortOptions::default().buckets(), &mut out);
    out
}

pub fn bucket_sort_with(arr: &[i64], options: &BucketSortOptions) -> Result<Vec<i64>> {
    let buckets = options.buckets();
    if buckets < 2 {
        return Err(AlgorithmError::invalid(format!(
            "bucket sort needs at least 2 buckets, got {buckets}"
        )));
    }
    let mut out = Vec::with_capacity(arr.len());
    sort_into(arr.to_vec(), buckets, &mut out);
    Ok(out)
}

fn sort_into(run: Vec<i64>, buckets: usize, out: &mut Vec<i64>) {
    if Sorted.check(&run) {
        out.extend(run);
        return;
    }
    let (Some(&lo), Some(&hi)) = (run.iter().min(), run.iter().max()) else {
        return;
    };
    let width = (i128::from(hi) - i128::from(lo)) / buckets as i128 + 1;
    let mut parts: Vec<Vec<i64>> = vec![Vec::new(); buckets];
    for v in run {
        let slot = ((i128::from(v) - i128::from(lo)) / width) as usize;
        parts[slot.min(buckets - 1)].push(v);
    }
    for part in parts {
        sort_into(part, buckets, out);
    }
}
