// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generation of the sample sequence and its reduction to a sum.

use crate::macros::log_debug;

/// Number of samples summed by [`sample_sum`].
pub const NUM_SAMPLES: usize = 1_000_000;

/// Returns the `i`-th sample, `sqrt(i) * sin(i)`.
///
/// Defined for every index: the square root argument is never negative and
/// the sine factor is bounded in `[-1, 1]`.
#[inline]
pub fn sample(i: usize) -> f64 {
    let x = i as f64;
    x.sqrt() * x.sin()
}

/// Sums the first [`NUM_SAMPLES`] samples.
///
/// Equivalent to [`sample_sum_of`]`(NUM_SAMPLES)`.
pub fn sample_sum() -> f64 {
    sample_sum_of(NUM_SAMPLES)
}

/// Builds the sequence of the first `num_samples` samples in index order,
/// then reduces it to a scalar by sequential addition, also in index order.
///
/// The sequence is materialized in full before the reduction starts and
/// dropped on return. This is only observable in the memory footprint: the
/// numeric result is identical to a fused generate-and-accumulate pass,
/// since additions happen in index-ascending order either way.
pub fn sample_sum_of(num_samples: usize) -> f64 {
    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        samples.push(sample(i));
    }
    log_debug!("built a sequence of {} samples", samples.len());

    let mut sum = 0.0;
    for &value in &samples {
        sum += value;
    }
    log_debug!("reduced {} samples to {sum}", samples.len());

    sum
}
