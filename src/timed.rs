// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wall-clock timing of a computation and reporting of its outcome.

use crate::macros::log_debug;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Calls `f`, returning its result together with the wall-clock duration of
/// the call.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    log_debug!("computation finished in {elapsed:?}");
    (result, elapsed)
}

/// Writes the two report lines: the elapsed wall-clock time truncated to
/// whole milliseconds, then the computed result.
pub fn write_report(w: &mut impl Write, elapsed: Duration, result: f64) -> io::Result<()> {
    writeln!(
        w,
        "Complex Computation took {} milliseconds",
        elapsed.as_millis()
    )?;
    writeln!(w, "Result: {result}")?;
    Ok(())
}
