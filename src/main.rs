// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Entry point: times the sample sum and prints the two report lines.

use complexsum::{sample_sum, timed, write_report};
use std::io;

fn main() -> io::Result<()> {
    #[cfg(feature = "log")]
    env_logger::init();

    let (result, elapsed) = timed(sample_sum);

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), elapsed, result)
}
