// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end test of the compiled binary.

use std::process::Command;

/// Index-ascending sum of the first million samples, pinned from an
/// arbitrary-precision computation of the same series.
const REFERENCE_SUM: f64 = -681.75966435371;

#[test]
fn prints_two_report_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_complexsum"))
        .output()
        .expect("failed to run the binary");
    assert!(output.status.success(), "status = {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<&str>>();
    assert_eq!(lines.len(), 2, "stdout = {stdout:?}");

    let millis = lines[0]
        .strip_prefix("Complex Computation took ")
        .and_then(|rest| rest.strip_suffix(" milliseconds"))
        .unwrap_or_else(|| panic!("unexpected first line: {:?}", lines[0]));
    // Parsing as an unsigned integer also checks non-negativity.
    let millis = millis.parse::<u128>().unwrap();
    // Summing a million samples finishes well within a minute.
    assert!(millis < 60_000, "millis = {millis}");

    let result = lines[1]
        .strip_prefix("Result: ")
        .unwrap_or_else(|| panic!("unexpected second line: {:?}", lines[1]));
    let result = result.parse::<f64>().unwrap();
    let relative_error = ((result - REFERENCE_SUM) / REFERENCE_SUM).abs();
    assert!(relative_error <= 1e-6, "result = {result}");
}
