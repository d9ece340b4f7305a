// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Layout results are `f32` pixel values; compare them with the `approx`
//! macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
