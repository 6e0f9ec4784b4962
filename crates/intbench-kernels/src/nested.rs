//! Nested-loop counter, a pure loop-overhead probe.

use std::hint::black_box;

/// Increment an accumulator `outer * inner` times.
///
/// Each increment goes through `black_box`, so the loop is not reduced
/// to a multiplication.
pub fn nested_loops(outer: u64, inner: u64) -> u64 {
    let mut sum = 0u64;
    let mut i = 0u64;
    while i < outer {
        let mut j = 0u64;
        while j < inner {
            sum = black_box(sum + 1);
            j += 1;
        }
        i += 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::nested_loops;

    #[test]
    fn count_is_product_of_trip_counts() {
        for (outer, inner) in [(1u64, 1u64), (3, 7), (5000, 1000)] {
            assert_eq!(nested_loops(outer, inner), outer * inner);
        }
    }

    #[test]
    fn zero_trip_counts() {
        assert_eq!(nested_loops(0, 1000), 0);
        assert_eq!(nested_loops(1000, 0), 0);
    }
}
