//! Verification and tests for float sort implementations.

use super::code::{available_variants, sort_original};
use crate::dataset::DatasetGenerator;
use crate::error::BenchError;

/// Inputs every variant must sort identically to the original.
fn verification_inputs() -> Vec<Vec<f32>> {
    let gen = DatasetGenerator::new(0x5eed);
    let mut inputs = vec![Vec::new(), vec![1.0], vec![2.0, -2.0]];
    for size in [255, 256, 257, 1023, 4096] {
        inputs.push(gen.random_sequence(size));
        inputs.push(gen.shuffled(&gen.ordered_sequence(size)));
    }
    // Heavy duplication plus both infinities
    let mut dups: Vec<f32> = (0..3000).map(|i| ((i * 7919) % 13) as f32 - 6.0).collect();
    dups.extend([f32::INFINITY, f32::NEG_INFINITY, f32::MAX, f32::MIN]);
    inputs.push(dups);
    inputs
}

/// Verify all variants produce the same ordering as the original.
pub fn verify_all() -> Result<(), BenchError> {
    for input in verification_inputs() {
        let mut expected = input.clone();
        sort_original(&mut expected);

        for variant in available_variants() {
            if variant.name == "original" {
                continue;
            }

            let mut actual = input.clone();
            (variant.function)(&mut actual);

            if let Some(pos) = expected.iter().zip(&actual).position(|(e, a)| e != a) {
                return Err(BenchError::Verification {
                    algorithm: "sort_floats",
                    variant: variant.name,
                    detail: format!(
                        "n={}: position {} expected {}, got {}",
                        input.len(),
                        pos,
                        expected[pos],
                        actual[pos]
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::float_sort::code::{float_less, sort_by_predicate, RADIX_THRESHOLD};

    fn is_non_decreasing(data: &[f32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should match the original ordering");
    }

    #[test]
    fn test_original_basic() {
        let mut data = [5.0, 1.0, 4.0, 2.0, 3.0];
        sort_original(&mut data);
        assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_injected_predicate_controls_order() {
        let mut data = [1.0, 3.0, 2.0];
        let greater = |a: f32, b: f32| a > b;
        sort_by_predicate(&mut data, &greater);
        assert_eq!(data, [3.0, 2.0, 1.0]);

        sort_by_predicate(&mut data, &float_less);
        assert_eq!(data, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_and_single() {
        for variant in available_variants() {
            let mut empty: [f32; 0] = [];
            (variant.function)(&mut empty);

            let mut single = [42.5];
            (variant.function)(&mut single);
            assert_eq!(single, [42.5], "{}", variant.name);
        }
    }

    #[test]
    fn test_already_sorted_is_unchanged() {
        let sorted = DatasetGenerator::default().ordered_sequence(5000);
        for variant in available_variants() {
            let mut data = sorted.clone();
            (variant.function)(&mut data);
            assert_eq!(data, sorted, "{}", variant.name);
        }
    }

    #[test]
    fn test_reverse_input_around_radix_threshold() {
        for size in [RADIX_THRESHOLD - 1, RADIX_THRESHOLD, RADIX_THRESHOLD + 1] {
            let input: Vec<f32> = (0..size).rev().map(|i| i as f32 - 100.0).collect();
            for variant in available_variants() {
                let mut data = input.clone();
                (variant.function)(&mut data);
                assert!(is_non_decreasing(&data), "{} n={}", variant.name, size);
                assert_eq!(data[0], -100.0, "{}", variant.name);
            }
        }
    }

    #[test]
    fn test_negative_and_positive_mix() {
        let mut input: Vec<f32> = DatasetGenerator::new(11).random_sequence(2048);
        input.extend([-0.5, 0.5, f32::NEG_INFINITY, f32::INFINITY]);
        for variant in available_variants() {
            let mut data = input.clone();
            (variant.function)(&mut data);
            assert!(is_non_decreasing(&data), "{}", variant.name);
            assert_eq!(data.first(), Some(&f32::NEG_INFINITY), "{}", variant.name);
            assert_eq!(data.last(), Some(&f32::INFINITY), "{}", variant.name);
        }
    }
}
