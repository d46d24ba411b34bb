//! Verification and tests for rank query implementations.

use super::code::{available_variants, rank_query_sweep};
use crate::dataset::{queries_from, DatasetGenerator};
use crate::error::BenchError;

/// (data, query) pairs every variant must rank identically to the original.
fn verification_cases() -> Vec<(Vec<f32>, Vec<f32>)> {
    let gen = DatasetGenerator::new(0x5eed);
    let mut cases = vec![
        (vec![], vec![]),
        (vec![1.0, 3.0, 5.0, 7.0], vec![4.0, 8.0, 0.0, 7.0]),
        (vec![1.0, 1.0, 1.0], vec![1.0, 0.5, 1.5]),
    ];

    for size in [1, 2, 3, 100, 1023, 4096] {
        cases.push(gen.rank_workload(size));

        // Queries from an unrelated distribution, mostly outside the data range
        let data = gen.ordered_sequence(size);
        let query = DatasetGenerator::new(7).random_sequence(size);
        cases.push((data, query));
    }

    // Long runs of duplicates
    let data: Vec<f32> = (0..2000).map(|i| (i / 100) as f32).collect();
    let indices = DatasetGenerator::new(3).index_sequence(data.len());
    let mut query = queries_from(&data, &indices);
    query[0] = f32::INFINITY;
    query[1] = f32::NEG_INFINITY;
    cases.push((data, query));

    cases
}

/// Verify all variants produce the same ranks as the original sweep.
pub fn verify_all() -> Result<(), BenchError> {
    for (data, query) in verification_cases() {
        let mut expected = vec![0; query.len()];
        rank_query_sweep(&mut expected, &data, &query);

        for variant in available_variants() {
            if variant.name == "original" {
                continue;
            }

            let mut actual = vec![usize::MAX; query.len()];
            (variant.function)(&mut actual, &data, &query);

            if let Some(i) = expected.iter().zip(&actual).position(|(e, a)| e != a) {
                return Err(BenchError::Verification {
                    algorithm: "rank_query",
                    variant: variant.name,
                    detail: format!(
                        "n={}: query[{}]={} expected rank {}, got {}",
                        query.len(),
                        i,
                        query[i],
                        expected[i],
                        actual[i]
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
    use crate::search::rank_query::code::{lower_bound, lower_bound_branchless};
    use crate::search::rank_query::rank_checksum;

    fn ranks_for(data: &[f32], query: &[f32]) -> Vec<(&'static str, Vec<usize>)> {
        available_variants()
            .into_iter()
            .map(|v| {
                let mut result = vec![usize::MAX; query.len()];
                (v.function)(&mut result, data, query);
                (v.name, result)
            })
            .collect()
    }

    fn assert_all_variants(data: &[f32], query: &[f32], expected: &[usize]) {
        for (name, ranks) in ranks_for(data, query) {
            assert_eq!(ranks, expected, "{name}: data={data:?} query={query:?}");
        }
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should match the original ranks");
    }

    #[test]
    fn test_query_between_elements() {
        assert_all_variants(&[1.0, 3.0, 5.0, 7.0], &[4.0, 9.0, 2.0, 6.0], &[2, 4, 1, 3]);
    }

    #[test]
    fn test_duplicates_resolve_to_first_position() {
        assert_all_variants(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], &[0, 0, 0]);
        assert_all_variants(&[0.0, 2.0, 2.0, 2.0, 9.0], &[2.0, 2.5, 9.0, 0.0, 10.0], &[1, 4, 4, 0, 5]);
    }

    #[test]
    fn test_query_above_every_element_gets_n() {
        assert_all_variants(&[2.0, 4.0, 6.0], &[10.0, 10.0, 10.0], &[3, 3, 3]);
        assert_all_variants(
            &[2.0, 4.0, 6.0],
            &[f32::INFINITY, f32::MAX, 6.5],
            &[3, 3, 3],
        );
    }

    #[test]
    fn test_query_below_every_element_gets_zero() {
        assert_all_variants(&[2.0, 4.0, 6.0], &[-1.0, f32::NEG_INFINITY, 2.0], &[0, 0, 0]);
    }

    #[test]
    fn test_unsorted_queries_keep_their_positions() {
        assert_all_variants(&[5.0], &[5.0], &[0]);

        let data = [10.0, 20.0, 30.0, 40.0];
        let query = [40.0, 5.0, 25.0, 10.0];
        assert_all_variants(&data, &query, &[3, 0, 2, 0]);
    }

    #[test]
    fn test_data_and_query_lengths_may_differ() {
        assert_all_variants(&[5.0], &[5.0, 4.0, 6.0], &[0, 0, 1]);
        assert_all_variants(&[1.0, 2.0, 3.0, 4.0], &[2.5], &[2]);
        assert_all_variants(&[], &[1.0, -1.0], &[0, 0]);
    }

    #[test]
    fn test_empty_input_is_a_no_op() {
        assert_all_variants(&[], &[], &[]);
    }

    #[test]
    fn test_sweep_reaches_end_then_stays_bounded() {
        // Every query past the largest element: the cursor must stop at N.
        let data: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let query: Vec<f32> = (0..1000).map(|i| 1000.0 + i as f32).collect();
        let expected = vec![1000; 1000];
        assert_all_variants(&data, &query, &expected);
    }

    #[test]
    fn test_lower_bound_helpers_agree_with_partition_point() {
        let data = DatasetGenerator::new(21).ordered_sequence(777);
        let probes = DatasetGenerator::new(22).random_sequence(300);
        for &q in probes.iter().chain(data.iter().step_by(13)) {
            let expected = data.partition_point(|&x| x < q);
            assert_eq!(lower_bound(&data, q), expected, "q={q}");
            assert_eq!(lower_bound_branchless(&data, q), expected, "q={q}");
        }
        assert_eq!(lower_bound(&[], 1.0), 0);
        assert_eq!(lower_bound_branchless(&[], 1.0), 0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let mut result = [0usize; 2];
        rank_query_sweep(&mut result, &[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_rank_checksum() {
        assert_eq!(rank_checksum(&[]), 0.0);
        assert_eq!(rank_checksum(&[1, 2, 3]), 6.0);
    }
}
