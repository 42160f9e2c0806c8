use line_profile::api::{x_tick_indices, x_tick_step};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tick_indices_start_at_zero_and_end_at_last_sample(
        sample_count in 1usize..20_000,
        target in 1u32..40
    ) {
        let indices = x_tick_indices(sample_count, target);
        prop_assert_eq!(indices.first().copied(), Some(0));
        prop_assert_eq!(indices.last().copied(), Some(sample_count - 1));
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tick_indices_follow_the_step(
        sample_count in 2usize..20_000,
        target in 1u32..40
    ) {
        let step = x_tick_step(sample_count, target);
        let indices = x_tick_indices(sample_count, target);
        let (last, walked) = indices.split_last().expect("non-empty");

        prop_assert!(step >= 1);
        for (position, index) in walked.iter().enumerate() {
            prop_assert_eq!(*index, position * step);
        }
        prop_assert!(*last - walked.last().copied().unwrap_or(0) <= step);
    }
}
