use line_profile::core::{Axis, PixelBuffer, ProfileChannels, extract_gray, extract_profile, extract_rgb};
use proptest::prelude::*;

fn buffer_strategy() -> impl Strategy<Value = (u32, u32, usize, Vec<u8>)> {
    (1u32..12, 1u32..12, 0usize..9).prop_flat_map(|(width, height, padding)| {
        let stride = width as usize * 4 + padding;
        let len = stride * height as usize;
        (
            Just(width),
            Just(height),
            Just(stride),
            prop::collection::vec(any::<u8>(), len),
        )
    })
}

proptest! {
    #[test]
    fn rgb_profile_matches_sampled_pixels(
        (width, height, stride, data) in buffer_strategy(),
        column_axis in any::<bool>(),
        index_seed in any::<u32>()
    ) {
        let buffer = PixelBuffer::new(&data, width, height, stride).expect("valid buffer");
        let axis = if column_axis { Axis::Column } else { Axis::Row };
        let index = index_seed % axis.index_count(width, height);

        let rgb = extract_rgb(buffer, axis, index).expect("extract");
        prop_assert_eq!(rgb.len() as u32, axis.sample_count(width, height));
        for position in 0..rgb.len() {
            let (row, col) = axis.pixel_at(index, position as u32);
            let pixel = buffer.sample(row, col).expect("in range");
            prop_assert_eq!(rgb.red()[position], pixel.red);
            prop_assert_eq!(rgb.green()[position], pixel.green);
            prop_assert_eq!(rgb.blue()[position], pixel.blue);
        }
    }

    #[test]
    fn gray_samples_stay_within_channel_bounds(
        (width, height, stride, data) in buffer_strategy(),
        index_seed in any::<u32>()
    ) {
        let buffer = PixelBuffer::new(&data, width, height, stride).expect("valid buffer");
        let index = index_seed % height;

        let gray = extract_gray(buffer, Axis::Row, index).expect("gray");
        let rgb = extract_rgb(buffer, Axis::Row, index).expect("rgb");
        for (position, sample) in gray.iter().enumerate() {
            let channels = [rgb.red()[position], rgb.green()[position], rgb.blue()[position]];
            let low = channels.iter().copied().min().unwrap_or(0);
            let high = channels.iter().copied().max().unwrap_or(255);
            prop_assert!(*sample >= low && *sample <= high);
        }
    }

    #[test]
    fn index_past_end_always_fails(
        (width, height, stride, data) in buffer_strategy(),
        overshoot in 0u32..100
    ) {
        let buffer = PixelBuffer::new(&data, width, height, stride).expect("valid buffer");
        prop_assert!(extract_profile(buffer, Axis::Row, height + overshoot, ProfileChannels::Gray).is_err());
        prop_assert!(extract_profile(buffer, Axis::Column, width + overshoot, ProfileChannels::Rgb).is_err());
    }
}
