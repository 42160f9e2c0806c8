use crate::core::LinearScale;
use crate::error::ProfileResult;

use super::PlotRect;

/// Smallest and largest 8-bit sample value; the fixed y domain of every chart.
pub const SAMPLE_VALUE_MIN: f64 = 0.0;
pub const SAMPLE_VALUE_MAX: f64 = 255.0;

/// One labeled axis position.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Sample index (x axis) or sample value (y axis).
    pub value: usize,
    /// Pixel coordinate along the axis.
    pub position_px: f64,
    pub label: String,
}

/// Index distance between labeled x positions.
///
/// `max(1, round((sample_count - 1) / target_ticks))`, ties to even.
#[must_use]
pub fn x_tick_step(sample_count: usize, target_ticks: u32) -> usize {
    if sample_count < 2 || target_ticks == 0 {
        return 1;
    }
    let raw = (sample_count - 1) as f64 / f64::from(target_ticks);
    (raw.round_ties_even() as usize).max(1)
}

/// Sample indices that get an x tick.
///
/// Walks `0, step, 2*step, ...` and appends `sample_count - 1` unless the walk
/// already landed on it, so the last sample is always labeled exactly once.
#[must_use]
pub fn x_tick_indices(sample_count: usize, target_ticks: u32) -> Vec<usize> {
    if sample_count == 0 {
        return Vec::new();
    }
    let step = x_tick_step(sample_count, target_ticks);
    let last = sample_count - 1;
    let mut indices: Vec<usize> = (0..sample_count).step_by(step).collect();
    if last % step != 0 {
        indices.push(last);
    }
    indices
}

/// Horizontal scale placing sample index `0` at the plot's left edge and the
/// last index at its right edge. Fails for fewer than two samples.
pub fn index_scale(sample_count: usize, plot: PlotRect) -> ProfileResult<LinearScale> {
    LinearScale::new(
        0.0,
        sample_count.saturating_sub(1) as f64,
        plot.left,
        plot.right,
    )
}

/// Vertical scale placing `0` at the plot bottom and `255` at its top.
pub fn value_scale(plot: PlotRect) -> ProfileResult<LinearScale> {
    LinearScale::new(SAMPLE_VALUE_MIN, SAMPLE_VALUE_MAX, plot.bottom, plot.top)
}

pub fn x_axis_ticks(
    sample_count: usize,
    target_ticks: u32,
    plot: PlotRect,
) -> ProfileResult<Vec<AxisTick>> {
    let scale = index_scale(sample_count, plot)?;
    Ok(x_tick_indices(sample_count, target_ticks)
        .into_iter()
        .map(|index| AxisTick {
            value: index,
            position_px: scale.domain_to_pixel(index as f64),
            label: index.to_string(),
        })
        .collect())
}

pub fn y_axis_ticks(values: &[u8], plot: PlotRect) -> ProfileResult<Vec<AxisTick>> {
    let scale = value_scale(plot)?;
    Ok(values
        .iter()
        .map(|value| AxisTick {
            value: usize::from(*value),
            position_px: scale.domain_to_pixel(f64::from(*value)),
            label: value.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::x_tick_step;

    #[test]
    fn step_rounds_half_to_even() {
        // (26 - 1) / 10 = 2.5 -> 2, (36 - 1) / 10 = 3.5 -> 4
        assert_eq!(x_tick_step(26, 10), 2);
        assert_eq!(x_tick_step(36, 10), 4);
    }

    #[test]
    fn step_never_drops_below_one() {
        assert_eq!(x_tick_step(2, 10), 1);
        assert_eq!(x_tick_step(5, 10), 1);
        assert_eq!(x_tick_step(0, 10), 1);
    }
}
