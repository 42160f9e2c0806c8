use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Axis, GuideSegment, LineProfile, PixelBuffer, ProfileChannels, extract_profile, guide_segment,
};
use crate::error::ProfileResult;

/// Host-held selection of which line to profile and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub axis: Axis,
    pub index: u32,
    #[serde(default)]
    pub channels: ProfileChannels,
}

impl ProfileRequest {
    #[must_use]
    pub fn new(axis: Axis, index: u32, channels: ProfileChannels) -> Self {
        Self {
            axis,
            index,
            channels,
        }
    }

    /// Clamps the index into the buffer's valid range for the current axis.
    #[must_use]
    pub fn clamped_to(self, buffer: PixelBuffer<'_>) -> Self {
        let index = self
            .axis
            .clamp_index(i64::from(self.index), buffer.width(), buffer.height());
        if index != self.index {
            debug!(axis = %self.axis, requested = self.index, index, "clamped profile index");
        }
        Self { index, ..self }
    }

    pub fn extract(self, buffer: PixelBuffer<'_>) -> ProfileResult<LineProfile> {
        extract_profile(buffer, self.axis, self.index, self.channels)
    }

    /// Preview overlay marking the selected line, in image coordinates.
    #[must_use]
    pub fn guide(self, buffer: PixelBuffer<'_>) -> GuideSegment {
        guide_segment(self.axis, self.index, buffer.width(), buffer.height())
    }

    /// Caption such as `Row 12` or `Column 3`.
    #[must_use]
    pub fn title(self) -> String {
        match self.axis {
            Axis::Row => format!("Row {}", self.index),
            Axis::Column => format!("Column {}", self.index),
        }
    }
}
