use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::pixel_buffer::PixelBuffer;
use crate::core::types::Bgra;
use crate::error::{ProfileError, ProfileResult};

/// Orientation of a line profile.
///
/// `Row` fixes a row and walks the columns (x varies); `Column` fixes a column
/// and walks the rows (y varies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Row,
    Column,
}

impl Axis {
    /// Number of selectable line indices for an image of the given size.
    #[must_use]
    pub fn index_count(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Row => height,
            Self::Column => width,
        }
    }

    /// Number of samples one profile along this axis contains.
    #[must_use]
    pub fn sample_count(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Row => width,
            Self::Column => height,
        }
    }

    /// Clamps a user-entered index into `[0, index_count - 1]`.
    ///
    /// Returns `0` for empty images; extraction rejects those anyway.
    #[must_use]
    pub fn clamp_index(self, index: i64, width: u32, height: u32) -> u32 {
        let max = i64::from(self.index_count(width, height).saturating_sub(1));
        index.clamp(0, max) as u32
    }

    /// `(row, col)` of the `position`-th sample on line `index`.
    #[must_use]
    pub fn pixel_at(self, index: u32, position: u32) -> (u32, u32) {
        match self {
            Self::Row => (index, position),
            Self::Column => (position, index),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Which sample sequences an extraction produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileChannels {
    #[default]
    Gray,
    Rgb,
}

/// Channel a plotted sample sequence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesChannel {
    Gray,
    Red,
    Green,
    Blue,
}

/// One borrowed sample sequence of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSeries<'a> {
    pub channel: SeriesChannel,
    pub samples: &'a [u8],
}

/// Three equal-length channel sequences of an RGB profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RgbProfileParts")]
pub struct RgbProfile {
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

#[derive(Deserialize)]
struct RgbProfileParts {
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

impl TryFrom<RgbProfileParts> for RgbProfile {
    type Error = ProfileError;

    fn try_from(parts: RgbProfileParts) -> ProfileResult<Self> {
        Self::new(parts.red, parts.green, parts.blue)
    }
}

impl RgbProfile {
    pub fn new(red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>) -> ProfileResult<Self> {
        if red.len() != green.len() || red.len() != blue.len() {
            return Err(ProfileError::InvalidData(format!(
                "rgb channel lengths differ: red={}, green={}, blue={}",
                red.len(),
                green.len(),
                blue.len()
            )));
        }
        Ok(Self { red, green, blue })
    }

    #[must_use]
    pub fn red(&self) -> &[u8] {
        &self.red
    }

    #[must_use]
    pub fn green(&self) -> &[u8] {
        &self.green
    }

    #[must_use]
    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.red.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    #[must_use]
    pub fn into_channels(self) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        (self.red, self.green, self.blue)
    }
}

/// Sample sequences along one row or column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "samples", rename_all = "snake_case")]
pub enum LineProfile {
    Gray(Vec<u8>),
    Rgb(RgbProfile),
}

impl LineProfile {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Gray(samples) => samples.len(),
            Self::Rgb(rgb) => rgb.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn channels(&self) -> ProfileChannels {
        match self {
            Self::Gray(_) => ProfileChannels::Gray,
            Self::Rgb(_) => ProfileChannels::Rgb,
        }
    }

    /// Sample sequences in plotting order: gray alone, or red, green, blue.
    #[must_use]
    pub fn series(&self) -> SmallVec<[ProfileSeries<'_>; 3]> {
        match self {
            Self::Gray(samples) => smallvec![ProfileSeries {
                channel: SeriesChannel::Gray,
                samples: samples.as_slice(),
            }],
            Self::Rgb(rgb) => smallvec![
                ProfileSeries {
                    channel: SeriesChannel::Red,
                    samples: rgb.red(),
                },
                ProfileSeries {
                    channel: SeriesChannel::Green,
                    samples: rgb.green(),
                },
                ProfileSeries {
                    channel: SeriesChannel::Blue,
                    samples: rgb.blue(),
                },
            ],
        }
    }

    /// Header names matching the values yielded by [`LineProfile::rows`].
    #[must_use]
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            Self::Gray(_) => &["index", "gray"],
            Self::Rgb(_) => &["index", "R", "G", "B"],
        }
    }

    /// Per-index records for tabular export (`index,gray` or `index,R,G,B`).
    pub fn rows(&self) -> impl Iterator<Item = ProfileRow> + '_ {
        (0..self.len()).map(move |index| {
            let values = match self {
                Self::Gray(samples) => smallvec![samples[index]],
                Self::Rgb(rgb) => smallvec![rgb.red[index], rgb.green[index], rgb.blue[index]],
            };
            ProfileRow { index, values }
        })
    }
}

/// One exported profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub index: usize,
    pub values: SmallVec<[u8; 3]>,
}

/// Pixels along line `index` in increasing position order.
///
/// This is the single traversal shared by every extraction flavor.
fn line_pixels<'a>(
    buffer: PixelBuffer<'a>,
    axis: Axis,
    index: u32,
) -> ProfileResult<impl Iterator<Item = ProfileResult<Bgra>> + 'a> {
    let (width, height) = (buffer.width(), buffer.height());
    let index_count = axis.index_count(width, height);
    if index >= index_count {
        return Err(ProfileError::IndexOutOfRange {
            axis,
            index,
            len: index_count,
        });
    }

    let sample_count = axis.sample_count(width, height);
    trace!(%axis, index, sample_count, "traverse profile line");
    Ok((0..sample_count).map(move |position| {
        let (row, col) = axis.pixel_at(index, position);
        buffer.sample(row, col)
    }))
}

/// Luminance samples along one row or column.
pub fn extract_gray(buffer: PixelBuffer<'_>, axis: Axis, index: u32) -> ProfileResult<Vec<u8>> {
    line_pixels(buffer, axis, index)?
        .map(|pixel| pixel.map(Bgra::luminance))
        .collect()
}

/// Raw red, green and blue samples along one row or column.
pub fn extract_rgb(buffer: PixelBuffer<'_>, axis: Axis, index: u32) -> ProfileResult<RgbProfile> {
    let capacity = axis.sample_count(buffer.width(), buffer.height()) as usize;
    let mut red = Vec::with_capacity(capacity);
    let mut green = Vec::with_capacity(capacity);
    let mut blue = Vec::with_capacity(capacity);

    for pixel in line_pixels(buffer, axis, index)? {
        let pixel = pixel?;
        red.push(pixel.red);
        green.push(pixel.green);
        blue.push(pixel.blue);
    }

    Ok(RgbProfile { red, green, blue })
}

/// Extracts a fresh profile with the requested channel layout.
pub fn extract_profile(
    buffer: PixelBuffer<'_>,
    axis: Axis,
    index: u32,
    channels: ProfileChannels,
) -> ProfileResult<LineProfile> {
    match channels {
        ProfileChannels::Gray => extract_gray(buffer, axis, index).map(LineProfile::Gray),
        ProfileChannels::Rgb => extract_rgb(buffer, axis, index).map(LineProfile::Rgb),
    }
}
