pub mod display;
pub mod guide;
pub mod pixel_buffer;
pub mod primitives;
pub mod profile;
pub mod scale;
pub mod types;

pub use display::{DisplayGeometry, DisplayTransform, FitMode, display_to_image, image_to_display};
pub use guide::{GuideSegment, guide_segment};
pub use pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use primitives::luminance;
pub use profile::{
    Axis, LineProfile, ProfileChannels, ProfileRow, ProfileSeries, RgbProfile, SeriesChannel,
    extract_gray, extract_profile, extract_rgb,
};
pub use scale::{LinearScale, map_linear};
pub use types::{Bgra, ImagePixel, Point, Viewport};
