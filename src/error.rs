use thiserror::Error;

use crate::core::Axis;

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(
        "invalid pixel buffer geometry: width={width}, height={height}, stride={stride_bytes}, len={len}"
    )]
    InvalidGeometry {
        width: u32,
        height: u32,
        stride_bytes: usize,
        len: usize,
    },

    #[error("pixel (row={row}, col={col}) is outside a {width}x{height} buffer")]
    OutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    #[error("{axis} index {index} is outside 0..{len}")]
    IndexOutOfRange { axis: Axis, index: u32, len: u32 },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
