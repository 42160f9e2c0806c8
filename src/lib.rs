//! line-profile-rs: line-profile extraction and chart rendering for raster images.
//!
//! `core` reads packed B,G,R,A buffers and maps coordinates, `render` turns
//! backend-agnostic frames into pixels, and `api` ties them into the profile
//! chart and the click-to-pixel inspector.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PixelInspection, ProfileChart, ProfileChartConfig, ProfileRequest};
pub use error::{ProfileError, ProfileResult};
