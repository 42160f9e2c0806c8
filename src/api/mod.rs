pub mod axis_ticks;
mod chart_config;
mod chart_layout;
mod pixel_inspector;
mod profile_chart;
mod profile_request;
mod render_frame_builder;
mod render_style;

pub use axis_ticks::{AxisTick, x_tick_indices, x_tick_step};
pub use chart_config::{PlotMargins, ProfileChartConfig};
pub use chart_layout::{ChartLayout, PlotRect};
pub use pixel_inspector::{PixelInspection, inspect};
pub use profile_chart::{ProfileChart, render_profile};
pub use profile_request::ProfileRequest;
pub use render_style::ProfileRenderStyle;
